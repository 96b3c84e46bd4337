//! Configuration module

mod site;

pub use site::SiteConfig;
pub use site::API_BASE_URL_ENV;
