//! Helper functions for templates and routing

mod date;
mod url;

pub use date::*;
pub use url::*;
