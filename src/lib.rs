//! blog-frontend: a server-rendered blog backed by a remote content API
//!
//! Pages are rendered with embedded Tera templates; every read and write is
//! forwarded to the content API configured at startup.

pub mod api;
pub mod config;
pub mod content;
pub mod form;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;

/// The blog application, built once at startup and shared read-only
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Content API client
    pub api: api::ApiClient,
    /// Page renderer
    pub renderer: templates::TemplateRenderer,
}

impl Blog {
    /// Create a new Blog from a resolved configuration
    pub fn new(config: config::SiteConfig) -> Result<Self> {
        let api = api::ApiClient::new(&config.api_base_url);
        let renderer = templates::TemplateRenderer::new(&config)?;

        Ok(Self {
            config,
            api,
            renderer,
        })
    }

    /// Start serving pages
    pub async fn serve(self) -> Result<()> {
        server::start(self).await
    }
}
