//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides `api_base_url`
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,

    // Upstream content API
    pub api_base_url: String,

    // Server
    pub ip: String,
    pub port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            language: "es".to_string(),
            api_base_url: "http://localhost:3000".to_string(),
            ip: "localhost".to_string(),
            port: 8000,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config.normalized())
    }

    /// Load from `path` if it exists, otherwise start from defaults, then apply
    /// environment overrides
    pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            tracing::debug!("Loading config from {:?}", path);
            Self::load(path)?
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Self::default()
        };

        Ok(config.with_api_base_url(std::env::var(API_BASE_URL_ENV).ok()))
    }

    /// Override `api_base_url` if a non-empty value is given
    pub fn with_api_base_url(mut self, api_base_url: Option<String>) -> Self {
        if let Some(url) = api_base_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        self.normalized()
    }

    /// Socket address string to bind, mapping "localhost" to loopback
    pub fn bind_addr(&self) -> String {
        let ip = if self.ip == "localhost" {
            "127.0.0.1"
        } else {
            &self.ip
        };
        format!("{}:{}", ip, self.port)
    }

    fn normalized(mut self) -> Self {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.port, 8000);
        assert_eq!(config.language, "es");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Mi Blog
api_base_url: https://api.example.com/
port: 9000
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Mi Blog");
        assert_eq!(config.port, 9000);
        assert_eq!(config.ip, "localhost");
        assert_eq!(
            config.normalized().api_base_url,
            "https://api.example.com"
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url: http://10.0.0.5:4000").unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.5:4000");
        assert_eq!(config.title, "Blog");
    }

    #[test]
    fn test_resolve_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::resolve(dir.path().join("_config.yml")).unwrap();
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_api_base_url_override() {
        let config = SiteConfig::default()
            .with_api_base_url(Some("https://content.example.org/".to_string()));
        assert_eq!(config.api_base_url, "https://content.example.org");

        let config = SiteConfig::default().with_api_base_url(Some("  ".to_string()));
        assert_eq!(config.api_base_url, "http://localhost:3000");
    }

    #[test]
    fn test_resolve_applies_env_base_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url: http://from-file:4000").unwrap();

        let previous = std::env::var(API_BASE_URL_ENV).ok();
        std::env::set_var(API_BASE_URL_ENV, "http://from-env:5000/");
        let config = SiteConfig::resolve(file.path());
        match previous {
            Some(value) => std::env::set_var(API_BASE_URL_ENV, value),
            None => std::env::remove_var(API_BASE_URL_ENV),
        }

        assert_eq!(config.unwrap().api_base_url, "http://from-env:5000");
    }

    #[test]
    fn test_bind_addr() {
        let mut config = SiteConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        config.ip = "0.0.0.0".to_string();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }
}
