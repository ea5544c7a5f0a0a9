use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::routes;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    pub frontend_build_dir: PathBuf,
    /// The frontend build directory, if it existed when the config was loaded.
    pub static_dir: Option<PathBuf>,
    pub api_docs: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// The static directory is checked for existence exactly once, here.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let frontend_build_dir = lookup("FRONTEND_BUILD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("frontend/out"));

        let api_docs = match lookup("API_DOCS") {
            None => false,
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("API_DOCS must be true or false, got '{}'", raw))?,
        };

        let static_dir = frontend_build_dir
            .is_dir()
            .then(|| frontend_build_dir.clone());

        Ok(Config {
            service_host,
            service_port,
            frontend_build_dir,
            static_dir,
            api_docs,
        })
    }

    /// Path of the SPA entry point, when a static directory is mounted.
    pub fn entry_point(&self) -> Option<PathBuf> {
        self.static_dir
            .as_ref()
            .map(|dir| dir.join(routes::INDEX_FILE))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        match &self.static_dir {
            Some(dir) => tracing::info!("  Frontend build: {} (mounted)", dir.display()),
            None => tracing::warn!(
                "  Frontend build: {} not found, SPA routes will return not found",
                self.frontend_build_dir.display()
            ),
        }
        tracing::info!(
            "  API docs: {}",
            if self.api_docs { "enabled" } else { "disabled" }
        );
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_with_all_vars() {
        let dir = tempfile::tempdir().unwrap();
        let build_dir = dir.path().to_str().unwrap();

        let config = config_from(&[
            ("SERVICE_HOST", "127.0.0.1"),
            ("SERVICE_PORT", "8080"),
            ("FRONTEND_BUILD_DIR", build_dir),
            ("API_DOCS", "true"),
        ])
        .unwrap();

        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.frontend_build_dir, dir.path());
        assert_eq!(config.static_dir.as_deref(), Some(dir.path()));
        assert_eq!(config.entry_point(), Some(dir.path().join("index.html")));
        assert!(config.api_docs);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_config_with_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.service_port, 8000);
        assert_eq!(config.frontend_build_dir, PathBuf::from("frontend/out"));
        assert!(!config.api_docs);
    }

    #[test]
    fn test_missing_build_dir_is_not_mounted() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("out");

        let config = config_from(&[("FRONTEND_BUILD_DIR", missing.to_str().unwrap())]).unwrap();

        assert_eq!(config.frontend_build_dir, missing);
        assert_eq!(config.static_dir, None);
        assert_eq!(config.entry_point(), None);
    }

    #[test]
    fn test_invalid_port() {
        let result = config_from(&[("SERVICE_PORT", "not-a-number")]);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let result = config_from(&[("SERVICE_PORT", "99999")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_api_docs_flag() {
        let result = config_from(&[("API_DOCS", "maybe")]);
        assert!(result.unwrap_err().to_string().contains("API_DOCS"));
    }

    #[test]
    fn test_api_docs_flag_spellings() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag(""), None);
    }
}
