use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_CONTENT_FILE: &str = "content/collections.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR {0:?} is not a socket address")]
    InvalidBindAddr(String),
    #[error("FRONTEND_URL {0:?} is not a valid origin header")]
    InvalidFrontendUrl(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub content_file: PathBuf,
    pub bind_addr: SocketAddr,
    /// Built frontend to serve next to the API.
    pub frontend_dist: Option<PathBuf>,
    /// Allowed CORS origin; any origin when unset.
    pub cors_origin: Option<HeaderValue>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let content_file = non_empty("CONTENT_FILE")
            .unwrap_or_else(|| DEFAULT_CONTENT_FILE.to_string())
            .into();

        let bind_addr = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr.clone()))?;

        let cors_origin = match non_empty("FRONTEND_URL") {
            Some(url) => Some(
                HeaderValue::from_str(url.trim_end_matches('/'))
                    .map_err(|_| ConfigError::InvalidFrontendUrl(url.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            content_file,
            bind_addr,
            frontend_dist: non_empty("FRONTEND_DIST").map(PathBuf::from),
            cors_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.content_file, PathBuf::from(DEFAULT_CONTENT_FILE));
        assert_eq!(config.bind_addr, "127.0.0.1:3001".parse::<SocketAddr>().unwrap());
        assert!(config.frontend_dist.is_none());
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("BIND_ADDR", "  "), ("FRONTEND_URL", "")]).unwrap();
        assert_eq!(config.bind_addr.port(), 3001);
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("CONTENT_FILE", "/srv/site/content.json"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("FRONTEND_DIST", "../frontend/dist"),
            ("FRONTEND_URL", "https://luminaryforge.tech/"),
        ])
        .unwrap();
        assert_eq!(config.content_file, PathBuf::from("/srv/site/content.json"));
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.frontend_dist, Some(PathBuf::from("../frontend/dist")));
        assert_eq!(
            config.cors_origin,
            Some(HeaderValue::from_static("https://luminaryforge.tech"))
        );
    }

    #[test]
    fn rejects_a_bad_bind_addr() {
        let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr(addr) if addr == "localhost"));
    }

    #[test]
    fn rejects_an_origin_with_control_characters() {
        let err = config_from(&[("FRONTEND_URL", "https://bad\nhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFrontendUrl(_)));
    }
}
