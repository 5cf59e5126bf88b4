use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use crate::car_store::DEFAULT_BUFFER_SIZE;

/// Runtime settings. Each flag falls back to its `CAR_SERVICE_*` variable, then to the default.
#[derive(Debug, Clone, Parser)]
#[command(name = "car-service", version, about = "Create, update and delete cars over HTTP")]
pub struct AppConfig {
    /// Interface to bind.
    #[arg(long, env = "CAR_SERVICE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "CAR_SERVICE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Prefix for the car routes, e.g. `/api`. Empty mounts them at `/cars`.
    #[arg(
        long,
        env = "CAR_SERVICE_BASE_PATH",
        default_value = "",
        value_parser = parse_base_path
    )]
    pub base_path: String,

    /// Request buffer of the car store channel.
    #[arg(long, env = "CAR_SERVICE_STORE_BUFFER", default_value_t = DEFAULT_BUFFER_SIZE)]
    pub store_buffer: usize,
}

impl AppConfig {
    pub fn address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

/// Leading slash ensured, trailing slashes dropped; `/` and blank become empty.
/// Route syntax (`{`, `}`, `*`) is refused: the prefix is mounted as a literal path.
fn parse_base_path(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if trimmed.contains(char::is_whitespace) {
        return Err(format!("base path must not contain whitespace: {raw:?}"));
    }
    if trimmed.contains(&['{', '}', '*'][..]) {
        return Err(format!(
            "base path must not contain route syntax ('{{', '}}', '*'): {raw:?}"
        ));
    }

    if trimmed.starts_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("/{trimmed}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::try_parse_from(["car-service"]).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.base_path, "");
        assert_eq!(config.store_buffer, DEFAULT_BUFFER_SIZE);
        assert_eq!(config.address().unwrap(), "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn base_path_is_normalized() {
        for (raw, expected) in [("/", ""), ("api", "/api"), ("/api/", "/api"), ("/v1/api", "/v1/api")] {
            let config =
                AppConfig::try_parse_from(["car-service", "--base-path", raw]).unwrap();
            assert_eq!(config.base_path, expected, "input {raw:?}");
        }
    }

    #[test]
    fn rejects_bad_values() {
        assert!(AppConfig::try_parse_from(["car-service", "--port", "http"]).is_err());
        for base_path in ["/my api", "/{*rest}", "/{tenant}", "/api/*", "/a}b"] {
            assert!(
                AppConfig::try_parse_from(["car-service", "--base-path", base_path]).is_err(),
                "{base_path:?} should be rejected"
            );
        }

        let config = AppConfig::try_parse_from(["car-service", "--host", "not a host"]).unwrap();
        assert!(config.address().is_err());
    }
}
