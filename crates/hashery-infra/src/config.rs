//! Service configuration loader for Hashery.
//!
//! Reads an optional TOML file and deserializes it into [`ServiceConfig`].
//! A missing file means "use defaults"; a file that exists but cannot be
//! read or parsed is a startup error.

use std::path::{Path, PathBuf};

use thiserror::Error;

use hashery_types::config::ServiceConfig;

/// Errors raised while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load service configuration from `path`.
///
/// - `None`, or a path that does not exist, returns [`ServiceConfig::default()`].
/// - Unreadable or malformed files return a [`ConfigError`].
pub async fn load_service_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(ServiceConfig::default());
    };

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(ServiceConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config = toml::from_str::<ServiceConfig>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "loaded service config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_path_returns_default() {
        let config = load_service_config(None).await.unwrap();
        assert_eq!(config.port, 8000);
    }

    #[tokio::test]
    async fn test_missing_file_returns_default() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("hashery.toml");
        let config = load_service_config(Some(&path)).await.unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.password.cost, 12);
    }

    #[tokio::test]
    async fn test_valid_file_is_parsed() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("hashery.toml");
        tokio::fs::write(&path, "port = 9100\n\n[password]\ncost = 6\n")
            .await
            .unwrap();

        let config = load_service_config(Some(&path)).await.unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.password.cost, 6);
        assert_eq!(config.cors.allowed_origins.len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("hashery.toml");
        tokio::fs::write(&path, "this is [[not valid toml")
            .await
            .unwrap();

        let err = load_service_config(Some(&path)).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_wrong_type_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("hashery.toml");
        tokio::fs::write(&path, "port = \"eighty\"\n").await.unwrap();

        let err = load_service_config(Some(&path)).await.unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
