//! Process-wide service configuration.
//!
//! `ServiceConfig` is built once at startup (defaults, then an optional
//! TOML file, then CLI flags) and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Hashery server.
///
/// All fields have sensible defaults, so an empty file is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the HTTP listener to.
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors: CorsConfig,

    #[serde(default)]
    pub password: PasswordConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: CorsConfig::default(),
            password: PasswordConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cross-origin policy for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API from a browser.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Whether cookies and auth headers may accompany cross-origin requests.
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

fn default_allow_credentials() -> bool {
    true
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allow_credentials: default_allow_credentials(),
        }
    }
}

/// Password hashing parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor (log2 of the number of rounds).
    #[serde(default = "default_cost")]
    pub cost: u32,
}

/// Matches the bcrypt library default.
fn default_cost() -> u32 {
    12
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            cost: default_cost(),
        }
    }
}
