//! Configuration module for livestatus-api.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to (default: "0.0.0.0:7654")
    pub listen_address: String,
    /// Path to the Livestatus unix socket (default: "/var/cache/naemon/live")
    pub socket_path: PathBuf,
    /// Round-trip timeout for a single Livestatus query (default: 5s)
    pub timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:7654".to_string(),
            socket_path: PathBuf::from("/var/cache/naemon/live"),
            timeout: Duration::from_secs(5),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LIVESTATUS_API_LISTEN_ADDRESS`: HTTP listen address (default: "0.0.0.0:7654")
    /// - `LIVESTATUS_API_SOCKET_PATH`: Livestatus socket path (default: "/var/cache/naemon/live")
    /// - `LIVESTATUS_API_TIMEOUT`: query timeout such as "5s" or "500ms" (default: "5s")
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(addr) = lookup("LIVESTATUS_API_LISTEN_ADDRESS") {
            cfg.listen_address = normalize_listen_address(&addr);
        }

        if let Some(path) = lookup("LIVESTATUS_API_SOCKET_PATH") {
            cfg.socket_path = PathBuf::from(path);
        }

        if let Some(timeout_str) = lookup("LIVESTATUS_API_TIMEOUT") {
            match humantime::parse_duration(&timeout_str) {
                Ok(timeout) if !timeout.is_zero() => cfg.timeout = timeout,
                Ok(_) => tracing::warn!("Ignoring zero LIVESTATUS_API_TIMEOUT, using {:?}", cfg.timeout),
                Err(e) => tracing::warn!(
                    "Ignoring invalid LIVESTATUS_API_TIMEOUT {:?}: {}, using {:?}",
                    timeout_str,
                    e,
                    cfg.timeout
                ),
            }
        }

        cfg
    }
}

/// Accept the Go-style ":7654" form by binding it on all interfaces.
fn normalize_listen_address(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{}", addr)
    } else {
        addr.to_string()
    }
}
