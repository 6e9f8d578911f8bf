//! Application configuration.
//!
//! Layered: built-in defaults, then an optional TOML file, then CLI flags /
//! environment variables for the listen address (applied in `main`).
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [generation]
//! placeholder_image_url = "https://cdn.example/placeholder.png"
//! simulated_latency_ms = 2000
//! timeout_ms = 30000
//!
//! [checkout]
//! simulated_latency_ms = 1500
//! ```

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use fashionista_core::service::tryon::DEFAULT_GENERATION_TIMEOUT;
use fashionista_infra::image::{DEFAULT_PLACEHOLDER_IMAGE_URL, DEFAULT_SIMULATED_LATENCY};
use fashionista_infra::payment::DEFAULT_CHECKOUT_LATENCY;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "fashionista.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub generation: GenerationConfig,
    pub checkout: CheckoutConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Settings for the (placeholder) image-generation provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub placeholder_image_url: String,
    pub simulated_latency_ms: u64,
    /// Upper bound on one provider call before the request fails.
    pub timeout_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE_URL.to_string(),
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY.as_millis() as u64,
            timeout_ms: DEFAULT_GENERATION_TIMEOUT.as_millis() as u64,
        }
    }
}

impl GenerationConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    pub simulated_latency_ms: u64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: DEFAULT_CHECKOUT_LATENCY.as_millis() as u64,
        }
    }
}

impl CheckoutConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `./fashionista.toml` is read
    /// if present; otherwise defaults are used.
    ///
    /// Runs after tracing is initialised, so the file that was loaded is only
    /// reported at debug level (`-v` or `RUST_LOG=debug`).
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path: Option<PathBuf> = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.exists().then_some(local)
            }
        };

        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                let config = Self::from_toml_str(&raw)
                    .with_context(|| format!("invalid config file {}", path.display()))?;
                tracing::debug!(path = %path.display(), "Loaded configuration file");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply listen-address overrides from CLI flags or environment.
    pub fn with_server_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    /// Address to bind, as `host:port`.
    ///
    /// IPv6 literals are bracketed (`[::1]:3000`); hostnames are left for the
    /// listener to resolve.
    pub fn listen_addr(&self) -> String {
        let host = self
            .server
            .host
            .trim_start_matches('[')
            .trim_end_matches(']');
        match host.parse::<IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.server.port).to_string(),
            Err(_) => format!("{host}:{}", self.server.port),
        }
    }
}
