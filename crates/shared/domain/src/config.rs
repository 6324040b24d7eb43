use crate::pet::{Kind, Pet};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub pets: PetsConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Logging knobs consumed by the binary when installing the subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    /// Filter directives; `RUST_LOG` is used when absent.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when absent.
    pub dir: Option<PathBuf>,
    /// JSON file output.
    pub json: bool,
}

/// Pets slice configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PetsConfig {
    /// Initial repository contents, in listing order.
    pub seed: Vec<PetSeed>,
}

/// One configured pet. A missing `id` is generated at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PetSeed {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub kind: Kind,
    #[serde(default)]
    pub profile_text: String,
}

impl PetSeed {
    /// Materializes the seed into a [`Pet`], taking the id from `generate_id` when unset.
    pub fn into_pet(self, generate_id: impl FnOnce() -> String) -> Pet {
        let id = self.id.filter(|id| !id.trim().is_empty()).unwrap_or_else(generate_id);
        Pet::new(id, self.name, self.kind, self.profile_text)
    }
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, dir: None, json: false }
    }
}
