use serde::Deserialize;

/// Top-level configuration for the Pholio server, loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct PholioConfig {
    /// Photo repository backend configuration.
    #[serde(default)]
    pub repository: RepositoryConfig,
    /// HTTP server bind configuration.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Configuration for the photo repository backend.
#[derive(Debug, Deserialize)]
pub struct RepositoryConfig {
    /// Which backend to use. Only `"memory"` is compiled in.
    #[serde(default = "default_backend")]
    pub backend: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
        }
    }
}

fn default_backend() -> String {
    "memory".to_owned()
}

/// HTTP server bind configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
    8080
}
