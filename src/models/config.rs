//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the HTTP server and the lead store.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// SQLite path or URL. Required: startup fails without it.
    pub database_url: String,
    pub templates_dir: String,
}
