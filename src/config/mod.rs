//! Runtime configuration read from the environment.

mod loader;

use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://ndc.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;
pub const DEFAULT_PUBLICATIONS_PATH: &str = "/api/publications";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Cap on request bodies; uploads carry the whole file as base64 JSON.
    pub max_upload_bytes: usize,
    /// Mount point of the publications router.
    pub publications_path: String,
}
