//! Caller-ID Lookup Proxy Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod lookup;
pub mod observability;

pub use config::schema::ProxyConfig;
pub use config::secrets::AuthSecrets;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
