//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!
//! process environment (E_AUTH, E_AUTH_V, E_AUTH_C, E_AUTH_K)
//!     → secrets.rs (read once at startup)
//!     → AuthSecrets (read-only, shared with the upstream client)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so the proxy runs without a config file
//! - Secrets never live in the config file and never reach a response body

pub mod loader;
pub mod schema;
pub mod secrets;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, ProxyConfig, TimeoutConfig, UpstreamConfig};
pub use secrets::{AuthSecrets, SecretsError};
pub use validation::{validate_config, ValidationError};
