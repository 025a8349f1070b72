//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (request ID assigned and echoed back)
//!     → lookup.rs (GET /api/lookup → lookup subsystem)
//!     → status.rs (GET /health)
//!     → Send to client
//! ```

pub mod lookup;
pub mod request;
pub mod server;
pub mod status;

pub use request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer, ServerError};
