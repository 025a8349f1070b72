//! Caller-ID lookup subsystem.
//!
//! # Data Flow
//! ```text
//! ?number=...
//!     → number.rs (trim, validate +digits)
//!     → upstream.rs (fixed query + headers, one GET, follow redirects)
//!     → outcome.rs (normalize into one of five response shapes)
//!     → JSON response
//! ```
//!
//! # Design Decisions
//! - One outbound call per valid lookup, none for invalid input
//! - Nothing is retried and nothing is cached
//! - Every failure ends as a JSON body; no error escapes the handler

pub mod error;
pub mod number;
pub mod outcome;
pub mod upstream;

pub use error::{log_chain, InputError, LookupError};
pub use number::PhoneNumber;
pub use outcome::LookupOutcome;
pub use upstream::{UpstreamClient, UpstreamResponse};
