//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Lookup handler and middleware produce:
//!     → logging.rs (structured log events, request-scoped spans)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (log aggregation is external)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every span
//! - Secrets and full phone numbers are never logged
//! - Metrics are in-memory only and cheap to record

pub mod logging;
pub mod metrics;
