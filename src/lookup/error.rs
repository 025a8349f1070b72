//! Lookup error types.

use thiserror::Error;

/// Rejections of the inbound `number` parameter.
///
/// The display strings are the client-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Missing number parameter")]
    Missing,

    #[error("Invalid phone number format")]
    InvalidFormat,
}

/// Errors that end a lookup before a usable upstream response exists.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The inbound request was rejected before any upstream call.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The upstream call failed at the transport level (connect, DNS,
    /// timeout, redirect loop, body read).
    #[error("{}", error_chain(.0))]
    Transport(#[from] reqwest::Error),
}

/// Render an error with its full source chain, outermost first.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Render a transport error for logs.
///
/// The request URL carries the phone number in `cli`, so it is dropped;
/// the source chain (connect, timeout, redirect) is kept.
pub fn log_chain(err: reqwest::Error) -> String {
    error_chain(&err.without_url())
}
