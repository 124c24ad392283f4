//! Error logging utilities

use soroban_sdk::{log, Env};

/// Error helper functions
pub struct ErrorHelper;

impl ErrorHelper {
    /// Log an error with context
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `context` - The error context (e.g. "Error canceling subscription")
    /// * `message` - The error message
    pub fn log_error_with_context(e: &Env, context: &str, message: &str) {
        log!(e, "Error [{}]: {}", context, message);
    }

    /// Log an error with context and the numeric code reported by the host
    pub fn log_error_code(e: &Env, context: &str, code: u32) {
        log!(e, "Error [{}]: code {}", context, code);
    }

    /// Log an error and hand the error value back, for use in
    /// `return Err(ErrorHelper::reject(...))` chains.
    pub fn reject<E>(e: &Env, context: &str, message: &str, err: E) -> E {
        Self::log_error_with_context(e, context, message);
        err
    }
}
