#![no_std]

//! Shared utility library for the LNQ Soroban contracts
//!
//! Common helpers used by the token, the subscription caller and the test
//! doubles:
//! - Error logging helpers
//! - Standardized error codes and error events
//! - Event emission patterns
//! - Owner / initialization storage
//! - Ownership checks
//! - Per-call batch reports

pub mod access_control;
pub mod batch;
pub mod error_codes;
pub mod errors;
pub mod events;
pub mod storage;


// Re-export commonly used items
pub use access_control::*;
pub use batch::*;
pub use error_codes::*;
pub use errors::*;
pub use events::*;
pub use storage::Storage;
