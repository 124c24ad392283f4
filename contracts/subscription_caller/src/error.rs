//! Errors returned by the subscription caller itself.
//! Failures of the individual RecurringPayments calls are never returned;
//! they are recorded in the call outcome instead.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CallerError {
    InterfaceNotConfigured = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
}

impl CallerError {
    /// Human-readable message for this error (for events and clients).
    pub fn message(&self) -> &'static str {
        match self {
            CallerError::InterfaceNotConfigured => {
                "Contract interface not configured: supply the RecurringPayments address before integrating"
            }
            CallerError::AlreadyInitialized => "Contract already initialized",
            CallerError::Unauthorized => "Unauthorized: caller not allowed",
        }
    }

    /// Matching `shared_utils::error_codes::code` value.
    pub fn code(&self) -> u32 {
        use shared_utils::code;
        match self {
            CallerError::InterfaceNotConfigured => code::INTERFACE_NOT_CONFIGURED,
            CallerError::AlreadyInitialized => code::ALREADY_INITIALIZED,
            CallerError::Unauthorized => code::UNAUTHORIZED,
        }
    }
}
