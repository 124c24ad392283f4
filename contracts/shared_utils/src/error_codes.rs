//! Standardized error codes and messages for the LNQ contracts.
//!
//! Error code ranges (for documentation and off-chain indexing):
//! - Validation: 1-99 (invalid input)
//! - Authorization: 100-199 (wrong caller)
//! - State: 200-299 (wrong state, not configured)
//! - Resource: 300-399 (insufficient balance or allowance)
//! - System: 400-499 (cross-contract call failures)

use soroban_sdk::{symbol_short, Env, String as SorobanString};

/// Standard error code constants (numeric only; contracts use their own contracterror enums).
pub mod code {
    // Validation (1-99)
    pub const INVALID_AMOUNT: u32 = 1;
    pub const ARITHMETIC_OVERFLOW: u32 = 2;

    // Authorization (100-199)
    pub const UNAUTHORIZED: u32 = 100;
    pub const NOT_OWNER: u32 = 101;
    pub const NOT_MINTER: u32 = 102;

    // State (200-299)
    pub const ALREADY_INITIALIZED: u32 = 200;
    pub const NOT_INITIALIZED: u32 = 201;
    pub const NOT_MINTABLE: u32 = 202;
    pub const INTERFACE_NOT_CONFIGURED: u32 = 203;

    // Resource (300-399)
    pub const INSUFFICIENT_BALANCE: u32 = 301;
    pub const INSUFFICIENT_ALLOWANCE: u32 = 302;

    // System (400-499)
    pub const CONTRACT_CALL_FAILED: u32 = 401;
    pub const CALL_ABORTED: u32 = 402;
    pub const RETURN_DECODE_FAILED: u32 = 403;
}

/// Returns a human-readable message for a given error code (for events/logging).
pub fn message_for_code(code: u32) -> &'static str {
    match code {
        1 => "Invalid amount: must be non-negative",
        2 => "Arithmetic overflow",
        100 => "Unauthorized: caller not allowed",
        101 => "Caller is not the owner",
        102 => "Caller is not the minter",
        200 => "Contract already initialized",
        201 => "Contract not initialized",
        202 => "Minting is disabled",
        203 => "Contract interface not configured",
        301 => "Insufficient balance",
        302 => "Insufficient allowance",
        401 => "Cross-contract call failed",
        402 => "Cross-contract call aborted",
        403 => "Cross-contract return value could not be decoded",
        _ => "Unknown error",
    }
}

/// Emit an error event for off-chain indexing and debugging.
/// Call this before returning an error so indexers can record it.
pub fn emit_error_event(e: &Env, error_code: u32, context: &str) {
    let msg = message_for_code(error_code);
    let context_str = SorobanString::from_str(e, context);
    let msg_str = SorobanString::from_str(e, msg);
    e.events().publish(
        (symbol_short!("Error"), error_code),
        (context_str, msg_str, e.ledger().timestamp()),
    );
}
