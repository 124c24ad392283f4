#![no_std]

//! Interface of the external RecurringPayments subscription contract.
//!
//! The contract's implementation is not part of this repository. This crate
//! is the interface description callers need in order to encode calls
//! against a deployed instance: `#[contractclient]` generates
//! [`RecurringPaymentsClient`] from [`RecurringPaymentsInterface`].
//!
//! Every method takes the sender (`from`) and the native value attached to
//! the call (`value`, in stroops). The contract pulls the value from `from`
//! inside the same invocation, so payment and state change land together.

use soroban_sdk::{contractclient, Address, Env, Vec};

pub mod types;

pub use types::*;

/// One whole unit of the native asset (XLM has 7 decimals).
pub const NATIVE_UNIT: i128 = 10_000_000;

/// Methods exposed by the RecurringPayments contract.
#[contractclient(name = "RecurringPaymentsClient")]
pub trait RecurringPaymentsInterface {
    /// Open a subscription on `tier_id`, paid with the token registered
    /// under `token_address_id`. Payable.
    fn create_new_subscription(
        env: Env,
        from: Address,
        value: i128,
        subscription_id: u64,
        tier_id: u32,
        token_address_id: u32,
    );

    /// Cancel the subscription held through `token_id`.
    fn cancel_subscription(
        env: Env,
        from: Address,
        value: i128,
        subscription_id: u64,
        token_id: u64,
    );

    /// Move the subscription held through `token_id` to `tier_id` and
    /// activate it. Payable.
    fn upgrade_and_activate_plan(
        env: Env,
        from: Address,
        value: i128,
        subscription_id: u64,
        token_id: u64,
        tier_id: u32,
        token_address_id: u32,
    );

    /// Charge the recurring payment for each of `token_ids`.
    fn execute_recurring_payment(
        env: Env,
        from: Address,
        value: i128,
        subscription_id: u64,
        token_ids: Vec<u64>,
    );
}
