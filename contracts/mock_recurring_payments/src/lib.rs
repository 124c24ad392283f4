#![no_std]

//! Mock RecurringPayments Contract for Integration Testing
//!
//! Stands in for the external subscription contract so the caller can be
//! exercised end to end. It implements the same function signatures as
//! `RecurringPaymentsInterface` and gives tests control over:
//! - Which calls fail (per call kind)
//! - What each call received (sender, value, arguments)
//!
//! It keeps no subscription state machine.

use recurring_payments_interface::SubscriptionCall;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, Symbol, Vec,
};

/// Mock-specific errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockError {
    /// Contract not initialized
    NotInitialized = 1,
    /// Contract already initialized
    AlreadyInitialized = 2,
    /// Caller is not authorized
    Unauthorized = 3,
    /// Call rejected because the test configured it to fail
    Rejected = 4,
    /// Attached value is negative
    InvalidValue = 5,
}

/// What a call received, as seen by the contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordedCall {
    pub from: Address,
    pub value: i128,
    pub subscription_id: u64,
    /// Remaining arguments in declaration order, widened to u64
    pub args: Vec<u64>,
}

/// Storage keys for the mock contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Whether a call kind is forced to fail
    Failing(SubscriptionCall),
    /// Last arguments received per call kind
    LastCall(SubscriptionCall),
    /// Number of accepted calls
    CallCount,
    /// Total value received per sender
    Received(Address),
}

#[contract]
pub struct MockRecurringPaymentsContract;

#[contractimpl]
impl MockRecurringPaymentsContract {
    /// Initialize the mock contract
    ///
    /// # Arguments
    /// * `admin` - The admin address allowed to configure failures
    pub fn initialize(e: Env, admin: Address) -> Result<(), MockError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(MockError::AlreadyInitialized);
        }

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::CallCount, &0u32);

        e.events().publish((Symbol::new(&e, "MockInitialized"),), admin);

        Ok(())
    }

    /// Force a call kind to fail (or succeed again)
    pub fn set_failure(
        e: Env,
        caller: Address,
        call: SubscriptionCall,
        fail: bool,
    ) -> Result<(), MockError> {
        caller.require_auth();

        if !Self::is_admin(&e, &caller)? {
            return Err(MockError::Unauthorized);
        }

        e.storage().instance().set(&DataKey::Failing(call), &fail);

        e.events().publish((symbol_short!("FailSet"), call), fail);

        Ok(())
    }

    // ========================================================================
    // RecurringPaymentsInterface
    // ========================================================================

    pub fn create_new_subscription(
        e: Env,
        from: Address,
        value: i128,
        subscription_id: u64,
        tier_id: u32,
        token_address_id: u32,
    ) -> Result<(), MockError> {
        let mut args = Vec::new(&e);
        args.push_back(tier_id as u64);
        args.push_back(token_address_id as u64);
        Self::accept(
            &e,
            SubscriptionCall::CreateNewSubscription,
            from,
            value,
            subscription_id,
            args,
        )
    }

    pub fn cancel_subscription(
        e: Env,
        from: Address,
        value: i128,
        subscription_id: u64,
        token_id: u64,
    ) -> Result<(), MockError> {
        let mut args = Vec::new(&e);
        args.push_back(token_id);
        Self::accept(
            &e,
            SubscriptionCall::CancelSubscription,
            from,
            value,
            subscription_id,
            args,
        )
    }

    pub fn upgrade_and_activate_plan(
        e: Env,
        from: Address,
        value: i128,
        subscription_id: u64,
        token_id: u64,
        tier_id: u32,
        token_address_id: u32,
    ) -> Result<(), MockError> {
        let mut args = Vec::new(&e);
        args.push_back(token_id);
        args.push_back(tier_id as u64);
        args.push_back(token_address_id as u64);
        Self::accept(
            &e,
            SubscriptionCall::UpgradeAndActivatePlan,
            from,
            value,
            subscription_id,
            args,
        )
    }

    pub fn execute_recurring_payment(
        e: Env,
        from: Address,
        value: i128,
        subscription_id: u64,
        token_ids: Vec<u64>,
    ) -> Result<(), MockError> {
        Self::accept(
            &e,
            SubscriptionCall::ExecuteRecurringPayment,
            from,
            value,
            subscription_id,
            token_ids,
        )
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of calls accepted so far
    pub fn call_count(e: Env) -> u32 {
        e.storage()
            .instance()
            .get(&DataKey::CallCount)
            .unwrap_or(0)
    }

    /// Last accepted call of the given kind
    pub fn last_call(e: Env, call: SubscriptionCall) -> Option<RecordedCall> {
        e.storage().instance().get(&DataKey::LastCall(call))
    }

    /// Total native value received from `from`
    pub fn received_value(e: Env, from: Address) -> i128 {
        e.storage()
            .instance()
            .get(&DataKey::Received(from))
            .unwrap_or(0)
    }

    /// Get the admin address
    pub fn get_admin(e: Env) -> Result<Address, MockError> {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(MockError::NotInitialized)
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn accept(
        e: &Env,
        call: SubscriptionCall,
        from: Address,
        value: i128,
        subscription_id: u64,
        args: Vec<u64>,
    ) -> Result<(), MockError> {
        from.require_auth();

        if !e.storage().instance().has(&DataKey::Admin) {
            return Err(MockError::NotInitialized);
        }

        let failing: bool = e
            .storage()
            .instance()
            .get(&DataKey::Failing(call))
            .unwrap_or(false);
        if failing {
            return Err(MockError::Rejected);
        }

        if value < 0 {
            return Err(MockError::InvalidValue);
        }

        let received: i128 = e
            .storage()
            .instance()
            .get(&DataKey::Received(from.clone()))
            .unwrap_or(0);
        e.storage()
            .instance()
            .set(&DataKey::Received(from.clone()), &(received + value));

        let count: u32 = e
            .storage()
            .instance()
            .get(&DataKey::CallCount)
            .unwrap_or(0);
        e.storage().instance().set(&DataKey::CallCount, &(count + 1));

        let recorded = RecordedCall {
            from,
            value,
            subscription_id,
            args,
        };
        e.storage()
            .instance()
            .set(&DataKey::LastCall(call), &recorded);

        Ok(())
    }

    fn is_admin(e: &Env, address: &Address) -> Result<bool, MockError> {
        let admin: Address = e
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(MockError::NotInitialized)?;
        Ok(*address == admin)
    }
}
