#![no_std]

//! Subscription caller
//!
//! Drives a deployed RecurringPayments contract through the four calls of a
//! subscription's lifecycle: create, cancel, upgrade and recurring payment.
//! Each call is attempted independently. A failed call is logged, published
//! as an error event and recorded in the report, then the next call runs.

use recurring_payments_interface::{
    CallOptions, CallOutcome, CallReceipt, IntegrationReport, RecurringPaymentsClient,
    SubscriptionCall, SubscriptionRequest,
};
use shared_utils::{
    code, emit_error_event, message_for_code, AccessControl, AccessError, ErrorHelper, Storage,
};
use soroban_sdk::{
    contract, contractimpl, contracttype, log, symbol_short, xdr::ScErrorType, Address, Env,
    Symbol, Vec,
};

mod error;

pub use error::CallerError;


// ============================================================================
// Storage
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address of the RecurringPayments contract
    Target,
}

// ============================================================================
// Call classification
// ============================================================================

/// Why a RecurringPayments call did not go through.
struct CallFailure {
    /// `code::CONTRACT_CALL_FAILED`, `code::CALL_ABORTED` or
    /// `code::RETURN_DECODE_FAILED`
    category: u32,
    /// Error code reported by the callee, or `category` when it gave none
    code: u32,
}

impl CallFailure {
    fn aborted() -> Self {
        CallFailure {
            category: code::CALL_ABORTED,
            code: code::CALL_ABORTED,
        }
    }

    fn message(&self) -> &'static str {
        message_for_code(self.category)
    }
}

/// Collapse the nested result of a generated `try_*` client call.
///
/// Only a contract error carries a code chosen by the callee. A panic, a
/// missing contract or any other host error is reported as an abort.
fn classify<T, C, E, I>(result: Result<Result<T, C>, Result<E, I>>) -> Result<(), CallFailure>
where
    E: Into<soroban_sdk::Error>,
{
    match result {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(_)) => Err(CallFailure {
            category: code::RETURN_DECODE_FAILED,
            code: code::RETURN_DECODE_FAILED,
        }),
        Err(Ok(err)) => {
            let err: soroban_sdk::Error = err.into();
            if err.is_type(ScErrorType::Contract) {
                Err(CallFailure {
                    category: code::CONTRACT_CALL_FAILED,
                    code: err.get_code(),
                })
            } else {
                Err(CallFailure::aborted())
            }
        }
        Err(Err(_)) => Err(CallFailure::aborted()),
    }
}

fn send_create(
    client: &RecurringPaymentsClient,
    options: &CallOptions,
    subscription_id: u64,
    tier_id: u32,
    token_address_id: u32,
) -> Result<(), CallFailure> {
    classify(client.try_create_new_subscription(
        &options.from,
        &options.value,
        &subscription_id,
        &tier_id,
        &token_address_id,
    ))
}

fn send_cancel(
    client: &RecurringPaymentsClient,
    options: &CallOptions,
    subscription_id: u64,
    token_id: u64,
) -> Result<(), CallFailure> {
    classify(client.try_cancel_subscription(
        &options.from,
        &options.value,
        &subscription_id,
        &token_id,
    ))
}

fn send_upgrade(
    client: &RecurringPaymentsClient,
    options: &CallOptions,
    subscription_id: u64,
    token_id: u64,
    tier_id: u32,
    token_address_id: u32,
) -> Result<(), CallFailure> {
    classify(client.try_upgrade_and_activate_plan(
        &options.from,
        &options.value,
        &subscription_id,
        &token_id,
        &tier_id,
        &token_address_id,
    ))
}

fn send_recurring(
    client: &RecurringPaymentsClient,
    options: &CallOptions,
    subscription_id: u64,
    token_ids: &Vec<u64>,
) -> Result<(), CallFailure> {
    classify(client.try_execute_recurring_payment(
        &options.from,
        &options.value,
        &subscription_id,
        token_ids,
    ))
}

/// Client for the configured RecurringPayments contract.
fn target_client<'a>(e: &Env, context: &str) -> Result<RecurringPaymentsClient<'a>, CallerError> {
    let target: Address = e
        .storage()
        .instance()
        .get(&DataKey::Target)
        .ok_or_else(|| fail(e, CallerError::InterfaceNotConfigured, context))?;
    Ok(RecurringPaymentsClient::new(e, &target))
}

fn fail(e: &Env, err: CallerError, context: &str) -> CallerError {
    emit_error_event(e, err.code(), context);
    ErrorHelper::reject(e, context, err.message(), err)
}

// ============================================================================
// Contract
// ============================================================================

#[contract]
pub struct SubscriptionCallerContract;

#[contractimpl]
impl SubscriptionCallerContract {
    /// Store the admin and the RecurringPayments address.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called twice
    pub fn initialize(e: Env, admin: Address, target: Address) -> Result<(), CallerError> {
        if Storage::is_initialized(&e) {
            return Err(fail(&e, CallerError::AlreadyInitialized, "initialize"));
        }

        Storage::set_owner(&e, &admin);
        e.storage().instance().set(&DataKey::Target, &target);
        Storage::set_initialized(&e);

        e.events().publish((Symbol::new(&e, "CallerInitialized"),), (admin, target));

        Ok(())
    }

    /// Point the caller at a different RecurringPayments deployment.
    pub fn set_target(e: Env, admin: Address, target: Address) -> Result<(), CallerError> {
        AccessControl::require_owner(&e, &admin).map_err(|err| match err {
            AccessError::NotInitialized => {
                fail(&e, CallerError::InterfaceNotConfigured, "set_target")
            }
            AccessError::NotOwner => fail(&e, CallerError::Unauthorized, "set_target"),
        })?;

        e.storage().instance().set(&DataKey::Target, &target);
        e.events().publish((symbol_short!("TargetSet"),), target);

        Ok(())
    }

    pub fn get_target(e: Env) -> Result<Address, CallerError> {
        e.storage()
            .instance()
            .get(&DataKey::Target)
            .ok_or(CallerError::InterfaceNotConfigured)
    }

    pub fn get_admin(e: Env) -> Result<Address, CallerError> {
        Storage::get_owner(&e).ok_or(CallerError::InterfaceNotConfigured)
    }

    /// Run all four calls for `request` on behalf of `from`.
    ///
    /// Every call is attempted in order regardless of earlier failures and
    /// nothing is rolled back. The report holds one outcome per call.
    pub fn contract_integration(
        e: Env,
        request: SubscriptionRequest,
        from: Address,
    ) -> Result<IntegrationReport, CallerError> {
        let client = target_client(&e, "contract_integration")?;
        from.require_auth();

        let mut report = IntegrationReport::new(&e);
        for call in SubscriptionCall::ALL.iter().copied() {
            let options = CallOptions::for_call(call, &from);
            let result = match call {
                SubscriptionCall::CreateNewSubscription => send_create(
                    &client,
                    &options,
                    request.subscription_id,
                    request.tier_id,
                    request.token_address_id,
                ),
                SubscriptionCall::CancelSubscription => {
                    send_cancel(&client, &options, request.subscription_id, request.token_id)
                }
                SubscriptionCall::UpgradeAndActivatePlan => send_upgrade(
                    &client,
                    &options,
                    request.subscription_id,
                    request.token_id,
                    request.tier_id,
                    request.token_address_id,
                ),
                SubscriptionCall::ExecuteRecurringPayment => send_recurring(
                    &client,
                    &options,
                    request.subscription_id,
                    &request.recurring_token_ids(&e),
                ),
            };

            match &result {
                Ok(()) => report.summary.record_success(call.index()),
                Err(failure) => report.summary.record_failure(
                    &e,
                    call.index(),
                    failure.code,
                    failure.message(),
                    call.failure_context(),
                ),
            }
            report.outcomes.push_back(Self::finish(&e, call, options, result));
        }

        log!(
            &e,
            "Integration finished: {} succeeded, {} failed",
            report.summary.succeeded,
            report.summary.failed
        );
        e.events().publish(
            (Symbol::new(&e, "IntegrationDone"), request.subscription_id),
            (report.summary.succeeded, report.summary.failed),
        );

        Ok(report)
    }

    /// Open a subscription. Sends one native unit.
    pub fn create_new_subscription(
        e: Env,
        from: Address,
        subscription_id: u64,
        tier_id: u32,
        token_address_id: u32,
    ) -> Result<CallOutcome, CallerError> {
        let call = SubscriptionCall::CreateNewSubscription;
        let client = target_client(&e, call.method_name())?;
        from.require_auth();

        let options = CallOptions::for_call(call, &from);
        let result = send_create(&client, &options, subscription_id, tier_id, token_address_id);
        Ok(Self::finish(&e, call, options, result))
    }

    /// Cancel the subscription held through `token_id`.
    pub fn cancel_subscription(
        e: Env,
        from: Address,
        subscription_id: u64,
        token_id: u64,
    ) -> Result<CallOutcome, CallerError> {
        let call = SubscriptionCall::CancelSubscription;
        let client = target_client(&e, call.method_name())?;
        from.require_auth();

        let options = CallOptions::for_call(call, &from);
        let result = send_cancel(&client, &options, subscription_id, token_id);
        Ok(Self::finish(&e, call, options, result))
    }

    /// Upgrade and activate the plan held through `token_id`. Sends one
    /// native unit.
    pub fn upgrade_and_activate_plan(
        e: Env,
        from: Address,
        subscription_id: u64,
        token_id: u64,
        tier_id: u32,
        token_address_id: u32,
    ) -> Result<CallOutcome, CallerError> {
        let call = SubscriptionCall::UpgradeAndActivatePlan;
        let client = target_client(&e, call.method_name())?;
        from.require_auth();

        let options = CallOptions::for_call(call, &from);
        let result = send_upgrade(
            &client,
            &options,
            subscription_id,
            token_id,
            tier_id,
            token_address_id,
        );
        Ok(Self::finish(&e, call, options, result))
    }

    /// Charge the recurring payment for `token_ids`.
    pub fn execute_recurring_payment(
        e: Env,
        from: Address,
        subscription_id: u64,
        token_ids: Vec<u64>,
    ) -> Result<CallOutcome, CallerError> {
        let call = SubscriptionCall::ExecuteRecurringPayment;
        let client = target_client(&e, call.method_name())?;
        from.require_auth();

        let options = CallOptions::for_call(call, &from);
        let result = send_recurring(&client, &options, subscription_id, &token_ids);
        Ok(Self::finish(&e, call, options, result))
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Log and publish the result of one call, then turn it into an outcome.
    fn finish(
        e: &Env,
        call: SubscriptionCall,
        options: CallOptions,
        result: Result<(), CallFailure>,
    ) -> CallOutcome {
        match result {
            Ok(()) => {
                let receipt = CallReceipt {
                    call,
                    from: options.from,
                    value: options.value,
                    ledger_sequence: e.ledger().sequence(),
                    timestamp: e.ledger().timestamp(),
                };
                log!(
                    e,
                    "Transaction receipt: {} value {} ledger {}",
                    call.method(e),
                    receipt.value,
                    receipt.ledger_sequence
                );
                e.events().publish((symbol_short!("CallOk"), call.method(e)), receipt.clone());

                CallOutcome::succeeded(e, receipt)
            }
            Err(failure) => {
                let context = call.failure_context();
                ErrorHelper::log_error_with_context(e, context, failure.message());
                ErrorHelper::log_error_code(e, context, failure.code);
                emit_error_event(e, failure.category, context);
                e.events().publish((symbol_short!("CallErr"), call.method(e)), failure.code);

                CallOutcome::failed(e, call, failure.code, failure.message())
            }
        }
    }
}
