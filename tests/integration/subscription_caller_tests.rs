//! Subscription Caller Tests
//!
//! These tests verify:
//! - Every call of an integration run is attempted, whatever fails
//! - Each call ends in exactly one receipt or one recorded error
//! - Call parameters come from the request, never from another call
//! - The caller refuses to run before it knows the RecurringPayments address

use crate::harness::TestHarness;
use mock_recurring_payments::{
    MockError, MockRecurringPaymentsContract, MockRecurringPaymentsContractClient,
};
use recurring_payments_interface::{SubscriptionCall, NATIVE_UNIT};
use soroban_sdk::vec;
use subscription_caller::CallerError;

/// Test: A clean run records four receipts
#[test]
fn test_integration_records_every_receipt() {
    let harness = TestHarness::new();
    let subscriber = &harness.accounts.subscriber;

    let report = harness
        .caller()
        .contract_integration(&harness.default_request(), subscriber);

    assert!(report.summary.all_succeeded());
    assert_eq!(report.summary.total, 4);
    for outcome in report.outcomes.iter() {
        assert!(outcome.success);
        assert!(outcome.receipt().is_some());
    }
    assert_eq!(harness.recurring_payments().call_count(), 4);
    assert_eq!(
        harness.recurring_payments().received_value(subscriber),
        2 * NATIVE_UNIT
    );
}

/// Test: Whichever call fails, the other three still go through
#[test]
fn test_single_failure_never_aborts_the_run() {
    for failing in SubscriptionCall::ALL.iter() {
        let harness = TestHarness::new();
        harness
            .recurring_payments()
            .set_failure(&harness.accounts.owner, failing, &true);

        let report = harness
            .caller()
            .contract_integration(&harness.default_request(), &harness.accounts.subscriber);

        assert_eq!(report.summary.total, 4);
        assert_eq!(report.summary.succeeded, 3);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(harness.recurring_payments().call_count(), 3);

        for outcome in report.outcomes.iter() {
            // Exactly one of receipt or error per call.
            assert_eq!(outcome.success, outcome.receipt().is_some());
            if outcome.call == *failing {
                assert!(!outcome.success);
                assert_eq!(outcome.error_code, MockError::Rejected as u32);
            } else {
                assert!(outcome.success);
                assert_eq!(outcome.error_code, 0);
            }
        }

        let failure = report.summary.failed_operations.get(0).unwrap();
        assert_eq!(failure.index, failing.index());
    }
}

/// Test: Results of earlier calls never feed later ones
#[test]
fn test_parameters_are_not_derived_from_earlier_calls() {
    let harness = TestHarness::new();
    let request = harness.default_request();
    // Creation fails, yet cancel/upgrade/recurring still use the request's ids.
    harness.recurring_payments().set_failure(
        &harness.accounts.owner,
        &SubscriptionCall::CreateNewSubscription,
        &true,
    );

    harness
        .caller()
        .contract_integration(&request, &harness.accounts.subscriber);

    let mock = harness.recurring_payments();
    let cancel = mock
        .last_call(&SubscriptionCall::CancelSubscription)
        .unwrap();
    assert_eq!(cancel.subscription_id, request.subscription_id);
    assert_eq!(cancel.args, vec![&harness.env, request.token_id]);

    let recurring = mock
        .last_call(&SubscriptionCall::ExecuteRecurringPayment)
        .unwrap();
    assert_eq!(
        recurring.args,
        vec![&harness.env, request.token_id_1, request.token_id_2]
    );
}

/// Test: Running twice issues every call again
#[test]
fn test_repeated_runs_are_independent() {
    let harness = TestHarness::new();
    let request = harness.default_request();
    let subscriber = &harness.accounts.subscriber;

    harness.caller().contract_integration(&request, subscriber);
    harness.advance_time(60);
    let second = harness.caller().contract_integration(&request, subscriber);

    assert_eq!(harness.recurring_payments().call_count(), 8);
    let receipt = second
        .outcome(SubscriptionCall::UpgradeAndActivatePlan)
        .unwrap()
        .receipt()
        .unwrap();
    assert_eq!(receipt.timestamp, harness.env.ledger().timestamp());
    assert_eq!(receipt.ledger_sequence, harness.env.ledger().sequence());
}

/// Test: The caller needs the RecurringPayments address before running
#[test]
fn test_uninitialized_caller_reports_missing_interface() {
    let harness = TestHarness::minimal();

    let result = harness
        .caller()
        .try_contract_integration(&harness.default_request(), &harness.accounts.subscriber);

    crate::assert_err!(result, Ok(CallerError::InterfaceNotConfigured));
    assert_eq!(
        CallerError::InterfaceNotConfigured.message(),
        "Contract interface not configured: supply the RecurringPayments address before integrating"
    );
}

/// Test: Retargeting moves every later call to the new deployment
#[test]
fn test_retarget_to_new_deployment() {
    let harness = TestHarness::new();
    let replacement = harness
        .env
        .register_contract(None, MockRecurringPaymentsContract);
    let replacement_client = MockRecurringPaymentsContractClient::new(&harness.env, &replacement);
    replacement_client.initialize(&harness.accounts.owner);

    harness
        .caller()
        .set_target(&harness.accounts.owner, &replacement);
    harness
        .caller()
        .contract_integration(&harness.default_request(), &harness.accounts.subscriber);

    assert_eq!(harness.recurring_payments().call_count(), 0);
    assert_eq!(replacement_client.call_count(), 4);
}
