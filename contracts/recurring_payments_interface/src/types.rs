//! Request, receipt and report types shared by the caller and its test doubles.

use crate::NATIVE_UNIT;
use shared_utils::BatchOperationReport;
use soroban_sdk::{contracttype, Address, Env, String, Symbol, Vec};

/// The four calls the integration makes against RecurringPayments.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SubscriptionCall {
    CreateNewSubscription = 0,
    CancelSubscription = 1,
    UpgradeAndActivatePlan = 2,
    ExecuteRecurringPayment = 3,
}

impl SubscriptionCall {
    /// Attempt order used by the full integration run.
    pub const ALL: [SubscriptionCall; 4] = [
        SubscriptionCall::CreateNewSubscription,
        SubscriptionCall::CancelSubscription,
        SubscriptionCall::UpgradeAndActivatePlan,
        SubscriptionCall::ExecuteRecurringPayment,
    ];

    /// Contract function name on RecurringPayments.
    pub fn method_name(&self) -> &'static str {
        match self {
            SubscriptionCall::CreateNewSubscription => "create_new_subscription",
            SubscriptionCall::CancelSubscription => "cancel_subscription",
            SubscriptionCall::UpgradeAndActivatePlan => "upgrade_and_activate_plan",
            SubscriptionCall::ExecuteRecurringPayment => "execute_recurring_payment",
        }
    }

    pub fn method(&self, e: &Env) -> Symbol {
        Symbol::new(e, self.method_name())
    }

    /// Whether the call carries native value.
    pub fn is_payable(&self) -> bool {
        matches!(
            self,
            SubscriptionCall::CreateNewSubscription | SubscriptionCall::UpgradeAndActivatePlan
        )
    }

    /// Native value attached to the call, in stroops.
    pub fn value(&self) -> i128 {
        if self.is_payable() {
            NATIVE_UNIT
        } else {
            0
        }
    }

    /// Log context used when the call fails.
    pub fn failure_context(&self) -> &'static str {
        match self {
            SubscriptionCall::CreateNewSubscription => "Error creating new subscription",
            SubscriptionCall::CancelSubscription => "Error canceling subscription",
            SubscriptionCall::UpgradeAndActivatePlan => "Error upgrading subscription plan",
            SubscriptionCall::ExecuteRecurringPayment => "Error executing recurring payment",
        }
    }

    /// Position of the call within [`SubscriptionCall::ALL`].
    pub fn index(&self) -> u32 {
        *self as u32
    }
}

/// Everything the integration needs to address one subscription.
///
/// `token_id`, `token_id_1` and `token_id_2` are required inputs. They are
/// never derived from the result of another call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubscriptionRequest {
    pub subscription_id: u64,
    pub tier_id: u32,
    pub token_address_id: u32,
    /// Token used by cancel and upgrade
    pub token_id: u64,
    /// First token charged by the recurring payment
    pub token_id_1: u64,
    /// Second token charged by the recurring payment
    pub token_id_2: u64,
}

impl SubscriptionRequest {
    /// Token ids charged by `execute_recurring_payment`, in order.
    pub fn recurring_token_ids(&self, e: &Env) -> Vec<u64> {
        let mut ids = Vec::new(e);
        ids.push_back(self.token_id_1);
        ids.push_back(self.token_id_2);
        ids
    }
}

/// Sender and attached value of a single call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallOptions {
    pub from: Address,
    pub value: i128,
}

impl CallOptions {
    pub fn for_call(call: SubscriptionCall, from: &Address) -> Self {
        CallOptions {
            from: from.clone(),
            value: call.value(),
        }
    }
}

/// Confirmation recorded after a call went through.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallReceipt {
    pub call: SubscriptionCall,
    pub from: Address,
    pub value: i128,
    pub ledger_sequence: u32,
    pub timestamp: u64,
}

/// Result of one call: either a receipt or an error code with its message.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallOutcome {
    pub call: SubscriptionCall,
    pub success: bool,
    /// The receipt on success, empty on failure
    pub receipts: Vec<CallReceipt>,
    /// 0 on success
    pub error_code: u32,
    pub message: String,
}

impl CallOutcome {
    pub fn succeeded(e: &Env, receipt: CallReceipt) -> Self {
        let call = receipt.call;
        let mut receipts = Vec::new(e);
        receipts.push_back(receipt);
        CallOutcome {
            call,
            success: true,
            receipts,
            error_code: 0,
            message: String::from_str(e, ""),
        }
    }

    pub fn failed(e: &Env, call: SubscriptionCall, error_code: u32, message: &str) -> Self {
        CallOutcome {
            call,
            success: false,
            receipts: Vec::new(e),
            error_code,
            message: String::from_str(e, message),
        }
    }

    /// Receipt of a successful call.
    pub fn receipt(&self) -> Option<CallReceipt> {
        self.receipts.get(0)
    }
}

/// Outcome of the four-call integration run.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntegrationReport {
    pub summary: BatchOperationReport,
    /// One entry per call, in attempt order
    pub outcomes: Vec<CallOutcome>,
}

impl IntegrationReport {
    pub fn new(e: &Env) -> Self {
        IntegrationReport {
            summary: BatchOperationReport::new(e),
            outcomes: Vec::new(e),
        }
    }

    /// Outcome recorded for `call`, if it was attempted.
    pub fn outcome(&self, call: SubscriptionCall) -> Option<CallOutcome> {
        self.outcomes.iter().find(|outcome| outcome.call == call)
    }
}
