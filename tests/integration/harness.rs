//! Integration Test Harness
//!
//! This module provides a reusable test harness that:
//! - Boots a Soroban Env with all auths mocked
//! - Deploys the LNQ token, a RecurringPayments double and the caller
//! - Creates the test accounts (owner/minter/recipient/subscriber)
//! - Provides typed contract clients
//! - Supports deterministic ledger advancement

use core::fmt::Debug;

use lnq_token::{LnqTokenContract, LnqTokenContractClient, TokenError};
use mock_recurring_payments::{MockRecurringPaymentsContract, MockRecurringPaymentsContractClient};
use recurring_payments_interface::SubscriptionRequest;
use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    Address, Env,
};
use subscription_caller::{SubscriptionCallerContract, SubscriptionCallerContractClient};

/// LNQ token decimals
pub const TOKEN_DECIMALS: u32 = 18;

/// One whole LNQ token in base units
pub const UNIT: i128 = 1_000_000_000_000_000_000;

/// Start of every scenario (Jan 1, 2024 00:00:00 UTC)
pub const GENESIS_TIMESTAMP: u64 = 1704067200;

/// `n` whole tokens in base units
pub fn units(n: i128) -> i128 {
    n * UNIT
}

/// Test accounts container
pub struct TestAccounts {
    /// Deployer: owns the token and administers the other contracts
    pub owner: Address,
    pub minter: Address,
    pub recipient: Address,
    /// Sender of the subscription calls
    pub subscriber: Address,
}

impl TestAccounts {
    pub fn new(e: &Env) -> Self {
        Self {
            owner: Address::generate(e),
            minter: Address::generate(e),
            recipient: Address::generate(e),
            subscriber: Address::generate(e),
        }
    }
}

/// Deployed contract addresses
pub struct DeployedContracts {
    pub token: Address,
    pub recurring_payments: Address,
    pub caller: Address,
}

/// Main test harness structure
pub struct TestHarness {
    pub env: Env,
    pub accounts: TestAccounts,
    pub contracts: DeployedContracts,
}

impl TestHarness {
    /// Create a harness with every contract deployed and initialized
    pub fn new() -> Self {
        let harness = Self::minimal();

        harness.token().initialize(&harness.accounts.owner);
        harness
            .recurring_payments()
            .initialize(&harness.accounts.owner);
        harness.caller().initialize(
            &harness.accounts.owner,
            &harness.contracts.recurring_payments,
        );

        harness
    }

    /// Create a harness with every contract deployed but none initialized
    pub fn minimal() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        env.ledger().set(LedgerInfo {
            timestamp: GENESIS_TIMESTAMP,
            protocol_version: 21,
            sequence_number: 1,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 1000,
            min_persistent_entry_ttl: 1000,
            max_entry_ttl: 10000,
        });

        let accounts = TestAccounts::new(&env);

        let token = env.register_contract(None, LnqTokenContract);
        let recurring_payments = env.register_contract(None, MockRecurringPaymentsContract);
        let caller = env.register_contract(None, SubscriptionCallerContract);

        Self {
            env,
            accounts,
            contracts: DeployedContracts {
                token,
                recurring_payments,
                caller,
            },
        }
    }

    // ========================================================================
    // Clients
    // ========================================================================

    pub fn token(&self) -> LnqTokenContractClient<'_> {
        LnqTokenContractClient::new(&self.env, &self.contracts.token)
    }

    pub fn recurring_payments(&self) -> MockRecurringPaymentsContractClient<'_> {
        MockRecurringPaymentsContractClient::new(&self.env, &self.contracts.recurring_payments)
    }

    pub fn caller(&self) -> SubscriptionCallerContractClient<'_> {
        SubscriptionCallerContractClient::new(&self.env, &self.contracts.caller)
    }

    // ========================================================================
    // Token Helpers
    // ========================================================================

    /// Enable minting and hand the minter role to the minter account
    pub fn enable_minter(&self) {
        self.token().change_mintable(&self.accounts.owner, &true);
        self.token()
            .set_minter(&self.accounts.owner, &self.accounts.minter);
    }

    /// `enable_minter` plus `amount` minted to the recipient
    pub fn fund_recipient(&self, amount: i128) {
        self.enable_minter();
        self.token()
            .mint(&self.accounts.minter, &self.accounts.recipient, &amount);
    }

    pub fn balance(&self, holder: &Address) -> i128 {
        self.token().balance_of(holder)
    }

    pub fn total_supply(&self) -> i128 {
        self.token().total_supply()
    }

    // ========================================================================
    // Subscription Helpers
    // ========================================================================

    /// Request used by the caller scenarios
    pub fn default_request(&self) -> SubscriptionRequest {
        SubscriptionRequest {
            subscription_id: 1,
            tier_id: 1,
            token_address_id: 0,
            token_id: 7,
            token_id_1: 8,
            token_id_2: 9,
        }
    }

    // ========================================================================
    // Time Management Helpers
    // ========================================================================

    /// Advance time by `seconds` and close one ledger
    pub fn advance_time(&self, seconds: u64) {
        let mut ledger = self.env.ledger().get();
        ledger.timestamp += seconds;
        ledger.sequence_number += 1;
        self.env.ledger().set(ledger);
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Revert text of a failed token call. Panics if the call did not fail with
/// a `TokenError`.
pub fn revert_message<T: Debug, C: Debug, I: Debug>(
    result: Result<Result<T, C>, Result<TokenError, I>>,
) -> &'static str {
    match result {
        Err(Ok(err)) => err.message(),
        other => panic!("Expected a token revert, got {:?}", other),
    }
}

/// Helper macro to assert an error result
#[macro_export]
macro_rules! assert_err {
    ($result:expr, $expected:pat) => {
        match $result {
            Err($expected) => (),
            Err(e) => panic!("Expected error {:?}, got {:?}", stringify!($expected), e),
            Ok(_) => panic!("Expected error {:?}, got Ok", stringify!($expected)),
        }
    };
}

/// Helper macro to assert success and extract value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(val) => val,
            Err(e) => panic!("Expected Ok, got Err({:?})", e),
        }
    };
}

#[cfg(test)]
mod harness_tests {
    use super::*;

    #[test]
    fn test_harness_creation() {
        let harness = TestHarness::new();

        assert_ne!(harness.accounts.owner, harness.accounts.minter);
        assert_ne!(harness.accounts.minter, harness.accounts.recipient);
        assert_eq!(harness.caller().get_target(), harness.contracts.recurring_payments);
        assert_eq!(harness.env.ledger().timestamp(), GENESIS_TIMESTAMP);
    }

    #[test]
    fn test_units() {
        assert_eq!(units(1), 10i128.pow(TOKEN_DECIMALS));
        assert_eq!(units(100), 100 * UNIT);
    }

    #[test]
    fn test_advance_time() {
        let harness = TestHarness::minimal();
        harness.advance_time(60);

        assert_eq!(harness.env.ledger().timestamp(), GENESIS_TIMESTAMP + 60);
        assert_eq!(harness.env.ledger().sequence(), 2);
    }
}
