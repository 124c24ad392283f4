//! Integration Test Suite for the LNQ contracts
//!
//! # Test Organization
//! - `harness`: Reusable test harness and helpers
//! - `token_tests`: LNQ token deployment, ownership, mint and burn scenarios
//! - `subscription_caller_tests`: Caller runs against a RecurringPayments deployment

#![cfg(test)]

pub mod harness;
pub mod subscription_caller_tests;
pub mod token_tests;

pub use harness::*;
