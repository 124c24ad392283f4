//! Best-effort batch reporting.
//!
//! A batch runs every operation regardless of earlier failures and records
//! one entry per attempt. Nothing is rolled back.

use soroban_sdk::{contracttype, Env, String, Vec};

/// Detailed error information for a failed operation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DetailedBatchError {
    /// Index of the failed operation
    pub index: u32,
    /// Error code
    pub error_code: u32,
    /// Error message
    pub message: String,
    /// Additional context (e.g. which call failed)
    pub context: String,
}

/// Detailed operation report for a best-effort batch
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchOperationReport {
    /// Total number of operations attempted
    pub total: u32,
    /// Number of successful operations
    pub succeeded: u32,
    /// Number of failed operations
    pub failed: u32,
    /// Indices of the operations that succeeded
    pub successful_indices: Vec<u32>,
    /// Detailed error information for failed operations
    pub failed_operations: Vec<DetailedBatchError>,
}

impl BatchOperationReport {
    /// Create an empty report
    pub fn new(e: &Env) -> Self {
        BatchOperationReport {
            total: 0,
            succeeded: 0,
            failed: 0,
            successful_indices: Vec::new(e),
            failed_operations: Vec::new(e),
        }
    }

    /// Record a successful operation at `index`
    pub fn record_success(&mut self, index: u32) {
        self.total += 1;
        self.succeeded += 1;
        self.successful_indices.push_back(index);
    }

    /// Record a failed operation at `index`
    pub fn record_failure(
        &mut self,
        e: &Env,
        index: u32,
        error_code: u32,
        message: &str,
        context: &str,
    ) {
        self.total += 1;
        self.failed += 1;
        self.failed_operations.push_back(DetailedBatchError {
            index,
            error_code,
            message: String::from_str(e, message),
            context: String::from_str(e, context),
        });
    }

    /// `true` when every recorded operation succeeded
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}
