//! Ownership checks shared by the LNQ contracts

use super::storage::Storage;
use soroban_sdk::{Address, Env};

/// Reasons an ownership check can fail. Contracts map these onto their own
/// `contracterror` enums.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AccessError {
    /// No owner has been stored yet
    NotInitialized,
    /// Caller is not the stored owner
    NotOwner,
}

/// Access control helper functions
pub struct AccessControl;

impl AccessControl {
    /// Require that the caller signed the invocation and is the stored owner
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `caller` - The caller address
    ///
    /// # Errors
    /// * `AccessError::NotInitialized` - no owner stored
    /// * `AccessError::NotOwner` - caller differs from the owner
    pub fn require_owner(e: &Env, caller: &Address) -> Result<(), AccessError> {
        caller.require_auth();
        let owner = Storage::get_owner(e).ok_or(AccessError::NotInitialized)?;
        if *caller != owner {
            return Err(AccessError::NotOwner);
        }
        Ok(())
    }

    /// Hand ownership to `new_owner`. Only the current owner may call this.
    pub fn transfer_ownership(
        e: &Env,
        caller: &Address,
        new_owner: &Address,
    ) -> Result<(), AccessError> {
        Self::require_owner(e, caller)?;
        Storage::set_owner(e, new_owner);
        Ok(())
    }
}
