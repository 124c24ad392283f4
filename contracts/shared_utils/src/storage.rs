//! Storage helper utilities for common storage patterns

use soroban_sdk::{Address, Env};

/// Storage key constants
pub mod keys {
    use soroban_sdk::{symbol_short, Symbol};

    pub const OWNER: Symbol = symbol_short!("OWNER");
    pub const INITIALIZED: Symbol = symbol_short!("INIT");
}

/// Storage helper functions
pub struct Storage;

impl Storage {
    /// Check if a contract has been initialized
    ///
    /// # Arguments
    /// * `e` - The environment
    ///
    /// # Returns
    /// `true` if initialized, `false` otherwise
    pub fn is_initialized(e: &Env) -> bool {
        e.storage().instance().has(&keys::INITIALIZED)
    }

    /// Mark contract as initialized
    ///
    /// # Arguments
    /// * `e` - The environment
    pub fn set_initialized(e: &Env) {
        e.storage().instance().set(&keys::INITIALIZED, &true);
    }

    /// Get the owner address, `None` before initialization
    pub fn get_owner(e: &Env) -> Option<Address> {
        e.storage().instance().get::<_, Address>(&keys::OWNER)
    }

    /// Set owner address in storage
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `owner` - The owner address
    pub fn set_owner(e: &Env, owner: &Address) {
        e.storage().instance().set(&keys::OWNER, owner);
    }
}
