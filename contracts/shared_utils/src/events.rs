//! Event emission patterns and utilities

use soroban_sdk::{symbol_short, Address, Env, Symbol, Topics};

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit a simple event with topic and data
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topic` - The event topic (Symbol)
    /// * `data` - The event data (tuple)
    pub fn emit<T>(e: &Env, topic: Symbol, data: T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish((topic,), data);
    }

    /// Emit an event with multiple topics
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topics` - Tuple of topics (must implement Topics)
    /// * `data` - The event data (tuple)
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish(topics, data);
    }

    /// Emit a transfer event
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `from` - The sender address
    /// * `to` - The recipient address
    /// * `amount` - The transfer amount
    pub fn emit_transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
        Self::emit_with_topics(
            e,
            (symbol_short!("Transfer"), from.clone(), to.clone()),
            (amount, e.ledger().timestamp()),
        );
    }

    /// Emit a mint event
    pub fn emit_mint(e: &Env, minter: &Address, to: &Address, amount: i128) {
        Self::emit_with_topics(
            e,
            (symbol_short!("Mint"), minter.clone(), to.clone()),
            (amount, e.ledger().timestamp()),
        );
    }

    /// Emit a burn event. `spender` is the address that authorized the burn,
    /// which differs from `from` for allowance-based burns.
    pub fn emit_burn(e: &Env, spender: &Address, from: &Address, amount: i128) {
        Self::emit_with_topics(
            e,
            (symbol_short!("Burn"), spender.clone(), from.clone()),
            (amount, e.ledger().timestamp()),
        );
    }

    /// Emit an approval event
    pub fn emit_approval(e: &Env, from: &Address, spender: &Address, amount: i128) {
        Self::emit_with_topics(
            e,
            (symbol_short!("Approve"), from.clone(), spender.clone()),
            (amount, e.ledger().timestamp()),
        );
    }

    /// Emit an ownership change event
    pub fn emit_ownership_transferred(e: &Env, previous: &Address, new_owner: &Address) {
        Self::emit_with_topics(
            e,
            (Symbol::new(e, "OwnershipTransferred"), previous.clone()),
            (new_owner.clone(), e.ledger().timestamp()),
        );
    }
}
