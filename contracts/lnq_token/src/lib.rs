#![no_std]
use shared_utils::{
    code, emit_error_event, AccessControl, AccessError, ErrorHelper, Events, Storage,
};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, String,
};


pub const TOKEN_NAME: &str = "LNQToken";
pub const TOKEN_SYMBOL: &str = "LNQ";
pub const TOKEN_DECIMALS: u32 = 18;

// ============================================================================
// Error Types
// ============================================================================

/// Token errors. Each variant carries the revert text clients match on.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Caller is not the owner
    NotOwner = 3,
    /// Caller is not the minter
    OnlyMinter = 4,
    /// Minting is switched off
    NotMintable = 5,
    /// Burn amount exceeds the holder's balance
    BurnExceedsBalance = 6,
    /// Spend amount exceeds the approved allowance
    InsufficientAllowance = 7,
    /// Negative amount
    InvalidAmount = 8,
    /// Transfer amount exceeds the sender's balance
    TransferExceedsBalance = 9,
    /// A balance or the total supply would exceed `i128::MAX`
    Overflow = 10,
}

impl TokenError {
    pub fn message(&self) -> &'static str {
        match self {
            TokenError::NotInitialized => "LNQToken: not initialized",
            TokenError::AlreadyInitialized => "LNQToken: already initialized",
            TokenError::NotOwner => "Ownable: caller is not the owner",
            TokenError::OnlyMinter => "LNQToken: only minter can mint",
            TokenError::NotMintable => "LNQToken: not mintable",
            TokenError::BurnExceedsBalance => "PlayToken: balance is low to burn",
            TokenError::InsufficientAllowance => "ERC20: transfer amount exceeds allowance",
            TokenError::InvalidAmount => "ERC20: amount must be non-negative",
            TokenError::TransferExceedsBalance => "ERC20: transfer amount exceeds balance",
            TokenError::Overflow => "LNQToken: amount overflows",
        }
    }

    /// Matching `shared_utils::error_codes::code` value, used for error events.
    pub fn code(&self) -> u32 {
        match self {
            TokenError::NotInitialized => code::NOT_INITIALIZED,
            TokenError::AlreadyInitialized => code::ALREADY_INITIALIZED,
            TokenError::NotOwner => code::NOT_OWNER,
            TokenError::OnlyMinter => code::NOT_MINTER,
            TokenError::NotMintable => code::NOT_MINTABLE,
            TokenError::BurnExceedsBalance | TokenError::TransferExceedsBalance => {
                code::INSUFFICIENT_BALANCE
            }
            TokenError::InsufficientAllowance => code::INSUFFICIENT_ALLOWANCE,
            TokenError::InvalidAmount => code::INVALID_AMOUNT,
            TokenError::Overflow => code::ARITHMETIC_OVERFLOW,
        }
    }
}

impl From<AccessError> for TokenError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::NotInitialized => TokenError::NotInitialized,
            AccessError::NotOwner => TokenError::NotOwner,
        }
    }
}

fn fail(e: &Env, err: TokenError, context: &str) -> TokenError {
    emit_error_event(e, err.code(), context);
    ErrorHelper::reject(e, context, err.message(), err)
}

// ============================================================================
// Data Types
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

/// Storage keys for the contract
#[contracttype]
pub enum DataKey {
    /// Address allowed to mint
    Minter,
    /// Whether minting is enabled
    Mintable,
    /// Sum of all balances
    TotalSupply,
    /// Balance per holder
    Balance(Address),
    /// Allowance per (holder, spender)
    Allowance(AllowanceKey),
}

// ============================================================================
// Storage Module
// ============================================================================

mod storage {
    use super::*;

    // --- Minting ---

    pub fn set_minter(e: &Env, minter: &Address) {
        e.storage().instance().set(&DataKey::Minter, minter);
    }

    pub fn get_minter(e: &Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Minter)
    }

    pub fn set_mintable(e: &Env, mintable: bool) {
        e.storage().instance().set(&DataKey::Mintable, &mintable);
    }

    pub fn is_mintable(e: &Env) -> bool {
        e.storage()
            .instance()
            .get(&DataKey::Mintable)
            .unwrap_or(false)
    }

    // --- Supply ---

    pub fn get_total_supply(e: &Env) -> i128 {
        e.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn set_total_supply(e: &Env, supply: i128) {
        e.storage().instance().set(&DataKey::TotalSupply, &supply);
    }

    // --- Balances ---

    pub fn get_balance(e: &Env, holder: &Address) -> i128 {
        e.storage()
            .persistent()
            .get(&DataKey::Balance(holder.clone()))
            .unwrap_or(0)
    }

    pub fn set_balance(e: &Env, holder: &Address, balance: i128) {
        e.storage()
            .persistent()
            .set(&DataKey::Balance(holder.clone()), &balance);
    }

    // --- Allowances ---

    fn allowance_key(from: &Address, spender: &Address) -> DataKey {
        DataKey::Allowance(AllowanceKey {
            from: from.clone(),
            spender: spender.clone(),
        })
    }

    pub fn get_allowance(e: &Env, from: &Address, spender: &Address) -> i128 {
        e.storage()
            .persistent()
            .get(&allowance_key(from, spender))
            .unwrap_or(0)
    }

    pub fn set_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) {
        e.storage()
            .persistent()
            .set(&allowance_key(from, spender), &amount);
    }
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct LnqTokenContract;

#[contractimpl]
impl LnqTokenContract {
    /// Deploy-time setup. The owner also becomes the first minter and
    /// minting starts enabled.
    pub fn initialize(e: Env, owner: Address) -> Result<(), TokenError> {
        if Storage::is_initialized(&e) {
            return Err(fail(&e, TokenError::AlreadyInitialized, "initialize"));
        }

        Storage::set_owner(&e, &owner);
        storage::set_minter(&e, &owner);
        storage::set_mintable(&e, true);
        storage::set_total_supply(&e, 0);
        Storage::set_initialized(&e);

        Events::emit(&e, symbol_short!("Init"), owner);

        Ok(())
    }

    // ========================================================================
    // Metadata and queries
    // ========================================================================

    pub fn name(e: Env) -> String {
        String::from_str(&e, TOKEN_NAME)
    }

    pub fn symbol(e: Env) -> String {
        String::from_str(&e, TOKEN_SYMBOL)
    }

    pub fn decimals(_e: Env) -> u32 {
        TOKEN_DECIMALS
    }

    pub fn total_supply(e: Env) -> i128 {
        storage::get_total_supply(&e)
    }

    pub fn balance_of(e: Env, holder: Address) -> i128 {
        storage::get_balance(&e, &holder)
    }

    pub fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        storage::get_allowance(&e, &from, &spender)
    }

    pub fn owner(e: Env) -> Result<Address, TokenError> {
        Storage::get_owner(&e).ok_or(TokenError::NotInitialized)
    }

    pub fn minter(e: Env) -> Result<Address, TokenError> {
        storage::get_minter(&e).ok_or(TokenError::NotInitialized)
    }

    pub fn mintable(e: Env) -> bool {
        storage::is_mintable(&e)
    }

    // ========================================================================
    // Owner controls
    // ========================================================================

    /// Enable or disable minting. Owner only.
    pub fn change_mintable(e: Env, caller: Address, mintable: bool) -> Result<(), TokenError> {
        Self::require_owner(&e, &caller, "change_mintable")?;

        storage::set_mintable(&e, mintable);
        Events::emit(&e, symbol_short!("Mintable"), mintable);

        Ok(())
    }

    /// Reassign the minter. Owner only.
    pub fn set_minter(e: Env, caller: Address, minter: Address) -> Result<(), TokenError> {
        Self::require_owner(&e, &caller, "set_minter")?;

        storage::set_minter(&e, &minter);
        Events::emit(&e, symbol_short!("MinterSet"), minter);

        Ok(())
    }

    pub fn transfer_ownership(
        e: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), TokenError> {
        AccessControl::transfer_ownership(&e, &caller, &new_owner)
            .map_err(|err| fail(&e, err.into(), "transfer_ownership"))?;

        Events::emit_ownership_transferred(&e, &caller, &new_owner);

        Ok(())
    }

    // ========================================================================
    // Supply changes
    // ========================================================================

    /// Mint `amount` to `to`.
    ///
    /// # Errors
    /// * `NotMintable` - minting is disabled (checked first)
    /// * `OnlyMinter` - caller is not the minter
    /// * `Overflow` - the supply or the recipient's balance would overflow
    pub fn mint(e: Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        Self::require_initialized(&e, "mint")?;
        Self::require_non_negative(&e, amount, "mint")?;

        if !storage::is_mintable(&e) {
            return Err(fail(&e, TokenError::NotMintable, "mint"));
        }
        if storage::get_minter(&e) != Some(caller.clone()) {
            return Err(fail(&e, TokenError::OnlyMinter, "mint"));
        }

        let supply = Self::checked_credit(&e, storage::get_total_supply(&e), amount, "mint")?;
        let balance = Self::checked_credit(&e, storage::get_balance(&e, &to), amount, "mint")?;
        storage::set_balance(&e, &to, balance);
        storage::set_total_supply(&e, supply);

        Events::emit_mint(&e, &caller, &to, amount);

        Ok(())
    }

    /// Burn `amount` of the caller's own balance.
    pub fn burn(e: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        Self::require_non_negative(&e, amount, "burn")?;

        Self::burn_balance(&e, &from, amount, "burn")?;
        Events::emit_burn(&e, &from, &from, amount);

        Ok(())
    }

    /// Burn `amount` of `from`'s balance using the spender's allowance.
    ///
    /// The allowance is checked before the balance, and consumed only when
    /// the burn goes through.
    pub fn burn_from(
        e: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        Self::require_non_negative(&e, amount, "burn_from")?;

        let allowance = Self::check_allowance(&e, &from, &spender, amount, "burn_from")?;
        Self::burn_balance(&e, &from, amount, "burn_from")?;
        storage::set_allowance(&e, &from, &spender, allowance - amount);

        Events::emit_burn(&e, &spender, &from, amount);

        Ok(())
    }

    // ========================================================================
    // Transfers and allowances
    // ========================================================================

    /// Set the amount `spender` may spend or burn from `from`'s balance.
    pub fn approve(
        e: Env,
        from: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        from.require_auth();
        Self::require_non_negative(&e, amount, "approve")?;

        storage::set_allowance(&e, &from, &spender, amount);
        Events::emit_approval(&e, &from, &spender, amount);

        Ok(())
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        Self::require_non_negative(&e, amount, "transfer")?;

        Self::move_balance(&e, &from, &to, amount, "transfer")?;
        Events::emit_transfer(&e, &from, &to, amount);

        Ok(())
    }

    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        Self::require_non_negative(&e, amount, "transfer_from")?;

        let allowance = Self::check_allowance(&e, &from, &spender, amount, "transfer_from")?;
        Self::move_balance(&e, &from, &to, amount, "transfer_from")?;
        storage::set_allowance(&e, &from, &spender, allowance - amount);

        Events::emit_transfer(&e, &from, &to, amount);

        Ok(())
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn require_initialized(e: &Env, context: &str) -> Result<(), TokenError> {
        if !Storage::is_initialized(e) {
            return Err(fail(e, TokenError::NotInitialized, context));
        }
        Ok(())
    }

    fn require_owner(e: &Env, caller: &Address, context: &str) -> Result<(), TokenError> {
        AccessControl::require_owner(e, caller).map_err(|err| fail(e, err.into(), context))
    }

    fn require_non_negative(e: &Env, amount: i128, context: &str) -> Result<(), TokenError> {
        if amount < 0 {
            return Err(fail(e, TokenError::InvalidAmount, context));
        }
        Ok(())
    }

    fn checked_credit(
        e: &Env,
        current: i128,
        amount: i128,
        context: &str,
    ) -> Result<i128, TokenError> {
        current
            .checked_add(amount)
            .ok_or_else(|| fail(e, TokenError::Overflow, context))
    }

    /// Current allowance, provided it covers `amount`.
    fn check_allowance(
        e: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
        context: &str,
    ) -> Result<i128, TokenError> {
        let allowance = storage::get_allowance(e, from, spender);
        if allowance < amount {
            return Err(fail(e, TokenError::InsufficientAllowance, context));
        }
        Ok(allowance)
    }

    fn burn_balance(
        e: &Env,
        from: &Address,
        amount: i128,
        context: &str,
    ) -> Result<(), TokenError> {
        let balance = storage::get_balance(e, from);
        if balance < amount {
            return Err(fail(e, TokenError::BurnExceedsBalance, context));
        }

        storage::set_balance(e, from, balance - amount);
        storage::set_total_supply(e, storage::get_total_supply(e) - amount);
        Ok(())
    }

    fn move_balance(
        e: &Env,
        from: &Address,
        to: &Address,
        amount: i128,
        context: &str,
    ) -> Result<(), TokenError> {
        let from_balance = storage::get_balance(e, from);
        if from_balance < amount {
            return Err(fail(e, TokenError::TransferExceedsBalance, context));
        }

        storage::set_balance(e, from, from_balance - amount);
        let to_balance = Self::checked_credit(e, storage::get_balance(e, to), amount, context)?;
        storage::set_balance(e, to, to_balance);
        Ok(())
    }
}
