//! CEP-18 compatible reserve token
//!
//! The lender accepts any CEP-18 contract as a reserve asset. `ReserveToken`
//! is the fungible token deployed alongside it for tests and test networks:
//! the whole supply is minted to the deployer at init.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::events::{Transfer, Approval};
use crate::errors::TokenError;

/// Reserve token module implementing the CEP-18 standard
#[odra::module]
pub struct ReserveToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply of tokens
    total_supply: Var<U256>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, U256>,
    /// Allowance mapping: owner -> spender -> amount
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl ReserveToken {
    /// Initialize the token and credit `initial_supply` to the deployer
    pub fn init(&mut self, name: String, symbol: String, decimals: u8, initial_supply: U256) {
        let caller = self.env().caller();

        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(initial_supply);
        self.balances.set(&caller, initial_supply);

        self.env().emit_event(Transfer {
            from: Address::from(self.env().self_address()),
            to: caller,
            value: initial_supply,
        });
    }

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    /// Get the balance of an address
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    /// Get the allowance for a spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    /// Transfer tokens to another address
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.transfer_internal(caller, to, amount);
        true
    }

    /// Approve a spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.approve_internal(caller, spender, amount);
        true
    }

    /// Transfer tokens from one address to another (requires approval)
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        let current_allowance = self.allowance(from, caller);

        if current_allowance < amount {
            self.env().revert(TokenError::InsufficientAllowance);
        }

        self.approve_internal(from, caller, current_allowance - amount);
        self.transfer_internal(from, to, amount);
        true
    }

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer {
            from,
            to,
            value: amount,
        });
    }

    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);

        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
    }
}

/// External interface of a CEP-18 token, used by the lender to move reserves
#[odra::external_contract]
pub trait Cep18Token {
    /// Get the balance of an address
    fn balance_of(&self, owner: Address) -> U256;

    /// Transfer tokens
    fn transfer(&mut self, to: Address, amount: U256) -> bool;

    /// Transfer tokens from another address
    fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::host::{Deployer, HostEnv};

    const SUPPLY: u64 = 1_000_000_000_000_000;

    fn setup() -> (HostEnv, ReserveTokenHostRef) {
        let env = odra_test::env();
        let init_args = ReserveTokenInitArgs {
            name: String::from("CA Token"),
            symbol: String::from("CAT"),
            decimals: 9,
            initial_supply: U256::from(SUPPLY),
        };
        let token = ReserveToken::deploy(&env, init_args);
        (env, token)
    }

    #[test]
    fn test_init_credits_deployer() {
        let (env, token) = setup();
        assert_eq!(token.name(), "CA Token");
        assert_eq!(token.symbol(), "CAT");
        assert_eq!(token.decimals(), 9);
        assert_eq!(token.total_supply(), U256::from(SUPPLY));
        assert_eq!(token.balance_of(env.get_account(0)), U256::from(SUPPLY));
    }

    #[test]
    fn test_transfer() {
        let (env, mut token) = setup();
        let owner = env.get_account(0);
        let user = env.get_account(1);

        token.transfer(user, U256::from(500));

        assert_eq!(token.balance_of(owner), U256::from(SUPPLY - 500));
        assert_eq!(token.balance_of(user), U256::from(500));
    }

    #[test]
    fn test_transfer_from_consumes_allowance() {
        let (env, mut token) = setup();
        let owner = env.get_account(0);
        let spender = env.get_account(1);
        let recipient = env.get_account(2);

        token.approve(spender, U256::from(1_000));

        env.set_caller(spender);
        token.transfer_from(owner, recipient, U256::from(400));

        assert_eq!(token.allowance(owner, spender), U256::from(600));
        assert_eq!(token.balance_of(recipient), U256::from(400));
        assert_eq!(
            token.try_transfer_from(owner, recipient, U256::from(601)),
            Err(TokenError::InsufficientAllowance.into())
        );
    }

    #[test]
    fn test_transfer_above_balance_reverts() {
        let (env, mut token) = setup();
        env.set_caller(env.get_account(3));
        assert_eq!(
            token.try_transfer(env.get_account(0), U256::one()),
            Err(TokenError::InsufficientBalance.into())
        );
    }
}
