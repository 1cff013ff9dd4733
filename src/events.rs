//! CEP-18 event definitions shared by the reserve token
use odra::prelude::*;
use odra::casper_types::U256;

/// Event emitted when tokens move between two addresses
#[odra::event]
pub struct Transfer {
    /// Sender of the tokens
    pub from: Address,
    /// Recipient of the tokens
    pub to: Address,
    /// Amount transferred
    pub value: U256,
}

/// Event emitted when an allowance is set
#[odra::event]
pub struct Approval {
    /// Owner of the tokens
    pub owner: Address,
    /// Address allowed to spend
    pub spender: Address,
    /// New allowance
    pub value: U256,
}
