//! Error definitions for the reserve token contract
use odra::prelude::*;

/// Custom errors for the reserve token
#[odra::odra_error]
pub enum TokenError {
    /// Insufficient allowance for transfer
    InsufficientAllowance = 100,
    
    /// Insufficient balance for operation
    InsufficientBalance = 101,
}
