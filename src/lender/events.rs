//! Events for the collateral lender

use odra::prelude::*;
use odra::casper_types::{U256, U512};

// ============================================================================
// Configuration Events
// ============================================================================

/// Event emitted when the global interest rate changes
#[odra::event]
pub struct InterestRateUpdated {
    /// Previous rate (scaled by 10_000)
    pub old_rate: U256,
    /// New rate (scaled by 10_000)
    pub new_rate: U256,
    /// Administrator that made the change
    pub updated_by: Address,
}

/// Event emitted when a reserve is priced or re-priced
#[odra::event]
pub struct LoanRatioUpdated {
    /// Reserve token
    pub reserve: Address,
    /// Previous ratio, zero if the reserve was not configured
    pub old_ratio: U256,
    /// New ratio (reserve units per collateral unit, scaled by 10_000)
    pub new_ratio: U256,
}

/// Event emitted when the administrator hands over control
#[odra::event]
pub struct OwnershipTransferred {
    pub previous_admin: Address,
    pub new_admin: Address,
}

// ============================================================================
// Liquidity Events
// ============================================================================

/// Event emitted when reserve liquidity is added to the pool
#[odra::event]
pub struct ReserveDeposited {
    /// Address that supplied the tokens
    pub depositor: Address,
    /// Reserve token
    pub reserve: Address,
    /// Amount supplied
    pub amount: U256,
    /// Timestamp of deposit
    pub timestamp: u64,
}

// ============================================================================
// Loan Lifecycle Events
// ============================================================================

/// Event emitted when a loan is opened
#[odra::event]
pub struct LoanOriginated {
    pub borrower: Address,
    pub reserve: Address,
    /// CSPR locked as collateral
    pub collateral: U512,
    /// Reserve amount issued
    pub principal: U256,
    /// Rate captured for this loan
    pub interest_rate: U256,
    pub timestamp: u64,
}

/// Event emitted when a loan is repaid and its collateral returned
#[odra::event]
pub struct LoanSettled {
    pub borrower: Address,
    pub reserve: Address,
    /// Amount the borrower paid
    pub amount_paid: U256,
    /// Interest part of the amount owed
    pub interest: U256,
    /// CSPR returned to the borrower
    pub collateral_returned: U512,
    pub timestamp: u64,
}

/// Event emitted when the administrator seizes the collateral of an expired loan
#[odra::event]
pub struct CollateralClaimed {
    pub borrower: Address,
    /// Recipient of the collateral
    pub claimed_by: Address,
    pub collateral: U512,
    pub timestamp: u64,
}
