//! Error types for the collateral lender

use odra::prelude::*;

/// Errors that can occur in the collateral lender
#[odra::odra_error]
pub enum LenderError {
    // Access Control Errors
    /// Caller is not the administrator
    AccessDenied = 1,

    // Configuration Errors
    /// Reserve is not a token contract, not configured, or does not match the loan
    InvalidReserve = 2,
    /// Loan ratio must be non-zero
    InvalidRatio = 3,

    // Borrowing Errors
    /// No collateral attached, or too little to issue any principal
    InsufficientCollateral = 4,
    /// Borrower must settle the outstanding loan first
    RepaymentRequired = 5,
    /// Pool does not hold enough of the reserve
    InsufficientLiquidity = 6,

    // Repayment Errors
    /// Loan has already been repaid
    AlreadyRepaid = 7,
    /// Loan period is over, repayment is no longer accepted
    LoanExpired = 8,
    /// Amount does not cover principal plus interest
    InsufficientRepayment = 9,

    // Collateral Claim Errors
    /// Loan was repaid, collateral belongs to the borrower
    LoanRepaid = 10,
    /// Collateral of this loan was already seized
    CollateralAlreadyClaimed = 11,
    /// Loan period has not passed yet
    LoanNotExpired = 12,

    // General Errors
    /// No loan recorded for the address
    NoSuchLoan = 13,
    /// Math overflow occurred
    MathOverflow = 14,
}
