//! Mathematical utilities for the lending ledger
//! Implements checked math and the fixed-point loan formulas
use odra::casper_types::{U256, U512};
use crate::lender::errors::LenderError;

/// Denominator of every fixed-point rate and ratio (500 = 5.00%)
pub const RATIO_SCALE: u64 = 10_000;

/// Maximum duration of a loan in milliseconds (30 days)
pub const LOAN_PERIOD: u64 = 30 * 24 * 60 * 60 * 1000;

/// Safe math operations for U256
pub struct SafeMath;

impl SafeMath {
    /// Safe addition with overflow check
    pub fn add(a: U256, b: U256) -> Result<U256, LenderError> {
        a.checked_add(b).ok_or(LenderError::MathOverflow)
    }

    /// Safe multiplication with overflow check
    pub fn mul(a: U256, b: U256) -> Result<U256, LenderError> {
        a.checked_mul(b).ok_or(LenderError::MathOverflow)
    }

    /// Safe division with zero check
    pub fn div(a: U256, b: U256) -> Result<U256, LenderError> {
        if b.is_zero() {
            return Err(LenderError::MathOverflow);
        }
        Ok(a / b)
    }

    /// Narrows a native token amount into the reserve amount domain
    pub fn to_u256(value: U512) -> Result<U256, LenderError> {
        if value.bits() > 256 {
            return Err(LenderError::MathOverflow);
        }
        let mut bytes = [0u8; 64];
        value.to_little_endian(&mut bytes);
        Ok(U256::from_little_endian(&bytes[..32]))
    }
}

/// Loan pricing: principal at origination and interest over the loan period
pub struct LoanMath;

impl LoanMath {
    /// Reserve units issued for `collateral` at `ratio`
    /// principal = collateral * ratio / 10_000, truncated
    pub fn principal(collateral: U512, ratio: U256) -> Result<U256, LenderError> {
        let collateral = SafeMath::to_u256(collateral)?;
        SafeMath::div(
            SafeMath::mul(collateral, ratio)?,
            U256::from(RATIO_SCALE),
        )
    }

    /// Milliseconds since origination; zero if the clock reads earlier
    pub fn elapsed(origination_time: u64, now: u64) -> u64 {
        now.saturating_sub(origination_time)
    }

    /// A loan expires once strictly more than a full period has passed
    pub fn is_expired(origination_time: u64, now: u64) -> bool {
        Self::elapsed(origination_time, now) > LOAN_PERIOD
    }

    /// Linear interest accrued after `elapsed` milliseconds
    /// interest = principal * rate / 10_000 * min(elapsed, period) / period
    pub fn interest(principal: U256, rate: U256, elapsed: u64) -> Result<U256, LenderError> {
        let elapsed = elapsed.min(LOAN_PERIOD);
        let full_period_interest = SafeMath::div(
            SafeMath::mul(principal, rate)?,
            U256::from(RATIO_SCALE),
        )?;
        SafeMath::div(
            SafeMath::mul(full_period_interest, U256::from(elapsed))?,
            U256::from(LOAN_PERIOD),
        )
    }

    /// Principal plus accrued interest
    pub fn owed(principal: U256, rate: U256, elapsed: u64) -> Result<U256, LenderError> {
        SafeMath::add(principal, Self::interest(principal, rate, elapsed)?)
    }
}
