//! Collateral Lender - CSPR-collateralized loans in a CEP-18 reserve
//!
//! A single administered pool: liquidity providers deposit reserve tokens,
//! borrowers lock CSPR and receive reserve tokens at a fixed ratio, and every
//! loan ends either repaid within the loan period or seized after it.

pub mod collateral_lender;
pub mod errors;
pub mod events;


pub use collateral_lender::{CollateralLender, Loan};
pub use errors::LenderError;
pub use events::*;
