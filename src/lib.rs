#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

// Lending ledger
pub mod lender;

// Reserve token
pub mod token;
pub mod errors;
pub mod events;
pub mod math;
