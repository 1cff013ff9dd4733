//! Collateral Lender - single-pool ledger for CSPR-collateralized loans
//!
//! Borrowers lock CSPR and receive a CEP-18 reserve token at an
//! administrator-set ratio. Each loan runs for at most `LOAN_PERIOD`:
//! - within the period the borrower repays principal plus linear interest
//!   and gets the collateral back;
//! - after the period the administrator may seize the collateral.
//!
//! Reserve liquidity is pooled in the contract's own token balances and is
//! not attributed to individual depositors.

use odra::prelude::*;
use odra::casper_types::{U256, U512};
use odra::ContractRef;
use super::errors::LenderError;
use super::events::*;
use crate::math::{LoanMath, LOAN_PERIOD};
use crate::token::Cep18TokenContractRef;

/// A borrower's loan record
#[odra::odra_type]
pub struct Loan {
    /// Reserve token the loan was issued in
    pub reserve: Address,
    /// CSPR locked at origination
    pub collateral: U512,
    /// Reserve amount issued to the borrower
    pub principal: U256,
    /// Interest rate captured at origination (scaled by 10_000)
    pub interest_rate: U256,
    /// Block time of the borrow, in milliseconds
    pub origination_time: u64,
    /// Set once the borrower repays
    pub repaid: bool,
    /// Set once the administrator seizes the collateral
    pub collateral_claimed: bool,
}

impl Loan {
    /// Neither repaid nor claimed
    pub fn is_outstanding(&self) -> bool {
        !self.repaid && !self.collateral_claimed
    }
}

/// Collateral Lender contract
#[odra::module]
pub struct CollateralLender {
    /// Administrator address
    admin: Var<Address>,
    /// Global interest rate for new loans (scaled by 10_000, 500 = 5%)
    interest_rate: Var<U256>,
    /// Reserve -> reserve units per collateral unit (scaled by 10_000)
    loan_ratios: Mapping<Address, U256>,
    /// Borrower -> latest loan
    loans: Mapping<Address, Loan>,
}

#[odra::module]
impl CollateralLender {
    /// Initialize the lender; the deployer becomes the administrator
    pub fn init(&mut self, interest_rate: U256) {
        let caller = self.env().caller();
        self.admin.set(caller);
        self.interest_rate.set(interest_rate);
    }

    // ========================================
    // Configuration
    // ========================================

    /// Replace the interest rate applied to loans opened from now on
    pub fn set_interest_rate(&mut self, rate: U256) {
        let admin = self.only_admin();

        let old_rate = self.interest_rate.get_or_default();
        self.interest_rate.set(rate);

        self.env().emit_event(InterestRateUpdated {
            old_rate,
            new_rate: rate,
            updated_by: admin,
        });
    }

    /// Enable or re-price borrowing against `reserve`
    pub fn set_loan_ratio(&mut self, reserve: Address, ratio: U256) {
        self.only_admin();
        self.ensure_reserve(&reserve);

        if ratio.is_zero() {
            self.env().revert(LenderError::InvalidRatio);
        }

        let old_ratio = self.loan_ratio(reserve);
        self.loan_ratios.set(&reserve, ratio);

        self.env().emit_event(LoanRatioUpdated {
            reserve,
            old_ratio,
            new_ratio: ratio,
        });
    }

    /// Hand the administrator role to `new_admin`
    pub fn transfer_ownership(&mut self, new_admin: Address) {
        let previous_admin = self.only_admin();
        self.admin.set(new_admin);

        self.env().emit_event(OwnershipTransferred {
            previous_admin,
            new_admin,
        });
    }

    // ========================================
    // Liquidity
    // ========================================

    /// Add `amount` of `reserve` to the pool. The caller must have approved
    /// the lender for at least `amount`.
    pub fn deposit(&mut self, reserve: Address, amount: U256) {
        self.ensure_reserve(&reserve);

        let caller = self.env().caller();
        let mut token = Cep18TokenContractRef::new(self.env(), reserve);
        token.transfer_from(caller, self.env().self_address(), amount);

        let timestamp = self.env().get_block_time();
        self.env().emit_event(ReserveDeposited {
            depositor: caller,
            reserve,
            amount,
            timestamp,
        });
    }

    // ========================================
    // Loans
    // ========================================

    /// Lock the attached CSPR and receive `collateral * ratio / 10_000` of `reserve`
    #[odra(payable)]
    pub fn borrow(&mut self, reserve: Address) {
        let now = self.env().get_block_time();
        let caller = self.env().caller();
        let collateral = self.env().attached_value();

        self.ensure_reserve(&reserve);

        if collateral.is_zero() {
            self.env().revert(LenderError::InsufficientCollateral);
        }

        if let Some(loan) = self.loans.get(&caller) {
            if loan.is_outstanding() {
                self.env().revert(LenderError::RepaymentRequired);
            }
        }

        let ratio = self.loan_ratio(reserve);
        if ratio.is_zero() {
            self.env().revert(LenderError::InvalidReserve);
        }

        let principal = LoanMath::principal(collateral, ratio).unwrap_or_revert(&self.env());
        if principal.is_zero() {
            self.env().revert(LenderError::InsufficientCollateral);
        }

        let mut token = Cep18TokenContractRef::new(self.env(), reserve);
        let liquidity = token.balance_of(self.env().self_address());
        if principal > liquidity {
            self.env().revert(LenderError::InsufficientLiquidity);
        }

        let interest_rate = self.interest_rate.get_or_default();
        self.loans.set(&caller, Loan {
            reserve,
            collateral,
            principal,
            interest_rate,
            origination_time: now,
            repaid: false,
            collateral_claimed: false,
        });

        token.transfer(caller, principal);

        self.env().emit_event(LoanOriginated {
            borrower: caller,
            reserve,
            collateral,
            principal,
            interest_rate,
            timestamp: now,
        });
    }

    /// Settle the caller's loan with `amount` of `reserve` and get the
    /// collateral back. Any amount above what is owed is kept by the pool.
    pub fn repay(&mut self, reserve: Address, amount: U256) {
        let now = self.env().get_block_time();
        let caller = self.env().caller();

        self.ensure_reserve(&reserve);

        let mut loan = self.loans.get(&caller)
            .unwrap_or_revert_with(&self.env(), LenderError::NoSuchLoan);

        if loan.reserve != reserve {
            self.env().revert(LenderError::InvalidReserve);
        }

        if loan.repaid {
            self.env().revert(LenderError::AlreadyRepaid);
        }

        // Also rejects claimed loans: a claim requires the period to be over
        if LoanMath::is_expired(loan.origination_time, now) {
            self.env().revert(LenderError::LoanExpired);
        }

        let elapsed = LoanMath::elapsed(loan.origination_time, now);
        let owed = LoanMath::owed(loan.principal, loan.interest_rate, elapsed)
            .unwrap_or_revert(&self.env());
        if amount < owed {
            self.env().revert(LenderError::InsufficientRepayment);
        }

        loan.repaid = true;
        self.loans.set(&caller, loan.clone());

        let mut token = Cep18TokenContractRef::new(self.env(), reserve);
        token.transfer_from(caller, self.env().self_address(), amount);

        self.env().transfer_tokens(&caller, &loan.collateral);

        self.env().emit_event(LoanSettled {
            borrower: caller,
            reserve,
            amount_paid: amount,
            interest: owed - loan.principal,
            collateral_returned: loan.collateral,
            timestamp: now,
        });
    }

    /// Seize the collateral of `borrower`'s expired loan
    pub fn claim_collateral(&mut self, borrower: Address) {
        let admin = self.only_admin();
        let now = self.env().get_block_time();

        let mut loan = self.loans.get(&borrower)
            .unwrap_or_revert_with(&self.env(), LenderError::NoSuchLoan);

        if loan.repaid {
            self.env().revert(LenderError::LoanRepaid);
        }

        if loan.collateral_claimed {
            self.env().revert(LenderError::CollateralAlreadyClaimed);
        }

        if !LoanMath::is_expired(loan.origination_time, now) {
            self.env().revert(LenderError::LoanNotExpired);
        }

        loan.collateral_claimed = true;
        self.loans.set(&borrower, loan.clone());

        self.env().transfer_tokens(&admin, &loan.collateral);

        self.env().emit_event(CollateralClaimed {
            borrower,
            claimed_by: admin,
            collateral: loan.collateral,
            timestamp: now,
        });
    }

    // ========================================
    // View Functions
    // ========================================

    pub fn admin(&self) -> Address {
        // Only unset before init, when no one holds the role
        self.admin.get_or_revert_with(LenderError::AccessDenied)
    }

    pub fn interest_rate(&self) -> U256 {
        self.interest_rate.get_or_default()
    }

    /// Zero if the reserve is not configured
    pub fn loan_ratio(&self, reserve: Address) -> U256 {
        self.loan_ratios.get(&reserve).unwrap_or_default()
    }

    pub fn loan(&self, borrower: Address) -> Option<Loan> {
        self.loans.get(&borrower)
    }

    /// Loan period in milliseconds
    pub fn loan_period(&self) -> u64 {
        LOAN_PERIOD
    }

    /// Principal plus interest the borrower would owe at the current block time
    pub fn owed_amount(&self, borrower: Address) -> U256 {
        let loan = self.loans.get(&borrower)
            .unwrap_or_revert_with(&self.env(), LenderError::NoSuchLoan);
        let elapsed = LoanMath::elapsed(loan.origination_time, self.env().get_block_time());
        LoanMath::owed(loan.principal, loan.interest_rate, elapsed)
            .unwrap_or_revert(&self.env())
    }

    /// Pool balance of `reserve` available for new loans
    pub fn available_liquidity(&self, reserve: Address) -> U256 {
        if !reserve.is_contract() {
            return U256::zero();
        }
        let token = Cep18TokenContractRef::new(self.env(), reserve);
        token.balance_of(self.env().self_address())
    }

    /// CSPR currently locked as collateral
    pub fn collateral_held(&self) -> U512 {
        self.env().self_balance()
    }

    fn only_admin(&self) -> Address {
        let caller = self.env().caller();
        let admin = self.admin.get_or_revert_with(LenderError::AccessDenied);
        if caller != admin {
            self.env().revert(LenderError::AccessDenied);
        }
        admin
    }

    /// Account addresses cannot hold a token, so they stand for the null reserve
    fn ensure_reserve(&self, reserve: &Address) {
        if !reserve.is_contract() {
            self.env().revert(LenderError::InvalidReserve);
        }
    }
}
