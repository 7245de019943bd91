use rust_decimal::Decimal;
use thiserror::Error;

/// Invalid-argument failures. These abort the current operation without
/// mutating any account; recoverable business outcomes (refused withdrawals,
/// missing or duplicate accounts) are plain values, not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("account number cannot be empty")]
    EmptyAccountNumber,

    #[error("account holder cannot be empty")]
    EmptyAccountHolder,

    #[error("initial balance cannot be negative (got {0})")]
    NegativeInitialBalance(Decimal),

    #[error("interest rate cannot be negative (got {0})")]
    NegativeInterestRate(Decimal),

    #[error("overdraft limit cannot be negative (got {0})")]
    NegativeOverdraftLimit(Decimal),

    #[error("{operation} amount must be positive (got {amount})")]
    InvalidAmount {
        operation: &'static str,
        amount: Decimal,
    },
}
