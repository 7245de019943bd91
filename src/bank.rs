use crate::account::{require_positive, Account, Refusal, Withdrawal};
use crate::error::LedgerError;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Outcome of a transfer attempt. Everything except `Complete` leaves both
/// accounts untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    Complete,
    SourceMissing { number: String },
    DestinationMissing { number: String },
    Refused { refusal: Refusal },
}

#[derive(Debug, Default)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account. A duplicate number leaves the registry unchanged
    /// and hands the account back to the caller.
    pub fn add_account(&mut self, account: Account) -> Result<(), Account> {
        if self.find_account(account.number()).is_some() {
            warn!(number = account.number(), "duplicate account number rejected");
            return Err(account);
        }

        debug!(
            number = account.number(),
            account_type = account.account_type(),
            "account registered"
        );
        self.accounts.push(account);
        Ok(())
    }

    pub fn find_account(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    pub fn find_account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.number() == number)
    }

    fn position(&self, number: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.number() == number)
    }

    /// Withdraws from `from` and deposits the same amount into `to` as one
    /// business operation. The source is looked up first, so a transfer
    /// between two missing accounts reports the source.
    pub fn transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: Decimal,
    ) -> Result<Transfer, LedgerError> {
        require_positive("transfer", amount)?;

        let Some(from_idx) = self.position(from) else {
            warn!(number = from, "transfer source not found");
            return Ok(Transfer::SourceMissing {
                number: from.to_string(),
            });
        };
        let Some(to_idx) = self.position(to) else {
            warn!(number = to, "transfer destination not found");
            return Ok(Transfer::DestinationMissing {
                number: to.to_string(),
            });
        };

        match self.accounts[from_idx].withdraw(amount)? {
            Withdrawal::Refused(refusal) => {
                warn!(%amount, from, to, %refusal, "transfer refused");
                Ok(Transfer::Refused { refusal })
            }
            Withdrawal::Complete { .. } => {
                // The destination deposit cannot be refused for a positive amount.
                self.accounts[to_idx].deposit(amount)?;
                debug!(%amount, from, to, "transfer completed");
                Ok(Transfer::Complete)
            }
        }
    }

    /// Registered accounts, insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn print_all_accounts(&self) {
        println!("=== Bank Accounts Summary ===");
        for account in self.accounts() {
            println!("{account}");
        }
    }
}
