use crate::error::LedgerError;
use rust_decimal::Decimal;
use std::fmt;

/// Outcome of a withdrawal attempt. A refusal is an ordinary business result,
/// not an error; the balance is untouched when one comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Withdrawal {
    Complete { new_balance: Decimal },
    Refused(Refusal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    InsufficientFunds { balance: Decimal },
    OverdraftExceeded { allowed: Decimal },
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Refusal::InsufficientFunds { balance } => {
                write!(f, "insufficient funds (balance: {:.2})", balance.round_dp(2))
            }
            Refusal::OverdraftExceeded { allowed } => {
                write!(f, "exceeds overdraft limit (allowed: {:.2})", allowed.round_dp(2))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsAccount {
    number: String,
    holder: String,
    balance: Decimal,
    interest_rate: Decimal,
}

impl SavingsAccount {
    pub fn new(
        number: impl Into<String>,
        holder: impl Into<String>,
        initial_balance: Decimal,
        interest_rate: Decimal,
    ) -> Result<Self, LedgerError> {
        let number = number.into();
        let holder = holder.into();
        check_opening(&number, &holder, initial_balance)?;

        let mut account = Self {
            number,
            holder,
            balance: initial_balance,
            interest_rate: Decimal::ZERO,
        };
        account.set_interest_rate(interest_rate)?;

        Ok(account)
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub fn set_interest_rate(&mut self, rate: Decimal) -> Result<(), LedgerError> {
        if rate < Decimal::ZERO {
            return Err(LedgerError::NegativeInterestRate(rate));
        }
        self.interest_rate = rate;
        Ok(())
    }

    /// Credits `balance * interest_rate` and returns the interest applied,
    /// zero when there is nothing to accrue. Recomputed from the current
    /// balance on every call, so consecutive calls compound.
    pub fn add_interest(&mut self) -> Decimal {
        let interest = self.balance * self.interest_rate;
        if interest > Decimal::ZERO {
            self.balance += interest;
        }
        interest
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        credit(&mut self.balance, amount)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<Withdrawal, LedgerError> {
        require_positive("withdrawal", amount)?;

        if amount > self.balance {
            return Ok(Withdrawal::Refused(Refusal::InsufficientFunds {
                balance: self.balance,
            }));
        }

        self.balance -= amount;
        Ok(Withdrawal::Complete {
            new_balance: self.balance,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentAccount {
    number: String,
    holder: String,
    balance: Decimal,
    overdraft_limit: Decimal,
}

impl CurrentAccount {
    pub fn new(
        number: impl Into<String>,
        holder: impl Into<String>,
        initial_balance: Decimal,
        overdraft_limit: Decimal,
    ) -> Result<Self, LedgerError> {
        let number = number.into();
        let holder = holder.into();
        check_opening(&number, &holder, initial_balance)?;

        let mut account = Self {
            number,
            holder,
            balance: initial_balance,
            overdraft_limit: Decimal::ZERO,
        };
        account.set_overdraft_limit(overdraft_limit)?;

        Ok(account)
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    pub fn set_overdraft_limit(&mut self, limit: Decimal) -> Result<(), LedgerError> {
        if limit < Decimal::ZERO {
            return Err(LedgerError::NegativeOverdraftLimit(limit));
        }
        self.overdraft_limit = limit;
        Ok(())
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        credit(&mut self.balance, amount)
    }

    /// The balance may go negative here, bounded by the overdraft limit.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Withdrawal, LedgerError> {
        require_positive("withdrawal", amount)?;

        let allowed = self.balance + self.overdraft_limit;
        if amount > allowed {
            return Ok(Withdrawal::Refused(Refusal::OverdraftExceeded { allowed }));
        }

        self.balance -= amount;
        Ok(Withdrawal::Complete {
            new_balance: self.balance,
        })
    }
}

/// The closed set of account variants the ledger manages. Shared operations
/// dispatch on the variant; the current account's withdrawal rule is the one
/// behavioral difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    Savings(SavingsAccount),
    Current(CurrentAccount),
}

impl Account {
    pub fn number(&self) -> &str {
        match self {
            Account::Savings(savings) => savings.number(),
            Account::Current(current) => current.number(),
        }
    }

    pub fn holder(&self) -> &str {
        match self {
            Account::Savings(savings) => savings.holder(),
            Account::Current(current) => current.holder(),
        }
    }

    pub fn balance(&self) -> Decimal {
        match self {
            Account::Savings(savings) => savings.balance(),
            Account::Current(current) => current.balance(),
        }
    }

    /// Display discriminator only; callers needing variant behavior match on
    /// the variant instead.
    pub fn account_type(&self) -> &'static str {
        match self {
            Account::Savings(_) => "Savings",
            Account::Current(_) => "Current",
        }
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        match self {
            Account::Savings(savings) => savings.deposit(amount),
            Account::Current(current) => current.deposit(amount),
        }
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<Withdrawal, LedgerError> {
        match self {
            Account::Savings(savings) => savings.withdraw(amount),
            Account::Current(current) => current.withdraw(amount),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Account[{}] Holder: {} Balance: {:.2}",
            self.account_type(),
            self.number(),
            self.holder(),
            self.balance().round_dp(2)
        )
    }
}

impl From<SavingsAccount> for Account {
    fn from(account: SavingsAccount) -> Self {
        Account::Savings(account)
    }
}

impl From<CurrentAccount> for Account {
    fn from(account: CurrentAccount) -> Self {
        Account::Current(account)
    }
}

fn check_opening(number: &str, holder: &str, initial_balance: Decimal) -> Result<(), LedgerError> {
    if number.is_empty() {
        return Err(LedgerError::EmptyAccountNumber);
    }
    if holder.is_empty() {
        return Err(LedgerError::EmptyAccountHolder);
    }
    if initial_balance < Decimal::ZERO {
        return Err(LedgerError::NegativeInitialBalance(initial_balance));
    }
    Ok(())
}

fn credit(balance: &mut Decimal, amount: Decimal) -> Result<Decimal, LedgerError> {
    require_positive("deposit", amount)?;
    *balance += amount;
    Ok(*balance)
}

pub(crate) fn require_positive(
    operation: &'static str,
    amount: Decimal,
) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount { operation, amount });
    }
    Ok(())
}
