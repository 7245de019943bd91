mod account;
mod bank;
mod error;

use std::process::ExitCode;

use account::{Account, CurrentAccount, SavingsAccount, Withdrawal};
use bank::{Bank, Transfer};
use error::LedgerError;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    init_logging();

    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bankledger: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bankledger=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run_demo() -> Result<(), LedgerError> {
    let mut bank = Bank::new();

    let alice = SavingsAccount::new(
        "SAV1001",
        "Alice Johnson",
        Decimal::new(1500, 0),
        Decimal::new(3, 2),
    )?;
    let bob = CurrentAccount::new(
        "CUR2001",
        "Bob Smith",
        Decimal::new(500, 0),
        Decimal::new(300, 0),
    )?;

    register(&mut bank, alice.into());
    register(&mut bank, bob.into());

    check_balance(&bank, "SAV1001");
    check_balance(&bank, "CUR2001");

    deposit(&mut bank, "SAV1001", Decimal::new(200, 0))?;
    withdraw(&mut bank, "CUR2001", Decimal::new(600, 0))?;
    withdraw(&mut bank, "CUR2001", Decimal::new(1000, 0))?;

    add_interest(&mut bank, "SAV1001");

    transfer(&mut bank, "SAV1001", "CUR2001", Decimal::new(300, 0))?;

    bank.print_all_accounts();

    // Registered through the enum; reaching the interest accrual afterwards
    // takes a variant match, not a downcast.
    let charlie: Account = SavingsAccount::new(
        "SAV3002",
        "Charlie Park",
        Decimal::new(800, 0),
        Decimal::new(5, 2),
    )?
    .into();
    register(&mut bank, charlie);
    check_balance(&bank, "SAV3002");
    add_interest(&mut bank, "SAV3002");

    bank.print_all_accounts();

    Ok(())
}

fn register(bank: &mut Bank, account: Account) {
    let line = account.to_string();
    match bank.add_account(account) {
        Ok(()) => println!("Added {line}"),
        Err(rejected) => println!(
            "Account with number {} already exists; not added.",
            rejected.number()
        ),
    }
}

fn check_balance(bank: &Bank, number: &str) {
    match bank.find_account(number) {
        Some(account) => println!(
            "Account {} (Holder: {}) - Balance: {:.2}",
            account.number(),
            account.holder(),
            account.balance().round_dp(2)
        ),
        None => println!("No account with number {number}."),
    }
}

fn deposit(bank: &mut Bank, number: &str, amount: Decimal) -> Result<(), LedgerError> {
    let Some(account) = bank.find_account_mut(number) else {
        println!("No account with number {number}.");
        return Ok(());
    };

    let new_balance = account.deposit(amount)?;
    println!(
        "Deposited {:.2} to {} (New balance: {:.2})",
        amount.round_dp(2),
        number,
        new_balance.round_dp(2)
    );
    Ok(())
}

fn withdraw(bank: &mut Bank, number: &str, amount: Decimal) -> Result<(), LedgerError> {
    let Some(account) = bank.find_account_mut(number) else {
        println!("No account with number {number}.");
        return Ok(());
    };

    match account.withdraw(amount)? {
        Withdrawal::Complete { new_balance } => {
            if let Account::Current(current) = account {
                println!(
                    "Withdrew {:.2} from {} (New balance: {:.2}) [Overdraft limit: {:.2}]",
                    amount.round_dp(2),
                    number,
                    new_balance.round_dp(2),
                    current.overdraft_limit().round_dp(2)
                );
            } else {
                println!(
                    "Withdrew {:.2} from {} (New balance: {:.2})",
                    amount.round_dp(2),
                    number,
                    new_balance.round_dp(2)
                );
            }
        }
        Withdrawal::Refused(refusal) => println!(
            "Withdrawal of {:.2} from {} failed: {}",
            amount.round_dp(2),
            number,
            refusal
        ),
    }
    Ok(())
}

fn add_interest(bank: &mut Bank, number: &str) {
    let Some(Account::Savings(savings)) = bank.find_account_mut(number) else {
        println!("No savings account with number {number}.");
        return;
    };

    let interest = savings.add_interest();
    if interest > Decimal::ZERO {
        println!(
            "Interest {:.2} added to Savings {} at rate {:.2}% (New balance: {:.2})",
            interest.round_dp(2),
            savings.number(),
            (savings.interest_rate() * Decimal::ONE_HUNDRED).round_dp(2),
            savings.balance().round_dp(2)
        );
    } else {
        println!("No interest added to {}", savings.number());
    }
}

fn transfer(bank: &mut Bank, from: &str, to: &str, amount: Decimal) -> Result<(), LedgerError> {
    match bank.transfer(from, to, amount)? {
        Transfer::Complete => println!(
            "Transfer of {:.2} from {} to {} completed.",
            amount.round_dp(2),
            from,
            to
        ),
        Transfer::SourceMissing { number } => {
            println!("Transfer failed: source account {number} not found.")
        }
        Transfer::DestinationMissing { number } => {
            println!("Transfer failed: destination account {number} not found.")
        }
        Transfer::Refused { refusal } => println!(
            "Transfer of {:.2} from {} aborted: {}",
            amount.round_dp(2),
            from,
            refusal
        ),
    }
    Ok(())
}
