//! Interactive teller session around [`crate::processor`]: prompting, the menu loop
//! and rendering. Kept in the library so integration tests can script a session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::info;

use crate::{
    ledger::{AccountKey, AccountNumber, BranchNumber},
    processor::{
        TransactionProcessor,
        in_memory_processor::{AccountSeed, InMemoryTransactionProcessor},
    },
};
use prompt::{Answer, Prompter};
use statement_printer::print_statement;
pub mod prompt;
pub mod seed_parser;
pub mod statement_printer;

const MENU: &str = "
    1 - CHECK BALANCE
    2 - DEPOSIT
    3 - WITHDRAW
    4 - STATEMENT
    0 - EXIT
";

enum MenuOption {
    Exit,
    Balance,
    Deposit,
    Withdraw,
    Statement,
}

impl MenuOption {
    fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            0 => Some(Self::Exit),
            1 => Some(Self::Balance),
            2 => Some(Self::Deposit),
            3 => Some(Self::Withdraw),
            4 => Some(Self::Statement),
            _ => None,
        }
    }
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub seeds: Vec<AccountSeed>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    pub fn run(self) -> Result<()> {
        let mut processor = InMemoryTransactionProcessor::bootstrap(self.seeds)
            .context("Failed to initialize accounts")?;
        let mut prompt = Prompter::new(self.input, self.output);

        // Identity input that does not parse cannot match any account.
        let branch = match prompt.question_parsed::<BranchNumber>("Enter the branch number: ")? {
            Answer::Closed => return Ok(()),
            answer => answer,
        };
        let number = match prompt.question_parsed::<AccountNumber>("Enter the account number: ")? {
            Answer::Closed => return Ok(()),
            answer => answer,
        };
        let account = match (branch, number) {
            (Answer::Value(branch), Answer::Value(number)) => {
                processor.find_account(AccountKey::new(branch, number))
            }
            _ => None,
        };
        let Some(account) = account else {
            writeln!(prompt.output(), "Account not found!")?;
            return Ok(());
        };
        let key = account.key();
        let customer = account.customer_name().to_string();
        info!(account = %key, "session started");

        loop {
            write!(prompt.output(), "{MENU}")?;
            let selector = match prompt.question_parsed::<u8>("Choose an operation: ")? {
                Answer::Value(selector) => selector,
                Answer::Invalid(_) => {
                    writeln!(prompt.output(), "Invalid operation")?;
                    continue;
                }
                Answer::Closed => break,
            };
            let Some(option) = MenuOption::from_selector(selector) else {
                writeln!(prompt.output(), "Invalid operation")?;
                continue;
            };
            match option {
                MenuOption::Exit => {
                    writeln!(
                        prompt.output(),
                        "Thank you for banking with us!\nSee you soon!"
                    )?;
                    break;
                }
                MenuOption::Balance => {
                    let balance = processor.balance(key);
                    writeln!(
                        prompt.output(),
                        "{customer}, your account balance is {balance}"
                    )?;
                }
                MenuOption::Deposit => {
                    let Some(amount) = ask_amount(&mut prompt)? else {
                        continue;
                    };
                    match processor.deposit(key, amount) {
                        Ok(tx) => writeln!(prompt.output(), "Deposit of {} recorded", tx.amount())?,
                        Err(err) => writeln!(prompt.output(), "{err}")?,
                    }
                }
                MenuOption::Withdraw => {
                    let Some(amount) = ask_amount(&mut prompt)? else {
                        continue;
                    };
                    match processor.withdraw(key, amount) {
                        Ok(tx) => {
                            writeln!(prompt.output(), "Withdrawal of {} recorded", tx.amount())?
                        }
                        Err(err) => writeln!(prompt.output(), "{err}")?,
                    }
                }
                MenuOption::Statement => {
                    print_statement(prompt.output(), &processor.statement(key))?;
                }
            }
        }
        info!(account = %key, "session ended");
        Ok(())
    }
}

/// `None` when input ended or the answer was not a number; the latter is reported.
fn ask_amount<R, W>(prompt: &mut Prompter<'_, R, W>) -> Result<Option<Decimal>>
where
    R: BufRead,
    W: Write,
{
    match prompt.question_parsed::<Decimal>("Enter the amount: ")? {
        Answer::Value(value) => Ok(Some(value)),
        Answer::Invalid(raw) => {
            writeln!(prompt.output(), "`{raw}` is not a valid number")?;
            Ok(None)
        }
        Answer::Closed => Ok(None),
    }
}
