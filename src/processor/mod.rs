use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountError},
    command::AccountCommandError,
    ledger::{AccountKey, Transaction},
    statement::Statement,
};

pub mod in_memory_processor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionProcessError {
    #[error("Account {key} not found")]
    AccountNotFound { key: AccountKey },
    #[error("Account {key} is already registered")]
    DuplicateAccount { key: AccountKey },
    #[error(transparent)]
    CommandErr(#[from] AccountCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

pub trait TransactionProcessor {
    fn find_account(&self, key: AccountKey) -> Option<&Account>;

    /// Balance folded from the ledger, zero when nothing was recorded.
    fn balance(&self, key: AccountKey) -> Decimal;

    /// Records a credit. Either the transaction is appended or nothing changes.
    fn deposit(
        &mut self,
        key: AccountKey,
        amount: Decimal,
    ) -> Result<&Transaction, TransactionProcessError>;

    /// Records a debit. Amount is validated before funds are checked.
    fn withdraw(
        &mut self,
        key: AccountKey,
        amount: Decimal,
    ) -> Result<&Transaction, TransactionProcessError>;

    fn statement(&self, key: AccountKey) -> Statement;
}
