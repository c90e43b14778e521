use std::collections::HashMap;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    command::{AccountCommand, CreateTransactionAction},
    ledger::{AccountKey, EntryKind, Transaction},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient funds, current balance is {balance}")]
    InsufficientFunds { balance: Decimal },
    #[error("Deposit of {amount} would overflow the balance of {balance}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },
}

#[derive(Debug, Clone)]
pub struct Account {
    customer_name: String,
    key: AccountKey,
    cached_balance: Decimal,
}

impl Account {
    /// New account with nothing recorded yet. Opening balances go through the ledger.
    pub fn new(customer_name: impl Into<String>, key: AccountKey) -> Self {
        Self {
            customer_name: customer_name.into(),
            key,
            cached_balance: Decimal::ZERO,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn key(&self) -> AccountKey {
        self.key
    }

    /// Running total kept next to the account. The ledger stays authoritative.
    pub fn cached_balance(&self) -> Decimal {
        self.cached_balance
    }

    pub fn apply(&mut self, transaction: &Transaction) {
        match transaction.kind() {
            EntryKind::Credit => self.cached_balance += transaction.amount(),
            EntryKind::Debit => self.cached_balance -= transaction.amount(),
        }
    }

    /// Turns a validated command into the transaction to append, given the
    /// balance folded from the ledger.
    pub fn handle_command(
        &self,
        command: AccountCommand,
        balance: Decimal,
    ) -> Result<Transaction, AccountError> {
        match command.action {
            CreateTransactionAction::Deposit => {
                if balance.checked_add(command.amount).is_none() {
                    return Err(AccountError::BalanceOverflow {
                        balance,
                        amount: command.amount,
                    });
                }
            }
            CreateTransactionAction::Withdraw => {
                if command.amount > balance {
                    return Err(AccountError::InsufficientFunds { balance });
                }
            }
        }
        Ok(Transaction::new(
            self.key,
            command.amount,
            command.action.entry_kind(),
            command.action.operation(),
        ))
    }
}

/// Accounts indexed by (branch, number).
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: HashMap<AccountKey, Account>,
}

impl AccountDirectory {
    /// Registers the account, replacing any previous one with the same key.
    pub fn insert(&mut self, account: Account) -> Option<Account> {
        self.accounts.insert(account.key, account)
    }

    pub fn find_account(&self, key: AccountKey) -> Option<&Account> {
        let account = self.accounts.get(&key);
        debug!(account = %key, found = account.is_some(), "account lookup");
        account
    }

    pub fn find_account_mut(&mut self, key: AccountKey) -> Option<&mut Account> {
        self.accounts.get_mut(&key)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
