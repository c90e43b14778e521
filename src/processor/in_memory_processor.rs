use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    account::{Account, AccountDirectory},
    balance::balance_of,
    command::{AccountCommand, CreateTransactionAction},
    ledger::{AccountKey, AccountNumber, BranchNumber, Ledger, Transaction},
    statement::Statement,
};

use super::{TransactionProcessError, TransactionProcessor};

/// One account to create at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSeed {
    pub branch: BranchNumber,
    pub account: AccountNumber,
    pub customer: String,
    pub opening_balance: Decimal,
}

impl AccountSeed {
    pub fn key(&self) -> AccountKey {
        AccountKey::new(self.branch, self.account)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryTransactionProcessor {
    directory: AccountDirectory,
    ledger: Ledger,
}

impl InMemoryTransactionProcessor {
    /// Creates the accounts and records each non-zero opening balance as a deposit,
    /// so balances are backed by the ledger from the start.
    pub fn bootstrap(
        seeds: impl IntoIterator<Item = AccountSeed>,
    ) -> Result<Self, TransactionProcessError> {
        let mut processor = Self::default();
        for seed in seeds {
            let key = seed.key();
            if processor.directory.find_account(key).is_some() {
                return Err(TransactionProcessError::DuplicateAccount { key });
            }
            processor.directory.insert(Account::new(seed.customer, key));
            if !seed.opening_balance.is_zero() {
                processor.deposit(key, seed.opening_balance)?;
            }
        }
        info!(
            accounts = processor.directory.len(),
            transactions = processor.ledger.len(),
            "bank initialized"
        );
        Ok(processor)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn record(
        &mut self,
        key: AccountKey,
        action: CreateTransactionAction,
        amount: Decimal,
    ) -> Result<&Transaction, TransactionProcessError> {
        let Some(account) = self.directory.find_account_mut(key) else {
            return Err(TransactionProcessError::AccountNotFound { key });
        };
        let command = AccountCommand::parse_command(action, amount)?;
        let balance = balance_of(&self.ledger, key);
        let transaction = account.handle_command(command, balance)?;
        account.apply(&transaction);
        Ok(self.ledger.append(transaction))
    }
}

impl TransactionProcessor for InMemoryTransactionProcessor {
    fn find_account(&self, key: AccountKey) -> Option<&Account> {
        self.directory.find_account(key)
    }

    fn balance(&self, key: AccountKey) -> Decimal {
        balance_of(&self.ledger, key)
    }

    fn deposit(
        &mut self,
        key: AccountKey,
        amount: Decimal,
    ) -> Result<&Transaction, TransactionProcessError> {
        self.record(key, CreateTransactionAction::Deposit, amount)
            .inspect_err(|err| warn!(account = %key, %amount, %err, "deposit rejected"))
    }

    fn withdraw(
        &mut self,
        key: AccountKey,
        amount: Decimal,
    ) -> Result<&Transaction, TransactionProcessError> {
        self.record(key, CreateTransactionAction::Withdraw, amount)
            .inspect_err(|err| warn!(account = %key, %amount, %err, "withdrawal rejected"))
    }

    fn statement(&self, key: AccountKey) -> Statement {
        Statement::generate(&self.ledger, key)
    }
}
