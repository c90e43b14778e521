use std::{collections::HashMap, fmt};

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

pub type TransactionId = Uuid;
pub type BranchNumber = u32;
pub type AccountNumber = u32;

/// Identity of an account inside the bank: branch plus account number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountKey {
    pub branch: BranchNumber,
    pub number: AccountNumber,
}

impl AccountKey {
    pub fn new(branch: BranchNumber, number: AccountNumber) -> Self {
        Self { branch, number }
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.branch, self.number)
    }
}

/// Direction of a ledger entry. The stored amount is never negative,
/// the sign comes from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Credit,
    Debit,
}

impl EntryKind {
    pub fn code(self) -> &'static str {
        match self {
            EntryKind::Credit => "C",
            EntryKind::Debit => "D",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Deposit,
    Withdrawal,
    Transfer,
    InstantPayment,
}

impl OperationKind {
    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Deposit => "DEP",
            OperationKind::Withdrawal => "SAQ",
            OperationKind::Transfer => "TRANSF",
            OperationKind::InstantPayment => "PIX",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    amount: Decimal,
    key: AccountKey,
    kind: EntryKind,
    operation: OperationKind,
}

impl Transaction {
    pub fn new(key: AccountKey, amount: Decimal, kind: EntryKind, operation: OperationKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            key,
            kind,
            operation,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn key(&self) -> AccountKey {
        self.key
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    /// Amount with the sign implied by the entry kind.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            EntryKind::Credit => self.amount,
            EntryKind::Debit => -self.amount,
        }
    }
}

/// Append-only log of every transaction across all accounts.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Transaction>,
    by_account: HashMap<AccountKey, Vec<usize>>,
}

impl Ledger {
    /// Records the transaction as is. Callers validate before appending.
    pub fn append(&mut self, transaction: Transaction) -> &Transaction {
        info!(
            id = %transaction.id,
            account = %transaction.key,
            kind = transaction.kind.code(),
            operation = transaction.operation.label(),
            amount = %transaction.amount,
            "transaction appended"
        );
        let position = self.entries.len();
        self.by_account
            .entry(transaction.key)
            .or_default()
            .push(position);
        self.entries.push(transaction);
        &self.entries[position]
    }

    /// Transactions of one account in insertion order.
    pub fn transactions_for(&self, key: AccountKey) -> impl Iterator<Item = &Transaction> + '_ {
        self.by_account
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&position| &self.entries[position])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
