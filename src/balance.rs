use rust_decimal::Decimal;
use tracing::debug;

use crate::ledger::{AccountKey, EntryKind, Ledger, Transaction};

/// Folds transactions into a balance: credits add, debits subtract.
pub fn fold_balance<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Decimal {
    transactions
        .into_iter()
        .fold(Decimal::ZERO, |balance, tx| match tx.kind() {
            EntryKind::Credit => balance + tx.amount(),
            EntryKind::Debit => balance - tx.amount(),
        })
}

/// Current balance of the account. Zero when it has no transactions,
/// whether or not the account exists.
pub fn balance_of(ledger: &Ledger, key: AccountKey) -> Decimal {
    let balance = fold_balance(ledger.transactions_for(key));
    debug!(account = %key, %balance, "balance computed");
    balance
}
