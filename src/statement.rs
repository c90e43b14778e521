use rust_decimal::Decimal;

use crate::ledger::{AccountKey, EntryKind, Ledger, OperationKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub operation: OperationKind,
    pub kind: EntryKind,
    /// Negative for debits.
    pub signed_amount: Decimal,
    pub running_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub key: AccountKey,
    pub lines: Vec<StatementLine>,
    pub final_balance: Decimal,
}

impl Statement {
    /// Chronological history of one account with a running total.
    pub fn generate(ledger: &Ledger, key: AccountKey) -> Self {
        let mut running_balance = Decimal::ZERO;
        let lines = ledger
            .transactions_for(key)
            .map(|tx| {
                running_balance += tx.signed_amount();
                StatementLine {
                    operation: tx.operation(),
                    kind: tx.kind(),
                    signed_amount: tx.signed_amount(),
                    running_balance,
                }
            })
            .collect();
        Self {
            key,
            lines,
            final_balance: running_balance,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
