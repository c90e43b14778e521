use rust_decimal::Decimal;
use thiserror::Error;

use crate::ledger::{EntryKind, OperationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTransactionAction {
    Deposit,
    Withdraw,
}

impl CreateTransactionAction {
    pub fn entry_kind(self) -> EntryKind {
        match self {
            CreateTransactionAction::Deposit => EntryKind::Credit,
            CreateTransactionAction::Withdraw => EntryKind::Debit,
        }
    }

    pub fn operation(self) -> OperationKind {
        match self {
            CreateTransactionAction::Deposit => OperationKind::Deposit,
            CreateTransactionAction::Withdraw => OperationKind::Withdrawal,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountCommandError {
    #[error("Amount must be greater than zero for {action:?}, got {amount}")]
    InvalidAmount {
        action: CreateTransactionAction,
        amount: Decimal,
    },
}

/// A deposit or withdrawal whose amount has already been checked to be positive.
#[derive(Debug, Clone, Copy)]
pub struct AccountCommand {
    pub action: CreateTransactionAction,
    pub amount: Decimal,
}

impl AccountCommand {
    pub fn parse_command(
        action: CreateTransactionAction,
        amount: Decimal,
    ) -> Result<Self, AccountCommandError> {
        if amount > Decimal::ZERO {
            Ok(Self { action, amount })
        } else {
            Err(AccountCommandError::InvalidAmount { action, amount })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_amount_is_accepted() {
        let cmd =
            AccountCommand::parse_command(CreateTransactionAction::Deposit, Decimal::new(1, 2))
                .unwrap();
        assert_eq!(cmd.amount, Decimal::new(1, 2));
        assert_eq!(cmd.action, CreateTransactionAction::Deposit);
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        for amount in [Decimal::ZERO, Decimal::from(-10)] {
            let err = AccountCommand::parse_command(CreateTransactionAction::Withdraw, amount)
                .unwrap_err();
            assert_eq!(
                err,
                AccountCommandError::InvalidAmount {
                    action: CreateTransactionAction::Withdraw,
                    amount
                }
            );
        }
        let err = AccountCommand::parse_command(CreateTransactionAction::Deposit, Decimal::from(-10))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Amount must be greater than zero for Deposit, got -10"
        );
    }

    #[test]
    fn actions_map_to_entries() {
        assert_eq!(CreateTransactionAction::Deposit.entry_kind(), EntryKind::Credit);
        assert_eq!(CreateTransactionAction::Withdraw.entry_kind(), EntryKind::Debit);
        assert_eq!(
            CreateTransactionAction::Withdraw.operation(),
            OperationKind::Withdrawal
        );
    }
}
