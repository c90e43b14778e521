/// Append-only transaction log, the source of truth for every balance.
pub mod ledger;

/// Derives balances by folding an account's transactions.
pub mod balance;

/// Account data and the directory used to look accounts up by branch and number.
/// Accounts turn validated commands into transactions.
pub mod account;

/// Deposit and withdrawal commands, validated before they reach an [`account`].
pub mod command;

/// Chronological account history with a running balance.
pub mod statement;

/// Transaction processor interface, plus "in memory" implementation.
/// Coordinates lookup, validation and appending to the [`ledger`].
pub mod processor;

/// Interactive session used by the binary. It lives here so integration
/// tests can drive a whole session.
pub mod bin_utils;
