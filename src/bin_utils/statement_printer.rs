use std::io::Write;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::statement::Statement;

fn signed(amount: Decimal) -> String {
    if amount.is_sign_negative() {
        format!("-{}", amount.abs())
    } else {
        format!("+{amount}")
    }
}

/// One line per transaction: operation label, signed amount, kind code, running balance.
pub fn print_statement<W>(output: &mut W, statement: &Statement) -> Result<()>
where
    W: Write,
{
    writeln!(output, "Statement for account {}", statement.key)
        .context("Failed to write statement")?;
    for line in &statement.lines {
        writeln!(
            output,
            "{:<6} {:>14} {} {:>14}",
            line.operation.label(),
            signed(line.signed_amount),
            line.kind.code(),
            line.running_balance
        )
        .context("Failed to write statement line")?;
    }
    writeln!(output, "Balance: {}", statement.final_balance)
        .context("Failed to write statement")?;
    Ok(())
}
