use std::io::Read;

use anyhow::{Context, Result};
use csv::Trim;
use rust_decimal::Decimal;

use crate::processor::in_memory_processor::AccountSeed;

/// Accounts the bank starts with when no seed file is given.
pub fn default_seeds() -> Vec<AccountSeed> {
    vec![AccountSeed {
        branch: 1,
        account: 1234,
        customer: "Cezar Augusto Mezzalira".to_string(),
        opening_balance: Decimal::from(100),
    }]
}

/// Parses account seeds in CSV format, with header
/// `branch,account,customer,opening_balance`.
pub fn parse_seeds<R>(source: R) -> Result<Vec<AccountSeed>>
where
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(source);
    let mut seeds = Vec::new();
    for row in reader.deserialize::<AccountSeed>() {
        let seed = row.context("Failed to parse account seed")?;
        seeds.push(seed);
    }
    Ok(seeds)
}
