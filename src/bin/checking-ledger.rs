use std::{fs::File, io};

use anyhow::{Context, Result};
use checking_ledger::bin_utils::{
    Service,
    seed_parser::{default_seeds, parse_seeds},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the prompts.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let seeds = match std::env::args().nth(1) {
        Some(filename) => {
            let file =
                File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;
            parse_seeds(file).with_context(|| format!("Failed to load accounts from `{filename}`"))?
        }
        None => default_seeds(),
    };

    let service = Service {
        input: io::stdin().lock(),
        output: &mut io::stdout(),
        seeds,
    };
    service.run()
}
