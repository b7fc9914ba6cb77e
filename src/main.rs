// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use pocketledger::clock::SystemClock;
use pocketledger::config::Config;
use pocketledger::{cli, commands, seed};

fn setup_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    setup_logging(matches.get_count("verbose"));

    let config = Config::from_matches(&matches);
    let mut ledger = seed::sample_ledger(Box::new(SystemClock));

    match matches.subcommand() {
        Some(("shell", _)) => {
            let stdin = std::io::stdin();
            commands::shell::run(&mut ledger, &config, stdin.lock())?;
        }
        _ => commands::run(&mut ledger, &config, &matches)?,
    }
    Ok(())
}
