// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Line-oriented session over one in-memory ledger.
//!
//! Each run of the binary starts from the sample data, so a shell is the only
//! way to chain several changes together and watch the totals move.

use std::io::BufRead;

use anyhow::Result;

use crate::cli;
use crate::config::Config;
use crate::ledger::Ledger;
use crate::utils::split_args;

/// Reads commands until EOF or `exit`/`quit`. A bad line prints its error and
/// the session carries on. Returns the number of lines that ran cleanly.
pub fn run<R: BufRead>(ledger: &mut Ledger, config: &Config, reader: R) -> Result<usize> {
    let mut ok = 0;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }
        match run_line(ledger, config, line) {
            Ok(()) => ok += 1,
            Err(err) => eprintln!("error: {:#}", err),
        }
    }
    Ok(ok)
}

fn run_line(ledger: &mut Ledger, config: &Config, line: &str) -> Result<()> {
    let mut args = vec!["pocketledger".to_string()];
    args.extend(split_args(line)?);
    let matches = match cli::build_cli().try_get_matches_from(args) {
        Ok(m) => m,
        Err(err) if err.use_stderr() => return Err(err.into()),
        Err(err) => {
            // --help and --version
            err.print()?;
            return Ok(());
        }
    };
    if let Some(("shell", _)) = matches.subcommand() {
        anyhow::bail!("Already in a shell");
    }
    super::run(ledger, config, &matches)
}
