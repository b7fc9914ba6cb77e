// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

/// Display settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Groups shown before the "Other" bucket.
    pub top_n: usize,
    pub recent_limit: usize,
    /// Months listed in monthly comparisons.
    pub months: usize,
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: 3,
            recent_limit: 5,
            months: 3,
            currency: "$".to_string(),
        }
    }
}

impl Config {
    /// Reads the global flags (or their `POCKETLEDGER_*` env fallbacks).
    /// Anything not given keeps its default.
    pub fn from_matches(m: &clap::ArgMatches) -> Config {
        let defaults = Config::default();
        Config {
            top_n: m.get_one::<usize>("top").copied().unwrap_or(defaults.top_n),
            recent_limit: m
                .get_one::<usize>("recent")
                .copied()
                .unwrap_or(defaults.recent_limit),
            months: m
                .get_one::<usize>("months")
                .copied()
                .unwrap_or(defaults.months),
            currency: m
                .get_one::<String>("currency")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.currency),
        }
    }
}
