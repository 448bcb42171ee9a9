//! CLI tests: argument parsing, input splitting, and outcome rendering.

use super::Cli;
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

mod args;
