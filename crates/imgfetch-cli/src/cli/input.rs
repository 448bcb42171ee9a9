//! Gathering the URL list from arguments or an interactive prompt.

use anyhow::{Context, Result};
use imgfetch_core::batch::parse_url_list;
use std::io::{BufRead, Write};

const PROMPT: &str = "Please enter one or more image URLs, separated by a comma: ";

/// URLs from command-line arguments; each argument is split on commas.
pub(super) fn urls_from_args(args: &[String]) -> Vec<String> {
    args.iter().flat_map(|a| parse_url_list(a)).collect()
}

/// Prompt on stdout and read one line from `input`. EOF yields an empty line.
pub(super) fn prompt_for_urls<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Vec<String>> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read URLs from stdin")?;
    Ok(parse_url_list(&line))
}
