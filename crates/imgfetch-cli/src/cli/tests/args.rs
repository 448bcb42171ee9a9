//! Tests for argument parsing, config overrides, and URL gathering.

use super::parse;
use crate::cli::{input, Cli};
use clap::Parser;
use imgfetch_core::config::ImgfetchConfig;
use std::path::PathBuf;

#[test]
fn cli_parse_no_args() {
    let cli = parse(&["imgfetch"]);
    assert!(cli.urls.is_empty());
    assert!(cli.output_dir.is_none());
    assert!(cli.timeout.is_none());
    assert!(cli.max_size.is_none());
    assert!(cli.jobs.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_urls_and_flags() {
    let cli = parse(&[
        "imgfetch",
        "https://example.com/a.png,https://example.com/b.png",
        "https://example.com/c.png",
        "-o",
        "/tmp/out",
        "--timeout",
        "3",
        "--max-size",
        "2048",
        "-j",
        "4",
    ]);
    assert_eq!(cli.urls.len(), 2);
    assert_eq!(cli.output_dir.as_deref(), Some(std::path::Path::new("/tmp/out")));
    assert_eq!(cli.timeout, Some(3));
    assert_eq!(cli.max_size, Some(2048));
    assert_eq!(cli.jobs, Some(4));
}

#[test]
fn cli_parse_rejects_bad_number() {
    assert!(Cli::try_parse_from(["imgfetch", "--timeout", "soon"]).is_err());
}

#[test]
fn overrides_replace_config_values() {
    let cli = parse(&["imgfetch", "--output-dir", "pics", "--max-size", "10", "--jobs", "0"]);
    let mut cfg = ImgfetchConfig::default();
    cli.apply_overrides(&mut cfg);
    assert_eq!(cfg.output_dir, PathBuf::from("pics"));
    assert_eq!(cfg.max_content_length, 10);
    assert_eq!(cfg.timeout_secs, 10);
    // Zero workers makes no sense; clamp to sequential.
    assert_eq!(cfg.jobs, 1);
}

#[test]
fn urls_from_args_split_on_commas() {
    let args = vec![
        "https://a.example/1.png, https://a.example/2.png".to_string(),
        "https://b.example/3.png".to_string(),
    ];
    assert_eq!(
        input::urls_from_args(&args),
        vec![
            "https://a.example/1.png",
            "https://a.example/2.png",
            "https://b.example/3.png"
        ]
    );
}

#[test]
fn prompt_reads_one_line() {
    let mut stdin = std::io::Cursor::new(b"https://a.example/x.png , ftp://b/y.jpg\nignored\n".to_vec());
    let mut out = Vec::new();
    let urls = input::prompt_for_urls(&mut stdin, &mut out).unwrap();
    assert_eq!(urls, vec!["https://a.example/x.png", "ftp://b/y.jpg"]);
    assert!(String::from_utf8(out).unwrap().starts_with("Please enter"));
}

#[test]
fn prompt_eof_gives_single_empty_url() {
    let mut stdin = std::io::Cursor::new(Vec::new());
    let mut out = Vec::new();
    assert_eq!(input::prompt_for_urls(&mut stdin, &mut out).unwrap(), vec![""]);
}
