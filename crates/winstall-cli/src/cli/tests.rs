//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_install() {
    match parse(&["winstall", "install"]) {
        CliCommand::Install { keep } => assert!(!keep),
        _ => panic!("expected Install"),
    }
}

#[test]
fn cli_parse_install_keep() {
    match parse(&["winstall", "install", "--keep"]) {
        CliCommand::Install { keep } => assert!(keep),
        _ => panic!("expected Install with --keep"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["winstall", "checksum", "vlc-3.0.21-win64.exe"]) {
        CliCommand::Checksum { path } => assert_eq!(path, "vlc-3.0.21-win64.exe"),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_rejects_missing_subcommand() {
    assert!(Cli::try_parse_from(["winstall"]).is_err());
}

#[test]
fn cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["winstall", "install", "--retry"]).is_err());
}
