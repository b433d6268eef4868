//! Build script for hotelier-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("hotelier")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Drive the hotelier reservation engine")
        .long_about(
            "Command-line tool for booking, checking in, checking out, and cancelling \
             room reservations against a configured hotel",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file layered above discovered hotelier.yaml files")
                .value_name("PATH")
                .global(true)
                .env("HOTELIER_CONFIG"),
        )
        .subcommands(vec![
            Command::new("rooms")
                .about("List the configured room pool")
                .long_about("Display every configured room with its status and rate"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a hotelier configuration file for errors"),
            Command::new("run")
                .about("Execute a reservation script against the configured hotel")
                .long_about(
                    "Run a YAML script of book, check_in, check_out, and cancel steps, \
                     checking each outcome against its expectation",
                ),
            Command::new("simulate")
                .about("Race concurrent bookers for one room")
                .long_about("Spawn N threads that book the same room at once and report the winner"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("hotelier.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
