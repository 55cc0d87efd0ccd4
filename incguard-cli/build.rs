//! Build script for incguard-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("incguard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize C/C++ include guards")
        .long_about(
            "Rewrite the first #ifndef/#define pair of every header under a root \
             directory so the guard name is derived from the header's path",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Header root directory (defaults to ./src)")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help("Leading token of every guard name (defaults to \"framework\")")
                .value_name("NAME")
                .global(true),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .help("Header file extension; repeat for several (defaults to .hpp)")
                .value_name("EXT")
                .global(true)
                .action(ArgAction::Append),
        )
        .subcommands(vec![
            Command::new("fix")
                .about("Rewrite include guards to their canonical names")
                .long_about("Rewrite the first guard pair of every header; the default command"),
            Command::new("check")
                .about("Report headers whose include guard is not canonical")
                .long_about("Exit with status 1 if any header would be rewritten"),
            Command::new("list")
                .about("List headers with their canonical guard and status")
                .long_about("Display every header in table, JSON, CSV or TSV form"),
            Command::new("guard-name")
                .about("Print the canonical guard name for files")
                .long_about("Derive the guard identifier for each given path"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(std::io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("incguard.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
