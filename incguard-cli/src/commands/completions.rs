//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Binary name as installed
const BIN_NAME: &str = "incguard";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_install_hint(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

/// Installation hints go to stderr so the script can be redirected as is.
fn print_install_hint(shell: Shell) {
    eprintln!("# Generating {shell} completion script");

    match shell {
        Shell::Bash => {
            eprintln!("#   incguard completions bash > ~/.local/share/bash-completion/completions/incguard");
            eprintln!("# Or in ~/.bashrc:");
            eprintln!("#   eval \"$(incguard completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   incguard completions zsh > ~/.zsh/completions/_incguard");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   incguard completions fish > ~/.config/fish/completions/incguard.fish");
        }
        Shell::PowerShell => {
            eprintln!("#   incguard completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }

    eprintln!();
}
