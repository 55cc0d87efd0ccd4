//! Guard-name command implementation.
//!
//! Prints the canonical guard identifier for each given file using the
//! resolved root and prefix. The files do not need to exist.

use crate::error::CliError;
use crate::utils::{absolutize, load_settings, GlobalOptions};
use clap::Args;
use incguard::GuardNamer;
use std::path::PathBuf;

/// Print the canonical guard name for files.
#[derive(Args)]
pub struct GuardNameCommand {
    /// Header files (relative paths are taken from the current directory)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl GuardNameCommand {
    /// Execute the guard-name command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let namer = GuardNamer::for_root(&settings.root).with_prefix(settings.prefix);

        for file in &self.files {
            let path = absolutize(file)?;
            if path.is_dir() {
                return Err(CliError::InvalidArguments(format!(
                    "{} is a directory",
                    file.display()
                )));
            }
            if !path.starts_with(&settings.root) {
                global.logger.warn(&format!(
                    "{} is outside {}",
                    path.display(),
                    settings.root.display()
                ));
            }
            println!("{}", namer.derive_path(&path));
        }

        Ok(())
    }
}
