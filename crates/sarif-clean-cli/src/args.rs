use std::path::{Path, PathBuf};

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "sarif-clean",
    version,
    about = "Normalize SARIF exports for strict code-scanning ingestion"
)]
pub struct Args {
    /// SARIF file to clean
    pub input: PathBuf,

    /// Where to write the cleaned SARIF (defaults to overwriting INPUT)
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(self.input.as_path())
    }
}
