use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert the CycloneDX Tool Center catalogue between representations
#[derive(Parser, Debug)]
#[command(name = "toolcenter-convert")]
#[command(version)]
#[command(
    about = "Convert the CycloneDX Tool Center catalogue between v1 text, consolidated JSON, and per-tool JSON",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert the legacy v1 text catalogue to a consolidated v2 JSON document
    Convert {
        /// Path to the v1 source document
        #[arg(short, long, default_value = "tools.yaml")]
        source: PathBuf,

        /// Path of the consolidated JSON document to write
        #[arg(short, long, default_value = "tools.json")]
        output: PathBuf,

        /// Omit the reserved arrays instead of writing them as empty arrays
        #[arg(long)]
        skip_empty_arrays: bool,
    },

    /// Split a consolidated catalogue into one JSON document per tool
    Split {
        /// Path to the consolidated catalogue
        #[arg(short, long, default_value = "tools.json")]
        catalog: PathBuf,

        /// Directory receiving the per-tool documents (must exist)
        #[arg(short, long, default_value = "tools")]
        tools_dir: PathBuf,
    },

    /// Assemble per-tool documents back into a consolidated catalogue
    Assemble {
        /// Directory containing the per-tool documents
        #[arg(short, long, default_value = "tools")]
        tools_dir: PathBuf,

        /// Path of the consolidated JSON document to write
        #[arg(short, long, default_value = "tools.json")]
        output: PathBuf,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
