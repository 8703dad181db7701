use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormatArg;

/// Batch maintenance for image/caption dataset pairs
#[derive(Parser, Debug)]
#[command(name = "pairkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Suppress the report output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renumber every image and its caption under a new name prefix
    Rename {
        /// Name prefix for the new files; a trailing "_" is added when missing.
        /// Falls back to defaults.prefix in .pairkit.toml
        prefix: Option<String>,

        /// Dataset directory
        #[arg(long, default_value = ".")]
        path: PathBuf,

        /// Don't create missing .txt companions before renaming
        #[arg(long)]
        no_create_missing: bool,

        /// Print the rename plan without touching any file
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Prepend a trigger word to caption files
    Trigger {
        /// Word to prepend, separated from the caption by a space
        trigger: String,

        /// Dataset directory
        #[arg(long, default_value = ".", conflicts_with = "file")]
        path: PathBuf,

        /// Apply to a single caption file instead of the whole directory
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Replace literal text across caption files
    Replace {
        /// Text to find (literal, not a regex)
        find: String,

        /// Replacement text
        replace: String,

        /// Dataset directory
        #[arg(long, default_value = ".", conflicts_with = "file")]
        path: PathBuf,

        /// Apply to a single caption file instead of the whole directory
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// List image/caption pairs in a directory
    Pairs {
        /// Dataset directory
        #[arg(long, default_value = ".")]
        path: PathBuf,

        /// Create an empty caption for every image without one
        #[arg(long)]
        create_missing: bool,
    },

    /// Convert .bmp/.webp images to .png, keeping caption associations
    Convert {
        /// Dataset directory
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },
}
