//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Scan source files for strings not marked for translation
//! - `init`: Initialize a translint configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Directory to check; configuration is discovered from here upward
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Also apply the built-in permissive ignore lists: non-translatable
    /// attribute names (className, src, data-*, ...) and strings with no
    /// alphabetic content
    #[arg(long)]
    pub permissive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check source files for strings not marked for translation
    Check(CheckCommand),
    /// Initialize a new .translintrc.json configuration file
    Init,
}
