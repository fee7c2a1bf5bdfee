use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

#[derive(Debug, Parser)]
#[command(name = "refsweep")]
#[command(about = "Bulk-delete branches and tags from git remotes")]
#[command(version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the Git repository (defaults to current directory)
    #[arg(long, global = true, env = "REFSWEEP_REPO", value_hint = ValueHint::DirPath)]
    pub repo: Option<PathBuf>,

    /// Remote to operate on instead of asking when there are several
    #[arg(long, global = true, env = "REFSWEEP_REMOTE")]
    pub remote: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Show what would be deleted without deleting
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Print the dry-run selection as a JSON array
    #[arg(long, global = true, requires = "dry_run")]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pick refs to delete from an interactive list
    Select {
        /// Kind of ref to delete
        #[arg(value_enum)]
        kind: RefKind,
    },
    /// Delete every ref matching one of the given regular expressions
    Regex {
        /// Kind of ref to delete
        #[arg(value_enum)]
        kind: RefKind,
        /// Patterns to match ref names against
        #[arg(required = true)]
        patterns: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RefKind {
    #[value(alias = "branch")]
    Branches,
    #[value(alias = "tag")]
    Tags,
}
