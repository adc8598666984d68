//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod pager;

/// CivicTrack - local-first civic issue tracker
#[derive(Parser, Debug)]
#[command(name = "ct", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store path (default: ~/.civictrack/data/civictrack.db)
    #[arg(long, global = true, env = "CIVICTRACK_DB")]
    pub db: Option<PathBuf>,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the local store and seed the demo issues
    Init {
        /// Recreate the store from scratch
        #[arg(long)]
        force: bool,
    },

    /// Register a new account
    Register(RegisterArgs),

    /// Log in and persist the session
    Login {
        /// Account email
        email: String,

        /// Password (prompted on stdin when absent)
        #[arg(long)]
        password: Option<String>,
    },

    /// Clear the session (idempotent)
    Logout,

    /// Show the active session
    Whoami,

    /// File a new issue as the logged-in account
    Report(ReportArgs),

    /// Browse and inspect issues
    Issue {
        #[command(subcommand)]
        command: IssueCommands,
    },

    /// Account administration
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print version and store information
    Version,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (unique, case-insensitive)
    #[arg(long)]
    pub email: String,

    /// Phone number
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Password (prompted on stdin when absent)
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Issue title
    #[arg(long)]
    pub title: String,

    /// What is wrong and where
    #[arg(long)]
    pub description: String,

    /// Category (infrastructure, safety, environment, utilities, ...)
    #[arg(long)]
    pub category: String,

    /// Latitude of the issue location
    #[arg(long, requires = "lng")]
    pub lat: Option<f64>,

    /// Longitude of the issue location
    #[arg(long, requires = "lat")]
    pub lng: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum IssueCommands {
    /// List issues through the filter-search-pagination pipeline
    List(IssueListArgs),

    /// Show one issue in detail
    Show {
        /// Issue ID
        id: i64,
    },

    /// Issues reported by the logged-in account
    Mine,
}

#[derive(Args, Debug)]
pub struct IssueListArgs {
    /// Filter by category, or "all"
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Filter by status, or "all"
    #[arg(long, default_value = "all")]
    pub status: String,

    /// Case-insensitive search over title and description
    #[arg(long)]
    pub search: Option<String>,

    /// Page number (1-based; out of range falls back to page 1)
    #[arg(long, default_value = "1")]
    pub page: usize,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List registered accounts (redacted)
    List,

    /// Export accounts and issue counts as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Wipe all accounts and the session
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        force: bool,
    },
}
