use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, ProfileCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign up, sign out.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Search researchers by topic, equipment or reagent.
    Search(SearchArgs),
    /// Your research profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Free-text query.
    pub query: String,
    /// Also print the full card of the result at this position (0-based).
    #[arg(long)]
    pub expand: Option<usize>,
}
