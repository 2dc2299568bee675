use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Profile commands. All require a signed-in session.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Print the profile that would be saved for the current user.
    Show,
    /// Save a profile read from a JSON file.
    Push(ProfilePushArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProfilePushArgs {
    /// Path to a profile JSON document.
    pub file: PathBuf,
}
