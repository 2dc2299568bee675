use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password.
    Login(AuthLoginArgs),
    /// Register a new account.
    Signup(AuthSignupArgs),
    /// Clear the stored session.
    Logout,
    /// Show current session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Display name.
    #[arg(long)]
    pub name: String,
}
