mod login;
mod logout;
mod signup;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `lbn auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Signup(args) => signup::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags),
    }
}
