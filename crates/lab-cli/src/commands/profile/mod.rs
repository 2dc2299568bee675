mod push;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::context::AppContext;

/// Handle `lbn profile <subcommand>`.
pub async fn handle(
    action: &ProfileCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show => show::handle(ctx, flags),
        ProfileCommands::Push(args) => push::handle(args, ctx, flags).await,
    }
}
