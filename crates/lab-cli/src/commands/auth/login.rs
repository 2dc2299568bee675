use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    email: String,
    name: String,
    role: String,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.email.trim().is_empty() || args.password.is_empty() {
        anyhow::bail!("auth login: --email and --password must not be empty");
    }

    ctx.session.login(&args.email, &args.password).await?;
    let user = ctx.session.require_authenticated()?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
        },
        flags.format,
    )
}
