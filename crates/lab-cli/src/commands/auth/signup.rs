use lab_auth::SignupOutcome;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthSignupArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthSignupResponse {
    registered: bool,
    user_id: Option<String>,
    error: Option<String>,
    note: &'static str,
}

pub async fn handle(
    args: &AuthSignupArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.email.trim().is_empty() || args.password.is_empty() || args.name.trim().is_empty() {
        anyhow::bail!("auth signup: --email, --password and --name must not be empty");
    }

    let outcome = ctx
        .session
        .signup(&args.email, &args.password, &args.name)
        .await;
    let response = match outcome {
        SignupOutcome::Registered { user_id } => {
            ctx.session.clear_signup_success();
            AuthSignupResponse {
                registered: true,
                user_id: Some(user_id),
                error: None,
                note: "accounts are kept for this process only; sign in with a seeded account",
            }
        }
        SignupOutcome::Rejected => {
            let error = ctx.session.state().error.clone();
            ctx.session.clear_error();
            AuthSignupResponse {
                registered: false,
                user_id: None,
                error,
                note: "choose another email",
            }
        }
    };

    output(&response, flags.format)
}
