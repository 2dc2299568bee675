use lab_auth::{Route, guard};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    name: Option<String>,
    /// Where `lbn profile` would land right now.
    profile_route: Route,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.session.state();
    let user = state.user.as_ref();

    output(
        &AuthStatusResponse {
            authenticated: state.is_authenticated,
            user_id: user.map(|u| u.id.clone()),
            email: user.map(|u| u.email.clone()),
            name: user.map(|u| u.name.clone()),
            profile_route: guard(Route::Profile, state.is_authenticated),
        },
        flags.format,
    )
}
