use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.logout();
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
