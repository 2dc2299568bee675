use lab_auth::Route;
use lab_profile::ProfileEditor;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.enter(Route::Profile)?;
    let editor = ProfileEditor::open(&ctx.session)?;
    output(&editor.to_profile(), flags.format)
}
