use std::path::Path;

use anyhow::Context;
use lab_auth::Route;
use lab_core::entities::Profile;
use lab_core::enums::ResearchList;
use lab_profile::ProfileEditor;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::profile::ProfilePushArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ProfilePushResponse {
    saved: bool,
    email: String,
    ongoing_research: usize,
    past_research: usize,
}

pub async fn handle(
    args: &ProfilePushArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.enter(Route::Profile)?;

    let profile = read_profile(&args.file)?;
    let mut editor = ProfileEditor::from_profile(&ctx.session, profile)?;
    editor
        .save(&ctx.api)
        .await
        .context("profile push: save was not accepted")?;

    let research = editor.research();
    output(
        &ProfilePushResponse {
            saved: true,
            email: editor.email().to_string(),
            ongoing_research: research.items(ResearchList::Ongoing).len(),
            past_research: research.items(ResearchList::Past).len(),
        },
        flags.format,
    )
}

fn read_profile(path: &Path) -> anyhow::Result<Profile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a profile document", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_profile_document() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("me.json");
        std::fs::write(
            &path,
            r#"{"name":"Test User","email":"test@example.com","ongoing_research":[{"title":"Organoids"}]}"#,
        )
        .unwrap();

        let profile = read_profile(&path).unwrap();
        assert_eq!(profile.ongoing_research.len(), 1);
        assert!(profile.past_research.is_empty());
    }

    #[test]
    fn rejects_non_profile_json() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = read_profile(&path).unwrap_err();
        assert!(format!("{err:#}").contains("is not a profile document"));
    }
}
