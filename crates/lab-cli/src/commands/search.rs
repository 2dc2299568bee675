use lab_auth::Route;
use lab_core::entities::{Paper, Researcher};
use lab_core::enums::ResultList;
use lab_search::{ResultSource, SearchPhase, SearchSession};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

const NO_AFFILIATION: &str = "(no affiliation)";

#[derive(Serialize)]
struct SearchResponse<'a> {
    query: &'a str,
    source: ResultSource,
    total: usize,
    results: Vec<ResearcherCard<'a>>,
    expanded: Option<ExpandedCard<'a>>,
}

/// Collapsed card as shown in the result list.
#[derive(Serialize)]
struct ResearcherCard<'a> {
    index: usize,
    initial: Option<char>,
    name: &'a str,
    affiliation: &'a str,
    interests: &'a [String],
}

#[derive(Serialize)]
struct ExpandedCard<'a> {
    index: usize,
    #[serde(flatten)]
    researcher: &'a Researcher,
    scholar_url: Option<String>,
    member_since: Option<String>,
    paper_preview: &'a [Paper],
}

/// Handle `lbn search`.
pub async fn handle(args: &SearchArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.enter(Route::Networking)?;

    let mut session = SearchSession::new();
    if session.search(&ctx.api, &args.query).await.is_none() {
        anyhow::bail!("search: query must not be blank");
    }
    if let Some(index) = args.expand {
        session.select_for_detail(ResultList::SearchResults, index)?;
    }

    let SearchPhase::Results { query, researchers, source } = session.phase() else {
        anyhow::bail!("search: no results were applied");
    };
    if *source == ResultSource::Fallback && !flags.quiet {
        eprintln!("search endpoint unavailable; showing sample researchers");
    }

    let results = researchers
        .iter()
        .enumerate()
        .take(ctx.limit(flags))
        .map(|(index, r)| ResearcherCard {
            index,
            initial: r.initial(),
            name: &r.name,
            affiliation: r.affiliation.as_deref().unwrap_or(NO_AFFILIATION),
            interests: &r.current_interests,
        })
        .collect();

    let expanded = session
        .selected(ResultList::SearchResults)
        .zip(session.expanded(ResultList::SearchResults))
        .map(|(index, researcher)| ExpandedCard {
            index,
            researcher,
            scholar_url: researcher.scholar_url(),
            member_since: researcher
                .member_since()
                .map(|dt| dt.format("%Y-%m-%d").to_string()),
            paper_preview: researcher.paper_preview(),
        });

    output(
        &SearchResponse {
            query,
            source: *source,
            total: researchers.len(),
            results,
            expanded,
        },
        flags.format,
    )
}
