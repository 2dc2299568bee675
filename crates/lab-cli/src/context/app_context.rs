use std::sync::Arc;

use anyhow::Context;
use lab_auth::{CredentialDirectory, FileStorage, Route, SessionStore, guard};
use lab_client::ApiClient;
use lab_config::LabConfig;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LabConfig,
    pub session: SessionStore,
    pub api: ApiClient,
}

impl AppContext {
    /// Restore the persisted session and build the HTTP client.
    ///
    /// The credential directory lives only for this process, so accounts
    /// created by `auth signup` are not visible to a later `auth login`.
    pub fn init(config: LabConfig) -> anyhow::Result<Self> {
        let dir = config.storage.resolved_dir().context(
            "no storage directory: set LABNET_STORAGE__DIR or make the home directory resolvable",
        )?;
        tracing::debug!(dir = %dir.display(), key = %config.storage.key, "session storage");

        let session = SessionStore::open(
            CredentialDirectory::default(),
            Arc::new(FileStorage::new(dir)),
            config.storage.key.clone(),
        );
        let api = ApiClient::new(&config.api).context("failed to build HTTP client")?;

        Ok(Self {
            config,
            session,
            api,
        })
    }

    /// Refuse to continue unless `route` is reachable with the current session.
    pub fn enter(&self, route: Route) -> anyhow::Result<()> {
        match guard(route, self.session.is_authenticated()) {
            Route::Login if route != Route::Login => {
                anyhow::bail!("not signed in: run `lbn auth login` first")
            }
            _ => Ok(()),
        }
    }

    /// Result cap: `--limit` if given, otherwise `general.default_limit`.
    #[must_use]
    pub fn limit(&self, flags: &GlobalFlags) -> usize {
        let limit = flags.limit.unwrap_or(self.config.general.default_limit);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}
