//! The client facade: one handle, one selector per resource, one bound implementation per
//! version.
//!
//! ```rust,ignore
//! let client = RepositoryApiClient::live(&ClientSettings::new("https://portal.example/api"))?;
//! let page = client.players().v1().list(client.page::<Players>(), &cancel).await?;
//! ```

pub mod backend;
pub mod selectors;

pub use backend::{Backend, FakeBackend, LiveBackend, PortalCollection, PortalResource};
pub use selectors::*;

use resource_framework::config::validate_page_size;
use resource_framework::{
    ClientSettings, ConfigError, ListQuery, Query, RequestExecutor, Resource, TokenProvider,
};
use std::sync::Arc;
use tracing::info;

/// Entry point for every resource. Cheap to clone; immutable after construction.
#[derive(Clone)]
pub struct RepositoryApiClient {
    players: PlayersSelector,
    admin_actions: AdminActionsSelector,
    game_servers: GameServersSelector,
    ban_file_monitors: BanFileMonitorsSelector,
    reports: ReportsSelector,
    tags: TagsSelector,
    maps: MapsSelector,
    map_files: MapFilesSelector,
    protected_names: ProtectedNamesSelector,
    user_profiles: UserProfilesSelector,
    chat_messages: ChatMessagesSelector,
    default_page_size: i32,
}

impl RepositoryApiClient {
    /// Live client. The token provider is derived from the settings.
    pub fn live(settings: &ClientSettings) -> Result<Self, ConfigError> {
        Self::with_token_provider(settings, settings.token_provider())
    }

    /// Live client with an externally supplied token provider.
    pub fn with_token_provider(
        settings: &ClientSettings,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, ConfigError> {
        let executor = RequestExecutor::new(settings, tokens)?;
        info!(
            base_url = %executor.base_url(),
            cache = executor.cache().is_some(),
            "Live client ready"
        );
        let backend = LiveBackend::new(Arc::new(executor));
        Self::from_backend(&backend, settings.default_page_size)
    }

    /// Live client configured from `PORTAL_API_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::live(&ClientSettings::from_env()?)
    }

    /// Binds every resource on `backend`. A non-positive page size is rejected here, before
    /// any query can be built from it.
    pub fn from_backend<B: Backend>(
        backend: &B,
        default_page_size: i32,
    ) -> Result<Self, ConfigError> {
        validate_page_size(default_page_size)?;
        Ok(Self::bind_all(backend, default_page_size))
    }

    /// Callers guarantee `default_page_size` is positive.
    pub(crate) fn bind_all<B: Backend>(backend: &B, default_page_size: i32) -> Self {
        Self {
            players: PlayersSelector::bind(backend),
            admin_actions: AdminActionsSelector::bind(backend),
            game_servers: GameServersSelector::bind(backend),
            ban_file_monitors: BanFileMonitorsSelector::bind(backend),
            reports: ReportsSelector::bind(backend),
            tags: TagsSelector::bind(backend),
            maps: MapsSelector::bind(backend),
            map_files: MapFilesSelector::bind(backend),
            protected_names: ProtectedNamesSelector::bind(backend),
            user_profiles: UserProfilesSelector::bind(backend),
            chat_messages: ChatMessagesSelector::bind(backend),
            default_page_size,
        }
    }

    pub fn players(&self) -> &PlayersSelector {
        &self.players
    }

    pub fn admin_actions(&self) -> &AdminActionsSelector {
        &self.admin_actions
    }

    pub fn game_servers(&self) -> &GameServersSelector {
        &self.game_servers
    }

    pub fn ban_file_monitors(&self) -> &BanFileMonitorsSelector {
        &self.ban_file_monitors
    }

    pub fn reports(&self) -> &ReportsSelector {
        &self.reports
    }

    pub fn tags(&self) -> &TagsSelector {
        &self.tags
    }

    pub fn maps(&self) -> &MapsSelector {
        &self.maps
    }

    /// Wholesale replacement of a map's files.
    pub fn map_files(&self) -> &MapFilesSelector {
        &self.map_files
    }

    pub fn protected_names(&self) -> &ProtectedNamesSelector {
        &self.protected_names
    }

    pub fn user_profiles(&self) -> &UserProfilesSelector {
        &self.user_profiles
    }

    pub fn chat_messages(&self) -> &ChatMessagesSelector {
        &self.chat_messages
    }

    pub fn default_page_size(&self) -> i32 {
        self.default_page_size
    }

    /// First page of `R` at the configured page size, unfiltered.
    pub fn page<R: Resource>(&self) -> Query<R> {
        ListQuery::first(self.default_page_size)
    }
}
