use super::fake_store::FakeDataStore;
use crate::clients::{FakeBackend, PortalResource, RepositoryApiClient};
use crate::entities::UserProfileClaim;
use crate::model::{
    AdminActionDto, BanFileMonitorDto, ChatMessageDto, CreateAdminActionDto,
    CreateBanFileMonitorDto, CreateChatMessageDto, CreateGameServerDto, CreateMapDto,
    CreatePlayerDto, CreateProtectedNameDto, CreateReportDto, CreateTagDto,
    CreateUserProfileDto, GameServerDto, MapDto, PlayerDto, ProtectedNameDto, ReportDto, TagDto,
    UserProfileDto,
};
use crate::resources::{
    AdminActions, BanFileMonitors, ChatMessages, GameServers, Maps, Players, ProtectedNames,
    Reports, Tags, UserProfiles,
};
use chrono::Utc;
use resource_framework::config::DEFAULT_PAGE_SIZE;
use resource_framework::{ConfigError, Expand};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// The in-memory facade plus test mutators.
///
/// The `add_*` methods write straight into the stores, skipping the contract's required-field
/// checks, and return the shallow DTO of what was stored. `reset` empties everything; the
/// client handle stays valid across resets.
pub struct FakeRepositoryApi {
    store: Arc<FakeDataStore>,
    client: RepositoryApiClient,
}

impl Default for FakeRepositoryApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeRepositoryApi {
    pub fn new() -> Self {
        let store = Arc::new(FakeDataStore::new());
        let client =
            RepositoryApiClient::bind_all(&FakeBackend::new(store.clone()), DEFAULT_PAGE_SIZE);
        Self { store, client }
    }

    /// Fails like the live client does when the page size is not positive.
    pub fn with_page_size(default_page_size: i32) -> Result<Self, ConfigError> {
        let store = Arc::new(FakeDataStore::new());
        let client =
            RepositoryApiClient::from_backend(&FakeBackend::new(store.clone()), default_page_size)?;
        Ok(Self { store, client })
    }

    pub fn client(&self) -> &RepositoryApiClient {
        &self.client
    }

    pub fn store(&self) -> &FakeDataStore {
        &self.store
    }

    /// Stores an entity as-is, keeping whatever id and timestamps it carries.
    pub fn insert<R: PortalResource>(&self, entity: R::Entity) -> R::Dto {
        let id = R::entity_id(&entity);
        let dto = R::to_dto(&entity, Expand::None);
        R::store(&self.store).insert(id, entity);
        debug!(entity_type = R::NAME, %id, "Seeded");
        dto
    }

    fn seed<R: PortalResource>(&self, input: R::Create) -> R::Dto {
        let mut entity = R::to_entity(input);
        R::assign_identity(&mut entity, Uuid::new_v4(), Utc::now());
        self.insert::<R>(entity)
    }

    pub fn add_player(&self, input: CreatePlayerDto) -> PlayerDto {
        self.seed::<Players>(input)
    }

    pub fn add_admin_action(&self, input: CreateAdminActionDto) -> AdminActionDto {
        self.seed::<AdminActions>(input)
    }

    pub fn add_game_server(&self, input: CreateGameServerDto) -> GameServerDto {
        self.seed::<GameServers>(input)
    }

    pub fn add_ban_file_monitor(&self, input: CreateBanFileMonitorDto) -> BanFileMonitorDto {
        self.seed::<BanFileMonitors>(input)
    }

    pub fn add_report(&self, input: CreateReportDto) -> ReportDto {
        self.seed::<Reports>(input)
    }

    pub fn add_tag(&self, input: CreateTagDto) -> TagDto {
        self.seed::<Tags>(input)
    }

    pub fn add_map(&self, input: CreateMapDto) -> MapDto {
        self.seed::<Maps>(input)
    }

    pub fn add_protected_name(&self, input: CreateProtectedNameDto) -> ProtectedNameDto {
        self.seed::<ProtectedNames>(input)
    }

    pub fn add_user_profile(&self, input: CreateUserProfileDto) -> UserProfileDto {
        self.seed::<UserProfiles>(input)
    }

    pub fn add_user_profile_claim(&self, claim: UserProfileClaim) {
        self.store
            .user_profile_claims
            .insert(claim.user_profile_claim_id, claim);
    }

    pub fn add_chat_message(&self, input: CreateChatMessageDto) -> ChatMessageDto {
        self.seed::<ChatMessages>(input)
    }

    /// Empties every store. Calling it twice is the same as calling it once.
    pub fn reset(&self) {
        let removed = self.store.len();
        self.store.clear();
        info!(removed, "Fake store reset");
    }
}
