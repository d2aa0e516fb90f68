use crate::entities::{
    AdminAction, BanFileMonitor, ChatMessage, GameServer, Map, Player, ProtectedName, Report, Tag,
    UserProfile, UserProfileClaim,
};
use resource_framework::InMemoryStore;

/// Shared state behind every in-memory resource: one store per entity type.
///
/// Each resource's `InMemoryResourceApi` holds the same `Arc<FakeDataStore>`, which is how an
/// expanded read of a player finds that player's admin actions, and how v1 and v1.1 players see
/// the same rows.
#[derive(Debug, Default)]
pub struct FakeDataStore {
    pub players: InMemoryStore<Player>,
    pub admin_actions: InMemoryStore<AdminAction>,
    pub game_servers: InMemoryStore<GameServer>,
    pub ban_file_monitors: InMemoryStore<BanFileMonitor>,
    pub reports: InMemoryStore<Report>,
    pub tags: InMemoryStore<Tag>,
    pub maps: InMemoryStore<Map>,
    pub protected_names: InMemoryStore<ProtectedName>,
    pub user_profiles: InMemoryStore<UserProfile>,
    pub user_profile_claims: InMemoryStore<UserProfileClaim>,
    pub chat_messages: InMemoryStore<ChatMessage>,
}

impl FakeDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties every store.
    pub fn clear(&self) {
        self.players.clear();
        self.admin_actions.clear();
        self.game_servers.clear();
        self.ban_file_monitors.clear();
        self.reports.clear();
        self.tags.clear();
        self.maps.clear();
        self.protected_names.clear();
        self.user_profiles.clear();
        self.user_profile_claims.clear();
        self.chat_messages.clear();
    }

    /// Total number of stored rows across all entity types.
    pub fn len(&self) -> usize {
        self.players.len()
            + self.admin_actions.len()
            + self.game_servers.len()
            + self.ban_file_monitors.len()
            + self.reports.len()
            + self.tags.len()
            + self.maps.len()
            + self.protected_names.len()
            + self.user_profiles.len()
            + self.user_profile_claims.len()
            + self.chat_messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
