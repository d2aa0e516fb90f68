use super::game_server::GameServerDto;
use super::game_type::{join_game_types, GameType};
use chrono::{DateTime, Utc};
use resource_framework::patch::{self, Patch};
use resource_framework::ResourceFilter;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ban file watched on a game server. Listings have no sort key and come back in the order
/// monitors were created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanFileMonitorDto {
    pub ban_file_monitor_id: Uuid,
    pub game_server_id: Uuid,
    pub game_type: GameType,
    pub file_path: String,
    pub remote_file_size: Option<i64>,
    pub last_sync: Option<DateTime<Utc>>,
    #[serde(default)]
    pub game_server: Option<GameServerDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBanFileMonitorDto {
    pub game_server_id: Uuid,
    pub game_type: GameType,
    pub file_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditBanFileMonitorDto {
    pub ban_file_monitor_id: Uuid,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub file_path: Patch<String>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub remote_file_size: Patch<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub last_sync: Patch<Option<DateTime<Utc>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BanFileMonitorsFilter {
    pub game_types: Vec<GameType>,
    pub game_server_id: Option<Uuid>,
}

impl ResourceFilter<BanFileMonitorDto> for BanFileMonitorsFilter {
    fn in_scope(&self, dto: &BanFileMonitorDto) -> bool {
        (self.game_types.is_empty() || self.game_types.contains(&dto.game_type))
            && self.game_server_id.map_or(true, |id| dto.game_server_id == id)
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.game_types.is_empty() {
            pairs.push(("gameTypes", join_game_types(&self.game_types)));
        }
        if let Some(id) = self.game_server_id {
            pairs.push(("gameServerId", id.to_string()));
        }
        pairs
    }
}
