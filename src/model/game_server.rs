use super::ban_file_monitor::BanFileMonitorDto;
use super::game_type::{join_game_types, GameType};
use chrono::{DateTime, Utc};
use resource_framework::Patch;
use resource_framework::{ResourceFilter, SortOrder};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameServerDto {
    pub game_server_id: Uuid,
    pub title: String,
    pub game_type: GameType,
    pub hostname: String,
    pub query_port: u16,
    pub live_tracking_enabled: bool,
    pub banner_server_list_enabled: bool,
    pub banner_server_list_position: i32,
    pub portal_server_list_enabled: bool,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub ban_file_monitors: Vec<BanFileMonitorDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameServerDto {
    pub title: String,
    pub game_type: GameType,
    pub hostname: String,
    pub query_port: u16,
    #[serde(default)]
    pub live_tracking_enabled: bool,
    #[serde(default)]
    pub banner_server_list_enabled: bool,
    #[serde(default)]
    pub banner_server_list_position: i32,
    #[serde(default)]
    pub portal_server_list_enabled: bool,
}

impl CreateGameServerDto {
    pub fn new(
        title: impl Into<String>,
        game_type: GameType,
        hostname: impl Into<String>,
        query_port: u16,
    ) -> Self {
        Self {
            title: title.into(),
            game_type,
            hostname: hostname.into(),
            query_port,
            live_tracking_enabled: false,
            banner_server_list_enabled: false,
            banner_server_list_position: 0,
            portal_server_list_enabled: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditGameServerDto {
    pub game_server_id: Uuid,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub title: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub hostname: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub query_port: Patch<u16>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub live_tracking_enabled: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub banner_server_list_enabled: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub banner_server_list_position: Patch<i32>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub portal_server_list_enabled: Patch<bool>,
}

impl EditGameServerDto {
    pub fn new(game_server_id: Uuid) -> Self {
        Self {
            game_server_id,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameServerFilterKind {
    LiveTrackingEnabled,
    BannerServerListEnabled,
    PortalServerListEnabled,
}

impl GameServerFilterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LiveTrackingEnabled => "LiveTrackingEnabled",
            Self::BannerServerListEnabled => "BannerServerListEnabled",
            Self::PortalServerListEnabled => "PortalServerListEnabled",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameServersFilter {
    pub game_types: Vec<GameType>,
    pub game_server_ids: Vec<Uuid>,
    pub filter: Option<GameServerFilterKind>,
}

impl GameServersFilter {
    pub fn game_types(game_types: impl IntoIterator<Item = GameType>) -> Self {
        Self {
            game_types: game_types.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl ResourceFilter<GameServerDto> for GameServersFilter {
    fn in_scope(&self, dto: &GameServerDto) -> bool {
        (self.game_types.is_empty() || self.game_types.contains(&dto.game_type))
            && (self.game_server_ids.is_empty()
                || self.game_server_ids.contains(&dto.game_server_id))
    }

    fn matches(&self, dto: &GameServerDto) -> bool {
        match self.filter {
            None => true,
            Some(GameServerFilterKind::LiveTrackingEnabled) => dto.live_tracking_enabled,
            Some(GameServerFilterKind::BannerServerListEnabled) => dto.banner_server_list_enabled,
            Some(GameServerFilterKind::PortalServerListEnabled) => dto.portal_server_list_enabled,
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.game_types.is_empty() {
            pairs.push(("gameTypes", join_game_types(&self.game_types)));
        }
        if !self.game_server_ids.is_empty() {
            let ids: Vec<String> = self.game_server_ids.iter().map(Uuid::to_string).collect();
            pairs.push(("gameServerIds", ids.join(",")));
        }
        if let Some(kind) = self.filter {
            pairs.push(("filter", kind.as_str().to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameServersOrder {
    BannerServerListPosition,
    GameType,
}

impl SortOrder<GameServerDto> for GameServersOrder {
    fn compare(&self, a: &GameServerDto, b: &GameServerDto) -> Ordering {
        match self {
            Self::BannerServerListPosition => a
                .banner_server_list_position
                .cmp(&b.banner_server_list_position),
            Self::GameType => a.game_type.cmp(&b.game_type),
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::BannerServerListPosition => "BannerServerListPosition",
            Self::GameType => "GameType",
        }
    }
}
