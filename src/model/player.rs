//! Player DTOs. Players are served by two API versions that share these types; v1.1 only adds a
//! `last_seen_after` scope on top of the v1 filter.

use super::admin_action::AdminActionDto;
use super::game_type::{join_game_types, GameType};
use super::protected_name::ProtectedNameDto;
use super::report::ReportDto;
use chrono::{DateTime, Utc};
use resource_framework::patch::{self, Patch};
use resource_framework::resource::contains_ignore_case;
use resource_framework::{ResourceFilter, SortOrder};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub player_id: Uuid,
    pub game_type: GameType,
    pub username: String,
    pub guid: String,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub ip_address: Option<String>,
    #[serde(default)]
    pub admin_actions: Vec<AdminActionDto>,
    #[serde(default)]
    pub reports: Vec<ReportDto>,
    #[serde(default)]
    pub protected_names: Vec<ProtectedNameDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerDto {
    pub game_type: GameType,
    pub username: String,
    pub guid: String,
    pub ip_address: Option<String>,
}

impl CreatePlayerDto {
    pub fn new(game_type: GameType, username: impl Into<String>, guid: impl Into<String>) -> Self {
        Self {
            game_type,
            username: username.into(),
            guid: guid.into(),
            ip_address: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPlayerDto {
    pub player_id: Uuid,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub username: Patch<String>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub ip_address: Patch<Option<String>>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub last_seen: Patch<DateTime<Utc>>,
}

impl EditPlayerDto {
    pub fn new(player_id: Uuid) -> Self {
        Self {
            player_id,
            ..Default::default()
        }
    }
}

/// Which fields `filter_string` is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayersFilterKind {
    UsernameAndGuid,
    IpAddress,
}

impl PlayersFilterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UsernameAndGuid => "UsernameAndGuid",
            Self::IpAddress => "IpAddress",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayersFilter {
    pub game_types: Vec<GameType>,
    pub filter: Option<PlayersFilterKind>,
}

impl PlayersFilter {
    pub fn game_types(game_types: impl IntoIterator<Item = GameType>) -> Self {
        Self {
            game_types: game_types.into_iter().collect(),
            filter: None,
        }
    }

    pub fn matches_text(&self, dto: &PlayerDto, text: &str) -> bool {
        let by_ip = || {
            dto.ip_address
                .as_deref()
                .is_some_and(|ip| ip.contains(text))
        };
        let by_name = || {
            contains_ignore_case(&dto.username, text) || contains_ignore_case(&dto.guid, text)
        };
        match self.filter {
            Some(PlayersFilterKind::UsernameAndGuid) => by_name(),
            Some(PlayersFilterKind::IpAddress) => by_ip(),
            None => by_name() || by_ip(),
        }
    }
}

impl ResourceFilter<PlayerDto> for PlayersFilter {
    fn in_scope(&self, dto: &PlayerDto) -> bool {
        self.game_types.is_empty() || self.game_types.contains(&dto.game_type)
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.game_types.is_empty() {
            pairs.push(("gameTypes", join_game_types(&self.game_types)));
        }
        if let Some(kind) = self.filter {
            pairs.push(("filter", kind.as_str().to_string()));
        }
        pairs
    }
}

/// v1.1 filter: the v1 filter plus a last-seen cutoff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayersV1_1Filter {
    pub players: PlayersFilter,
    pub last_seen_after: Option<DateTime<Utc>>,
}

impl ResourceFilter<PlayerDto> for PlayersV1_1Filter {
    fn in_scope(&self, dto: &PlayerDto) -> bool {
        self.players.in_scope(dto)
            && self
                .last_seen_after
                .map_or(true, |after| dto.last_seen > after)
    }

    fn matches(&self, dto: &PlayerDto) -> bool {
        self.players.matches(dto)
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.players.query_pairs();
        if let Some(after) = self.last_seen_after {
            pairs.push(("lastSeenAfter", after.to_rfc3339()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayersOrder {
    UsernameAsc,
    UsernameDesc,
    FirstSeenAsc,
    FirstSeenDesc,
    LastSeenAsc,
    LastSeenDesc,
    GameTypeAsc,
    GameTypeDesc,
}

impl SortOrder<PlayerDto> for PlayersOrder {
    fn compare(&self, a: &PlayerDto, b: &PlayerDto) -> Ordering {
        match self {
            Self::UsernameAsc => a.username.cmp(&b.username),
            Self::UsernameDesc => b.username.cmp(&a.username),
            Self::FirstSeenAsc => a.first_seen.cmp(&b.first_seen),
            Self::FirstSeenDesc => b.first_seen.cmp(&a.first_seen),
            Self::LastSeenAsc => a.last_seen.cmp(&b.last_seen),
            Self::LastSeenDesc => b.last_seen.cmp(&a.last_seen),
            Self::GameTypeAsc => a.game_type.cmp(&b.game_type),
            Self::GameTypeDesc => b.game_type.cmp(&a.game_type),
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::UsernameAsc => "UsernameAsc",
            Self::UsernameDesc => "UsernameDesc",
            Self::FirstSeenAsc => "FirstSeenAsc",
            Self::FirstSeenDesc => "FirstSeenDesc",
            Self::LastSeenAsc => "LastSeenAsc",
            Self::LastSeenDesc => "LastSeenDesc",
            Self::GameTypeAsc => "GameTypeAsc",
            Self::GameTypeDesc => "GameTypeDesc",
        }
    }
}
