use super::game_server::GameServerDto;
use super::game_type::GameType;
use super::player::PlayerDto;
use super::user_profile::UserProfileDto;
use chrono::{DateTime, Utc};
use resource_framework::patch::{self, Patch};
use resource_framework::{ResourceFilter, SortOrder};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// A player report raised in game or on the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub report_id: Uuid,
    pub player_id: Uuid,
    pub user_profile_id: Option<Uuid>,
    pub game_server_id: Uuid,
    pub game_type: GameType,
    pub comments: String,
    pub timestamp: DateTime<Utc>,
    pub closed: bool,
    pub admin_user_profile_id: Option<Uuid>,
    pub admin_closing_comments: Option<String>,
    pub closed_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub player: Option<PlayerDto>,
    #[serde(default)]
    pub user_profile: Option<UserProfileDto>,
    #[serde(default)]
    pub admin_user_profile: Option<UserProfileDto>,
    #[serde(default)]
    pub game_server: Option<GameServerDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportDto {
    pub player_id: Uuid,
    pub user_profile_id: Option<Uuid>,
    pub game_server_id: Uuid,
    pub game_type: GameType,
    pub comments: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditReportDto {
    pub report_id: Uuid,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub closed: Patch<bool>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub admin_user_profile_id: Patch<Option<Uuid>>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub admin_closing_comments: Patch<Option<String>>,
}

impl EditReportDto {
    /// Closes the report on behalf of `admin`.
    pub fn close(report_id: Uuid, admin: Uuid, comments: impl Into<String>) -> Self {
        Self {
            report_id,
            closed: Patch::Set(true),
            admin_user_profile_id: Patch::Set(Some(admin)),
            admin_closing_comments: Patch::Set(Some(comments.into())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFilterKind {
    OnlyUnclosed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportsFilter {
    pub game_type: Option<GameType>,
    pub game_server_id: Option<Uuid>,
    pub filter: Option<ReportFilterKind>,
}

impl ResourceFilter<ReportDto> for ReportsFilter {
    fn in_scope(&self, dto: &ReportDto) -> bool {
        self.game_type.map_or(true, |g| dto.game_type == g)
            && self.game_server_id.map_or(true, |id| dto.game_server_id == id)
    }

    fn matches(&self, dto: &ReportDto) -> bool {
        match self.filter {
            None => true,
            Some(ReportFilterKind::OnlyUnclosed) => !dto.closed,
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(game_type) = self.game_type {
            pairs.push(("gameType", game_type.to_string()));
        }
        if let Some(id) = self.game_server_id {
            pairs.push(("gameServerId", id.to_string()));
        }
        if let Some(ReportFilterKind::OnlyUnclosed) = self.filter {
            pairs.push(("filter", "OnlyUnclosed".to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportsOrder {
    TimestampAsc,
    TimestampDesc,
}

impl SortOrder<ReportDto> for ReportsOrder {
    fn compare(&self, a: &ReportDto, b: &ReportDto) -> Ordering {
        match self {
            Self::TimestampAsc => a.timestamp.cmp(&b.timestamp),
            Self::TimestampDesc => b.timestamp.cmp(&a.timestamp),
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::TimestampAsc => "TimestampAsc",
            Self::TimestampDesc => "TimestampDesc",
        }
    }
}
