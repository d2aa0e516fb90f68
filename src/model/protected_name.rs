use super::player::PlayerDto;
use super::user_profile::UserProfileDto;
use chrono::{DateTime, Utc};
use resource_framework::{Patch, ResourceFilter, SortOrder};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// A name reserved for a player. Other players joining with it are flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedNameDto {
    pub protected_name_id: Uuid,
    pub player_id: Uuid,
    pub name: String,
    pub created: DateTime<Utc>,
    pub created_by_id: Uuid,
    #[serde(default)]
    pub player: Option<PlayerDto>,
    #[serde(default)]
    pub created_by: Option<UserProfileDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProtectedNameDto {
    pub player_id: Uuid,
    pub name: String,
    pub created_by_id: Uuid,
}

impl CreateProtectedNameDto {
    pub fn new(player_id: Uuid, name: impl Into<String>, created_by_id: Uuid) -> Self {
        Self {
            player_id,
            name: name.into(),
            created_by_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditProtectedNameDto {
    pub protected_name_id: Uuid,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub name: Patch<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedNamesFilter {
    pub player_id: Option<Uuid>,
}

impl ResourceFilter<ProtectedNameDto> for ProtectedNamesFilter {
    fn in_scope(&self, dto: &ProtectedNameDto) -> bool {
        self.player_id.map_or(true, |id| dto.player_id == id)
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.player_id
            .map(|id| vec![("playerId", id.to_string())])
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtectedNamesOrder {
    NameAsc,
    NameDesc,
    CreatedAsc,
    CreatedDesc,
}

impl SortOrder<ProtectedNameDto> for ProtectedNamesOrder {
    fn compare(&self, a: &ProtectedNameDto, b: &ProtectedNameDto) -> Ordering {
        match self {
            Self::NameAsc => a.name.cmp(&b.name),
            Self::NameDesc => b.name.cmp(&a.name),
            Self::CreatedAsc => a.created.cmp(&b.created),
            Self::CreatedDesc => b.created.cmp(&a.created),
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::NameAsc => "NameAsc",
            Self::NameDesc => "NameDesc",
            Self::CreatedAsc => "CreatedAsc",
            Self::CreatedDesc => "CreatedDesc",
        }
    }
}
