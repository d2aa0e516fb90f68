use super::game_type::GameType;
use resource_framework::patch::{self, Patch};
use resource_framework::{ResourceFilter, SortOrder};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// A downloadable file belonging to a map. Owned by its map; has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFileDto {
    pub file_name: String,
    pub url: String,
}

impl MapFileDto {
    pub fn new(file_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDto {
    pub map_id: Uuid,
    pub game_type: GameType,
    pub map_name: String,
    #[serde(default)]
    pub map_files: Vec<MapFileDto>,
    pub map_image_uri: Option<String>,
    pub total_likes: i32,
    pub total_dislikes: i32,
}

impl MapDto {
    /// Likes minus dislikes.
    pub fn popularity(&self) -> i64 {
        i64::from(self.total_likes) - i64::from(self.total_dislikes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMapDto {
    pub game_type: GameType,
    pub map_name: String,
    #[serde(default)]
    pub map_files: Vec<MapFileDto>,
}

impl CreateMapDto {
    pub fn new(game_type: GameType, map_name: impl Into<String>) -> Self {
        Self {
            game_type,
            map_name: map_name.into(),
            map_files: Vec::new(),
        }
    }

    pub fn with_file(mut self, file: MapFileDto) -> Self {
        self.map_files.push(file);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditMapDto {
    pub map_id: Uuid,
    /// Replaces the whole file list.
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub map_files: Patch<Vec<MapFileDto>>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub map_image_uri: Patch<Option<String>>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub total_likes: Patch<i32>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub total_dislikes: Patch<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapFilterKind {
    EmptyMapImage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapsFilter {
    pub game_type: Option<GameType>,
    pub map_names: Vec<String>,
    pub filter: Option<MapFilterKind>,
}

impl ResourceFilter<MapDto> for MapsFilter {
    fn in_scope(&self, dto: &MapDto) -> bool {
        self.game_type.map_or(true, |g| dto.game_type == g)
            && (self.map_names.is_empty() || self.map_names.contains(&dto.map_name))
    }

    fn matches(&self, dto: &MapDto) -> bool {
        match self.filter {
            None => true,
            Some(MapFilterKind::EmptyMapImage) => {
                dto.map_image_uri.as_deref().map_or(true, str::is_empty)
            }
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(game_type) = self.game_type {
            pairs.push(("gameType", game_type.to_string()));
        }
        if !self.map_names.is_empty() {
            pairs.push(("mapNames", self.map_names.join(",")));
        }
        if let Some(MapFilterKind::EmptyMapImage) = self.filter {
            pairs.push(("filter", "EmptyMapImage".to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapsOrder {
    MapNameAsc,
    MapNameDesc,
    GameTypeAsc,
    GameTypeDesc,
    PopularityAsc,
    PopularityDesc,
}

impl SortOrder<MapDto> for MapsOrder {
    fn compare(&self, a: &MapDto, b: &MapDto) -> Ordering {
        match self {
            Self::MapNameAsc => a.map_name.cmp(&b.map_name),
            Self::MapNameDesc => b.map_name.cmp(&a.map_name),
            Self::GameTypeAsc => a.game_type.cmp(&b.game_type),
            Self::GameTypeDesc => b.game_type.cmp(&a.game_type),
            Self::PopularityAsc => a.popularity().cmp(&b.popularity()),
            Self::PopularityDesc => b.popularity().cmp(&a.popularity()),
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::MapNameAsc => "MapNameAsc",
            Self::MapNameDesc => "MapNameDesc",
            Self::GameTypeAsc => "GameTypeAsc",
            Self::GameTypeDesc => "GameTypeDesc",
            Self::PopularityAsc => "PopularityAsc",
            Self::PopularityDesc => "PopularityDesc",
        }
    }
}
