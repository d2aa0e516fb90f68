use crate::model::GameType;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub map_id: Uuid,
    pub game_type: GameType,
    pub map_name: String,
    /// Owned value objects, always loaded with the map.
    pub map_files: Vec<MapFile>,
    pub map_image_uri: Option<String>,
    pub total_likes: i32,
    pub total_dislikes: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapFile {
    pub file_name: String,
    pub url: String,
}
