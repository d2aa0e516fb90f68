use super::require;
use crate::entities::{Map, MapFile};
use crate::lifecycle::FakeDataStore;
use crate::model::{CreateMapDto, EditMapDto, MapDto, MapFileDto, MapsFilter, MapsOrder};
use chrono::{DateTime, Utc};
use resource_framework::resource::contains_ignore_case;
use resource_framework::{
    ApiError, EntityMapping, Expand, InMemoryCollection, InMemoryResource, InMemoryStore,
    OwnedCollection, Patch, Resource,
};
use uuid::Uuid;

pub struct Maps;

impl From<&MapFileDto> for MapFile {
    fn from(dto: &MapFileDto) -> Self {
        Self {
            file_name: dto.file_name.clone(),
            url: dto.url.clone(),
        }
    }
}

impl From<&MapFile> for MapFileDto {
    fn from(file: &MapFile) -> Self {
        MapFileDto::new(file.file_name.clone(), file.url.clone())
    }
}

impl Resource for Maps {
    const NAME: &'static str = "Map";
    const PATH: &'static str = "maps";

    type Dto = MapDto;
    type Create = CreateMapDto;
    type Edit = EditMapDto;
    type Filter = MapsFilter;
    type Order = MapsOrder;

    fn edit_target(edit: &EditMapDto) -> Uuid {
        edit.map_id
    }

    fn validate_create(input: &CreateMapDto) -> Result<(), ApiError> {
        require(Self::PATH, "mapName", &input.map_name)?;
        validate_files(&input.map_files)
    }

    fn matches_text(_filter: &MapsFilter, dto: &MapDto, text: &str) -> bool {
        contains_ignore_case(&dto.map_name, text)
    }
}

fn validate_files(files: &[MapFileDto]) -> Result<(), ApiError> {
    files
        .iter()
        .try_for_each(|file| require(Maps::PATH, "mapFiles.fileName", &file.file_name))
}

/// `PUT /v1/maps/{id}/map-files` replaces the file list in one call.
impl OwnedCollection for Maps {
    const SUB_PATH: &'static str = "map-files";

    type Item = MapFileDto;

    fn validate_items(items: &[MapFileDto]) -> Result<(), ApiError> {
        validate_files(items)
    }
}

impl EntityMapping for Maps {
    type Entity = Map;

    /// Map files are part of the map itself and are mapped at every depth.
    fn to_dto(entity: &Map, _expand: Expand) -> MapDto {
        MapDto {
            map_id: entity.map_id,
            game_type: entity.game_type,
            map_name: entity.map_name.clone(),
            map_files: entity.map_files.iter().map(MapFileDto::from).collect(),
            map_image_uri: entity.map_image_uri.clone(),
            total_likes: entity.total_likes,
            total_dislikes: entity.total_dislikes,
        }
    }

    fn to_entity(input: CreateMapDto) -> Map {
        Map {
            map_id: Uuid::nil(),
            game_type: input.game_type,
            map_name: input.map_name,
            map_files: input.map_files.iter().map(MapFile::from).collect(),
            map_image_uri: None,
            total_likes: 0,
            total_dislikes: 0,
        }
    }

    fn apply_to(edit: &EditMapDto, entity: &mut Map) {
        if let Patch::Set(files) = &edit.map_files {
            entity.map_files = files.iter().map(MapFile::from).collect();
        }
        edit.map_image_uri.apply_cloned(&mut entity.map_image_uri);
        edit.total_likes.apply_cloned(&mut entity.total_likes);
        edit.total_dislikes.apply_cloned(&mut entity.total_dislikes);
    }
}

impl InMemoryResource for Maps {
    type Context = FakeDataStore;

    fn store(ctx: &FakeDataStore) -> &InMemoryStore<Map> {
        &ctx.maps
    }

    fn entity_id(entity: &Map) -> Uuid {
        entity.map_id
    }

    fn assign_identity(entity: &mut Map, id: Uuid, _now: DateTime<Utc>) {
        entity.map_id = id;
    }
}

impl InMemoryCollection for Maps {
    fn replace_items(entity: &mut Map, items: Vec<MapFileDto>) {
        entity.map_files = items.iter().map(MapFile::from).collect();
    }
}
