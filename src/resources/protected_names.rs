use super::{require, Players, UserProfiles};
use crate::entities::ProtectedName;
use crate::lifecycle::FakeDataStore;
use crate::model::{
    CreateProtectedNameDto, EditProtectedNameDto, ProtectedNameDto, ProtectedNamesFilter,
    ProtectedNamesOrder,
};
use chrono::{DateTime, Utc};
use resource_framework::resource::contains_ignore_case;
use resource_framework::{
    ApiError, EntityMapping, Expand, InMemoryResource, InMemoryStore, Resource,
};
use uuid::Uuid;

pub struct ProtectedNames;

impl Resource for ProtectedNames {
    const NAME: &'static str = "ProtectedName";
    const PATH: &'static str = "protected-names";
    const EMBEDS: &'static [&'static str] = &[Players::PATH, UserProfiles::PATH];

    type Dto = ProtectedNameDto;
    type Create = CreateProtectedNameDto;
    type Edit = EditProtectedNameDto;
    type Filter = ProtectedNamesFilter;
    type Order = ProtectedNamesOrder;

    fn edit_target(edit: &EditProtectedNameDto) -> Uuid {
        edit.protected_name_id
    }

    fn validate_create(input: &CreateProtectedNameDto) -> Result<(), ApiError> {
        require(Self::PATH, "name", &input.name)
    }

    fn matches_text(_filter: &ProtectedNamesFilter, dto: &ProtectedNameDto, text: &str) -> bool {
        contains_ignore_case(&dto.name, text)
    }
}

impl EntityMapping for ProtectedNames {
    type Entity = ProtectedName;

    fn to_dto(entity: &ProtectedName, expand: Expand) -> ProtectedNameDto {
        ProtectedNameDto {
            protected_name_id: entity.protected_name_id,
            player_id: entity.player_id,
            name: entity.name.clone(),
            created: entity.created,
            created_by_id: entity.created_by_id,
            player: expand.related_one(entity.player.as_ref(), Players::to_dto),
            created_by: expand.related_one(entity.created_by.as_ref(), UserProfiles::to_dto),
        }
    }

    fn to_entity(input: CreateProtectedNameDto) -> ProtectedName {
        ProtectedName {
            protected_name_id: Uuid::nil(),
            player_id: input.player_id,
            name: input.name,
            created: DateTime::<Utc>::default(),
            created_by_id: input.created_by_id,
            player: None,
            created_by: None,
        }
    }

    fn apply_to(edit: &EditProtectedNameDto, entity: &mut ProtectedName) {
        edit.name.apply_cloned(&mut entity.name);
    }
}

impl InMemoryResource for ProtectedNames {
    type Context = FakeDataStore;

    fn store(ctx: &FakeDataStore) -> &InMemoryStore<ProtectedName> {
        &ctx.protected_names
    }

    fn entity_id(entity: &ProtectedName) -> Uuid {
        entity.protected_name_id
    }

    fn assign_identity(entity: &mut ProtectedName, id: Uuid, now: DateTime<Utc>) {
        entity.protected_name_id = id;
        entity.created = now;
    }

    fn load_related(entity: &mut ProtectedName, ctx: &FakeDataStore) {
        entity.player = ctx.players.get(&entity.player_id);
        entity.created_by = ctx.user_profiles.get(&entity.created_by_id);
    }
}
