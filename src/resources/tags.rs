use super::require;
use crate::entities::Tag;
use crate::lifecycle::FakeDataStore;
use crate::model::{CreateTagDto, EditTagDto, TagDto, TagsFilter, TagsOrder};
use chrono::{DateTime, Utc};
use resource_framework::resource::contains_ignore_case;
use resource_framework::{
    ApiError, EntityMapping, Expand, InMemoryResource, InMemoryStore, Resource,
};
use uuid::Uuid;

pub struct Tags;

impl Resource for Tags {
    const NAME: &'static str = "Tag";
    const PATH: &'static str = "tags";

    type Dto = TagDto;
    type Create = CreateTagDto;
    type Edit = EditTagDto;
    type Filter = TagsFilter;
    type Order = TagsOrder;

    fn edit_target(edit: &EditTagDto) -> Uuid {
        edit.tag_id
    }

    fn validate_create(input: &CreateTagDto) -> Result<(), ApiError> {
        require(Self::PATH, "name", &input.name)
    }

    fn matches_text(_filter: &TagsFilter, dto: &TagDto, text: &str) -> bool {
        contains_ignore_case(&dto.name, text)
            || dto
                .description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, text))
    }
}

impl EntityMapping for Tags {
    type Entity = Tag;

    fn to_dto(entity: &Tag, _expand: Expand) -> TagDto {
        TagDto {
            tag_id: entity.tag_id,
            name: entity.name.clone(),
            description: entity.description.clone(),
            user_defined: entity.user_defined,
            tag_html: entity.tag_html.clone(),
        }
    }

    fn to_entity(input: CreateTagDto) -> Tag {
        Tag {
            tag_id: Uuid::nil(),
            name: input.name,
            description: input.description,
            user_defined: input.user_defined,
            tag_html: input.tag_html,
        }
    }

    fn apply_to(edit: &EditTagDto, entity: &mut Tag) {
        edit.name.apply_cloned(&mut entity.name);
        edit.description.apply_cloned(&mut entity.description);
        edit.tag_html.apply_cloned(&mut entity.tag_html);
    }
}

impl InMemoryResource for Tags {
    type Context = FakeDataStore;

    fn store(ctx: &FakeDataStore) -> &InMemoryStore<Tag> {
        &ctx.tags
    }

    fn entity_id(entity: &Tag) -> Uuid {
        entity.tag_id
    }

    fn assign_identity(entity: &mut Tag, id: Uuid, _now: DateTime<Utc>) {
        entity.tag_id = id;
    }
}
