use super::{require, Players, UserProfiles};
use crate::entities::AdminAction;
use crate::lifecycle::FakeDataStore;
use crate::model::{
    AdminActionDto, AdminActionsFilter, AdminActionsOrder, CreateAdminActionDto,
    EditAdminActionDto,
};
use chrono::{DateTime, Utc};
use resource_framework::resource::contains_ignore_case;
use resource_framework::{
    ApiError, EntityMapping, Expand, InMemoryResource, InMemoryStore, Resource,
};
use uuid::Uuid;

pub struct AdminActions;

impl Resource for AdminActions {
    const NAME: &'static str = "AdminAction";
    const PATH: &'static str = "admin-actions";
    const EMBEDS: &'static [&'static str] = &[Players::PATH, UserProfiles::PATH];

    type Dto = AdminActionDto;
    type Create = CreateAdminActionDto;
    type Edit = EditAdminActionDto;
    type Filter = AdminActionsFilter;
    type Order = AdminActionsOrder;

    fn edit_target(edit: &EditAdminActionDto) -> Uuid {
        edit.admin_action_id
    }

    fn validate_create(input: &CreateAdminActionDto) -> Result<(), ApiError> {
        require(Self::PATH, "text", &input.text)
    }

    fn matches_text(_filter: &AdminActionsFilter, dto: &AdminActionDto, text: &str) -> bool {
        contains_ignore_case(&dto.text, text)
    }
}

impl EntityMapping for AdminActions {
    type Entity = AdminAction;

    fn to_dto(entity: &AdminAction, expand: Expand) -> AdminActionDto {
        AdminActionDto {
            admin_action_id: entity.admin_action_id,
            player_id: entity.player_id,
            user_profile_id: entity.user_profile_id,
            game_type: entity.game_type,
            action_type: entity.action_type,
            text: entity.text.clone(),
            created: entity.created,
            expires: entity.expires,
            forum_topic_id: entity.forum_topic_id,
            player: expand.related_one(entity.player.as_ref(), Players::to_dto),
            user_profile: expand.related_one(entity.user_profile.as_ref(), UserProfiles::to_dto),
        }
    }

    fn to_entity(input: CreateAdminActionDto) -> AdminAction {
        AdminAction {
            admin_action_id: Uuid::nil(),
            player_id: input.player_id,
            user_profile_id: input.user_profile_id,
            game_type: input.game_type,
            action_type: input.action_type,
            text: input.text,
            created: DateTime::<Utc>::default(),
            expires: input.expires,
            forum_topic_id: input.forum_topic_id,
            player: None,
            user_profile: None,
        }
    }

    fn apply_to(edit: &EditAdminActionDto, entity: &mut AdminAction) {
        edit.text.apply_cloned(&mut entity.text);
        edit.expires.apply_cloned(&mut entity.expires);
        edit.user_profile_id.apply_cloned(&mut entity.user_profile_id);
        edit.forum_topic_id.apply_cloned(&mut entity.forum_topic_id);
    }
}

impl InMemoryResource for AdminActions {
    type Context = FakeDataStore;

    fn store(ctx: &FakeDataStore) -> &InMemoryStore<AdminAction> {
        &ctx.admin_actions
    }

    fn entity_id(entity: &AdminAction) -> Uuid {
        entity.admin_action_id
    }

    fn assign_identity(entity: &mut AdminAction, id: Uuid, now: DateTime<Utc>) {
        entity.admin_action_id = id;
        entity.created = now;
    }

    fn load_related(entity: &mut AdminAction, ctx: &FakeDataStore) {
        entity.player = ctx.players.get(&entity.player_id);
        entity.user_profile = entity
            .user_profile_id
            .and_then(|id| ctx.user_profiles.get(&id));
    }
}
