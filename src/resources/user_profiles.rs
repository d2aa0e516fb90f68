use super::{require, AdminActions};
use crate::entities::{UserProfile, UserProfileClaim};
use crate::lifecycle::FakeDataStore;
use crate::model::{
    CreateUserProfileDto, EditUserProfileDto, UserProfileClaimDto, UserProfileDto,
    UserProfilesOrder,
};
use chrono::{DateTime, Utc};
use resource_framework::resource::contains_ignore_case;
use resource_framework::{
    ApiError, EntityMapping, Expand, InMemoryResource, InMemoryStore, Resource,
};
use uuid::Uuid;

pub struct UserProfiles;

fn claim_to_dto(claim: &UserProfileClaim, _expand: Expand) -> UserProfileClaimDto {
    UserProfileClaimDto {
        user_profile_claim_id: claim.user_profile_claim_id,
        user_profile_id: claim.user_profile_id,
        system_generated: claim.system_generated,
        claim_type: claim.claim_type.clone(),
        claim_value: claim.claim_value.clone(),
    }
}

impl Resource for UserProfiles {
    const NAME: &'static str = "UserProfile";
    const PATH: &'static str = "user-profiles";
    const EMBEDS: &'static [&'static str] = &[AdminActions::PATH];

    type Dto = UserProfileDto;
    type Create = CreateUserProfileDto;
    type Edit = EditUserProfileDto;
    type Filter = ();
    type Order = UserProfilesOrder;

    fn edit_target(edit: &EditUserProfileDto) -> Uuid {
        edit.user_profile_id
    }

    fn validate_create(input: &CreateUserProfileDto) -> Result<(), ApiError> {
        require(Self::PATH, "displayName", &input.display_name)
    }

    fn matches_text(_filter: &(), dto: &UserProfileDto, text: &str) -> bool {
        contains_ignore_case(&dto.display_name, text)
            || dto
                .email
                .as_deref()
                .is_some_and(|email| contains_ignore_case(email, text))
    }
}

impl EntityMapping for UserProfiles {
    type Entity = UserProfile;

    fn to_dto(entity: &UserProfile, expand: Expand) -> UserProfileDto {
        UserProfileDto {
            user_profile_id: entity.user_profile_id,
            identity_oid: entity.identity_oid.clone(),
            xtreme_idiots_forum_id: entity.xtreme_idiots_forum_id.clone(),
            display_name: entity.display_name.clone(),
            email: entity.email.clone(),
            admin_actions: expand.related_many(&entity.admin_actions, AdminActions::to_dto),
            claims: expand.related_many(&entity.claims, claim_to_dto),
        }
    }

    fn to_entity(input: CreateUserProfileDto) -> UserProfile {
        UserProfile {
            user_profile_id: Uuid::nil(),
            identity_oid: input.identity_oid,
            xtreme_idiots_forum_id: input.xtreme_idiots_forum_id,
            display_name: input.display_name,
            email: input.email,
            admin_actions: Vec::new(),
            claims: Vec::new(),
        }
    }

    fn apply_to(edit: &EditUserProfileDto, entity: &mut UserProfile) {
        edit.display_name.apply_cloned(&mut entity.display_name);
        edit.email.apply_cloned(&mut entity.email);
        edit.identity_oid.apply_cloned(&mut entity.identity_oid);
        edit.xtreme_idiots_forum_id.apply_cloned(&mut entity.xtreme_idiots_forum_id);
    }
}

impl InMemoryResource for UserProfiles {
    type Context = FakeDataStore;

    fn store(ctx: &FakeDataStore) -> &InMemoryStore<UserProfile> {
        &ctx.user_profiles
    }

    fn entity_id(entity: &UserProfile) -> Uuid {
        entity.user_profile_id
    }

    fn assign_identity(entity: &mut UserProfile, id: Uuid, _now: DateTime<Utc>) {
        entity.user_profile_id = id;
    }

    fn load_related(entity: &mut UserProfile, ctx: &FakeDataStore) {
        let id = entity.user_profile_id;
        entity.admin_actions = ctx
            .admin_actions
            .find(|a| a.user_profile_id == Some(id));
        entity.claims = ctx.user_profile_claims.find(|c| c.user_profile_id == id);
    }
}
