//! Players, served by v1 and v1.1. Both markers share DTOs, entity and storage; v1.1 only swaps
//! in a filter with a last-seen cutoff.

use super::{require, AdminActions, ProtectedNames, Reports};
use crate::entities::Player;
use crate::lifecycle::FakeDataStore;
use crate::model::{
    CreatePlayerDto, EditPlayerDto, PlayerDto, PlayersFilter, PlayersOrder, PlayersV1_1Filter,
};
use chrono::{DateTime, Utc};
use resource_framework::{
    ApiError, EntityMapping, Expand, InMemoryResource, InMemoryStore, Resource,
};
use uuid::Uuid;

pub struct Players;

impl Resource for Players {
    const NAME: &'static str = "Player";
    const PATH: &'static str = "players";
    const EMBEDS: &'static [&'static str] = &[
        AdminActions::PATH,
        Reports::PATH,
        ProtectedNames::PATH,
    ];

    type Dto = PlayerDto;
    type Create = CreatePlayerDto;
    type Edit = EditPlayerDto;
    type Filter = PlayersFilter;
    type Order = PlayersOrder;

    fn edit_target(edit: &EditPlayerDto) -> Uuid {
        edit.player_id
    }

    fn validate_create(input: &CreatePlayerDto) -> Result<(), ApiError> {
        require(Self::PATH, "username", &input.username)?;
        require(Self::PATH, "guid", &input.guid)
    }

    fn matches_text(filter: &PlayersFilter, dto: &PlayerDto, text: &str) -> bool {
        filter.matches_text(dto, text)
    }
}

impl EntityMapping for Players {
    type Entity = Player;

    fn to_dto(entity: &Player, expand: Expand) -> PlayerDto {
        PlayerDto {
            player_id: entity.player_id,
            game_type: entity.game_type,
            username: entity.username.clone(),
            guid: entity.guid.clone(),
            first_seen: entity.first_seen,
            last_seen: entity.last_seen,
            ip_address: entity.ip_address.clone(),
            admin_actions: expand.related_many(&entity.admin_actions, AdminActions::to_dto),
            reports: expand.related_many(&entity.reports, Reports::to_dto),
            protected_names: expand.related_many(&entity.protected_names, ProtectedNames::to_dto),
        }
    }

    fn to_entity(input: CreatePlayerDto) -> Player {
        Player {
            player_id: Uuid::nil(),
            game_type: input.game_type,
            username: input.username,
            guid: input.guid,
            first_seen: DateTime::<Utc>::default(),
            last_seen: DateTime::<Utc>::default(),
            ip_address: input.ip_address,
            admin_actions: Vec::new(),
            reports: Vec::new(),
            protected_names: Vec::new(),
        }
    }

    fn apply_to(edit: &EditPlayerDto, entity: &mut Player) {
        edit.username.apply_cloned(&mut entity.username);
        edit.ip_address.apply_cloned(&mut entity.ip_address);
        edit.last_seen.apply_cloned(&mut entity.last_seen);
    }
}

impl InMemoryResource for Players {
    type Context = FakeDataStore;

    fn store(ctx: &FakeDataStore) -> &InMemoryStore<Player> {
        &ctx.players
    }

    fn entity_id(entity: &Player) -> Uuid {
        entity.player_id
    }

    fn assign_identity(entity: &mut Player, id: Uuid, now: DateTime<Utc>) {
        entity.player_id = id;
        entity.first_seen = now;
        entity.last_seen = now;
    }

    fn load_related(entity: &mut Player, ctx: &FakeDataStore) {
        let id = entity.player_id;
        entity.admin_actions = ctx.admin_actions.find(|a| a.player_id == id);
        entity.reports = ctx.reports.find(|r| r.player_id == id);
        entity.protected_names = ctx.protected_names.find(|p| p.player_id == id);
    }
}

/// Players through the v1.1 surface.
pub struct PlayersV1_1;

impl Resource for PlayersV1_1 {
    const NAME: &'static str = Players::NAME;
    const PATH: &'static str = Players::PATH;
    const EMBEDS: &'static [&'static str] = Players::EMBEDS;

    type Dto = PlayerDto;
    type Create = CreatePlayerDto;
    type Edit = EditPlayerDto;
    type Filter = PlayersV1_1Filter;
    type Order = PlayersOrder;

    fn edit_target(edit: &EditPlayerDto) -> Uuid {
        Players::edit_target(edit)
    }

    fn validate_create(input: &CreatePlayerDto) -> Result<(), ApiError> {
        Players::validate_create(input)
    }

    fn matches_text(filter: &PlayersV1_1Filter, dto: &PlayerDto, text: &str) -> bool {
        filter.players.matches_text(dto, text)
    }
}

impl EntityMapping for PlayersV1_1 {
    type Entity = Player;

    fn to_dto(entity: &Player, expand: Expand) -> PlayerDto {
        Players::to_dto(entity, expand)
    }

    fn to_entity(input: CreatePlayerDto) -> Player {
        Players::to_entity(input)
    }

    fn apply_to(edit: &EditPlayerDto, entity: &mut Player) {
        Players::apply_to(edit, entity)
    }
}

impl InMemoryResource for PlayersV1_1 {
    type Context = FakeDataStore;

    fn store(ctx: &FakeDataStore) -> &InMemoryStore<Player> {
        Players::store(ctx)
    }

    fn entity_id(entity: &Player) -> Uuid {
        Players::entity_id(entity)
    }

    fn assign_identity(entity: &mut Player, id: Uuid, now: DateTime<Utc>) {
        Players::assign_identity(entity, id, now)
    }

    fn load_related(entity: &mut Player, ctx: &FakeDataStore) {
        Players::load_related(entity, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GameType;
    use resource_framework::Patch;

    #[test]
    fn shallow_mapping_leaves_relationships_empty() {
        let player = Players::to_entity(CreatePlayerDto::new(
            GameType::CallOfDuty4,
            "Alice",
            "guid-1",
        ));
        let dto = Players::to_dto(&player, Expand::None);
        assert_eq!(dto.username, "Alice");
        assert!(dto.admin_actions.is_empty());
        assert_eq!(dto.player_id, Uuid::nil());
    }

    #[test]
    fn apply_to_only_touches_set_fields() {
        let mut player = Players::to_entity(CreatePlayerDto {
            ip_address: Some("10.0.0.1".into()),
            ..CreatePlayerDto::new(GameType::CallOfDuty4, "Alice", "guid-1")
        });
        let edit = EditPlayerDto {
            username: Patch::Set("Alicia".into()),
            ..EditPlayerDto::new(Uuid::nil())
        };
        Players::apply_to(&edit, &mut player);
        assert_eq!(player.username, "Alicia");
        assert_eq!(player.ip_address.as_deref(), Some("10.0.0.1"));

        let clear = EditPlayerDto {
            ip_address: Patch::Set(None),
            ..EditPlayerDto::new(Uuid::nil())
        };
        Players::apply_to(&clear, &mut player);
        assert_eq!(player.ip_address, None);
        assert_eq!(player.guid, "guid-1");
    }

    #[test]
    fn blank_username_is_rejected() {
        let input = CreatePlayerDto::new(GameType::Rust, "", "guid");
        assert!(matches!(
            PlayersV1_1::validate_create(&input),
            Err(ApiError::Validation(_))
        ));
    }
}
