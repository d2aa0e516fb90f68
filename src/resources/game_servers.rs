use super::{require, BanFileMonitors};
use crate::entities::GameServer;
use crate::lifecycle::FakeDataStore;
use crate::model::{
    CreateGameServerDto, EditGameServerDto, GameServerDto, GameServersFilter, GameServersOrder,
};
use chrono::{DateTime, Utc};
use resource_framework::resource::contains_ignore_case;
use resource_framework::{
    ApiError, EntityMapping, Expand, InMemoryResource, InMemoryStore, Resource,
};
use uuid::Uuid;

pub struct GameServers;

impl Resource for GameServers {
    const NAME: &'static str = "GameServer";
    const PATH: &'static str = "game-servers";
    const EMBEDS: &'static [&'static str] = &[BanFileMonitors::PATH];

    type Dto = GameServerDto;
    type Create = CreateGameServerDto;
    type Edit = EditGameServerDto;
    type Filter = GameServersFilter;
    type Order = GameServersOrder;

    fn edit_target(edit: &EditGameServerDto) -> Uuid {
        edit.game_server_id
    }

    fn validate_create(input: &CreateGameServerDto) -> Result<(), ApiError> {
        require(Self::PATH, "title", &input.title)?;
        require(Self::PATH, "hostname", &input.hostname)
    }

    fn matches_text(_filter: &GameServersFilter, dto: &GameServerDto, text: &str) -> bool {
        contains_ignore_case(&dto.title, text) || contains_ignore_case(&dto.hostname, text)
    }
}

impl EntityMapping for GameServers {
    type Entity = GameServer;

    fn to_dto(entity: &GameServer, expand: Expand) -> GameServerDto {
        GameServerDto {
            game_server_id: entity.game_server_id,
            title: entity.title.clone(),
            game_type: entity.game_type,
            hostname: entity.hostname.clone(),
            query_port: entity.query_port,
            live_tracking_enabled: entity.live_tracking_enabled,
            banner_server_list_enabled: entity.banner_server_list_enabled,
            banner_server_list_position: entity.banner_server_list_position,
            portal_server_list_enabled: entity.portal_server_list_enabled,
            created: entity.created,
            ban_file_monitors: expand
                .related_many(&entity.ban_file_monitors, BanFileMonitors::to_dto),
        }
    }

    fn to_entity(input: CreateGameServerDto) -> GameServer {
        GameServer {
            game_server_id: Uuid::nil(),
            title: input.title,
            game_type: input.game_type,
            hostname: input.hostname,
            query_port: input.query_port,
            live_tracking_enabled: input.live_tracking_enabled,
            banner_server_list_enabled: input.banner_server_list_enabled,
            banner_server_list_position: input.banner_server_list_position,
            portal_server_list_enabled: input.portal_server_list_enabled,
            created: DateTime::<Utc>::default(),
            ban_file_monitors: Vec::new(),
        }
    }

    fn apply_to(edit: &EditGameServerDto, entity: &mut GameServer) {
        edit.title.apply_cloned(&mut entity.title);
        edit.hostname.apply_cloned(&mut entity.hostname);
        edit.query_port.apply_cloned(&mut entity.query_port);
        edit.live_tracking_enabled.apply_cloned(&mut entity.live_tracking_enabled);
        edit.banner_server_list_enabled.apply_cloned(&mut entity.banner_server_list_enabled);
        edit.banner_server_list_position.apply_cloned(&mut entity.banner_server_list_position);
        edit.portal_server_list_enabled.apply_cloned(&mut entity.portal_server_list_enabled);
    }
}

impl InMemoryResource for GameServers {
    type Context = FakeDataStore;

    fn store(ctx: &FakeDataStore) -> &InMemoryStore<GameServer> {
        &ctx.game_servers
    }

    fn entity_id(entity: &GameServer) -> Uuid {
        entity.game_server_id
    }

    fn assign_identity(entity: &mut GameServer, id: Uuid, now: DateTime<Utc>) {
        entity.game_server_id = id;
        entity.created = now;
    }

    fn load_related(entity: &mut GameServer, ctx: &FakeDataStore) {
        let id = entity.game_server_id;
        entity.ban_file_monitors = ctx.ban_file_monitors.find(|m| m.game_server_id == id);
    }
}
