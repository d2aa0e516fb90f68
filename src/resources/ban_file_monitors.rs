use super::{require, GameServers};
use crate::entities::BanFileMonitor;
use crate::lifecycle::FakeDataStore;
use crate::model::{
    BanFileMonitorDto, BanFileMonitorsFilter, CreateBanFileMonitorDto, EditBanFileMonitorDto,
};
use chrono::{DateTime, Utc};
use resource_framework::{
    ApiError, EntityMapping, Expand, InMemoryResource, InMemoryStore, Resource, Unordered,
};
use uuid::Uuid;

/// Ban file monitors. No sort keys and no free-text search: listings keep creation order.
pub struct BanFileMonitors;

impl Resource for BanFileMonitors {
    const NAME: &'static str = "BanFileMonitor";
    const PATH: &'static str = "ban-file-monitors";
    const EMBEDS: &'static [&'static str] = &[GameServers::PATH];

    type Dto = BanFileMonitorDto;
    type Create = CreateBanFileMonitorDto;
    type Edit = EditBanFileMonitorDto;
    type Filter = BanFileMonitorsFilter;
    type Order = Unordered;

    fn edit_target(edit: &EditBanFileMonitorDto) -> Uuid {
        edit.ban_file_monitor_id
    }

    fn validate_create(input: &CreateBanFileMonitorDto) -> Result<(), ApiError> {
        require(Self::PATH, "filePath", &input.file_path)
    }
}

impl EntityMapping for BanFileMonitors {
    type Entity = BanFileMonitor;

    fn to_dto(entity: &BanFileMonitor, expand: Expand) -> BanFileMonitorDto {
        BanFileMonitorDto {
            ban_file_monitor_id: entity.ban_file_monitor_id,
            game_server_id: entity.game_server_id,
            game_type: entity.game_type,
            file_path: entity.file_path.clone(),
            remote_file_size: entity.remote_file_size,
            last_sync: entity.last_sync,
            game_server: expand.related_one(entity.game_server.as_ref(), GameServers::to_dto),
        }
    }

    fn to_entity(input: CreateBanFileMonitorDto) -> BanFileMonitor {
        BanFileMonitor {
            ban_file_monitor_id: Uuid::nil(),
            game_server_id: input.game_server_id,
            game_type: input.game_type,
            file_path: input.file_path,
            remote_file_size: None,
            last_sync: None,
            game_server: None,
        }
    }

    fn apply_to(edit: &EditBanFileMonitorDto, entity: &mut BanFileMonitor) {
        edit.file_path.apply_cloned(&mut entity.file_path);
        edit.remote_file_size.apply_cloned(&mut entity.remote_file_size);
        edit.last_sync.apply_cloned(&mut entity.last_sync);
    }
}

impl InMemoryResource for BanFileMonitors {
    type Context = FakeDataStore;

    fn store(ctx: &FakeDataStore) -> &InMemoryStore<BanFileMonitor> {
        &ctx.ban_file_monitors
    }

    fn entity_id(entity: &BanFileMonitor) -> Uuid {
        entity.ban_file_monitor_id
    }

    fn assign_identity(entity: &mut BanFileMonitor, id: Uuid, _now: DateTime<Utc>) {
        entity.ban_file_monitor_id = id;
    }

    fn load_related(entity: &mut BanFileMonitor, ctx: &FakeDataStore) {
        entity.game_server = ctx.game_servers.get(&entity.game_server_id);
    }
}
