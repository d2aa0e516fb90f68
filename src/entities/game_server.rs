use super::BanFileMonitor;
use crate::model::GameType;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct GameServer {
    pub game_server_id: Uuid,
    pub title: String,
    pub game_type: GameType,
    pub hostname: String,
    pub query_port: u16,
    pub live_tracking_enabled: bool,
    pub banner_server_list_enabled: bool,
    pub banner_server_list_position: i32,
    pub portal_server_list_enabled: bool,
    pub created: DateTime<Utc>,
    pub ban_file_monitors: Vec<BanFileMonitor>,
}
