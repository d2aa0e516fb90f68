use super::GameServer;
use crate::model::GameType;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct BanFileMonitor {
    pub ban_file_monitor_id: Uuid,
    pub game_server_id: Uuid,
    pub game_type: GameType,
    pub file_path: String,
    pub remote_file_size: Option<i64>,
    pub last_sync: Option<DateTime<Utc>>,
    pub game_server: Option<GameServer>,
}
