use super::{AdminAction, ProtectedName, Report};
use crate::model::GameType;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub player_id: Uuid,
    pub game_type: GameType,
    pub username: String,
    pub guid: String,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub admin_actions: Vec<AdminAction>,
    pub reports: Vec<Report>,
    pub protected_names: Vec<ProtectedName>,
}
