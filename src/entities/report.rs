use super::{GameServer, Player, UserProfile};
use crate::model::GameType;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub report_id: Uuid,
    pub player_id: Uuid,
    pub user_profile_id: Option<Uuid>,
    pub game_server_id: Uuid,
    pub game_type: GameType,
    pub comments: String,
    pub timestamp: DateTime<Utc>,
    pub closed: bool,
    pub admin_user_profile_id: Option<Uuid>,
    pub admin_closing_comments: Option<String>,
    pub closed_timestamp: Option<DateTime<Utc>>,
    pub player: Option<Player>,
    pub user_profile: Option<UserProfile>,
    pub admin_user_profile: Option<UserProfile>,
    pub game_server: Option<GameServer>,
}
