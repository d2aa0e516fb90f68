use super::{GameServer, Player};
use crate::model::GameType;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub chat_message_id: Uuid,
    pub game_server_id: Uuid,
    pub player_id: Uuid,
    pub game_type: GameType,
    pub username: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub locked: bool,
    pub player: Option<Player>,
    pub game_server: Option<GameServer>,
}
