use super::game_server::GameServerDto;
use super::game_type::GameType;
use super::player::PlayerDto;
use chrono::{DateTime, Utc};
use resource_framework::{Patch, ResourceFilter, SortOrder};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// A line of in-game chat captured from a server. Locked messages are kept as evidence and
/// excluded from retention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDto {
    pub chat_message_id: Uuid,
    pub game_server_id: Uuid,
    pub player_id: Uuid,
    pub game_type: GameType,
    pub username: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub locked: bool,
    #[serde(default)]
    pub player: Option<PlayerDto>,
    #[serde(default)]
    pub game_server: Option<GameServerDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatMessageDto {
    pub game_server_id: Uuid,
    pub player_id: Uuid,
    pub game_type: GameType,
    pub username: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl CreateChatMessageDto {
    pub fn new(
        game_server_id: Uuid,
        player_id: Uuid,
        game_type: GameType,
        username: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            game_server_id,
            player_id,
            game_type,
            username: username.into(),
            message: message.into(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditChatMessageDto {
    pub chat_message_id: Uuid,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub locked: Patch<bool>,
}

impl EditChatMessageDto {
    pub fn lock(chat_message_id: Uuid, locked: bool) -> Self {
        Self {
            chat_message_id,
            locked: Patch::Set(locked),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatMessagesFilter {
    pub game_type: Option<GameType>,
    pub game_server_id: Option<Uuid>,
    pub player_id: Option<Uuid>,
    pub locked_only: bool,
}

impl ResourceFilter<ChatMessageDto> for ChatMessagesFilter {
    fn in_scope(&self, dto: &ChatMessageDto) -> bool {
        self.game_type.map_or(true, |g| dto.game_type == g)
            && self.game_server_id.map_or(true, |id| dto.game_server_id == id)
            && self.player_id.map_or(true, |id| dto.player_id == id)
            && (!self.locked_only || dto.locked)
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(game_type) = self.game_type {
            pairs.push(("gameType", game_type.to_string()));
        }
        if let Some(id) = self.game_server_id {
            pairs.push(("gameServerId", id.to_string()));
        }
        if let Some(id) = self.player_id {
            pairs.push(("playerId", id.to_string()));
        }
        if self.locked_only {
            pairs.push(("lockedOnly", "true".to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatMessagesOrder {
    TimestampAsc,
    TimestampDesc,
}

impl SortOrder<ChatMessageDto> for ChatMessagesOrder {
    fn compare(&self, a: &ChatMessageDto, b: &ChatMessageDto) -> Ordering {
        match self {
            Self::TimestampAsc => a.timestamp.cmp(&b.timestamp),
            Self::TimestampDesc => b.timestamp.cmp(&a.timestamp),
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::TimestampAsc => "TimestampAsc",
            Self::TimestampDesc => "TimestampDesc",
        }
    }
}
