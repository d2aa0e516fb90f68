use super::{require, GameServers, Players};
use crate::entities::ChatMessage;
use crate::lifecycle::FakeDataStore;
use crate::model::{
    ChatMessageDto, ChatMessagesFilter, ChatMessagesOrder, CreateChatMessageDto,
    EditChatMessageDto,
};
use chrono::{DateTime, Utc};
use resource_framework::resource::contains_ignore_case;
use resource_framework::{
    ApiError, EntityMapping, Expand, InMemoryResource, InMemoryStore, Resource,
};
use uuid::Uuid;

pub struct ChatMessages;

impl Resource for ChatMessages {
    const NAME: &'static str = "ChatMessage";
    const PATH: &'static str = "chat-messages";
    const EMBEDS: &'static [&'static str] = &[Players::PATH, GameServers::PATH];

    type Dto = ChatMessageDto;
    type Create = CreateChatMessageDto;
    type Edit = EditChatMessageDto;
    type Filter = ChatMessagesFilter;
    type Order = ChatMessagesOrder;

    fn edit_target(edit: &EditChatMessageDto) -> Uuid {
        edit.chat_message_id
    }

    fn validate_create(input: &CreateChatMessageDto) -> Result<(), ApiError> {
        require(Self::PATH, "username", &input.username)?;
        require(Self::PATH, "message", &input.message)
    }

    fn matches_text(_filter: &ChatMessagesFilter, dto: &ChatMessageDto, text: &str) -> bool {
        contains_ignore_case(&dto.message, text) || contains_ignore_case(&dto.username, text)
    }
}

impl EntityMapping for ChatMessages {
    type Entity = ChatMessage;

    fn to_dto(entity: &ChatMessage, expand: Expand) -> ChatMessageDto {
        ChatMessageDto {
            chat_message_id: entity.chat_message_id,
            game_server_id: entity.game_server_id,
            player_id: entity.player_id,
            game_type: entity.game_type,
            username: entity.username.clone(),
            message: entity.message.clone(),
            timestamp: entity.timestamp,
            locked: entity.locked,
            player: expand.related_one(entity.player.as_ref(), Players::to_dto),
            game_server: expand.related_one(entity.game_server.as_ref(), GameServers::to_dto),
        }
    }

    /// Chat timestamps come from the game server, not from the store.
    fn to_entity(input: CreateChatMessageDto) -> ChatMessage {
        ChatMessage {
            chat_message_id: Uuid::nil(),
            game_server_id: input.game_server_id,
            player_id: input.player_id,
            game_type: input.game_type,
            username: input.username,
            message: input.message,
            timestamp: input.timestamp,
            locked: false,
            player: None,
            game_server: None,
        }
    }

    fn apply_to(edit: &EditChatMessageDto, entity: &mut ChatMessage) {
        edit.locked.apply_cloned(&mut entity.locked);
    }
}

impl InMemoryResource for ChatMessages {
    type Context = FakeDataStore;

    fn store(ctx: &FakeDataStore) -> &InMemoryStore<ChatMessage> {
        &ctx.chat_messages
    }

    fn entity_id(entity: &ChatMessage) -> Uuid {
        entity.chat_message_id
    }

    fn assign_identity(entity: &mut ChatMessage, id: Uuid, _now: DateTime<Utc>) {
        entity.chat_message_id = id;
    }

    fn load_related(entity: &mut ChatMessage, ctx: &FakeDataStore) {
        entity.player = ctx.players.get(&entity.player_id);
        entity.game_server = ctx.game_servers.get(&entity.game_server_id);
    }
}
