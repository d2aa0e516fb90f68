use super::{Player, UserProfile};
use crate::model::{AdminActionType, GameType};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct AdminAction {
    pub admin_action_id: Uuid,
    pub player_id: Uuid,
    pub user_profile_id: Option<Uuid>,
    /// Copied from the player so listings can be scoped without a join.
    pub game_type: GameType,
    pub action_type: AdminActionType,
    pub text: String,
    pub created: DateTime<Utc>,
    pub expires: Option<DateTime<Utc>>,
    pub forum_topic_id: Option<i32>,
    pub player: Option<Player>,
    pub user_profile: Option<UserProfile>,
}
