use super::{Player, UserProfile};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ProtectedName {
    pub protected_name_id: Uuid,
    pub player_id: Uuid,
    pub name: String,
    pub created: DateTime<Utc>,
    pub created_by_id: Uuid,
    pub player: Option<Player>,
    pub created_by: Option<UserProfile>,
}
