use super::game_type::GameType;
use super::player::PlayerDto;
use super::user_profile::UserProfileDto;
use chrono::{DateTime, Utc};
use resource_framework::patch::{self, Patch};
use resource_framework::{ResourceFilter, SortOrder};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminActionType {
    Observation,
    Warning,
    Kick,
    TempBan,
    Ban,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminActionDto {
    pub admin_action_id: Uuid,
    pub player_id: Uuid,
    /// Admin who took the action. `None` for unclaimed bans.
    pub user_profile_id: Option<Uuid>,
    pub game_type: GameType,
    pub action_type: AdminActionType,
    pub text: String,
    pub created: DateTime<Utc>,
    pub expires: Option<DateTime<Utc>>,
    pub forum_topic_id: Option<i32>,
    #[serde(default)]
    pub player: Option<PlayerDto>,
    #[serde(default)]
    pub user_profile: Option<UserProfileDto>,
}

impl AdminActionDto {
    /// A permanent ban, or a temporary ban that has not yet expired.
    pub fn is_active_ban(&self, now: DateTime<Utc>) -> bool {
        match self.action_type {
            AdminActionType::Ban => self.expires.map_or(true, |expires| expires > now),
            AdminActionType::TempBan => self.expires.is_some_and(|expires| expires > now),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminActionDto {
    pub player_id: Uuid,
    pub game_type: GameType,
    pub action_type: AdminActionType,
    pub text: String,
    pub user_profile_id: Option<Uuid>,
    pub expires: Option<DateTime<Utc>>,
    pub forum_topic_id: Option<i32>,
}

impl CreateAdminActionDto {
    pub fn new(
        player_id: Uuid,
        game_type: GameType,
        action_type: AdminActionType,
        text: impl Into<String>,
    ) -> Self {
        Self {
            player_id,
            game_type,
            action_type,
            text: text.into(),
            user_profile_id: None,
            expires: None,
            forum_topic_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditAdminActionDto {
    pub admin_action_id: Uuid,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub text: Patch<String>,
    /// `Set(None)` lifts the expiry.
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub expires: Patch<Option<DateTime<Utc>>>,
    /// `Set(Some(admin))` claims the action.
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub user_profile_id: Patch<Option<Uuid>>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub forum_topic_id: Patch<Option<i32>>,
}

impl EditAdminActionDto {
    pub fn new(admin_action_id: Uuid) -> Self {
        Self {
            admin_action_id,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminActionFilterKind {
    ActiveBans,
    UnclaimedBans,
}

impl AdminActionFilterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ActiveBans => "ActiveBans",
            Self::UnclaimedBans => "UnclaimedBans",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminActionsFilter {
    pub game_type: Option<GameType>,
    pub player_id: Option<Uuid>,
    pub admin_id: Option<Uuid>,
    pub filter: Option<AdminActionFilterKind>,
}

impl ResourceFilter<AdminActionDto> for AdminActionsFilter {
    fn in_scope(&self, dto: &AdminActionDto) -> bool {
        self.game_type.map_or(true, |g| dto.game_type == g)
            && self.player_id.map_or(true, |p| dto.player_id == p)
            && self
                .admin_id
                .map_or(true, |a| dto.user_profile_id == Some(a))
    }

    fn matches(&self, dto: &AdminActionDto) -> bool {
        match self.filter {
            None => true,
            Some(AdminActionFilterKind::ActiveBans) => dto.is_active_ban(Utc::now()),
            Some(AdminActionFilterKind::UnclaimedBans) => {
                dto.action_type == AdminActionType::Ban && dto.user_profile_id.is_none()
            }
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(game_type) = self.game_type {
            pairs.push(("gameType", game_type.to_string()));
        }
        if let Some(player_id) = self.player_id {
            pairs.push(("playerId", player_id.to_string()));
        }
        if let Some(admin_id) = self.admin_id {
            pairs.push(("adminId", admin_id.to_string()));
        }
        if let Some(kind) = self.filter {
            pairs.push(("filter", kind.as_str().to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminActionsOrder {
    CreatedAsc,
    CreatedDesc,
}

impl SortOrder<AdminActionDto> for AdminActionsOrder {
    fn compare(&self, a: &AdminActionDto, b: &AdminActionDto) -> Ordering {
        match self {
            Self::CreatedAsc => a.created.cmp(&b.created),
            Self::CreatedDesc => b.created.cmp(&a.created),
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::CreatedAsc => "CreatedAsc",
            Self::CreatedDesc => "CreatedDesc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn action(action_type: AdminActionType, expires: Option<DateTime<Utc>>) -> AdminActionDto {
        AdminActionDto {
            admin_action_id: Uuid::new_v4(),
            player_id: Uuid::new_v4(),
            user_profile_id: None,
            game_type: GameType::CallOfDuty4,
            action_type,
            text: "reason".into(),
            created: Utc::now(),
            expires,
            forum_topic_id: None,
            player: None,
            user_profile: None,
        }
    }

    #[test]
    fn active_ban_rules() {
        let now = Utc::now();
        let later = Some(now + Duration::hours(1));
        let earlier = Some(now - Duration::hours(1));

        assert!(action(AdminActionType::Ban, None).is_active_ban(now));
        assert!(action(AdminActionType::TempBan, later).is_active_ban(now));
        assert!(!action(AdminActionType::TempBan, earlier).is_active_ban(now));
        assert!(!action(AdminActionType::TempBan, None).is_active_ban(now));
        assert!(!action(AdminActionType::Kick, None).is_active_ban(now));
    }

    #[test]
    fn clearing_expiry_round_trips_as_null() {
        let edit = EditAdminActionDto {
            expires: Patch::Set(None),
            ..EditAdminActionDto::new(Uuid::nil())
        };
        let json = serde_json::to_value(&edit).unwrap();
        assert!(json["expires"].is_null());
        assert!(json.get("text").is_none());

        let parsed: EditAdminActionDto = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.expires, Patch::Set(None));
        assert_eq!(parsed.text, Patch::Keep);
    }
}
