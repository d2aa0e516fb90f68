use super::admin_action::AdminActionDto;
use resource_framework::patch::{self, Patch};
use resource_framework::SortOrder;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// A claim granted to a user profile, such as `SeniorAdmin` or `GameAdmin` for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileClaimDto {
    pub user_profile_claim_id: Uuid,
    pub user_profile_id: Uuid,
    pub system_generated: bool,
    pub claim_type: String,
    pub claim_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub user_profile_id: Uuid,
    pub identity_oid: Option<String>,
    pub xtreme_idiots_forum_id: Option<String>,
    pub display_name: String,
    pub email: Option<String>,
    #[serde(default)]
    pub admin_actions: Vec<AdminActionDto>,
    #[serde(default)]
    pub claims: Vec<UserProfileClaimDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserProfileDto {
    pub identity_oid: Option<String>,
    pub xtreme_idiots_forum_id: Option<String>,
    pub display_name: String,
    pub email: Option<String>,
}

impl CreateUserProfileDto {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            identity_oid: None,
            xtreme_idiots_forum_id: None,
            display_name: display_name.into(),
            email: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserProfileDto {
    pub user_profile_id: Uuid,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub display_name: Patch<String>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub email: Patch<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub identity_oid: Patch<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub xtreme_idiots_forum_id: Patch<Option<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserProfilesOrder {
    DisplayNameAsc,
    DisplayNameDesc,
}

impl SortOrder<UserProfileDto> for UserProfilesOrder {
    fn compare(&self, a: &UserProfileDto, b: &UserProfileDto) -> Ordering {
        match self {
            Self::DisplayNameAsc => a.display_name.cmp(&b.display_name),
            Self::DisplayNameDesc => b.display_name.cmp(&a.display_name),
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::DisplayNameAsc => "DisplayNameAsc",
            Self::DisplayNameDesc => "DisplayNameDesc",
        }
    }
}
