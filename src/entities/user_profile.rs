use super::AdminAction;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user_profile_id: Uuid,
    pub identity_oid: Option<String>,
    pub xtreme_idiots_forum_id: Option<String>,
    pub display_name: String,
    pub email: Option<String>,
    pub admin_actions: Vec<AdminAction>,
    pub claims: Vec<UserProfileClaim>,
}

/// Claims have no resource of their own; they are seeded directly and read through their
/// profile.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfileClaim {
    pub user_profile_claim_id: Uuid,
    pub user_profile_id: Uuid,
    pub system_generated: bool,
    pub claim_type: String,
    pub claim_value: String,
}

impl UserProfileClaim {
    pub fn new(
        user_profile_id: Uuid,
        claim_type: impl Into<String>,
        claim_value: impl Into<String>,
    ) -> Self {
        Self {
            user_profile_claim_id: Uuid::new_v4(),
            user_profile_id,
            system_generated: false,
            claim_type: claim_type.into(),
            claim_value: claim_value.into(),
        }
    }
}
