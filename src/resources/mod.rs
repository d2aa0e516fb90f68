//! Resource markers: one zero-sized type per API resource, tying its DTOs, entity, mapping
//! functions and in-memory storage to the generic contract.
//!
//! Mapping functions fill relationship fields only through [`Expand::related_many`] and
//! [`Expand::related_one`], so an expanded read goes exactly one hop into the graph.
//!
//! [`Expand::related_many`]: resource_framework::Expand::related_many
//! [`Expand::related_one`]: resource_framework::Expand::related_one

pub mod admin_actions;
pub mod ban_file_monitors;
pub mod chat_messages;
pub mod game_servers;
pub mod maps;
pub mod players;
pub mod protected_names;
pub mod reports;
pub mod tags;
pub mod user_profiles;

pub use admin_actions::AdminActions;
pub use ban_file_monitors::BanFileMonitors;
pub use chat_messages::ChatMessages;
pub use game_servers::GameServers;
pub use maps::Maps;
pub use players::{Players, PlayersV1_1};
pub use protected_names::ProtectedNames;
pub use reports::Reports;
pub use tags::Tags;
pub use user_profiles::UserProfiles;

use resource_framework::ApiError;

/// Rejects blank required text fields.
pub(crate) fn require(resource: &str, field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{resource}.{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert!(require("players", "username", "Alice").is_ok());
        assert_eq!(
            require("players", "username", "  "),
            Err(ApiError::Validation("players.username is required".into()))
        );
    }
}
