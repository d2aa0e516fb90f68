//! Storage shapes for the in-memory backend.
//!
//! Entities mirror the portal's relational rows: foreign keys plus navigation fields. Stored copies
//! always keep their navigation fields empty; they are filled on a per-request clone by
//! `InMemoryResource::load_related` just before an expanded mapping.

pub mod admin_action;
pub mod ban_file_monitor;
pub mod chat_message;
pub mod game_server;
pub mod map;
pub mod player;
pub mod protected_name;
pub mod report;
pub mod tag;
pub mod user_profile;

pub use admin_action::AdminAction;
pub use ban_file_monitor::BanFileMonitor;
pub use chat_message::ChatMessage;
pub use game_server::GameServer;
pub use map::{Map, MapFile};
pub use player::Player;
pub use protected_name::ProtectedName;
pub use report::Report;
pub use tag::Tag;
pub use user_profile::{UserProfile, UserProfileClaim};
