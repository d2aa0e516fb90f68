//! Wire DTOs, list filters and sort orders for every portal resource.
//!
//! These are the types callers see. Relationship fields (`player`, `admin_actions`, …) are only
//! populated by single-item reads and writes; listings always return them empty.

pub mod admin_action;
pub mod ban_file_monitor;
pub mod chat_message;
pub mod game_server;
pub mod game_type;
pub mod map;
pub mod player;
pub mod protected_name;
pub mod report;
pub mod tag;
pub mod user_profile;

pub use admin_action::*;
pub use ban_file_monitor::*;
pub use chat_message::*;
pub use game_server::*;
pub use game_type::*;
pub use map::*;
pub use player::*;
pub use protected_name::*;
pub use report::*;
pub use tag::*;
pub use user_profile::*;
