use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Games the portal manages servers for. Serialized by variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameType {
    Unknown,
    CallOfDuty2,
    CallOfDuty4,
    CallOfDuty5,
    Insurgency,
    Left4Dead2,
    Rust,
}

impl GameType {
    pub const ALL: [GameType; 7] = [
        GameType::Unknown,
        GameType::CallOfDuty2,
        GameType::CallOfDuty4,
        GameType::CallOfDuty5,
        GameType::Insurgency,
        GameType::Left4Dead2,
        GameType::Rust,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::CallOfDuty2 => "CallOfDuty2",
            Self::CallOfDuty4 => "CallOfDuty4",
            Self::CallOfDuty5 => "CallOfDuty5",
            Self::Insurgency => "Insurgency",
            Self::Left4Dead2 => "Left4Dead2",
            Self::Rust => "Rust",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|game_type| game_type.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown game type: {s}"))
    }
}

/// Comma-joined list used by the `gameTypes` query parameter.
pub fn join_game_types(game_types: &[GameType]) -> String {
    game_types
        .iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
