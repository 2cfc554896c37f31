//! Built-in placement names
//!
//! The four cardinal placements are a closed enum. The engine itself is keyed
//! by plain strings so callers can register additional placements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a target sits relative to its reference
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Left,
    Right,
    Top,
    Bottom,
}

impl Placement {
    /// Every built-in placement, in registry seeding order
    pub const ALL: [Placement; 4] = [
        Placement::Left,
        Placement::Right,
        Placement::Top,
        Placement::Bottom,
    ];

    /// Registry key for this placement
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Left => "left",
            Placement::Right => "right",
            Placement::Top => "top",
            Placement::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Placement::Left),
            "right" => Ok(Placement::Right),
            "top" => Ok(Placement::Top),
            "bottom" => Ok(Placement::Bottom),
            other => Err(format!("'{}' is not a built-in placement", other)),
        }
    }
}

impl AsRef<str> for Placement {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
