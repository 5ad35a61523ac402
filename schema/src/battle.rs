use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the battlefield a combatant fights on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Party,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Party => Side::Enemy,
            Side::Enemy => Side::Party,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Side::Party => "party",
            Side::Enemy => "enemy",
        };
        write!(f, "{}", display_name)
    }
}

/// Formation row. Back-row combatants trade melee force for safety.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    Front,
    Back,
}

impl Row {
    /// Two-row formation heuristic for encounter rosters: the first half of
    /// the roster stands in front, the rest behind. Integer division keeps
    /// the tie-breaking for odd roster sizes.
    pub fn for_unit(index: usize, unit_count: usize) -> Row {
        if unit_count == 0 || (index * 2) / unit_count == 0 {
            Row::Front
        } else {
            Row::Back
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Row::Front => "front",
            Row::Back => "back",
        };
        write!(f, "{}", display_name)
    }
}
