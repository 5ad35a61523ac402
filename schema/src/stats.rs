use serde::{Deserialize, Serialize};

/// The six computed stats every combatant carries.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseStats {
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub magic: u32,
    pub agility: u32,
}

impl BaseStats {
    /// Component-wise sum, used for equipment bonuses.
    pub fn plus(&self, other: &BaseStats) -> BaseStats {
        BaseStats {
            max_hp: self.max_hp + other.max_hp,
            max_mp: self.max_mp + other.max_mp,
            attack: self.attack + other.attack,
            defense: self.defense + other.defense,
            magic: self.magic + other.magic,
            agility: self.agility + other.agility,
        }
    }

    /// Linear growth curve: `base + growth * (level - 1)`.
    pub fn grown(&self, growth: &BaseStats, level: u32) -> BaseStats {
        let steps = level.saturating_sub(1);
        BaseStats {
            max_hp: self.max_hp + growth.max_hp * steps,
            max_mp: self.max_mp + growth.max_mp * steps,
            attack: self.attack + growth.attack * steps,
            defense: self.defense + growth.defense * steps,
            magic: self.magic + growth.magic * steps,
            agility: self.agility + growth.agility * steps,
        }
    }
}
