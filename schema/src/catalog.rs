use serde::{Deserialize, Serialize};

/// Who a skill reaches when it is cast. "Foe" and "Ally" are relative to the
/// caster's side.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillTarget {
    Foe,
    Foes,
    Ally,
    Allies,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillKind {
    Damage,
    Heal,
}

/// One entry of the skill catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkillData {
    pub name: String,
    /// MP spent by the caster.
    pub cost: u32,
    /// Base strength before the caster's stats are factored in.
    pub power: i32,
    /// Percent spread applied to the final amount.
    pub variance: u8,
    /// Percent chance to land on each target.
    pub hit_rate: u8,
    pub target: SkillTarget,
    pub kind: SkillKind,
}

/// One entry of the item catalog. The stat fields are equipment bonuses that
/// apply while the item is equipped.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemData {
    pub name: String,
    pub attack: u32,
    pub defense: u32,
    pub agility: u32,
    pub price: u32,
}
