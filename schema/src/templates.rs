use crate::battle::Row;
use crate::stats::BaseStats;
use crate::{EnemyId, ItemId, SkillId, StateId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable definition of a playable character class.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CharacterTemplate {
    pub name: String,
    /// Stats at level 1.
    pub base: BaseStats,
    /// Stat gain per level.
    pub growth: BaseStats,
    /// level -> skills learned at that level
    pub learnset: BTreeMap<u32, Vec<SkillId>>,
    /// Skill used for basic attacks.
    pub attack_skill: SkillId,
}

impl CharacterTemplate {
    pub fn stats_at(&self, level: u32) -> BaseStats {
        self.base.grown(&self.growth, level)
    }

    /// Every skill known at or below the given level, in learn order.
    pub fn skills_at(&self, level: u32) -> Vec<SkillId> {
        let mut known = Vec::new();
        for skills in self.learnset.range(..=level).map(|(_, s)| s) {
            for &skill in skills {
                if !known.contains(&skill) {
                    known.push(skill);
                }
            }
        }
        known
    }
}

/// Drop-table entry: chance is a fraction in [0, 1].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DropEntry {
    pub item: ItemId,
    pub chance: f32,
}

/// Immutable definition of an enemy class.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnemyTemplate {
    pub name: String,
    pub stats: BaseStats,
    pub skills: Vec<SkillId>,
    /// Skill used for basic attacks.
    pub attack_skill: SkillId,
    /// Experience awarded when this enemy is defeated.
    pub experience: u32,
    /// Gold carried.
    pub gold: u32,
    pub drops: Vec<DropEntry>,
}

impl EnemyTemplate {
    /// Summed drop chance. Above 1.0 means the table is over-full.
    pub fn total_drop_chance(&self) -> f32 {
        self.drops.iter().map(|d| d.chance).sum()
    }
}

/// Static definition of which enemies participate in a battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Encounter {
    pub name: String,
    /// Ordered roster of enemy-template references.
    pub units: Vec<EnemyId>,
}

/// Per-character parameters supplied by the calling context at battle start.
/// The engine computes nothing here; levels, resources and equipment come
/// from whatever save/menu layer owns the party.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PartyMemberParams {
    pub level: u32,
    pub hp: u32,
    pub mp: u32,
    pub equipment: Vec<ItemId>,
    pub states: Vec<StateId>,
    pub row: Row,
}
