use crate::battle::state::Battle;
use schema::{Row, SkillData, SkillId, SkillKind};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A submitted command: an actor, its targets, and the kind-specific
/// payload. Kinds are a closed sum; each variant carries its own resolution
/// behavior. Actors and targets are stable combatant indices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Basic attack with the actor's attack ability.
    Attack { actor: usize, targets: Vec<usize> },
    /// Cast a skill from the catalog.
    UseSkill {
        actor: usize,
        targets: Vec<usize>,
        skill: SkillId,
    },
}

/// How one resolved hit landed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Missed,
    Hit,
    Critical,
    Healed,
}

/// The effect of one action on one target.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub target: usize,
    pub outcome: HitOutcome,
    pub amount: u32,
    pub hp_after: u32,
}

/// Chance in percent that a basic attack lands.
const ATTACK_HIT_RATE: u8 = 95;
/// Chance in percent that a landed basic attack strikes critically.
const CRIT_CHANCE: u8 = 5;
/// Percent spread on basic attack damage.
const ATTACK_VARIANCE: u8 = 20;

impl Action {
    pub fn actor(&self) -> usize {
        match self {
            Action::Attack { actor, .. } | Action::UseSkill { actor, .. } => *actor,
        }
    }

    pub fn targets(&self) -> &[usize] {
        match self {
            Action::Attack { targets, .. } | Action::UseSkill { targets, .. } => targets,
        }
    }

    /// Resolves this action against the battle state, producing one hit per
    /// target. This is the single mutation point for combat math: target
    /// HP/alive and actor resources change here and nowhere else.
    pub fn resolve(&self, battle: &mut Battle<'_>) -> Vec<Hit> {
        match self {
            Action::Attack { actor, targets } => targets
                .iter()
                .map(|&target| attack_hit(battle, *actor, target))
                .collect(),
            Action::UseSkill {
                actor,
                targets,
                skill,
            } => resolve_skill(battle, *actor, targets, *skill),
        }
    }
}

fn attack_hit(battle: &mut Battle<'_>, actor: usize, target: usize) -> Hit {
    let (attack, actor_row) = {
        let a = &battle.combatants[actor];
        (a.stats.attack, a.row)
    };
    let (defense, target_row, target_hp, target_alive) = {
        let t = &battle.combatants[target];
        (t.stats.defense, t.row, t.hp, t.alive)
    };

    // A target that died earlier in the same action simply isn't there to
    // be hit any more.
    if !target_alive {
        return miss(target, target_hp);
    }

    if battle.rng.percent("attack accuracy") > ATTACK_HIT_RATE {
        return miss(target, target_hp);
    }

    let critical = battle.rng.percent("critical check") <= CRIT_CHANCE;
    let variance_roll = battle.rng.percent("attack variance");

    let base = (attack as i64 / 2 - defense as i64 / 4).max(1);
    let mut amount = spread(base, ATTACK_VARIANCE, variance_roll);
    // Melee loses a quarter of its force across a row gap.
    if actor_row == Row::Back || target_row == Row::Back {
        amount = amount * 3 / 4;
    }
    if critical {
        amount *= 2;
    }
    let amount = amount.max(1) as u32;

    let target_status = &mut battle.combatants[target];
    target_status.take_damage(amount);
    Hit {
        target,
        outcome: if critical {
            HitOutcome::Critical
        } else {
            HitOutcome::Hit
        },
        amount,
        hp_after: target_status.hp,
    }
}

fn resolve_skill(battle: &mut Battle<'_>, actor: usize, targets: &[usize], skill: SkillId) -> Vec<Hit> {
    let skill = match battle.project.skill(skill) {
        Ok(data) => data.clone(),
        Err(err) => {
            // A stale skill reference fizzles instead of crashing the tick.
            warn!("skill resolution skipped: {}", err);
            return Vec::new();
        }
    };

    battle.combatants[actor].spend_mp(skill.cost);

    targets
        .iter()
        .map(|&target| skill_hit(battle, &skill, actor, target))
        .collect()
}

fn skill_hit(battle: &mut Battle<'_>, skill: &SkillData, actor: usize, target: usize) -> Hit {
    let magic = battle.combatants[actor].stats.magic;
    let (defense, target_hp, target_alive) = {
        let t = &battle.combatants[target];
        (t.stats.defense, t.hp, t.alive)
    };

    if !target_alive {
        return miss(target, target_hp);
    }

    match skill.kind {
        SkillKind::Damage => {
            if battle.rng.percent("skill accuracy") > skill.hit_rate {
                return miss(target, target_hp);
            }
            let variance_roll = battle.rng.percent("skill variance");
            let base = (skill.power as i64 + magic as i64 / 2 - defense as i64 / 4).max(1);
            let amount = spread(base, skill.variance, variance_roll).max(1) as u32;

            let target_status = &mut battle.combatants[target];
            target_status.take_damage(amount);
            Hit {
                target,
                outcome: HitOutcome::Hit,
                amount,
                hp_after: target_status.hp,
            }
        }
        SkillKind::Heal => {
            let variance_roll = battle.rng.percent("heal variance");
            let base = (skill.power as i64 + magic as i64 / 2).max(0);
            let amount = spread(base, skill.variance, variance_roll).max(0) as u32;

            let target_status = &mut battle.combatants[target];
            target_status.heal(amount);
            Hit {
                target,
                outcome: HitOutcome::Healed,
                amount,
                hp_after: target_status.hp,
            }
        }
    }
}

fn miss(target: usize, hp: u32) -> Hit {
    Hit {
        target,
        outcome: HitOutcome::Missed,
        amount: 0,
        hp_after: hp,
    }
}

/// Maps a percent roll in 1..=100 linearly onto the
/// `100-variance ..= 100+variance` percent band and applies it.
fn spread(amount: i64, variance: u8, roll: u8) -> i64 {
    let span = 2 * variance as i64;
    let percent = 100 - variance as i64 + (roll as i64 - 1) * span / 99;
    amount * percent / 100
}
