//! A module for defining automated controllers for battle enemies.

use crate::battle::action::Action;
use crate::battle::state::Battle;
use schema::{Side, SkillData, SkillId, SkillTarget};

/// A trait for any system that can decide actions for ready combatants.
/// This provides a common interface for different AI difficulties or
/// strategies; the engine invokes it once per tick, after readiness
/// promotion and before action resolution.
pub trait Controller {
    /// Inspects the battle and submits actions for ready non-player
    /// combatants through [`Battle::submit_action`].
    fn decide(&mut self, battle: &mut Battle<'_>);
}

/// Chance in percent that a ready enemy reaches for a skill before falling
/// back to its basic attack.
const SKILL_ATTEMPT_CHANCE: u8 = 50;

/// The reference policy: every ready enemy picks a uniformly random living
/// party member, then half the time tries to cast an affordable skill,
/// attacking when nothing affordable is known.
pub struct RandomController;

impl RandomController {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for RandomController {
    fn decide(&mut self, battle: &mut Battle<'_>) {
        for enemy in battle.ready_enemies() {
            // No living party member means the battle is about to end in
            // defeat; leave the remaining enemies un-acted.
            let Some(target) = battle.random_alive_of(Side::Party) else {
                return;
            };

            let attempt_skill =
                battle.rng_mut().percent("enemy skill attempt") <= SKILL_ATTEMPT_CHANCE;

            let mut action = None;
            if attempt_skill {
                if let Some((id, skill)) = choose_skill(battle, enemy) {
                    action = Some(Action::UseSkill {
                        actor: enemy,
                        targets: skill_targets(battle, enemy, &skill, target),
                        skill: id,
                    });
                }
            }
            let action = action.unwrap_or(Action::Attack {
                actor: enemy,
                targets: vec![target],
            });

            battle.submit_action(action);
        }
    }
}

/// A uniformly random skill the enemy both knows and can pay for, or `None`
/// to fall back to a basic attack.
fn choose_skill(battle: &mut Battle<'_>, enemy: usize) -> Option<(SkillId, SkillData)> {
    let (known, mp) = {
        let combatant = battle.combatant(enemy);
        (combatant.skills.clone(), combatant.mp)
    };

    let affordable: Vec<SkillId> = known
        .into_iter()
        .filter(|&id| {
            battle
                .project()
                .skill(id)
                .map_or(false, |skill| skill.cost <= mp)
        })
        .collect();

    if affordable.is_empty() {
        return None;
    }
    let choice = battle
        .rng_mut()
        .pick(affordable.len(), "enemy skill choice");
    let id = affordable[choice];
    let skill = battle.project().skill(id).ok()?.clone();
    Some((id, skill))
}

/// Expands a skill's scope into concrete targets, from the caster's point of
/// view. `picked` is the already-chosen random opposing target.
fn skill_targets(
    battle: &mut Battle<'_>,
    caster: usize,
    skill: &SkillData,
    picked: usize,
) -> Vec<usize> {
    let side = battle.combatant(caster).side;
    match skill.target {
        SkillTarget::Foe => vec![picked],
        SkillTarget::Foes => battle.living_of(side.opponent()),
        SkillTarget::Ally => battle
            .random_alive_of(side)
            .map(|ally| vec![ally])
            .unwrap_or_default(),
        SkillTarget::Allies => battle.living_of(side),
    }
}
