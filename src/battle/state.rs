use std::collections::VecDeque;

use ordered_float::OrderedFloat;
use schema::{CharacterId, Encounter, PartyMemberParams, Row, Side};

use crate::battle::action::{Action, Hit, HitOutcome};
use crate::battle::ai::Controller;
use crate::battle::combatant::{seed_initial_readiness, CombatantStatus};
use crate::battle::rng::BattleRng;
use crate::errors::{BattleResult, SetupError};
use crate::project::ProjectData;

/// Seconds a combatant with reference agility needs to fill its gauge.
pub const DEFAULT_BASE_TURN_SECONDS: f32 = 2.0;

/// The display-ready result of the most recently resolved action, held until
/// the presentation layer dismisses it. While one is outstanding, the
/// resolver will not dequeue another pending action.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub action: Action,
    pub hits: Vec<Hit>,
}

impl Notification {
    /// Formats the notification into human-readable lines using battle
    /// context, for the presentation layer to display one action at a time.
    pub fn lines(&self, battle: &Battle<'_>) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.hits.len() + 1);
        let actor_name = battle.display_name(self.action.actor());

        lines.push(match &self.action {
            Action::Attack { .. } => format!("{} attacks!", actor_name),
            Action::UseSkill { skill, .. } => {
                let skill_name = battle
                    .project
                    .skill(*skill)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|_| format!("skill {}", skill));
                format!("{} uses {}!", actor_name, skill_name)
            }
        });

        for hit in &self.hits {
            let target_name = battle.display_name(hit.target);
            lines.push(match hit.outcome {
                HitOutcome::Missed => format!("{} dodges the blow!", target_name),
                HitOutcome::Hit => format!("{} takes {} damage!", target_name, hit.amount),
                HitOutcome::Critical => {
                    format!("A heavy blow! {} takes {} damage!", target_name, hit.amount)
                }
                HitOutcome::Healed => format!("{} recovers {} HP!", target_name, hit.amount),
            });
            let lethal = matches!(hit.outcome, HitOutcome::Hit | HitOutcome::Critical)
                && hit.hp_after == 0;
            if lethal {
                lines.push(format!("{} falls!", target_name));
            }
        }

        lines
    }
}

/// The battle orchestrator: owns every combatant status, the readiness
/// schedule, the pending-action queue, the single in-flight notification
/// slot, and the time-advancement algorithm.
///
/// Single-threaded by design. All state lives in this one value; every
/// public call is synchronous and runs to completion before returning. An
/// external driver calls [`Battle::advance_time`] once per frame with its
/// own elapsed-time delta and must serialize those calls; hosting the engine
/// across threads needs an external mutual-exclusion boundary.
pub struct Battle<'a> {
    pub(crate) project: &'a ProjectData,
    pub(crate) combatants: Vec<CombatantStatus>,
    /// Combatants eligible to act, in promotion order.
    pub(crate) ready_queue: VecDeque<usize>,
    /// Submitted, not-yet-resolved actions.
    pub(crate) pending_actions: VecDeque<Action>,
    pub(crate) notification: Option<Notification>,
    pub(crate) controller: Option<Box<dyn Controller>>,
    pub(crate) rng: BattleRng,
    pub(crate) base_turn_seconds: f32,
    pub(crate) elapsed_seconds: f32,
    pub(crate) victory: bool,
    pub(crate) defeat: bool,
}

impl<'a> Battle<'a> {
    /// Assembles a battle from the party roster and an encounter definition.
    ///
    /// Every party id must resolve to a character template and every
    /// encounter unit to an enemy template; a dangling reference fails
    /// construction. The engine must not be used in an invalid
    /// configuration, so there is no partial fallback.
    pub fn new(
        project: &'a ProjectData,
        party_ids: &[CharacterId],
        party_params: &[PartyMemberParams],
        encounter: &Encounter,
        controller: Option<Box<dyn Controller>>,
    ) -> BattleResult<Battle<'a>> {
        if party_ids.is_empty() {
            return Err(SetupError::EmptyParty.into());
        }
        if party_ids.len() != party_params.len() {
            return Err(SetupError::PartySizeMismatch {
                ids: party_ids.len(),
                params: party_params.len(),
            }
            .into());
        }
        if encounter.units.is_empty() {
            return Err(SetupError::EmptyEncounter.into());
        }

        let mut combatants = Vec::with_capacity(party_ids.len() + encounter.units.len());

        for (&id, params) in party_ids.iter().zip(party_params) {
            let template = project.character(id)?;
            let mut stats = template.stats_at(params.level);
            for &item_id in &params.equipment {
                let item = project.item(item_id)?;
                stats.attack += item.attack;
                stats.defense += item.defense;
                stats.agility += item.agility;
            }

            let index = combatants.len();
            let mut status =
                CombatantStatus::new(index, Side::Party, id, stats, template.attack_skill);
            status.hp = params.hp.min(stats.max_hp);
            status.mp = params.mp.min(stats.max_mp);
            status.alive = status.hp > 0;
            status.skills = template.skills_at(params.level);
            status.equipment = params.equipment.clone();
            status.states = params.states.clone();
            status.row = params.row;
            combatants.push(status);
        }

        let unit_count = encounter.units.len();
        for (slot, &enemy_id) in encounter.units.iter().enumerate() {
            let template = project.enemy(enemy_id)?;
            let index = combatants.len();
            let mut status = CombatantStatus::new(
                index,
                Side::Enemy,
                enemy_id,
                template.stats,
                template.attack_skill,
            );
            status.skills = template.skills.clone();
            status.row = Row::for_unit(slot, unit_count);
            combatants.push(status);
        }

        seed_initial_readiness(&mut combatants);

        Ok(Battle {
            project,
            combatants,
            ready_queue: VecDeque::new(),
            pending_actions: VecDeque::new(),
            notification: None,
            controller,
            rng: BattleRng::new_random(),
            base_turn_seconds: DEFAULT_BASE_TURN_SECONDS,
            elapsed_seconds: 0.0,
            victory: false,
            defeat: false,
        })
    }

    // === Time advancement ===

    /// Advances the battle by `delta_seconds` of wall-clock time. Called
    /// once per external tick; terminal battles ignore the call entirely.
    pub fn advance_time(&mut self, delta_seconds: f32) {
        if self.is_over() {
            return;
        }

        self.elapsed_seconds += delta_seconds.max(0.0);

        // Readiness update for everyone; the dead simply never re-promote.
        for i in 0..self.combatants.len() {
            let pending = self.has_pending_action(i);
            let base = self.base_turn_seconds;
            self.combatants[i].update_readiness(pending, delta_seconds, base);
        }

        self.promote_ready();

        if let Some(mut controller) = self.controller.take() {
            controller.decide(self);
            self.controller = Some(controller);
        }

        // At most one action per tick, and only while the presentation layer
        // has dismissed the previous result.
        if self.notification.is_none() {
            if let Some(action) = self.pending_actions.pop_front() {
                let hits = action.resolve(self);
                self.notification = Some(Notification { action, hits });
            }
        }

        let combatants = &self.combatants;
        self.ready_queue.retain(|&i| combatants[i].alive);

        self.check_terminal();
    }

    /// Submits an action for a ready combatant. If the actor has already
    /// left the ready queue (died, or already acted), the action is silently
    /// discarded: it can no longer act.
    pub fn submit_action(&mut self, action: Action) {
        let actor = action.actor();
        let Some(position) = self.ready_queue.iter().position(|&i| i == actor) else {
            return;
        };
        self.ready_queue.remove(position);
        self.combatants[actor].readiness = 0.0;
        self.pending_actions.push_back(action);
    }

    /// Appends every newly ready combatant behind the existing queue,
    /// fullest gauge first; ties fall back to stable index. Combatants
    /// already queued keep their position.
    fn promote_ready(&mut self) {
        let mut newly: Vec<usize> = (0..self.combatants.len())
            .filter(|&i| {
                let c = &self.combatants[i];
                c.alive && c.is_ready() && !self.ready_queue.contains(&i)
            })
            .collect();
        newly.sort_by_key(|&i| {
            (
                std::cmp::Reverse(OrderedFloat(self.combatants[i].readiness)),
                i,
            )
        });
        self.ready_queue.extend(newly);
    }

    /// Terminal conditions, evaluated in fixed order: a simultaneous wipe of
    /// both sides reads as a defeat. Entering either state clears the ready
    /// queue; the flags are never unset.
    fn check_terminal(&mut self) {
        if self.living_of(Side::Party).is_empty() {
            self.defeat = true;
            self.ready_queue.clear();
        } else if self.living_of(Side::Enemy).is_empty() {
            self.victory = true;
            self.ready_queue.clear();
        }
    }

    fn has_pending_action(&self, combatant: usize) -> bool {
        self.pending_actions.iter().any(|a| a.actor() == combatant)
    }

    // === Queries ===

    pub fn combatants(&self) -> &[CombatantStatus] {
        &self.combatants
    }

    pub fn combatant(&self, index: usize) -> &CombatantStatus {
        &self.combatants[index]
    }

    /// Head of the ready queue: the combatant whose turn it is, if any.
    pub fn ready_entity(&self) -> Option<&CombatantStatus> {
        self.ready_queue.front().map(|&i| &self.combatants[i])
    }

    /// Ready-queue members of the enemy category, in queue order.
    pub fn ready_enemies(&self) -> Vec<usize> {
        self.ready_queue
            .iter()
            .copied()
            .filter(|&i| self.combatants[i].side == Side::Enemy)
            .collect()
    }

    /// Living members of one category, in index order.
    pub fn living_of(&self, side: Side) -> Vec<usize> {
        self.combatants
            .iter()
            .filter(|c| c.side == side && c.alive)
            .map(|c| c.index)
            .collect()
    }

    /// A uniformly random living member of one category, or `None` when the
    /// category is wholly dead.
    pub fn random_alive_of(&mut self, side: Side) -> Option<usize> {
        let living = self.living_of(side);
        if living.is_empty() {
            return None;
        }
        let choice = self.rng.pick(living.len(), "random living target");
        Some(living[choice])
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn pending_action_count(&self) -> usize {
        self.pending_actions.len()
    }

    pub fn is_victory(&self) -> bool {
        self.victory
    }

    pub fn is_defeat(&self) -> bool {
        self.defeat
    }

    pub fn is_over(&self) -> bool {
        self.victory || self.defeat
    }

    /// Accumulated battle time. Informational; nothing else depends on it.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_seconds
    }

    pub fn project(&self) -> &ProjectData {
        self.project
    }

    /// Replaces the RNG oracle, e.g. with a scripted one for deterministic
    /// tests or replays.
    pub fn set_rng(&mut self, rng: BattleRng) {
        self.rng = rng;
    }

    pub fn rng_mut(&mut self) -> &mut BattleRng {
        &mut self.rng
    }

    /// Template name for one combatant, for display purposes.
    pub fn display_name(&self, index: usize) -> String {
        let combatant = &self.combatants[index];
        let name = match combatant.side {
            Side::Party => self
                .project
                .character(combatant.template)
                .map(|t| t.name.clone()),
            Side::Enemy => self
                .project
                .enemy(combatant.template)
                .map(|t| t.name.clone()),
        };
        name.unwrap_or_else(|_| format!("combatant {}", index))
    }
}
