use schema::{BaseStats, ItemId, Row, Side, SkillId, StateId};
use serde::{Deserialize, Serialize};

/// Gauge value at which a combatant becomes eligible to act.
pub const READY: f32 = 1.0;

/// Agility value that fills the gauge in exactly one base turn.
const AGILITY_REFERENCE: f32 = 100.0;

/// Per-entity mutable battle state for one participant.
///
/// Combatants are arena records: constructed once at battle start, addressed
/// by stable index for the whole battle, and kept around after death with
/// `alive` cleared instead of being removed. Dead combatants are excluded
/// from targeting and from the ready queue, never from the array.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CombatantStatus {
    /// Stable position in the battle's combatant array.
    pub index: usize,
    pub side: Side,
    /// Character or enemy template id, depending on `side`.
    pub template: u32,
    pub hp: u32,
    pub mp: u32,
    pub stats: BaseStats,
    pub equipment: Vec<ItemId>,
    /// Known ability identifiers.
    pub skills: Vec<SkillId>,
    /// Ability used for basic attacks.
    pub attack_skill: SkillId,
    /// Temporary status-effect identifiers.
    pub states: Vec<StateId>,
    pub row: Row,
    pub alive: bool,
    /// Progress toward the next turn, in [0, 1]. 1.0 means eligible to act.
    pub readiness: f32,
}

impl CombatantStatus {
    pub fn new(
        index: usize,
        side: Side,
        template: u32,
        stats: BaseStats,
        attack_skill: SkillId,
    ) -> Self {
        CombatantStatus {
            index,
            side,
            template,
            hp: stats.max_hp,
            mp: stats.max_mp,
            stats,
            equipment: Vec::new(),
            skills: Vec::new(),
            attack_skill,
            states: Vec::new(),
            row: Row::Front,
            alive: true,
            readiness: 0.0,
        }
    }

    /// Advances the turn gauge for `delta_seconds` of elapsed time.
    ///
    /// A combatant whose action is already queued does not keep accumulating
    /// readiness. Negative deltas count as zero; time never rewinds the
    /// gauge.
    pub fn update_readiness(
        &mut self,
        has_pending_action: bool,
        delta_seconds: f32,
        base_turn_seconds: f32,
    ) {
        if has_pending_action {
            return;
        }
        let delta = delta_seconds.max(0.0);
        let rate = self.stats.agility as f32 / AGILITY_REFERENCE;
        self.readiness = (self.readiness + rate * delta / base_turn_seconds).min(READY);
    }

    pub fn is_ready(&self) -> bool {
        self.readiness >= READY
    }

    /// Applies damage, clearing `alive` when HP reaches zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
        if self.hp == 0 {
            self.alive = false;
        }
    }

    /// Restores HP up to the combatant's maximum. The dead stay down.
    pub fn heal(&mut self, amount: u32) {
        if self.alive {
            self.hp = (self.hp + amount).min(self.stats.max_hp);
        }
    }

    pub fn spend_mp(&mut self, cost: u32) {
        self.mp = self.mp.saturating_sub(cost);
    }
}

/// Seeds initial readiness so the opening turn order is already decided:
/// combatants are ranked ascending by agility and spread evenly across the
/// gauge, slowest at 0.0 and fastest at 1.0. Ties rank by stable index.
pub fn seed_initial_readiness(combatants: &mut [CombatantStatus]) {
    let count = combatants.len();
    if count == 0 {
        return;
    }
    if count == 1 {
        // A lone combatant starts ready rather than dividing by zero.
        combatants[0].readiness = READY;
        return;
    }

    let mut order: Vec<usize> = (0..count).collect();
    order.sort_by_key(|&i| (combatants[i].stats.agility, i));
    for (rank, &i) in order.iter().enumerate() {
        combatants[i].readiness = rank as f32 / (count - 1) as f32;
    }
}
