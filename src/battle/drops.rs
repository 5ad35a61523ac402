//! Victory rewards: experience, gold, and item drops rolled from the
//! encounter's enemy templates. Everything here is computed live from the
//! roster rather than cached, so the sums always reflect the templates the
//! battle currently tracks.

use crate::battle::state::Battle;
use schema::{DropEntry, EnemyTemplate, ItemId, Side};
use tracing::warn;

impl Battle<'_> {
    /// Total experience awarded for the encounter.
    pub fn victory_experience(&self) -> u32 {
        self.enemy_templates().map(|t| t.experience).sum()
    }

    /// Total gold carried by the encounter.
    pub fn gold_drops(&self) -> u32 {
        self.enemy_templates().map(|t| t.gold).sum()
    }

    /// Rolls the encounter's drop tables. Each enemy rolls once against its
    /// summed drop chance; a success picks one item from its table, weighted
    /// by the per-item chances. A table summing above 100% is logged and
    /// clamped in effect (every roll succeeds) rather than rejected.
    pub fn generate_item_drops(&mut self) -> Vec<ItemId> {
        let tables: Vec<(String, Vec<DropEntry>, f32)> = self
            .enemy_templates()
            .map(|t| (t.name.clone(), t.drops.clone(), t.total_drop_chance()))
            .collect();

        let mut drops = Vec::new();
        for (name, table, total) in tables {
            if total > 1.0 {
                warn!(
                    "drop table for '{}' sums to {:.0}% chance",
                    name,
                    total * 100.0
                );
            }
            if total <= 0.0 {
                continue;
            }

            let roll = self.rng.percent("item drop roll") as f32 / 100.0;
            if roll > total {
                continue;
            }

            // Weighted choice: a second roll scaled into (0, total], walked
            // along the cumulative chances.
            let pick = self.rng.percent("item drop choice") as f32 / 100.0 * total;
            let mut cumulative = 0.0;
            for entry in &table {
                cumulative += entry.chance;
                if pick <= cumulative {
                    drops.push(entry.item);
                    break;
                }
            }
        }
        drops
    }

    fn enemy_templates(&self) -> impl Iterator<Item = &EnemyTemplate> + '_ {
        self.combatants
            .iter()
            .filter(|c| c.side == Side::Enemy)
            .filter_map(|c| self.project.enemy(c.template).ok())
    }
}
