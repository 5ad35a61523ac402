use schema::{
    BaseStats, CharacterTemplate, Encounter, EnemyTemplate, PartyMemberParams, Row, SkillData,
    SkillKind, SkillTarget,
};
use std::collections::BTreeMap;

use crate::battle::ai::Controller;
use crate::battle::rng::BattleRng;
use crate::battle::state::Battle;
use crate::project::ProjectData;

/// Skill ids shared by the test catalog.
pub const ATTACK: u32 = 1;
pub const FIREBALL: u32 = 2;
pub const MEND: u32 = 3;

/// Stats with explicit hp/attack/defense/agility. Magic 10 and MP 10 are
/// fixed so skill arithmetic stays easy to read in assertions.
pub fn stats(hp: u32, attack: u32, defense: u32, agility: u32) -> BaseStats {
    BaseStats {
        max_hp: hp,
        max_mp: 10,
        attack,
        defense,
        magic: 10,
        agility,
    }
}

pub fn character(name: &str, base: BaseStats) -> CharacterTemplate {
    CharacterTemplate {
        name: name.to_string(),
        base,
        growth: BaseStats::default(),
        learnset: BTreeMap::from([(1, vec![FIREBALL])]),
        attack_skill: ATTACK,
    }
}

pub fn enemy(name: &str, stats: BaseStats, skills: Vec<u32>) -> EnemyTemplate {
    EnemyTemplate {
        name: name.to_string(),
        stats,
        skills,
        attack_skill: ATTACK,
        experience: 12,
        gold: 7,
        drops: Vec::new(),
    }
}

/// A project holding the standard test catalog plus the given templates,
/// registered under ids 1..=n per table.
pub fn project(characters: Vec<CharacterTemplate>, enemies: Vec<EnemyTemplate>) -> ProjectData {
    let mut project = ProjectData::new();
    project.insert_skill(
        ATTACK,
        SkillData {
            name: "Attack".to_string(),
            cost: 0,
            power: 0,
            variance: 20,
            hit_rate: 95,
            target: SkillTarget::Foe,
            kind: SkillKind::Damage,
        },
    );
    project.insert_skill(
        FIREBALL,
        SkillData {
            name: "Fireball".to_string(),
            cost: 5,
            power: 12,
            variance: 0,
            hit_rate: 100,
            target: SkillTarget::Foe,
            kind: SkillKind::Damage,
        },
    );
    project.insert_skill(
        MEND,
        SkillData {
            name: "Mend".to_string(),
            cost: 5,
            power: 10,
            variance: 0,
            hit_rate: 100,
            target: SkillTarget::Ally,
            kind: SkillKind::Heal,
        },
    );
    for (i, template) in characters.into_iter().enumerate() {
        project.insert_character(i as u32 + 1, template);
    }
    for (i, template) in enemies.into_iter().enumerate() {
        project.insert_enemy(i as u32 + 1, template);
    }
    project
}

/// Builds a battle over every template the project registers under ids
/// 1..=count, at level 1 with full HP/MP, front row, and a scripted
/// mid-range RNG.
pub fn battle_of<'a>(
    project: &'a ProjectData,
    party_count: u32,
    enemy_count: u32,
    controller: Option<Box<dyn Controller>>,
) -> Battle<'a> {
    let party_ids: Vec<u32> = (1..=party_count).collect();
    let party_params: Vec<PartyMemberParams> = party_ids
        .iter()
        .map(|&id| {
            let stats = project.character(id).expect("test character").stats_at(1);
            PartyMemberParams {
                level: 1,
                hp: stats.max_hp,
                mp: stats.max_mp,
                equipment: Vec::new(),
                states: Vec::new(),
                row: Row::Front,
            }
        })
        .collect();
    let encounter = Encounter {
        name: "Test Encounter".to_string(),
        units: (1..=enemy_count).collect(),
    };

    let mut battle = Battle::new(project, &party_ids, &party_params, &encounter, controller)
        .expect("test battle should assemble");
    battle.set_rng(predictable_rng());
    battle
}

/// A generous buffer of mid-range rolls: attacks land (50 <= 95) and never
/// strike critically (50 > 5). Useful where the exact numbers don't matter,
/// preventing panics from script exhaustion.
pub fn predictable_rng() -> BattleRng {
    BattleRng::new_for_test(vec![50; 200])
}
