use pretty_assertions::assert_eq;

use crate::battle::action::{Action, HitOutcome};
use crate::battle::rng::BattleRng;
use crate::battle::state::Notification;
use crate::battle::tests::common::{battle_of, character, enemy, project, stats, FIREBALL, MEND};

#[test]
fn test_attack_damage_formula() {
    let project = project(
        vec![character("Hero", stats(20, 20, 0, 10))],
        vec![enemy("Slime", stats(30, 5, 0, 5), vec![])],
    );
    let mut battle = battle_of(&project, 1, 1, None);
    // Hit (50 <= 95), no crit (50 > 5), bottom of the variance band (roll 1
    // maps to 80%): (20/2 - 0/4) * 80% = 8.
    battle.set_rng(BattleRng::new_for_test(vec![50, 50, 1]));

    let action = Action::Attack {
        actor: 0,
        targets: vec![1],
    };
    let hits = action.resolve(&mut battle);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].outcome, HitOutcome::Hit);
    assert_eq!(hits[0].amount, 8);
    assert_eq!(hits[0].hp_after, 22);
    assert_eq!(battle.combatant(1).hp, 22);
}

#[test]
fn test_attack_misses_on_high_accuracy_roll() {
    let project = project(
        vec![character("Hero", stats(20, 20, 0, 10))],
        vec![enemy("Slime", stats(30, 5, 0, 5), vec![])],
    );
    let mut battle = battle_of(&project, 1, 1, None);
    // 96 > 95 misses; a miss consumes no further rolls.
    battle.set_rng(BattleRng::new_for_test(vec![96]));

    let action = Action::Attack {
        actor: 0,
        targets: vec![1],
    };
    let hits = action.resolve(&mut battle);

    assert_eq!(hits[0].outcome, HitOutcome::Missed);
    assert_eq!(hits[0].amount, 0);
    assert_eq!(battle.combatant(1).hp, 30);
}

#[test]
fn test_critical_doubles_damage() {
    let project = project(
        vec![character("Hero", stats(20, 20, 0, 10))],
        vec![enemy("Slime", stats(30, 5, 0, 5), vec![])],
    );
    let mut battle = battle_of(&project, 1, 1, None);
    battle.set_rng(BattleRng::new_for_test(vec![50, 5, 1]));

    let action = Action::Attack {
        actor: 0,
        targets: vec![1],
    };
    let hits = action.resolve(&mut battle);

    assert_eq!(hits[0].outcome, HitOutcome::Critical);
    assert_eq!(hits[0].amount, 16);
}

#[test]
fn test_back_row_melee_is_reduced() {
    let project = project(
        vec![character("Hero", stats(20, 20, 0, 10))],
        vec![enemy("Slime", stats(30, 5, 0, 5), vec![])],
    );
    let mut battle = battle_of(&project, 1, 1, None);
    battle.combatants[0].row = schema::Row::Back;
    // Top of the variance band (roll 100 maps to 120%): 10 * 120% = 12,
    // then the row gap takes a quarter: 9.
    battle.set_rng(BattleRng::new_for_test(vec![50, 50, 100]));

    let action = Action::Attack {
        actor: 0,
        targets: vec![1],
    };
    let hits = action.resolve(&mut battle);

    assert_eq!(hits[0].amount, 9);
}

#[test]
fn test_skill_damages_and_costs_mp() {
    let project = project(
        vec![character("Mage", stats(20, 8, 0, 10))],
        vec![enemy("Slime", stats(30, 5, 0, 5), vec![])],
    );
    let mut battle = battle_of(&project, 1, 1, None);
    // Fireball has variance 0, so damage is exact: 12 + 10/2 - 0/4 = 17.
    battle.set_rng(BattleRng::new_for_test(vec![50, 50]));

    let action = Action::UseSkill {
        actor: 0,
        targets: vec![1],
        skill: FIREBALL,
    };
    let hits = action.resolve(&mut battle);

    assert_eq!(hits[0].outcome, HitOutcome::Hit);
    assert_eq!(hits[0].amount, 17);
    assert_eq!(battle.combatant(1).hp, 13);
    assert_eq!(battle.combatant(0).mp, 5);
}

#[test]
fn test_heal_restores_and_caps_at_max() {
    let project = project(
        vec![
            character("Mage", stats(20, 8, 0, 10)),
            character("Hero", stats(40, 10, 0, 10)),
        ],
        vec![enemy("Slime", stats(30, 5, 0, 5), vec![])],
    );
    let mut battle = battle_of(&project, 2, 1, None);
    battle.combatants[1].hp = 30;
    battle.set_rng(BattleRng::new_for_test(vec![50]));

    // Mend restores 10 + 10/2 = 15, but the hero is only 10 below max.
    let action = Action::UseSkill {
        actor: 0,
        targets: vec![1],
        skill: MEND,
    };
    let hits = action.resolve(&mut battle);

    assert_eq!(hits[0].outcome, HitOutcome::Healed);
    assert_eq!(hits[0].amount, 15);
    assert_eq!(hits[0].hp_after, 40);
    assert_eq!(battle.combatant(1).hp, 40);
    assert_eq!(battle.combatant(0).mp, 5);
}

#[test]
fn test_dead_target_yields_miss_without_rolls() {
    let project = project(
        vec![character("Hero", stats(20, 20, 0, 10))],
        vec![enemy("Slime", stats(30, 5, 0, 5), vec![])],
    );
    let mut battle = battle_of(&project, 1, 1, None);
    battle.combatants[1].hp = 0;
    battle.combatants[1].alive = false;
    // An empty script proves the dead-target path consumes no randomness.
    battle.set_rng(BattleRng::new_for_test(vec![]));

    let action = Action::Attack {
        actor: 0,
        targets: vec![1],
    };
    let hits = action.resolve(&mut battle);

    assert_eq!(hits[0].outcome, HitOutcome::Missed);
    assert_eq!(hits[0].amount, 0);
    assert_eq!(hits[0].hp_after, 0);
}

#[test]
fn test_unknown_skill_fizzles() {
    let project = project(
        vec![character("Hero", stats(20, 20, 0, 10))],
        vec![enemy("Slime", stats(30, 5, 0, 5), vec![])],
    );
    let mut battle = battle_of(&project, 1, 1, None);
    battle.set_rng(BattleRng::new_for_test(vec![]));

    let action = Action::UseSkill {
        actor: 0,
        targets: vec![1],
        skill: 99,
    };
    let hits = action.resolve(&mut battle);

    assert!(hits.is_empty());
    assert_eq!(battle.combatant(0).mp, 10);
    assert_eq!(battle.combatant(1).hp, 30);
}

#[test]
fn test_lethal_hit_reads_as_a_fall_in_notification_lines() {
    let project = project(
        vec![character("Hero", stats(20, 20, 0, 10))],
        vec![enemy("Slime", stats(5, 5, 0, 5), vec![])],
    );
    let mut battle = battle_of(&project, 1, 1, None);
    battle.set_rng(BattleRng::new_for_test(vec![50, 50, 100]));

    let action = Action::Attack {
        actor: 0,
        targets: vec![1],
    };
    let hits = action.resolve(&mut battle);
    assert!(!battle.combatant(1).alive);

    let notification = Notification { action, hits };
    let lines = notification.lines(&battle);
    assert_eq!(lines[0], "Hero attacks!");
    assert_eq!(lines[1], "Slime takes 12 damage!");
    assert_eq!(lines[2], "Slime falls!");
}
