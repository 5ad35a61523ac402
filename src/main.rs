use emberfall::{
    Action, Battle, CharacterId, Encounter, ItemId, PartyMemberParams, ProjectData,
    RandomController, Row, Side,
};
use std::path::Path;

/// Fixed timestep for the headless driver, matching a 60 Hz render loop.
const FRAME_SECONDS: f32 = 1.0 / 60.0;
/// Frame budget before the driver gives up on a stalemate.
const MAX_FRAMES: u32 = 60 * 600;

fn main() {
    tracing_subscriber::fmt::init();

    let data_path = Path::new("data");
    let project = match ProjectData::load_from_dir(data_path) {
        Ok(project) => project,
        Err(err) => {
            eprintln!("Error loading project data: {}", err);
            return;
        }
    };

    // Roland the vanguard and Mira the storm-caller against a cave ambush.
    let party_ids: Vec<CharacterId> = vec![1, 2];
    let party_params = vec![
        full_params(&project, 1, 5, vec![1, 2], Row::Front),
        full_params(&project, 2, 5, vec![], Row::Back),
    ];
    let encounter = Encounter {
        name: "Cave Ambush".to_string(),
        units: vec![1, 1, 2],
    };

    let mut battle = match Battle::new(
        &project,
        &party_ids,
        &party_params,
        &encounter,
        Some(Box::new(RandomController::new())),
    ) {
        Ok(battle) => battle,
        Err(err) => {
            eprintln!("Error starting battle: {}", err);
            return;
        }
    };

    println!("=== {} ===", encounter.name);

    for _ in 0..MAX_FRAMES {
        battle.advance_time(FRAME_SECONDS);

        // The driver stands in for the player: any ready party member swings
        // at a random living enemy. This is the external submission path; the
        // enemy side is driven by the controller inside advance_time.
        let ready_party = battle
            .ready_entity()
            .filter(|c| c.side == Side::Party)
            .map(|c| c.index);
        if let Some(actor) = ready_party {
            if let Some(target) = battle.random_alive_of(Side::Enemy) {
                battle.submit_action(Action::Attack {
                    actor,
                    targets: vec![target],
                });
            }
        }

        // Poll-and-dismiss, the way a presentation layer animates one
        // resolved action at a time.
        let lines = battle.notification().map(|n| n.lines(&battle));
        if let Some(lines) = lines {
            for line in lines {
                println!("{}", line);
            }
            battle.dismiss_notification();
        }

        if battle.is_over() {
            break;
        }
    }

    println!();
    if battle.is_victory() {
        println!(
            "Victory! The party earns {} experience and {} gold.",
            battle.victory_experience(),
            battle.gold_drops()
        );
        for item in battle.generate_item_drops() {
            println!("Found: {}", item_name(&project, item));
        }
    } else if battle.is_defeat() {
        println!("The party has fallen...");
    } else {
        println!("The battle stalled out.");
    }
    println!("Battle lasted {:.1}s.", battle.elapsed_seconds());
}

/// Party parameters at full health for the demo, the way a save file would
/// normally supply them.
fn full_params(
    project: &ProjectData,
    id: CharacterId,
    level: u32,
    equipment: Vec<ItemId>,
    row: Row,
) -> PartyMemberParams {
    let stats = project
        .character(id)
        .expect("demo party references a known character")
        .stats_at(level);
    PartyMemberParams {
        level,
        hp: stats.max_hp,
        mp: stats.max_mp,
        equipment,
        states: Vec::new(),
        row,
    }
}

fn item_name(project: &ProjectData, item: ItemId) -> String {
    project
        .item(item)
        .map(|i| i.name.clone())
        .unwrap_or_else(|_| format!("item {}", item))
}
