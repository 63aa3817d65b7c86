//! skirmish — a scripted run of the behavior arbitration core.
//!
//! One adventurer, five behaviors, a dozen turns.  Each turn the script
//! feeds events to the brain, asks for a decision, and polls the behaviors
//! about the item on the floor.  Set `RUST_LOG=debug` to see every vote.

mod behaviors;

use std::io::Cursor;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use arb_behavior::{EventArg, IdleBehavior};
use arb_core::{ActorState, Item, Monster};
use arb_decide::{BrainBuilder, DecisionTrace};
use arb_registry::{RankedOrder, RegistryBuilder, load_roster_reader};
use arb_threat::ThreatConfig;

use behaviors::{Command, Eat, Fight, Hoard, Pray, Shop};

// ── Roster ────────────────────────────────────────────────────────────────────

// Priority order of the starting roster.  `pray` is registered in the
// catalog but only joins when `eat` asks for it.
const ROSTER_CSV: &str = "\
name,placement,anchor\n\
idle,,\n\
eat,before,idle\n\
fight,before,eat\n\
shop,after,eat\n\
hoard,append,\n\
";

// ── Script ────────────────────────────────────────────────────────────────────

struct Turn {
    health:  u32,
    gold:    u64,
    hunger:  i64,
    monster: Option<Monster>,
    floor:   Option<Item>,
}

fn script() -> Vec<Turn> {
    let jackal = || Monster::new("jackal", 2.0, 4, 12);
    let soldier_ant = || Monster::new("soldier ant", 9.0, 20, 18);
    let cockatrice = || Monster::new("cockatrice", 1.5, 3, 6).one_hit();

    let turn = |health, gold, hunger, monster, floor| Turn { health, gold, hunger, monster, floor };
    vec![
        turn(16, 40, 0, None,                None),
        turn(16, 40, 0, Some(jackal()),      None),
        turn(14, 40, 0, Some(jackal()),      Some(Item::new("dagger", 3))),
        turn(14, 40, 1, None,                Some(Item::new("arrows", 20))),
        turn(14, 40, 1, Some(soldier_ant()), None),
        turn(6,  40, 2, Some(soldier_ant()), None),
        turn(6,  40, 3, None,                Some(Item::new("lamp", 1).with_cost(80))),
        turn(6,  40, 3, None,                Some(Item::new("ration", 2).with_cost(30))),
        turn(12, 10, 1, Some(cockatrice()),  None),
        turn(12, 10, 0, None,                Some(Item::new("food ration", 1))),
        turn(12, 10, 0, None,                None),
    ]
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== skirmish — behavior arbitration ===");

    // 1. Catalog + starting roster.
    let roster = load_roster_reader(Cursor::new(ROSTER_CSV))?;
    let registry = RegistryBuilder::new()
        .behavior("idle", || IdleBehavior::new(Command::Search, "searching"))
        .behavior("eat", Eat::default)
        .behavior("fight", Fight::default)
        .behavior("shop", Shop::default)
        .behavior("hoard", Hoard::default)
        .behavior("pray", Pray::default)
        .roster(roster)
        .build()?;
    println!("Roster: {}", registry.priority().iter().collect::<Vec<_>>().join(" > "));
    println!();

    // 2. Brain.  Fighting outranks eating when both are equally urgent.
    let mut brain = BrainBuilder::new(registry)
        .policy(RankedOrder::new().rank("pray", 2).rank("fight", 1))
        .threat_config(ThreatConfig::default().with_major_turns(4.0))
        .build();

    // 3. Run.
    println!("{:<5} {:<14} {:<26} {:<8} {:<12}", "Turn", "Command", "Status", "Threat", "Floor");
    println!("{}", "-".repeat(70));

    let mut trace = DecisionTrace::default();
    let mut roster_size = brain.registry.len();
    for turn in script() {
        let actor = ActorState::new(turn.health, 12, turn.gold);

        brain.notify("hunger", &[EventArg::Int(turn.hunger)]);
        let threat = match &turn.monster {
            Some(m) => {
                let t = brain.evaluate_threat(m, &actor)?;
                let args = [EventArg::from(m.name.as_str()), EventArg::Flag(t.avoid_melee)];
                brain.notify("adjacent", &args);
                if t.spend_major {
                    "major"
                } else if t.spend_minor {
                    "minor"
                } else if t.avoid_melee {
                    "ranged"
                } else {
                    "-"
                }
            }
            None => {
                brain.notify("clear", &[]);
                "-"
            }
        };

        let decision = brain.decide_with(&actor, &mut trace)?;
        if brain.registry.len() != roster_size {
            roster_size = brain.registry.len();
            tracing::info!(
                cycle = brain.cycle(),
                behaviors = roster_size,
                order = ?brain.registry.priority().as_slice(),
                "roster changed"
            );
        }

        let floor = match &turn.floor {
            Some(item) => {
                let take = brain.pickup(item, &actor);
                if take.is_keep() {
                    tracing::info!(item = item.name.as_str(), gold = actor.gold, "leaving item on the floor");
                }
                format!("{} {}", item.name, take)
            }
            None => "-".to_owned(),
        };

        println!(
            "{:<5} {:<14} {:<26} {:<8} {:<12}",
            brain.cycle(),
            decision.action.to_string(),
            decision.status,
            threat,
            floor,
        );
    }
    println!();

    // 4. Inventory check: hoard refuses to let go of anything it collected.
    for item in [Item::new("arrows", 20), Item::new("rock", 5)] {
        println!("drop {:<8} -> {}", item.name, brain.drop(&item, &ActorState::new(12, 12, 10)));
    }

    // 5. Last cycle, as the observer saw it.
    println!();
    println!("Cycle {} evaluations:", trace.cycle);
    for (name, urgency) in &trace.evaluated {
        println!("  {name:<8} {urgency}");
    }

    Ok(())
}
