//! The demo's behaviors and the command type they produce.

use std::fmt;

use arb_behavior::{Behavior, DecisionContext, EventArg, Placement, RosterChange, Vote};
use arb_core::{ActorState, ArbError, ArbResult, Item, Urgency};

// ── Command ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Attack(String),
    Fire(String),
    Eat,
    Pray,
    Search,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Attack(_) => f.write_str("F (fight)"),
            Command::Fire(_)   => f.write_str("f (fire)"),
            Command::Eat       => f.write_str("e (eat)"),
            Command::Pray      => f.write_str("#pray"),
            Command::Search    => f.write_str("s (search)"),
        }
    }
}

// ── Fight ─────────────────────────────────────────────────────────────────────

/// Engages whatever the `adjacent` event reported.  Fires from range when
/// melee is too risky.
#[derive(Default)]
pub struct Fight {
    target:    Option<String>,
    at_range:  bool,
    urgency:   Option<Urgency>,
}

impl Behavior<Command> for Fight {
    fn reset_urgency(&mut self) {
        self.urgency = None;
    }

    fn prepare(&mut self, _ctx: &DecisionContext<'_>) -> ArbResult<Vec<RosterChange>> {
        if self.target.is_some() {
            self.urgency = Some(Urgency::Important);
        }
        Ok(vec![])
    }

    fn urgency(&self) -> Option<Urgency> {
        self.urgency
    }

    fn action(&mut self) -> Command {
        let target = self.target.clone().unwrap_or_default();
        if self.at_range { Command::Fire(target) } else { Command::Attack(target) }
    }

    fn status(&self) -> String {
        match &self.target {
            Some(t) if self.at_range => format!("firing at {t}"),
            Some(t) => format!("fighting {t}"),
            None => String::new(),
        }
    }

    fn drop_vote(&self, item: &Item, _actor: &ActorState) -> Vote {
        if item.name == "rock" { Vote::All } else { Vote::Indifferent }
    }

    fn handles(&self, event: &str) -> bool {
        matches!(event, "adjacent" | "clear")
    }

    fn on_event(&mut self, event: &str, args: &[EventArg]) -> ArbResult<()> {
        match (event, args) {
            ("clear", _) => self.target = None,
            ("adjacent", [name, range, ..]) => {
                self.target = name.as_text().map(str::to_owned);
                self.at_range = range.as_flag().unwrap_or(false);
            }
            _ => {
                return Err(ArbError::Behavior {
                    name:    "fight".into(),
                    message: format!("unexpected {event} arguments"),
                });
            }
        }
        Ok(())
    }
}

// ── Eat ───────────────────────────────────────────────────────────────────────

/// Hunger-driven.  Asks for divine help once per fainting spell.
#[derive(Default)]
pub struct Eat {
    hunger:  i64,
    prayed:  bool,
    urgency: Option<Urgency>,
}

impl Behavior<Command> for Eat {
    fn reset_urgency(&mut self) {
        self.urgency = None;
    }

    fn prepare(&mut self, _ctx: &DecisionContext<'_>) -> ArbResult<Vec<RosterChange>> {
        self.urgency = match self.hunger {
            0 => None,
            1 => Some(Urgency::Unimportant),
            2 => Some(Urgency::Important),
            _ => Some(Urgency::Critical),
        };

        if self.hunger < 3 {
            self.prayed = false;
            return Ok(vec![]);
        }
        if self.prayed {
            return Ok(vec![]);
        }
        self.prayed = true;
        Ok(vec![RosterChange::Add { name: "pray".into(), placement: Placement::before("eat") }])
    }

    fn urgency(&self) -> Option<Urgency> {
        self.urgency
    }

    fn action(&mut self) -> Command {
        Command::Eat
    }

    fn status(&self) -> String {
        format!("hunger {}", self.hunger)
    }

    fn pickup_vote(&self, item: &Item, _actor: &ActorState) -> Vote {
        if item.name.contains("ration") { Vote::All } else { Vote::Indifferent }
    }

    fn handles(&self, event: &str) -> bool {
        event == "hunger"
    }

    fn on_event(&mut self, _event: &str, args: &[EventArg]) -> ArbResult<()> {
        self.hunger = args.first().and_then(EventArg::as_int).unwrap_or(0);
        Ok(())
    }
}

// ── Pray ──────────────────────────────────────────────────────────────────────

/// One prayer, then it leaves the roster.
#[derive(Default)]
pub struct Pray {
    done:    bool,
    urgency: Option<Urgency>,
}

impl Behavior<Command> for Pray {
    fn reset_urgency(&mut self) {
        self.urgency = None;
    }

    fn prepare(&mut self, _ctx: &DecisionContext<'_>) -> ArbResult<Vec<RosterChange>> {
        if self.done {
            return Ok(vec![RosterChange::Remove("pray".into())]);
        }
        self.urgency = Some(Urgency::Critical);
        Ok(vec![])
    }

    fn urgency(&self) -> Option<Urgency> {
        self.urgency
    }

    fn action(&mut self) -> Command {
        self.done = true;
        Command::Pray
    }

    fn status(&self) -> String {
        "praying".to_owned()
    }
}

// ── Shop / Hoard ──────────────────────────────────────────────────────────────

/// Never acts; wants anything with a price tag.
#[derive(Default)]
pub struct Shop;

impl Behavior<Command> for Shop {
    fn urgency(&self) -> Option<Urgency> {
        None
    }

    fn action(&mut self) -> Command {
        Command::Search
    }

    fn pickup_vote(&self, item: &Item, _actor: &ActorState) -> Vote {
        if item.cost.is_some() { Vote::All } else { Vote::Indifferent }
    }
}

const HOARDED: [&str; 2] = ["arrows", "dagger"];

/// Never acts; collects ammunition and refuses to part with it.
#[derive(Default)]
pub struct Hoard;

impl Behavior<Command> for Hoard {
    fn urgency(&self) -> Option<Urgency> {
        None
    }

    fn action(&mut self) -> Command {
        Command::Search
    }

    fn pickup_vote(&self, item: &Item, _actor: &ActorState) -> Vote {
        if HOARDED.contains(&item.name.as_str()) { Vote::Quantity(10) } else { Vote::Indifferent }
    }

    fn drop_vote(&self, item: &Item, _actor: &ActorState) -> Vote {
        if HOARDED.contains(&item.name.as_str()) { Vote::Refuse } else { Vote::Indifferent }
    }
}
