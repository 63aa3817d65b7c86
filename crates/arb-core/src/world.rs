//! Read-only inputs the arbitration core needs from the game world.
//!
//! The world model itself lives outside this workspace.  The run loop copies
//! the few values the core reads into these plain structs before each call.

/// The agent's own current combat and economic state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    /// Current hit points.
    pub health: u32,
    /// Movement speed (game units; 12 is a normal human).
    pub speed: u32,
    /// Spendable resources, checked against an item's cost on pickup.
    pub gold: u64,
}

impl ActorState {
    pub fn new(health: u32, speed: u32, gold: u64) -> Self {
        Self { health, speed, gold }
    }

    /// `true` if `cost` can be paid from current resources.
    #[inline]
    pub fn can_afford(&self, cost: u64) -> bool {
        cost <= self.gold
    }
}

/// An item stack under consideration for pickup or drop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    /// Number of items in the stack.
    pub quantity: u32,
    /// Price if the item is for sale; `None` for free items.
    pub cost: Option<u64>,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self { name: name.into(), quantity, cost: None }
    }

    pub fn with_cost(mut self, cost: u64) -> Self {
        self.cost = Some(cost);
        self
    }
}

/// A single opponent as seen by threat evaluation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub name: String,
    /// Belongs to a class that can kill in one hit regardless of damage rolls.
    pub one_hit_class: bool,
    /// Largest damage a single melee round can deal.
    pub max_melee_damage: u32,
    /// Expected damage of a single melee round.
    pub avg_melee_damage: f64,
    pub speed: u32,
}

impl Monster {
    pub fn new(name: impl Into<String>, avg_melee_damage: f64, max_melee_damage: u32, speed: u32) -> Self {
        Self {
            name: name.into(),
            one_hit_class: false,
            max_melee_damage,
            avg_melee_damage,
            speed,
        }
    }

    pub fn one_hit(mut self) -> Self {
        self.one_hit_class = true;
        self
    }
}
