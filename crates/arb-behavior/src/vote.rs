//! A single behavior's opinion on picking up or dropping an item.

/// What one behavior wants done with an item stack.
///
/// | Variant       | Pickup                         | Drop                        |
/// |---------------|--------------------------------|-----------------------------|
/// | `Indifferent` | no opinion                     | no opinion                  |
/// | `Refuse`      | zero desire                    | veto: nothing is dropped    |
/// | `All`         | wants the whole stack          | wants the whole stack gone  |
/// | `Quantity(n)` | wants `n`                      | wants `n` gone              |
///
/// `Quantity(0)` is a zero desire in both polls, never a veto.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vote {
    #[default]
    Indifferent,
    Refuse,
    All,
    Quantity(u32),
}

impl Vote {
    /// How many items this vote asks for, or `None` when indifferent.
    ///
    /// `All` is unbounded and reported as `u64::MAX`.
    pub fn desire(self) -> Option<u64> {
        match self {
            Vote::Indifferent => None,
            Vote::Refuse      => Some(0),
            Vote::All         => Some(u64::MAX),
            Vote::Quantity(n) => Some(u64::from(n)),
        }
    }
}

impl From<bool> for Vote {
    fn from(b: bool) -> Self {
        if b { Vote::All } else { Vote::Refuse }
    }
}

impl From<u32> for Vote {
    fn from(n: u32) -> Self {
        Vote::Quantity(n)
    }
}

impl<T: Into<Vote>> From<Option<T>> for Vote {
    fn from(v: Option<T>) -> Self {
        v.map_or(Vote::Indifferent, Into::into)
    }
}
