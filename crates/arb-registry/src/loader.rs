//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per behavior, applied in file order through
//! [`BehaviorRegistry::add`][crate::BehaviorRegistry::add], so an anchor must
//! appear on an earlier row than the behavior placed relative to it.
//!
//! ```csv
//! name,placement,anchor
//! fight,append,
//! explore,append,
//! eat,before,explore
//! pray,after,fight
//! ```
//!
//! **`placement`** field:
//!
//! | Value    | Meaning                                    |
//! |----------|--------------------------------------------|
//! | `append` | `Placement::Append` (`anchor` is ignored)  |
//! | `before` | `Placement::Before(anchor)`                |
//! | `after`  | `Placement::After(anchor)`                 |
//!
//! An empty `placement` means `append`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use arb_behavior::Placement;
use arb_core::{ArbError, ArbResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    name:      String,
    #[serde(default)]
    placement: String,
    #[serde(default)]
    anchor:    String,
}

/// One behavior to register at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name:      String,
    pub placement: Placement,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, placement: Placement) -> Self {
        Self { name: name.into(), placement }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a roster from a CSV file.
pub fn load_roster_csv(path: &Path) -> ArbResult<Vec<RosterEntry>> {
    let file = std::fs::File::open(path).map_err(ArbError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for rosters embedded in
/// the binary.
pub fn load_roster_reader<R: Read>(reader: R) -> ArbResult<Vec<RosterEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for result in csv_reader.deserialize::<RosterRecord>() {
        let row = result.map_err(|e| ArbError::Parse(e.to_string()))?;
        if row.name.is_empty() {
            return Err(ArbError::Parse("roster row with empty behavior name".into()));
        }
        let placement = parse_placement(&row.placement, &row.anchor)?;
        entries.push(RosterEntry { name: row.name, placement });
    }
    Ok(entries)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_placement(kind: &str, anchor: &str) -> ArbResult<Placement> {
    let need_anchor = |kind: &str| {
        if anchor.is_empty() {
            Err(ArbError::Parse(format!("placement {kind:?} requires an anchor")))
        } else {
            Ok(anchor.to_owned())
        }
    };
    match kind.to_ascii_lowercase().as_str() {
        "" | "append" => Ok(Placement::Append),
        "before" => need_anchor(kind).map(Placement::Before),
        "after" => need_anchor(kind).map(Placement::After),
        other => Err(ArbError::Parse(format!(
            "invalid placement {other:?}: expected \"append\", \"before\", or \"after\""
        ))),
    }
}
