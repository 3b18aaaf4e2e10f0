use std::sync::Arc;

// ---------------------------------------------------------------------------
// ClubRecord – one row of the season table
// ---------------------------------------------------------------------------

/// A single club's season line (one row of the source CSV).
///
/// All numeric fields are true numbers; the loader rejects anything that
/// cannot be coerced. Monetary values are in base currency units (euros),
/// with no thousands separators.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubRecord {
    /// Club name, unique within the table.
    pub name: String,
    /// Final position in the source file, 1..N.
    pub original_rank: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Taken verbatim from the source file. The original dataset never
    /// recomputes this from `goals_for - goals_against`, and neither do we.
    pub goal_difference: i32,
    /// Total squad market value, base currency units.
    pub squad_total_value: i64,
    /// Average market value per player, base currency units.
    pub squad_average_value: i64,
    /// Average player age in years.
    pub squad_average_age: f64,
}

impl ClubRecord {
    /// Total squad value scaled to millions, for display.
    pub fn total_value_millions(&self) -> f64 {
        self.squad_total_value as f64 / 1_000_000.0
    }
}

// ---------------------------------------------------------------------------
// ClubTable – the complete loaded season
// ---------------------------------------------------------------------------

/// The normalized in-memory table of all club records for one season.
///
/// Constructed once by the loader and never mutated; every filtered or
/// sorted view borrows from it. Rows keep the source file order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubTable {
    records: Vec<ClubRecord>,
}

impl ClubTable {
    /// Wrap validated records. The loader guarantees unique names and that
    /// `original_rank` is a permutation of 1..N before calling this.
    pub(crate) fn new(records: Vec<ClubRecord>) -> Self {
        ClubTable { records }
    }

    /// All records in source file order.
    pub fn records(&self) -> &[ClubRecord] {
        &self.records
    }

    /// Number of clubs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Club names in source file order, for the selector control.
    pub fn club_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Look up a club by name.
    pub fn get(&self, name: &str) -> Option<&ClubRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

/// Shared handle to a loaded table, as handed out by the cache.
pub type SharedTable = Arc<ClubTable>;
