use super::model::{ClubRecord, ClubTable};

// ---------------------------------------------------------------------------
// Selection – the sidebar filter
// ---------------------------------------------------------------------------

/// The sidebar selector value: every club, or "Todos" for no filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Todos,
    Club(String),
}

impl Selection {
    /// Label shown in the selector control.
    pub fn label(&self) -> &str {
        match self {
            Selection::Todos => "Todos",
            Selection::Club(name) => name,
        }
    }

    /// Name of the selected club, if one is selected.
    pub fn club_name(&self) -> Option<&str> {
        match self {
            Selection::Todos => None,
            Selection::Club(name) => Some(name),
        }
    }

    /// The highlight predicate: true iff a specific club is selected and
    /// this row is it. A name not present in the table highlights nothing.
    pub fn is_highlighted(&self, record: &ClubRecord) -> bool {
        self.club_name() == Some(record.name.as_str())
    }
}

// ---------------------------------------------------------------------------
// Derived views – pure functions of (table, sort key)
// ---------------------------------------------------------------------------

/// Sort keys of the comparative charts, one per chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Wins,
    TotalValue,
    AverageAge,
    AverageValue,
}

impl SortKey {
    fn value(self, record: &ClubRecord) -> f64 {
        match self {
            SortKey::Wins => record.wins as f64,
            SortKey::TotalValue => record.squad_total_value as f64,
            SortKey::AverageAge => record.squad_average_age,
            SortKey::AverageValue => record.squad_average_value as f64,
        }
    }
}

/// The full classification view: all rows by `original_rank` ascending.
pub fn classification(table: &ClubTable) -> Vec<&ClubRecord> {
    let mut rows: Vec<&ClubRecord> = table.records().iter().collect();
    rows.sort_by_key(|r| r.original_rank);
    rows
}

/// A chart view: all rows by the key descending, ties keeping the original
/// table order (stable sort).
pub fn ranked_by(table: &ClubTable, key: SortKey) -> Vec<&ClubRecord> {
    let mut rows: Vec<&ClubRecord> = table.records().iter().collect();
    rows.sort_by(|a, b| key.value(b).total_cmp(&key.value(a)));
    rows
}

/// Championship averages for the offense/defense quadrant lines.
#[derive(Debug, Clone, Copy)]
pub struct GoalMeans {
    pub goals_for: f64,
    pub goals_against: f64,
}

pub fn goal_means(table: &ClubTable) -> GoalMeans {
    let n = table.len().max(1) as f64;
    GoalMeans {
        goals_for: table.records().iter().map(|r| r.goals_for as f64).sum::<f64>() / n,
        goals_against: table
            .records()
            .iter()
            .map(|r| r.goals_against as f64)
            .sum::<f64>()
            / n,
    }
}

// ---------------------------------------------------------------------------
// Metric snapshot – the four headline numbers for a selected club
// ---------------------------------------------------------------------------

/// The four headline numbers shown when a specific club is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSnapshot {
    pub wins: u32,
    pub goal_difference: i32,
    pub goals_for: u32,
    /// Total squad value scaled to millions of euros.
    pub total_value_millions: f64,
}

impl MetricSnapshot {
    pub fn for_club(table: &ClubTable, name: &str) -> Option<Self> {
        let record = table.get(name)?;
        Some(MetricSnapshot {
            wins: record.wins,
            goal_difference: record.goal_difference,
            goals_for: record.goals_for,
            total_value_millions: record.total_value_millions(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(name: &str, rank: u32, wins: u32, total_value: i64, age: f64) -> ClubRecord {
        ClubRecord {
            name: name.to_string(),
            original_rank: rank,
            wins,
            losses: 10,
            draws: 38 - wins - 10,
            goals_for: wins * 2,
            goals_against: 40,
            goal_difference: (wins * 2) as i32 - 40,
            squad_total_value: total_value,
            squad_average_value: total_value / 25,
            squad_average_age: age,
        }
    }

    fn sample_table() -> ClubTable {
        // Deliberately out of rank order to exercise the classification sort.
        ClubTable::new(vec![
            club("Santos", 3, 15, 55_500_000, 24.5),
            club("Cruzeiro", 1, 24, 98_500_000, 25.9),
            club("Grêmio", 2, 15, 72_000_000, 26.0),
        ])
    }

    #[test]
    fn classification_orders_by_original_rank() {
        let table = sample_table();
        let rows = classification(&table);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cruzeiro", "Grêmio", "Santos"]);
    }

    #[test]
    fn ranked_by_wins_is_descending_and_stable() {
        let table = sample_table();
        let rows = ranked_by(&table, SortKey::Wins);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        // Santos and Grêmio tie on 15 wins; Santos comes first in the table.
        assert_eq!(names, vec!["Cruzeiro", "Santos", "Grêmio"]);
    }

    #[test]
    fn ranked_by_total_value_is_descending() {
        let table = sample_table();
        let rows = ranked_by(&table, SortKey::TotalValue);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cruzeiro", "Grêmio", "Santos"]);
    }

    #[test]
    fn todos_highlights_nothing() {
        let table = sample_table();
        let selection = Selection::Todos;
        assert!(table.records().iter().all(|r| !selection.is_highlighted(r)));
    }

    #[test]
    fn selecting_a_club_highlights_exactly_that_row() {
        let table = sample_table();
        let selection = Selection::Club("Grêmio".to_string());
        let highlighted: Vec<&str> = table
            .records()
            .iter()
            .filter(|r| selection.is_highlighted(r))
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(highlighted, vec!["Grêmio"]);
    }

    #[test]
    fn selecting_an_unknown_club_highlights_nothing() {
        let table = sample_table();
        let selection = Selection::Club("Barcelona".to_string());
        assert!(table.records().iter().all(|r| !selection.is_highlighted(r)));
    }

    #[test]
    fn metric_snapshot_scales_value_to_millions() {
        let table = sample_table();
        let snap = MetricSnapshot::for_club(&table, "Cruzeiro").unwrap();
        assert_eq!(snap.wins, 24);
        assert_eq!(snap.goals_for, 48);
        assert!((snap.total_value_millions - 98.5).abs() < 1e-9);
        assert!(MetricSnapshot::for_club(&table, "Barcelona").is_none());
    }

    #[test]
    fn goal_means_average_over_all_clubs() {
        let table = sample_table();
        let means = goal_means(&table);
        assert!((means.goals_for - (30.0 + 48.0 + 30.0) / 3.0).abs() < 1e-9);
        assert!((means.goals_against - 40.0).abs() < 1e-9);
    }
}
