use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use thiserror::Error;

use super::model::{ClubRecord, ClubTable};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Typed failures of the loader. Everything here is unrecoverable for the
/// current source file: the UI reports the message and renders nothing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset not found or unreadable: {path}")]
    DataNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A cell that must be numeric still is not one after normalization
    /// (thousands-separator stripping). Never silently coerced to zero.
    #[error("row {row}, column '{column}': value '{token}' is not numeric")]
    MalformedValue {
        row: usize,
        column: String,
        token: String,
    },

    #[error("source file is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// The rank column is identified structurally: exactly one header that
    /// is not a known column. Zero or several candidates is a schema fault.
    #[error("cannot identify the rank column: extra headers {0:?}")]
    AmbiguousRankColumn(Vec<String>),

    #[error("duplicate club name '{0}'")]
    DuplicateClub(String),

    #[error("rank values do not form 1..={0} without gaps or duplicates")]
    BrokenRankOrder(usize),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Schema resolution
// ---------------------------------------------------------------------------

/// Headers the schema binds by name. The single remaining header is taken to
/// be the rank column, whatever the source calls it ("Pos.", "Posicao", ...).
/// This replaces the original dataset's rename of its ambiguous "Pos." header.
const KNOWN_COLUMNS: [&str; 10] = [
    "Clubes",
    "Vitorias",
    "Derrotas",
    "Empates",
    "Saldo",
    "Gols",
    "GolsSofridos",
    "Idade_Media",
    "Valor_total_formatted",
    "Media_Valor_formatted",
];

/// Resolved column indices for one source file.
struct Columns {
    rank: usize,
    name: usize,
    wins: usize,
    losses: usize,
    draws: usize,
    balance: usize,
    goals_for: usize,
    goals_against: usize,
    age: usize,
    total_value: usize,
    average_value: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let names: Vec<&str> = headers.iter().map(str::trim).collect();

        let find = |wanted: &'static str| -> Result<usize, LoadError> {
            names
                .iter()
                .position(|h| *h == wanted)
                .ok_or(LoadError::MissingColumn(wanted))
        };

        // Whatever header is left over after binding the known columns is
        // the source's rank column.
        let extras: Vec<String> = names
            .iter()
            .filter(|h| !KNOWN_COLUMNS.contains(h))
            .map(|h| h.to_string())
            .collect();
        if extras.len() != 1 {
            return Err(LoadError::AmbiguousRankColumn(extras));
        }
        let rank = names
            .iter()
            .position(|h| !KNOWN_COLUMNS.contains(h))
            .expect("one extra header exists");

        Ok(Columns {
            rank,
            name: find("Clubes")?,
            wins: find("Vitorias")?,
            losses: find("Derrotas")?,
            draws: find("Empates")?,
            balance: find("Saldo")?,
            goals_for: find("Gols")?,
            goals_against: find("GolsSofridos")?,
            age: find("Idade_Media")?,
            total_value: find("Valor_total_formatted")?,
            average_value: find("Media_Valor_formatted")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse and normalize one season CSV into a [`ClubTable`].
///
/// The loader binds columns by header name, coerces every cell to its typed
/// field, strips `.` thousands separators from the monetary columns, and
/// rejects tables with duplicate club names or rank values that are not a
/// permutation of 1..N.
pub fn load(path: &Path) -> Result<ClubTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::DataNotFound {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let cols = Columns::resolve(reader.headers()?)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1; // 1-based data row for messages
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        records.push(ClubRecord {
            name: cell(cols.name).to_string(),
            original_rank: parse_int(cell(cols.rank), row, "rank")?,
            wins: parse_int(cell(cols.wins), row, "Vitorias")?,
            losses: parse_int(cell(cols.losses), row, "Derrotas")?,
            draws: parse_int(cell(cols.draws), row, "Empates")?,
            goal_difference: parse_signed(cell(cols.balance), row, "Saldo")?,
            goals_for: parse_int(cell(cols.goals_for), row, "Gols")?,
            goals_against: parse_int(cell(cols.goals_against), row, "GolsSofridos")?,
            squad_average_age: parse_float(cell(cols.age), row, "Idade_Media")?,
            squad_total_value: parse_monetary(cell(cols.total_value), row, "Valor_total_formatted")?,
            squad_average_value: parse_monetary(cell(cols.average_value), row, "Media_Valor_formatted")?,
        });
    }

    validate(&records)?;
    Ok(ClubTable::new(records))
}

// ---------------------------------------------------------------------------
// Cell coercion
// ---------------------------------------------------------------------------

fn malformed(row: usize, column: &str, token: &str) -> LoadError {
    LoadError::MalformedValue {
        row,
        column: column.to_string(),
        token: token.to_string(),
    }
}

fn parse_int(raw: &str, row: usize, column: &str) -> Result<u32, LoadError> {
    raw.parse().map_err(|_| malformed(row, column, raw))
}

fn parse_signed(raw: &str, row: usize, column: &str) -> Result<i32, LoadError> {
    raw.parse().map_err(|_| malformed(row, column, raw))
}

fn parse_float(raw: &str, row: usize, column: &str) -> Result<f64, LoadError> {
    raw.parse().map_err(|_| malformed(row, column, raw))
}

/// Coerce a monetary cell to an integer. Accepts plain integers as-is and
/// locale-formatted strings with `.` as thousands separator
/// (`"45.000.000"` → `45_000_000`).
fn parse_monetary(raw: &str, row: usize, column: &str) -> Result<i64, LoadError> {
    let stripped: String = raw.chars().filter(|c| *c != '.').collect();
    if stripped.is_empty() {
        return Err(malformed(row, column, raw));
    }
    stripped.parse().map_err(|_| malformed(row, column, raw))
}

// ---------------------------------------------------------------------------
// Table-level validation
// ---------------------------------------------------------------------------

fn validate(records: &[ClubRecord]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for r in records {
        if !seen.insert(r.name.as_str()) {
            return Err(LoadError::DuplicateClub(r.name.clone()));
        }
    }

    let mut ranks: Vec<u32> = records.iter().map(|r| r.original_rank).collect();
    ranks.sort_unstable();
    if !ranks.into_iter().eq(1..=records.len() as u32) {
        return Err(LoadError::BrokenRankOrder(records.len()));
    }
    Ok(())
}
