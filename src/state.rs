use std::path::{Path, PathBuf};

use crate::data::cache;
use crate::data::model::SharedTable;
use crate::data::views::Selection;

/// Default dataset, resolved relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/Tabela_Clubes_2014.csv";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded season table (None when the startup load failed).
    pub table: Option<SharedTable>,

    /// Current sidebar selection.
    pub selection: Selection,

    /// Path the table was loaded from.
    pub source_path: PathBuf,

    /// Load error shown instead of any view. While set, nothing else
    /// renders: a broken dataset must not produce partial charts.
    pub load_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = AppState {
            table: None,
            selection: Selection::Todos,
            source_path: PathBuf::from(DEFAULT_DATA_PATH),
            load_error: None,
        };
        state.load_from(Path::new(DEFAULT_DATA_PATH));
        state
    }
}

impl AppState {
    /// Load (or re-load from cache) the season table at `path`. On failure
    /// the previous table is dropped and the error is surfaced to the UI.
    pub fn load_from(&mut self, path: &Path) {
        match cache::load_cached(path) {
            Ok(table) => {
                log::info!("loaded {} clubs from {}", table.len(), path.display());
                self.table = Some(table);
                self.selection = Selection::Todos;
                self.source_path = path.to_path_buf();
                self.load_error = None;
            }
            Err(err) => {
                log::error!("failed to load {}: {err}", path.display());
                self.table = None;
                self.selection = Selection::Todos;
                self.load_error = Some(err.to_string());
            }
        }
    }
}
