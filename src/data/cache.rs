use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use super::loader::{self, LoadError};
use super::model::SharedTable;

// ---------------------------------------------------------------------------
// Process-wide memoized load
// ---------------------------------------------------------------------------

static TABLE_CACHE: OnceLock<Mutex<HashMap<PathBuf, SharedTable>>> = OnceLock::new();

/// Load a season table, memoized per resolved path for the process lifetime.
///
/// The map lock is held across the parse, so concurrent callers block on a
/// single in-flight load and all receive the same `Arc` instance; the file
/// is never read twice for one path. Failed loads are not cached, a later
/// call retries from disk.
pub fn load_cached(path: &Path) -> Result<SharedTable, LoadError> {
    let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

    let cache = TABLE_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(table) = map.get(&key) {
        return Ok(Arc::clone(table));
    }

    let table = Arc::new(loader::load(path)?);
    map.insert(key, Arc::clone(&table));
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fixture(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("brasileirao-cache-{}-{name}.csv", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            "Pos.,Clubes,Vitorias,Derrotas,Empates,Saldo,Gols,GolsSofridos,\
             Idade_Media,Valor_total_formatted,Media_Valor_formatted"
        )
        .unwrap();
        writeln!(f, "1,Cruzeiro,24,6,8,29,67,38,25.9,98.500.000,3.940.000").unwrap();
        path
    }

    #[test]
    fn repeated_loads_share_one_table() {
        let path = fixture("share");
        let first = load_cached(&path).unwrap();

        // Corrupt the file on disk: a second load must NOT re-read it.
        std::fs::write(&path, "garbage").unwrap();
        let second = load_cached(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failed_load_is_not_cached() {
        let path = std::env::temp_dir().join(format!("brasileirao-cache-{}-missing.csv", std::process::id()));
        assert!(matches!(
            load_cached(&path),
            Err(LoadError::DataNotFound { .. })
        ));

        // Creating the file afterwards makes the same path loadable.
        let real = fixture("retry");
        std::fs::rename(&real, &path).unwrap();
        let table = load_cached(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(table.len(), 1);
    }
}
