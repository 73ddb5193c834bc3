use {
    crate::{config::DF, data::HistoricalDataset, error::Result},
    std::{
        collections::HashMap,
        path::{Path, PathBuf},
        sync::{Arc, Mutex, MutexGuard, OnceLock},
    },
};

/// Compute-once accessor for loaded datasets, keyed by source path.
/// Only successful loads are stored; a failed load is returned to the caller and
/// the next request for that path reads the file again.
#[derive(Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Arc<HistoricalDataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<HistoricalDataset>> {
        self.get_or_load_with(path, |p: &Path| HistoricalDataset::load(p))
    }

    /// Same as `get_or_load` with an injectable loader. The lock is held across the load so
    /// two callers never read the same file twice.
    pub fn get_or_load_with<F>(&self, path: impl AsRef<Path>, loader: F) -> Result<Arc<HistoricalDataset>>
    where
        F: FnOnce(&Path) -> Result<HistoricalDataset>,
    {
        let path = path.as_ref();
        let mut entries = self.lock_entries();

        if let Some(hit) = entries.get(path) {
            if DF.log_dataset {
                log::debug!("Dataset cache hit: {}", path.display());
            }
            return Ok(Arc::clone(hit));
        }

        let dataset = Arc::new(loader(path)?);
        entries.insert(path.to_path_buf(), Arc::clone(&dataset));
        Ok(dataset)
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.lock_entries().contains_key(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned lock only means another caller panicked mid-load; the map itself is still valid.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<PathBuf, Arc<HistoricalDataset>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Process-wide cache, created on first use.
pub fn dataset_cache() -> &'static DatasetCache {
    static CACHE: OnceLock<DatasetCache> = OnceLock::new();
    CACHE.get_or_init(DatasetCache::new)
}

/// Loads through the process-wide cache.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Arc<HistoricalDataset>> {
    dataset_cache().get_or_load(path)
}
