use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::{debug, info};

use super::error::LoadError;
use super::loader::{load, Catalog};

/// Identity of a catalog source at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceFingerprint {
    path: PathBuf,
    modified: Option<SystemTime>,
    len: u64,
}

impl SourceFingerprint {
    fn read(path: &Path) -> Result<Self, LoadError> {
        let meta = fs::metadata(path).map_err(|e| LoadError::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

/// Memoizes the loaded catalog for one source file.
///
/// Owned by the application context rather than kept in a global. The cached
/// catalog is reused while the file's path, size and modification time are
/// unchanged; any difference triggers a reload.
#[derive(Debug, Default)]
pub struct CatalogCache {
    entry: Option<(SourceFingerprint, Arc<Catalog>)>,
    loads: usize,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the catalog for `path`, loading it only when the source changed.
    pub fn get(&mut self, path: impl AsRef<Path>) -> Result<Arc<Catalog>, LoadError> {
        let path = path.as_ref();
        let fingerprint = SourceFingerprint::read(path)?;

        if let Some((cached, catalog)) = &self.entry {
            if *cached == fingerprint {
                debug!(path = %path.display(), "catalog cache hit");
                return Ok(Arc::clone(catalog));
            }
            info!(path = %path.display(), "catalog source changed; reloading");
        }

        let catalog = Arc::new(load(path)?);
        self.entry = Some((fingerprint, Arc::clone(&catalog)));
        self.loads += 1;
        Ok(catalog)
    }

    /// Drop the cached catalog so the next [`get`](Self::get) reloads.
    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            info!("catalog cache cleared");
        }
    }

    /// How many times a file was actually parsed through this cache.
    pub fn load_count(&self) -> usize {
        self.loads
    }
}
