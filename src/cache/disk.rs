use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DistanceCache, Error, MemoryCache, PairKey};

const FORMAT_VERSION: u32 = 1;

/// Name under which distance results are stored.
pub const DISTANCE_FUNCTION: &str = "euclidean_distance";

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    version: u32,
    #[serde(default)]
    entries: Vec<CacheEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    function: String,
    a: [f64; 3],
    b: [f64; 3],
    value: f64,
}

/// A [`MemoryCache`] backed by a TOML file inside a cache directory.
///
/// Entries are keyed by function name and the literal coordinate values
/// only. Entries recorded under another function name are not served but
/// are carried through untouched when the file is rewritten. Pending entries are written on [`DiskCache::persist`], and again
/// on drop if anything changed since, so the store is closed on every exit
/// path.
#[derive(Debug)]
pub struct DiskCache {
    path: PathBuf,
    memory: MemoryCache,
    foreign: Vec<CacheEntry>,
    loaded: usize,
    dirty: bool,
}

impl DiskCache {
    pub const FILE_NAME: &'static str = "distance-cache.toml";

    /// Opens (or creates) the store in `dir`.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created, the store cannot be read,
    /// or its contents are not a valid cache file.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

        let path = dir.join(Self::FILE_NAME);
        let (memory, foreign) = load(&path)?;
        let loaded = memory.len();
        log::info!(
            "opened distance cache {} ({} entries)",
            path.display(),
            loaded
        );

        Ok(Self {
            path,
            memory,
            foreign,
            loaded,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries that were present when the store was opened.
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes all entries to disk through a temporary file and rename.
    pub fn persist(&mut self) -> Result<(), Error> {
        if !self.dirty {
            return Ok(());
        }

        let file = CacheFile {
            version: FORMAT_VERSION,
            entries: self
                .memory
                .sorted_entries()
                .into_iter()
                .map(|(key, value)| {
                    let (a, b) = key.positions();
                    CacheEntry {
                        function: DISTANCE_FUNCTION.to_string(),
                        a,
                        b,
                        value,
                    }
                })
                .chain(self.foreign.iter().cloned())
                .collect(),
        };
        let text = toml::to_string(&file)?;

        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, text).map_err(|e| Error::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| Error::io(&self.path, e))?;

        self.dirty = false;
        log::info!(
            "saved distance cache {} ({} entries)",
            self.path.display(),
            self.memory.len()
        );
        Ok(())
    }
}

impl DistanceCache for DiskCache {
    fn get(&self, key: &PairKey) -> Option<f64> {
        self.memory.get(key)
    }

    fn insert(&mut self, key: PairKey, distance: f64) {
        self.memory.insert(key, distance);
        self.dirty = true;
    }

    fn len(&self) -> usize {
        self.memory.len()
    }
}

impl Drop for DiskCache {
    fn drop(&mut self) {
        if let Err(e) = self.persist() {
            log::warn!("failed to save distance cache: {e}");
        }
    }
}

fn load(path: &Path) -> Result<(MemoryCache, Vec<CacheEntry>), Error> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok((MemoryCache::new(), Vec::new()));
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    let file: CacheFile = toml::from_str(&text).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    if file.version != FORMAT_VERSION {
        log::info!(
            "ignoring distance cache {} with format version {}",
            path.display(),
            file.version
        );
        return Ok((MemoryCache::new(), Vec::new()));
    }

    let (ours, foreign): (Vec<_>, Vec<_>) = file
        .entries
        .into_iter()
        .partition(|entry| entry.function == DISTANCE_FUNCTION);

    let memory = ours
        .into_iter()
        .map(|entry| (PairKey::new(entry.a, entry.b), entry.value))
        .collect();
    Ok((memory, foreign))
}
