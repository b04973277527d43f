//! Two-tier response cache: an in-memory LRU in front of JSON files on disk.
//!
//! Responses from the stats API are stored as raw `serde_json::Value` so the
//! cache does not need to know about record schemas. Lookups check memory
//! first, then fall back to the file cache and promote hits into memory.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex},
};
use tracing::{debug, warn};

use crate::cli::types::{FranchiseId, PlayerId, StatKind, Year};

/// Directory under the user cache dir that holds response files.
pub const CACHE_DIR_NAME: &str = "bbstats";

/// Default cache root: `~/.cache/bbstats` (or the platform equivalent).
pub fn default_cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(CACHE_DIR_NAME)
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Key usable for both the memory and the disk tier.
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// File-system safe name of the entry, without extension.
    fn to_file_key(&self) -> String;

    fn to_file_path(&self, root: &Path) -> PathBuf {
        root.join(format!("{}.json", self.to_file_key()))
    }
}

/// Keep ids and names usable as file names.
fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}

/// Cache key for the franchise list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FranchisesCacheKey;

impl CacheKey for FranchisesCacheKey {
    fn to_file_key(&self) -> String {
        "franchises".to_string()
    }
}

/// Cache key for `/teambatting` and `/teampitching` responses
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamStatsCacheKey {
    pub kind: StatKind,
    pub team: FranchiseId,
    pub start_year: Option<Year>,
    pub end_year: Option<Year>,
}

impl CacheKey for TeamStatsCacheKey {
    fn to_file_key(&self) -> String {
        let years = |y: Option<Year>| {
            y.map(|y| y.as_i32().to_string())
                .unwrap_or_else(|| "any".to_string())
        };
        format!(
            "team{}_{}_{}_{}",
            self.kind.endpoint_suffix(),
            sanitize(self.team.as_str()),
            years(self.start_year),
            years(self.end_year)
        )
    }
}

/// Cache key for `/playerbatting` and `/playerpitching` responses
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerStatsCacheKey {
    pub kind: StatKind,
    pub player: PlayerId,
}

impl CacheKey for PlayerStatsCacheKey {
    fn to_file_key(&self) -> String {
        format!(
            "player{}_{}",
            self.kind.endpoint_suffix(),
            sanitize(self.player.as_str())
        )
    }
}

/// Cache key for id <-> name lookups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerLookupCacheKey {
    NameOf(PlayerId),
    IdOf(String),
}

impl CacheKey for PlayerLookupCacheKey {
    fn to_file_key(&self) -> String {
        match self {
            PlayerLookupCacheKey::NameOf(id) => format!("playername_{}", sanitize(id.as_str())),
            PlayerLookupCacheKey::IdOf(name) => format!("playerid_{}", sanitize(name)),
        }
    }
}

/// Unified cache that combines LRU memory cache with file system persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Mutex<LruCache<K, V>>,
    memory_capacity: usize,
    /// Directory for the disk tier; `None` keeps entries in memory only.
    root: Option<PathBuf>,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Create a cache persisting under `root`.
    pub fn new(memory_capacity: usize, root: Option<PathBuf>) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Mutex::new(LruCache::new(capacity)),
            memory_capacity: capacity.get(),
            root,
        }
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Ok(mut cache) = self.memory_cache.lock() {
            if let Some(value) = cache.get(key) {
                return Some(value.clone());
            }
        }

        let value = self.get_from_disk(key)?;
        if let Ok(mut cache) = self.memory_cache.lock() {
            cache.put(key.clone(), value.clone());
        }
        Some(value)
    }

    /// Put an item into both tiers. Disk failures are logged and ignored.
    pub fn put(&self, key: K, value: V) {
        if let Err(e) = self.put_to_disk(&key, &value) {
            warn!(file = %key.to_file_key(), error = %e, "failed to write cache file");
        }
        if let Ok(mut cache) = self.memory_cache.lock() {
            cache.put(key, value);
        }
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = key.to_file_path(self.root.as_ref()?);
        let content = try_read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(value) => {
                debug!(path = %path.display(), "cache file hit");
                Some(value)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable cache file");
                None
            }
        }
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let Some(root) = &self.root else {
            return Ok(());
        };
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&key.to_file_path(root), &content)
    }

    /// Drop `key` from both tiers so the next `get` misses.
    pub fn invalidate(&self, key: &K) {
        if let Ok(mut cache) = self.memory_cache.lock() {
            cache.pop(key);
        }
        if let Err(e) = self.invalidate_disk_cache(key) {
            warn!(file = %key.to_file_key(), error = %e, "failed to remove cache file");
        }
    }

    fn invalidate_disk_cache(&self, key: &K) -> std::io::Result<()> {
        if let Some(root) = &self.root {
            let path = key.to_file_path(root);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    /// (entries in memory, memory capacity)
    pub fn memory_stats(&self) -> (usize, usize) {
        let used = self.memory_cache.lock().map(|c| c.len()).unwrap_or(0);
        (used, self.memory_capacity)
    }
}

/// Response caches for every stats API endpoint.
pub struct CacheManager {
    pub franchises: UnifiedCache<FranchisesCacheKey, Value>,
    pub team_stats: UnifiedCache<TeamStatsCacheKey, Value>,
    pub player_stats: UnifiedCache<PlayerStatsCacheKey, Value>,
    pub player_lookup: UnifiedCache<PlayerLookupCacheKey, Value>,
}

impl CacheManager {
    /// Caches persisting under the user cache directory.
    pub fn new() -> Self {
        Self::with_root(Some(default_cache_root()))
    }

    /// Caches persisting under `root`, or memory only when `None`.
    pub fn with_root(root: Option<PathBuf>) -> Self {
        Self {
            franchises: UnifiedCache::new(1, root.clone()),
            team_stats: UnifiedCache::new(100, root.clone()),
            player_stats: UnifiedCache::new(100, root.clone()),
            player_lookup: UnifiedCache::new(200, root),
        }
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Global cache manager instance for use across the application
pub static GLOBAL_CACHE: LazyLock<CacheManager> = LazyLock::new(CacheManager::new);
