use serde::{Deserialize, Serialize};

/// Counters reported by `GET /api/cache/stats`.
///
/// `keys`, `ksize` and `vsize` only count entries that have not expired yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub keys: usize,
    pub ksize: usize,
    pub vsize: usize,
}
