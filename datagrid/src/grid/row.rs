//! Row rendering cache and row highlight state.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::trace;

use super::column::ColumnDescriptor;

/// Counters describing how much rendering work the cache saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Rows whose cells were computed from the column renderers.
    pub rows_rendered: usize,
    /// Rows whose cells were reused from the cache.
    pub cache_hits: usize,
}

struct CachedRow<T> {
    source: Arc<T>,
    cells: Arc<[String]>,
}

/// Memoized cells keyed by row key.
///
/// A row's cells are reused as long as the host hands back the very same
/// `Arc` (pointer identity). A new allocation for the same key is treated
/// as changed data and rendered again.
pub struct RowCache<T> {
    entries: HashMap<String, CachedRow<T>>,
    stats: RenderStats,
}

impl<T> RowCache<T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: RenderStats::default(),
        }
    }

    /// Return the cells of a row, rendering them only when needed.
    pub fn cells(
        &mut self,
        key: &str,
        row: &Arc<T>,
        columns: &[ColumnDescriptor<T>],
    ) -> Arc<[String]> {
        if let Some(cached) = self.entries.get(key)
            && Arc::ptr_eq(&cached.source, row)
        {
            trace!("Row '{}' unchanged, reusing cells", key);
            self.stats.cache_hits += 1;
            return Arc::clone(&cached.cells);
        }

        let cells: Arc<[String]> = columns.iter().map(|c| c.render(row)).collect();
        self.stats.rows_rendered += 1;
        self.entries.insert(
            key.to_string(),
            CachedRow {
                source: Arc::clone(row),
                cells: Arc::clone(&cells),
            },
        );
        cells
    }

    /// Drop entries whose key is not in `keys`.
    pub fn retain(&mut self, keys: &HashSet<String>) {
        self.entries.retain(|k, _| keys.contains(k));
    }

    /// Number of cached rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendering counters since creation.
    pub fn stats(&self) -> RenderStats {
        self.stats
    }
}

impl<T> Default for RowCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for RowCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowCache")
            .field("len", &self.entries.len())
            .field("stats", &self.stats)
            .finish()
    }
}

/// Hover and click highlight of rows, keyed by row key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowHighlight {
    hovered: Option<String>,
    active: Option<String>,
}

impl RowHighlight {
    /// The hovered row key.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// The active (clicked) row key.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Set or clear the hovered row. Returns `true` if it changed.
    pub fn hover(&mut self, key: Option<&str>) -> bool {
        if self.hovered.as_deref() == key {
            return false;
        }
        self.hovered = key.map(str::to_string);
        true
    }

    /// Toggle the active row: clicking the active row deactivates it.
    pub fn click(&mut self, key: &str) {
        if self.active.as_deref() == Some(key) {
            self.active = None;
        } else {
            self.active = Some(key.to_string());
        }
    }

    /// Forget highlights on rows no longer present.
    pub fn retain(&mut self, keys: &HashSet<String>) {
        if self.hovered.as_ref().is_some_and(|k| !keys.contains(k)) {
            self.hovered = None;
        }
        if self.active.as_ref().is_some_and(|k| !keys.contains(k)) {
            self.active = None;
        }
    }
}
