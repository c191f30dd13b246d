use crate::key::{KeyCacheKey, KeyMap, KeySizeMap};

/// Measured row heights by row key.
///
/// Only real measurements are stored here, never estimates.
#[derive(Clone, Debug)]
pub struct RowHeightCache<K> {
    sizes: KeySizeMap<K>,
}

impl<K: KeyCacheKey> RowHeightCache<K> {
    pub fn new() -> Self {
        Self {
            sizes: KeySizeMap::<K>::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<f64> {
        self.sizes.get(key).copied()
    }

    /// Stores a measurement and returns the previous one.
    pub fn insert(&mut self, key: K, size: f64) -> Option<f64> {
        self.sizes.insert(key, size)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn clear(&mut self) {
        self.sizes.clear();
    }
}

impl<K: KeyCacheKey> Default for RowHeightCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Measured cell widths keyed by `(row key, column key)`.
///
/// Any row's content may widen a column, so entries are grouped per column and a column's
/// width is the widest measurement recorded for it.
#[derive(Clone, Debug)]
pub struct ColumnWidthCache<RK, CK> {
    columns: KeyMap<CK, KeySizeMap<RK>>,
    len: usize,
}

impl<RK: KeyCacheKey, CK: KeyCacheKey> ColumnWidthCache<RK, CK> {
    pub fn new() -> Self {
        Self {
            columns: KeyMap::new(),
            len: 0,
        }
    }

    pub fn get(&self, row: &RK, column: &CK) -> Option<f64> {
        self.columns.get(column)?.get(row).copied()
    }

    /// Stores a cell measurement and returns the previous one for the same cell.
    pub fn insert(&mut self, row: RK, column: CK, width: f64) -> Option<f64> {
        let prev = self.columns.entry(column).or_default().insert(row, width);
        if prev.is_none() {
            self.len = self.len.saturating_add(1);
        }
        prev
    }

    /// The widest measurement recorded for `column` across all rows.
    pub fn widest(&self, column: &CK) -> Option<f64> {
        self.columns
            .get(column)?
            .values()
            .copied()
            .reduce(f64::max)
    }

    /// Number of cached cells.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.columns.clear();
        self.len = 0;
    }
}

impl<RK: KeyCacheKey, CK: KeyCacheKey> Default for ColumnWidthCache<RK, CK> {
    fn default() -> Self {
        Self::new()
    }
}
