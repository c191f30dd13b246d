use alloc::sync::Arc;

use crate::{Axis, ConfigError, ItemKey};

/// Maps an item index to a size along its axis.
pub type SizeFn = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// Maps an item index to its stable identity.
pub type KeyFn<K> = Arc<dyn Fn(usize) -> K + Send + Sync>;

pub const DEFAULT_ROW_OVERSCAN: usize = 3;
pub const DEFAULT_COLUMN_OVERSCAN: usize = 1;
pub const DEFAULT_SCROLLING_DELAY_MS: u64 = 150;

/// Configuration for one axis of a [`crate::DynamicSizeGrid`].
pub struct AxisOptions<K = ItemKey> {
    pub count: usize,
    /// Authoritative per-index size. When set, measurements never change the layout.
    pub size: Option<SizeFn>,
    /// Placeholder size used until an item has been measured.
    pub estimate_size: Option<SizeFn>,
    pub get_key: KeyFn<K>,
    pub overscan: usize,
}

impl<K> Clone for AxisOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            size: self.size.clone(),
            estimate_size: self.estimate_size.clone(),
            get_key: Arc::clone(&self.get_key),
            overscan: self.overscan,
        }
    }
}

impl<K> AxisOptions<K> {
    pub fn new(
        count: usize,
        overscan: usize,
        get_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            size: None,
            estimate_size: None,
            get_key: Arc::new(get_key),
            overscan,
        }
    }

    pub fn with_size(mut self, size: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        self.size = Some(Arc::new(size));
        self
    }

    pub fn with_estimate_size(
        mut self,
        estimate_size: impl Fn(usize) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.estimate_size = Some(Arc::new(estimate_size));
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub(crate) fn sizing(&self) -> Option<Sizing> {
        match (&self.size, &self.estimate_size) {
            (Some(size), _) => Some(Sizing::Fixed(Arc::clone(size))),
            (None, Some(estimate)) => Some(Sizing::Estimate(Arc::clone(estimate))),
            (None, None) => None,
        }
    }
}

impl<K> core::fmt::Debug for AxisOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisOptions")
            .field("count", &self.count)
            .field("size", &self.size.as_ref().map(|_| ".."))
            .field("estimate_size", &self.estimate_size.as_ref().map(|_| ".."))
            .field("overscan", &self.overscan)
            .finish_non_exhaustive()
    }
}

/// The validated sizing strategy of an axis.
#[derive(Clone)]
pub(crate) enum Sizing {
    Fixed(SizeFn),
    Estimate(SizeFn),
}

impl core::fmt::Debug for Sizing {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(_) => f.write_str("Fixed(..)"),
            Self::Estimate(_) => f.write_str("Estimate(..)"),
        }
    }
}

/// Configuration for [`crate::DynamicSizeGrid`].
///
/// Closures are stored in `Arc`s, so cloning is cheap.
pub struct GridOptions<RK = ItemKey, CK = ItemKey> {
    pub rows: AxisOptions<RK>,
    pub columns: AxisOptions<CK>,
    /// Quiet period after the last scroll notification before `is_scrolling` resets.
    pub scrolling_delay_ms: u64,
}

impl<RK, CK> Clone for GridOptions<RK, CK> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            columns: self.columns.clone(),
            scrolling_delay_ms: self.scrolling_delay_ms,
        }
    }
}

impl GridOptions<ItemKey, ItemKey> {
    /// Creates options for a grid keyed by index on both axes.
    ///
    /// Each axis still needs a size or an estimate before the grid can be built.
    pub fn new(rows_count: usize, columns_count: usize) -> Self {
        Self::new_with_keys(rows_count, |i| i as u64, columns_count, |i| i as u64)
    }
}

impl<RK, CK> GridOptions<RK, CK> {
    /// Creates options with custom key mappings.
    ///
    /// Keys identify measurements: when the data set is reordered, a measured size follows the
    /// key that produced it.
    pub fn new_with_keys(
        rows_count: usize,
        get_row_key: impl Fn(usize) -> RK + Send + Sync + 'static,
        columns_count: usize,
        get_column_key: impl Fn(usize) -> CK + Send + Sync + 'static,
    ) -> Self {
        Self {
            rows: AxisOptions::new(rows_count, DEFAULT_ROW_OVERSCAN, get_row_key),
            columns: AxisOptions::new(columns_count, DEFAULT_COLUMN_OVERSCAN, get_column_key),
            scrolling_delay_ms: DEFAULT_SCROLLING_DELAY_MS,
        }
    }

    pub fn with_row_height(mut self, f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        self.rows = self.rows.with_size(f);
        self
    }

    pub fn with_estimate_row_height(
        mut self,
        f: impl Fn(usize) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.rows = self.rows.with_estimate_size(f);
        self
    }

    pub fn with_column_width(mut self, f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        self.columns = self.columns.with_size(f);
        self
    }

    pub fn with_estimate_column_width(
        mut self,
        f: impl Fn(usize) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.columns = self.columns.with_estimate_size(f);
        self
    }

    pub fn with_overscan_y(mut self, overscan: usize) -> Self {
        self.rows.overscan = overscan;
        self
    }

    pub fn with_overscan_x(mut self, overscan: usize) -> Self {
        self.columns.overscan = overscan;
        self
    }

    pub fn with_scrolling_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scrolling_delay_ms = delay_ms;
        self
    }

    pub(crate) fn validate(&self) -> Result<(Sizing, Sizing), ConfigError> {
        match (self.rows.sizing(), self.columns.sizing()) {
            (Some(rows), Some(columns)) => Ok((rows, columns)),
            (None, None) => Err(ConfigError::NoSizingStrategy),
            (None, Some(_)) => Err(ConfigError::MissingSizing { axis: Axis::Row }),
            (Some(_), None) => Err(ConfigError::MissingSizing { axis: Axis::Column }),
        }
    }
}

impl<RK, CK> core::fmt::Debug for GridOptions<RK, CK> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridOptions")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("scrolling_delay_ms", &self.scrolling_delay_ms)
            .finish()
    }
}
