use alloc::string::{String, ToString};

use thiserror::Error;
use virtual_grid::{MeasureError, MeasureTarget};

use crate::ProbeElement;

pub const ROW_INDEX_TAG: &str = "data-row-index";
pub const COLUMN_INDEX_TAG: &str = "data-column-index";

/// A probe measurement that could not be applied. The measurement is dropped.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AttributionError {
    #[error("probe has no `{tag}` tag")]
    MissingTag { tag: &'static str },

    #[error("probe tag `{tag}` is not an index: {value:?}")]
    InvalidTag { tag: &'static str, value: String },

    #[error(transparent)]
    Measure(#[from] MeasureError),
}

fn read_index<P: ProbeElement>(probe: &P, tag: &'static str) -> Result<usize, AttributionError> {
    let value = probe.tag(tag).ok_or(AttributionError::MissingTag { tag })?;
    value
        .trim()
        .parse()
        .map_err(|_| AttributionError::InvalidTag {
            tag,
            value: value.to_string(),
        })
}

/// Reads the row a row probe belongs to.
pub fn row_target<P: ProbeElement>(probe: &P) -> Result<MeasureTarget, AttributionError> {
    Ok(MeasureTarget::Row(read_index(probe, ROW_INDEX_TAG)?))
}

/// Reads the cell a cell probe belongs to.
pub fn cell_target<P: ProbeElement>(probe: &P) -> Result<MeasureTarget, AttributionError> {
    Ok(MeasureTarget::Cell {
        row: read_index(probe, ROW_INDEX_TAG)?,
        column: read_index(probe, COLUMN_INDEX_TAG)?,
    })
}

/// Classifies an observed probe: anything tagged with a column index is a cell.
pub fn probe_target<P: ProbeElement>(probe: &P) -> Result<MeasureTarget, AttributionError> {
    if probe.tag(COLUMN_INDEX_TAG).is_some() {
        cell_target(probe)
    } else {
        row_target(probe)
    }
}
