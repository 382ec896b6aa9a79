//! Position rescaling onto the unit interval.
//!
//! Anchor positions may be supplied in any numeric domain; the builders
//! rescale them into [0, 1] before emitting table entries. The math is the
//! usual `(value - vmin) / (vmax - vmin)`, with a hard failure on a
//! collapsed domain instead of a silent division by zero.

use ndarray::{Array1, ArrayView1};

use crate::error::{MunsellError, Result};

/// Map a value onto [0, 1] given the domain bounds.
///
/// Fails with [`MunsellError::DegenerateDomain`] when `vmin == vmax`, which
/// is only reachable through a single-anchor list or malformed input.
pub fn normalize(value: f64, vmin: f64, vmax: f64) -> Result<f64> {
    if vmax == vmin {
        return Err(MunsellError::DegenerateDomain { vmin, vmax });
    }
    Ok((value - vmin) / (vmax - vmin))
}

/// Vectorized form of [`normalize`] over a whole position array.
pub fn normalize_all(values: ArrayView1<'_, f64>, vmin: f64, vmax: f64) -> Result<Array1<f64>> {
    if vmax == vmin {
        return Err(MunsellError::DegenerateDomain { vmin, vmax });
    }
    Ok(values.mapv(|v| (v - vmin) / (vmax - vmin)))
}

/// Derive the (vmin, vmax) domain from a sequence of position values
pub fn position_range<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), v| (lo.min(v), hi.max(v)),
    )
}
