//! Continuous colormap table construction.
//!
//! Each anchor contributes one `(x, v, v)` entry per channel; the duplicated
//! value tells the downstream interpolator to ramp smoothly between
//! neighboring anchors.

use ndarray::{Array1, ArrayView1};
use tracing::debug;

use super::SegmentTable;
use crate::color::{ColorParser, ColorSpec};
use crate::error::{MunsellError, Result};
use crate::logging::log_build_stats;
use crate::scale;

/// Build a continuous segment table from (position, color) anchors.
///
/// Positions default to an even spacing over [0, 1] including both
/// endpoints. Descending position lists are re-reversed into ascending
/// order together with their colors; any other non-monotonic arrangement is
/// an error.
pub fn build(
    parser: &ColorParser,
    colors: &[ColorSpec],
    positions: Option<&[f64]>,
    reverse: bool,
    name: &str,
) -> Result<SegmentTable> {
    if colors.is_empty() {
        return Err(MunsellError::EmptyInput {
            what: "anchor color",
        });
    }

    debug!(
        anchors = colors.len(),
        name = name,
        reverse = reverse,
        "Building continuous colormap table"
    );

    let mut ordered: Vec<&ColorSpec> = colors.iter().collect();
    if reverse {
        ordered.reverse();
    }

    let mut positions: Vec<f64> = match positions {
        Some(p) => {
            if p.len() != ordered.len() {
                return Err(MunsellError::LengthMismatch {
                    colors: ordered.len(),
                    positions: p.len(),
                });
            }
            p.to_vec()
        }
        None => Array1::linspace(0.0, 1.0, ordered.len()).to_vec(),
    };

    let (vmin, vmax) = scale::position_range(positions.iter().copied());

    // A first anchor sitting at the domain maximum means the list was
    // supplied descending; re-reverse colors and positions together.
    if positions[0] == vmax {
        ordered.reverse();
        positions.reverse();
    }

    for i in 1..positions.len() {
        if positions[i] < positions[i - 1] {
            return Err(MunsellError::Order {
                index: i,
                message: format!(
                    "positions must be monotonic, but {} follows {}",
                    positions[i],
                    positions[i - 1]
                ),
            });
        }
    }

    let xs = scale::normalize_all(ArrayView1::from(&positions), vmin, vmax)?;

    let mut table = SegmentTable::new(name);
    for (x, color) in xs.iter().zip(&ordered) {
        let rgb = parser.parse(color)?;
        table.push_ramp(*x, rgb);
    }

    log_build_stats(name, ordered.len(), table.len());
    Ok(table)
}
