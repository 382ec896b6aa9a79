//! Breakpoint colormap table construction.
//!
//! Breakpoints model step discontinuities: within an interval the
//! interpolator ramps from the interval's first color to its second, and at
//! interval boundaries the value jumps wherever two neighboring entries
//! share the same position with different edge values.

use tracing::debug;

use super::SegmentTable;
use crate::color::{ColorParser, ColorSpec, Rgb};
use crate::error::{MunsellError, Result};
use crate::logging::log_build_stats;
use crate::scale;

/// Build a segment table with deliberate discontinuities.
///
/// Each anchor pairs one `(start, stop)` interval with the color entering
/// the interval and the color leaving it. Positions must be strictly
/// ascending; descending input is rejected, never auto-corrected.
pub fn build(
    parser: &ColorParser,
    colors: &[(ColorSpec, ColorSpec)],
    positions: Option<&[(f64, f64)]>,
    name: &str,
) -> Result<SegmentTable> {
    if colors.is_empty() {
        return Err(MunsellError::EmptyInput {
            what: "anchor color pair",
        });
    }

    debug!(
        anchors = colors.len(),
        name = name,
        "Building breakpoint colormap table"
    );

    let default_positions: Vec<(f64, f64)>;
    let positions: &[(f64, f64)] = match positions {
        Some(p) => {
            if p.len() != colors.len() {
                return Err(MunsellError::LengthMismatch {
                    colors: colors.len(),
                    positions: p.len(),
                });
            }
            p
        }
        None => {
            // Partition [0, 1] into contiguous equal-width intervals
            let n = colors.len() as f64;
            default_positions = (0..colors.len())
                .map(|i| (i as f64 / n, (i + 1) as f64 / n))
                .collect();
            &default_positions
        }
    };

    let (vmin, vmax) = scale::position_range(positions.iter().flat_map(|&(start, stop)| [start, stop]));

    // Ascending order is mandatory here. A first start at the domain
    // maximum means the list was supplied descending, which the continuous
    // builder corrects but this one rejects.
    if positions[0].0 == vmax {
        return Err(MunsellError::Order {
            index: 0,
            message: format!(
                "breakpoint positions must be strictly ascending, but the first interval starts at the domain maximum {}",
                vmax
            ),
        });
    }

    let mut prev_stop = f64::NEG_INFINITY;
    for (i, &(start, stop)) in positions.iter().enumerate() {
        if start >= stop {
            return Err(MunsellError::Order {
                index: i,
                message: format!("interval start {} is not below its stop {}", start, stop),
            });
        }
        if start < prev_stop {
            return Err(MunsellError::Order {
                index: i,
                message: format!(
                    "interval start {} falls before the previous stop {}",
                    start, prev_stop
                ),
            });
        }
        prev_stop = stop;
    }

    // Carried edge values, seeded with black/white placeholders that the
    // consumer never reads for the outermost entries.
    let mut incoming: Rgb = [0.0, 0.0, 0.0];
    let mut outgoing: Rgb = [1.0, 1.0, 1.0];

    let mut table = SegmentTable::new(name);
    for (&(start, _), (start_color, stop_color)) in positions.iter().zip(colors) {
        let x = scale::normalize(start, vmin, vmax)?;
        outgoing = parser.parse(start_color)?;
        table.push_edge(x, incoming, outgoing);
        incoming = parser.parse(stop_color)?;
    }

    // Closing edge of the last interval
    let last_stop = positions[positions.len() - 1].1;
    let x = scale::normalize(last_stop, vmin, vmax)?;
    table.push_edge(x, incoming, outgoing);

    log_build_stats(name, colors.len(), table.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmap::Segment;

    fn pairs(names: &[(&str, &str)]) -> Vec<(ColorSpec, ColorSpec)> {
        names
            .iter()
            .map(|&(a, b)| (ColorSpec::from(a), ColorSpec::from(b)))
            .collect()
    }

    fn build_default(
        colors: &[(ColorSpec, ColorSpec)],
        positions: Option<&[(f64, f64)]>,
    ) -> Result<SegmentTable> {
        build(&ColorParser::new(), colors, positions, "test")
    }

    #[test]
    fn test_default_positions_partition_evenly() {
        let table = build_default(&pairs(&[("black", "white"), ("white", "red")]), None).unwrap();

        // Two intervals plus the closing edge
        assert_eq!(table.len(), 3);
        let xs: Vec<f64> = table.red.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_discontinuity_hand_off() {
        let table = build_default(&pairs(&[("black", "white"), ("white", "red")]), None).unwrap();

        // At x = 0.5 the entry value is the first pair's stop color and the
        // exit value is the second pair's start color (both white here).
        assert_eq!(
            table.green[1],
            Segment {
                x: 0.5,
                entry: 1.0,
                exit: 1.0
            }
        );

        // Closing edge: entry from the last pair's stop color (red), exit
        // from its start color (white).
        assert_eq!(
            table.green[2],
            Segment {
                x: 1.0,
                entry: 0.0,
                exit: 1.0
            }
        );
        assert_eq!(
            table.red[2],
            Segment {
                x: 1.0,
                entry: 1.0,
                exit: 1.0
            }
        );
    }

    #[test]
    fn test_first_entry_carries_black_seed() {
        let table = build_default(&pairs(&[("white", "red")]), None).unwrap();

        // The seeded incoming black occupies the first entry slot
        assert_eq!(table.red[0].entry, 0.0);
        assert_eq!(table.red[0].exit, 1.0);
    }

    #[test]
    fn test_explicit_positions_rescale() {
        let table = build_default(
            &pairs(&[("blue", "white"), ("white", "red")]),
            Some(&[(10.0, 20.0), (20.0, 50.0)]),
        )
        .unwrap();

        let xs: Vec<f64> = table.blue.iter().map(|s| s.x).collect();
        assert_eq!(xs[0], 0.0);
        assert!((xs[1] - 0.25).abs() < 1e-12);
        assert_eq!(xs[2], 1.0);
    }

    #[test]
    fn test_non_increasing_positions_are_rejected() {
        let err = build_default(
            &pairs(&[("blue", "white"), ("white", "red")]),
            Some(&[(0.5, 0.8), (0.0, 0.3)]),
        )
        .unwrap_err();
        assert!(matches!(err, MunsellError::Order { index: 1, .. }));
    }

    #[test]
    fn test_descending_input_is_never_corrected() {
        let err = build_default(
            &pairs(&[("white", "red"), ("blue", "white")]),
            Some(&[(1.0, 0.5), (0.5, 0.0)]),
        )
        .unwrap_err();
        assert!(matches!(err, MunsellError::Order { index: 0, .. }));
    }

    #[test]
    fn test_interval_with_no_width_is_rejected() {
        let err = build_default(&pairs(&[("blue", "white")]), Some(&[(0.4, 0.4)])).unwrap_err();
        assert!(matches!(err, MunsellError::Order { index: 0, .. }));
    }

    #[test]
    fn test_length_mismatch_is_fatal() {
        let err = build_default(
            &pairs(&[("blue", "white"), ("white", "red")]),
            Some(&[(0.0, 1.0)]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MunsellError::LengthMismatch {
                colors: 2,
                positions: 1
            }
        ));
    }

    #[test]
    fn test_empty_colors_are_fatal() {
        let err = build_default(&[], None).unwrap_err();
        assert!(matches!(err, MunsellError::EmptyInput { .. }));
    }

    #[test]
    fn test_overlapping_intervals_are_rejected() {
        let err = build_default(
            &pairs(&[("blue", "white"), ("white", "red")]),
            Some(&[(0.0, 0.6), (0.4, 1.0)]),
        )
        .unwrap_err();
        assert!(matches!(err, MunsellError::Order { index: 1, .. }));
    }
}
