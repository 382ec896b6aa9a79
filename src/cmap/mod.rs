//! Colormap table construction.
//!
//! A colormap is represented as a segment table: three per-channel sequences
//! of `(x, entry, exit)` triples that a downstream piecewise-linear
//! interpolation engine evaluates at arbitrary positions. This module owns
//! the output model and the two public construction functions; the builders
//! themselves live in [`continuous`] and [`breakpoint`].

pub mod breakpoint;
pub mod continuous;

use serde::{Deserialize, Serialize};

use crate::color::{ColorParser, ColorSpec, Rgb};
use crate::error::Result;

/// Default name for continuous colormaps
pub const DEFAULT_NAME: &str = "custom_colormap";

/// Default name for breakpoint colormaps
pub const DEFAULT_BREAKPOINT_NAME: &str = "custom_breakpoint_colormap";

/// One control point of a single channel.
///
/// `entry` is the channel value when `x` is approached from below and
/// `exit` the value when leaving towards larger positions. A continuous
/// ramp duplicates the value; a discontinuity makes them differ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x: f64,
    pub entry: f64,
    pub exit: f64,
}

/// The interpolation table handed to the consumer, one ordered channel
/// sequence each for red, green and blue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentTable {
    /// Opaque label attached to the table, not interpreted here
    pub name: String,
    pub red: Vec<Segment>,
    pub green: Vec<Segment>,
    pub blue: Vec<Segment>,
}

impl SegmentTable {
    /// Create an empty table with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            red: Vec::new(),
            green: Vec::new(),
            blue: Vec::new(),
        }
    }

    /// Number of entries per channel
    pub fn len(&self) -> usize {
        self.red.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.red.is_empty()
    }

    /// Append one continuous anchor: entry and exit share the same value
    pub(crate) fn push_ramp(&mut self, x: f64, color: Rgb) {
        self.push_edge(x, color, color);
    }

    /// Append one anchor with distinct entry and exit values per channel
    pub(crate) fn push_edge(&mut self, x: f64, entry: Rgb, exit: Rgb) {
        self.red.push(Segment {
            x,
            entry: entry[0],
            exit: exit[0],
        });
        self.green.push(Segment {
            x,
            entry: entry[1],
            exit: exit[1],
        });
        self.blue.push(Segment {
            x,
            entry: entry[2],
            exit: exit[2],
        });
    }
}

/// Build a continuous (linearly interpolated) colormap table.
///
/// `colors` are anchor colors ordered from the low end of the colorbar to
/// the high end. `position` optionally places each anchor; omitted
/// positions are spaced evenly over [0, 1]. Positions in descending order
/// are auto-corrected to ascending. `reverse` flips the color scheme.
pub fn create_colormap(
    colors: &[ColorSpec],
    position: Option<&[f64]>,
    reverse: bool,
    name: &str,
) -> Result<SegmentTable> {
    continuous::build(&ColorParser::new(), colors, position, reverse, name)
}

/// Build a colormap table with hard color discontinuities.
///
/// Each anchor pairs an interval `(start, stop)` with the colors entering
/// and leaving it. Omitted positions partition [0, 1] into equal-width
/// intervals. Unlike [`create_colormap`], descending positions are an
/// error, not auto-corrected.
pub fn create_breakpoint_colormap(
    colors: &[(ColorSpec, ColorSpec)],
    position: Option<&[(f64, f64)]>,
    name: &str,
) -> Result<SegmentTable> {
    breakpoint::build(&ColorParser::new(), colors, position, name)
}
