//! # munsell
//!
//! Piecewise-linear colormap tables from anchor colors.
//!
//! This library builds the segment tables that piecewise-linear color
//! interpolation engines consume. Given a small list of anchor colors and
//! optional anchor positions, it normalizes both onto a canonical form and
//! assembles the per-channel interpolation table, with hard discontinuities
//! where the breakpoint variant asks for them.
//!
//! ## Key Features
//!
//! - **Heterogeneous color input**: named colors, hex codes, normalized or
//!   8-bit triples, and numeric arrays all resolve to one canonical form
//! - **Arbitrary anchor positions**: any numeric domain rescales onto [0, 1]
//! - **Hard discontinuities**: the breakpoint builder emits deliberate value
//!   jumps at chosen positions
//!
//! ## Architecture
//!
//! - **Color layer**: [`color`] turns one [`ColorSpec`] into an RGB triple
//! - **Scale layer**: [`scale`] rescales anchor positions onto [0, 1]
//! - **Table layer**: [`cmap`] validates anchors and emits a [`SegmentTable`]
//!
//! Evaluating a table at a position is the consumer's job; this crate only
//! constructs tables.

pub mod cmap;
pub mod color;
pub mod error;
pub mod logging;
pub mod scale;

pub use cmap::{
    create_breakpoint_colormap, create_colormap, Segment, SegmentTable, DEFAULT_BREAKPOINT_NAME,
    DEFAULT_NAME,
};
pub use color::{named, ColorParser, ColorSpec, NamedLookup, Rgb};
pub use error::{MunsellError, Result};
pub use logging::{init_tracing, log_build_stats, log_error};
