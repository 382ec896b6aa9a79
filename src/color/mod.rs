//! Color specifications and their conversion to normalized RGB.
//!
//! Anchor colors arrive in several heterogeneous forms: named colors, hex
//! codes, float triples, 8-bit triples, or numeric arrays. [`ColorSpec`] is
//! the explicit tagged union over those forms and [`ColorParser`] resolves
//! any of them to an RGB triple with every channel in [0, 1].

pub mod named;

use ndarray::Array1;

use crate::error::{MunsellError, Result};

/// A normalized RGB triple, each channel in [0, 1]
pub type Rgb = [f64; 3];

/// An injectable name-to-RGB lookup collaborator.
///
/// The default is [`named::lookup`]; hosts that carry their own palette
/// table can substitute a different pure function.
pub type NamedLookup = fn(&str) -> Option<Rgb>;

/// One color specification, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// A named color (`"steelblue"`, `"r"`), a hex code (`"#1e90ff"`,
    /// `"#f00"`), or a stringified literal triple (`"(255, 0, 0)"`).
    Name(String),
    /// A float triple. Subject to the 8-bit heuristic: if any component is
    /// integral and strictly greater than 1, the whole triple is taken as
    /// 8-bit and divided by 255. The heuristic cannot distinguish an 8-bit
    /// triple with all channels <= 1 from a normalized one; such triples
    /// parse as normalized.
    Rgb(f64, f64, f64),
    /// An 8-bit triple, divided by 255 unconditionally.
    Rgb8(u8, u8, u8),
    /// A float vector of exactly 3 elements, taken as direct normalized RGB.
    Array(Array1<f64>),
    /// An integer vector of exactly 3 elements, divided by 255
    /// unconditionally.
    Array8(Array1<u8>),
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        ColorSpec::Name(s.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(s: String) -> Self {
        ColorSpec::Name(s)
    }
}

impl From<(f64, f64, f64)> for ColorSpec {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorSpec::Rgb8(r, g, b)
    }
}

impl From<[f64; 3]> for ColorSpec {
    fn from(rgb: [f64; 3]) -> Self {
        ColorSpec::Rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl From<[u8; 3]> for ColorSpec {
    fn from(rgb: [u8; 3]) -> Self {
        ColorSpec::Rgb8(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Array1<f64>> for ColorSpec {
    fn from(v: Array1<f64>) -> Self {
        ColorSpec::Array(v)
    }
}

impl From<Array1<u8>> for ColorSpec {
    fn from(v: Array1<u8>) -> Self {
        ColorSpec::Array8(v)
    }
}

/// The 8-bit heuristic: a float triple is treated as 8-bit when any
/// component is integral and strictly greater than 1.
fn is_eight_bit(rgb: &Rgb) -> bool {
    rgb.iter().any(|v| v.fract() == 0.0 && *v > 1.0)
}

/// Converts one [`ColorSpec`] into a normalized RGB triple.
///
/// The parser holds only the injected name lookup; it carries no state
/// across calls, so a fresh instance per call is fine.
#[derive(Debug, Clone, Copy)]
pub struct ColorParser {
    lookup: NamedLookup,
}

impl Default for ColorParser {
    fn default() -> Self {
        Self {
            lookup: named::lookup,
        }
    }
}

impl ColorParser {
    /// Create a parser backed by the built-in named color table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a host-provided name lookup
    pub fn with_lookup(lookup: NamedLookup) -> Self {
        Self { lookup }
    }

    /// Resolve a color specification to an RGB triple with every channel
    /// in [0, 1].
    pub fn parse(&self, spec: &ColorSpec) -> Result<Rgb> {
        match spec {
            ColorSpec::Array(v) => {
                let rgb = triple_from_slice(&v.to_vec())?;
                validate_channels(spec, rgb)
            }
            ColorSpec::Array8(v) => {
                let rgb = triple_from_slice(
                    &v.iter().map(|&c| f64::from(c)).collect::<Vec<_>>(),
                )?;
                Ok(rgb.map(|c| c / 255.0))
            }
            ColorSpec::Rgb(r, g, b) => self.resolve_float_triple(spec, [*r, *g, *b]),
            ColorSpec::Rgb8(r, g, b) => {
                Ok([*r, *g, *b].map(|c| f64::from(c) / 255.0))
            }
            ColorSpec::Name(s) => self.resolve_str(spec, s),
        }
    }

    fn resolve_float_triple(&self, spec: &ColorSpec, mut rgb: Rgb) -> Result<Rgb> {
        if is_eight_bit(&rgb) {
            for c in &mut rgb {
                *c /= 255.0;
            }
        }
        validate_channels(spec, rgb)
    }

    fn resolve_str(&self, spec: &ColorSpec, s: &str) -> Result<Rgb> {
        let trimmed = s.trim();
        let key = trimmed.to_lowercase();
        if let Some(rgb) = (self.lookup)(&key) {
            return validate_channels(spec, rgb);
        }
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(spec, hex);
        }
        if let Some(rgb) = parse_literal_triple(trimmed) {
            return self.resolve_float_triple(spec, rgb);
        }
        Err(parse_error(spec, "unknown color name or malformed literal"))
    }
}

/// Parse the digits of a `#rgb` or `#rrggbb` hex code (prefix stripped)
fn parse_hex(spec: &ColorSpec, hex: &str) -> Result<Rgb> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let bytes = hex.as_bytes();
    let channels = match bytes.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, &c) in out.iter_mut().zip(bytes) {
                let n = nibble(c).ok_or_else(|| parse_error(spec, "invalid hex digit"))?;
                *slot = n * 17;
            }
            out
        }
        6 => {
            let mut out = [0u8; 3];
            for (slot, pair) in out.iter_mut().zip(bytes.chunks(2)) {
                let hi = nibble(pair[0]).ok_or_else(|| parse_error(spec, "invalid hex digit"))?;
                let lo = nibble(pair[1]).ok_or_else(|| parse_error(spec, "invalid hex digit"))?;
                *slot = hi << 4 | lo;
            }
            out
        }
        n => {
            return Err(parse_error(
                spec,
                &format!("unsupported hex length {} (expected 3 or 6 digits)", n),
            ))
        }
    };

    Ok(channels.map(|c| f64::from(c) / 255.0))
}

/// Parse a stringified triple like `"(255, 0, 0)"` or `"[0.1, 0.2, 0.3]"`
fn parse_literal_triple(s: &str) -> Option<Rgb> {
    let inner = s
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .or_else(|| s.strip_prefix('[').and_then(|r| r.strip_suffix(']')))?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }
    let mut rgb = [0.0; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part.parse::<f64>().ok()?;
    }
    Some(rgb)
}

fn triple_from_slice(values: &[f64]) -> Result<Rgb> {
    if values.len() != 3 {
        return Err(MunsellError::Shape {
            expected: 3,
            actual: values.len(),
        });
    }
    Ok([values[0], values[1], values[2]])
}

fn validate_channels(spec: &ColorSpec, rgb: Rgb) -> Result<Rgb> {
    for c in rgb {
        if !c.is_finite() || !(0.0..=1.0).contains(&c) {
            return Err(parse_error(
                spec,
                &format!("channel value {} outside [0, 1] after conversion", c),
            ));
        }
    }
    Ok(rgb)
}

fn parse_error(spec: &ColorSpec, message: &str) -> MunsellError {
    MunsellError::ColorParse {
        spec: format!("{:?}", spec),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn parse(spec: impl Into<ColorSpec>) -> Result<Rgb> {
        ColorParser::new().parse(&spec.into())
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!(parse("blue").unwrap(), [0.0, 0.0, 1.0]);
        assert_eq!(parse(" White ").unwrap(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_parse_hex_long_form() {
        assert_eq!(parse("#ff0000").unwrap(), [1.0, 0.0, 0.0]);
        let [r, g, b] = parse("#1e90ff").unwrap();
        assert!((r - 30.0 / 255.0).abs() < 1e-12);
        assert!((g - 144.0 / 255.0).abs() < 1e-12);
        assert!((b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_hex_short_form() {
        assert_eq!(parse("#f00").unwrap(), [1.0, 0.0, 0.0]);
        assert_eq!(parse("#FFF").unwrap(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        assert!(parse("#ff00").is_err());
        assert!(parse("#gg0000").is_err());
        assert!(parse("#ff0000aa").is_err());
    }

    #[test]
    fn test_eight_bit_triple_matches_normalized() {
        let eight_bit = parse((255, 0, 0)).unwrap();
        let normalized = parse((1.0, 0.0, 0.0)).unwrap();
        for (a, b) in eight_bit.iter().zip(normalized.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_eight_bit_heuristic_on_float_triples() {
        // 255.0 is integral and > 1, so the whole triple is 8-bit
        let [r, g, b] = parse((255.0, 128.0, 0.0)).unwrap();
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(b, 0.0);

        // All channels <= 1: parses as already normalized
        assert_eq!(parse((1.0, 1.0, 0.0)).unwrap(), [1.0, 1.0, 0.0]);

        // Non-integral component > 1 is not 8-bit, just out of range
        assert!(parse((1.5, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_integer_array_divides_unconditionally() {
        let spec = ColorSpec::from(array![1u8, 1, 0]);
        let [r, g, b] = ColorParser::new().parse(&spec).unwrap();
        assert!((r - 1.0 / 255.0).abs() < 1e-12);
        assert!((g - 1.0 / 255.0).abs() < 1e-12);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn test_float_array_is_direct_rgb() {
        let spec = ColorSpec::from(array![0.25, 0.5, 0.75]);
        assert_eq!(ColorParser::new().parse(&spec).unwrap(), [0.25, 0.5, 0.75]);

        // Float arrays get no 8-bit heuristic
        let spec = ColorSpec::from(array![255.0, 0.0, 0.0]);
        assert!(ColorParser::new().parse(&spec).is_err());
    }

    #[test]
    fn test_array_shape_is_checked() {
        let spec = ColorSpec::from(array![0.1, 0.2]);
        let err = ColorParser::new().parse(&spec).unwrap_err();
        assert!(matches!(
            err,
            MunsellError::Shape {
                expected: 3,
                actual: 2
            }
        ));

        let spec = ColorSpec::from(array![1u8, 2, 3, 4]);
        assert!(matches!(
            ColorParser::new().parse(&spec).unwrap_err(),
            MunsellError::Shape { .. }
        ));
    }

    #[test]
    fn test_parse_literal_triple_strings() {
        // Integer literal > 1 goes through the 8-bit heuristic
        assert_eq!(parse("(255, 0, 0)").unwrap(), [1.0, 0.0, 0.0]);
        assert_eq!(parse("[0.1, 0.2, 0.3]").unwrap(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = parse("not-a-color").unwrap_err();
        assert!(matches!(err, MunsellError::ColorParse { .. }));
        assert!(parse("(1, 2)").is_err());
        assert!(parse("(a, b, c)").is_err());
    }

    #[test]
    fn test_custom_lookup_injection() {
        fn tiny_lookup(name: &str) -> Option<Rgb> {
            match name {
                "signal" => Some([1.0, 0.5, 0.0]),
                _ => None,
            }
        }

        let parser = ColorParser::with_lookup(tiny_lookup);
        assert_eq!(
            parser.parse(&ColorSpec::from("signal")).unwrap(),
            [1.0, 0.5, 0.0]
        );
        // The built-in table is no longer consulted
        assert!(parser.parse(&ColorSpec::from("blue")).is_err());
        // Hex and literal fallbacks still apply
        assert_eq!(parser.parse(&ColorSpec::from("#00f")).unwrap(), [0.0, 0.0, 1.0]);
    }
}
