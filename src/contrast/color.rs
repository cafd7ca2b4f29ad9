// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color parsing at the evaluator boundary.
//!
//! Accepts the notations a rendering engine reports for computed styles:
//! - `#rrggbb` and `#rgb`
//! - `rgb(r, g, b)` and `rgba(r, g, b, a)`
//!
//! Named colors and the `transparent` / `currentColor` keywords are rejected
//! with a typed error instead of being guessed at. Alpha is validated but not
//! composited; a fully transparent value has no meaningful contrast and is
//! rejected.

use crate::contrast::relative_luminance_rgb;
use crate::error::ContrastError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*([^,\s()]+)\s*,\s*([^,\s()]+)\s*,\s*([^,\s()]+)\s*(?:,\s*([^,\s()]+)\s*)?\)$",
    )
    .expect("valid regex")
});

/// An opaque sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a computed-style color value
    pub fn parse(input: &str) -> Result<Self, ContrastError> {
        let value = input.trim().to_ascii_lowercase();

        if value.is_empty() {
            return Err(ContrastError::invalid(input, "empty color value"));
        }

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(input, hex);
        }

        if value.starts_with("rgb") {
            return parse_rgb_function(input, &value);
        }

        let reason = match value.as_str() {
            "transparent" => "`transparent` has no opaque color to measure".to_string(),
            "currentcolor" => "`currentColor` must be resolved before evaluation".to_string(),
            v if v.chars().all(|c| c.is_ascii_alphabetic()) => {
                format!("named color `{}` is not supported", v)
            }
            _ => "unrecognized color notation".to_string(),
        };
        Err(ContrastError::invalid(input, reason))
    }

    /// Relative luminance of this color
    pub fn luminance(&self) -> f64 {
        relative_luminance_rgb(self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Whether `value` is an `rgb()`/`rgba()` expression with zero alpha
pub fn is_zero_alpha(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    RGB_FUNCTION
        .captures(&value)
        .and_then(|caps| caps.get(4))
        .is_some_and(|alpha| matches!(parse_alpha(&value, alpha.as_str()), Ok(a) if a == 0.0))
}

fn parse_hex(input: &str, hex: &str) -> Result<Color, ContrastError> {
    // from_str_radix tolerates a leading '+', so validate digits first
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ContrastError::invalid(input, "non-hexadecimal digit"));
    }

    let channel = |digits: &str| {
        u8::from_str_radix(digits, 16).map_err(|e| ContrastError::invalid(input, e.to_string()))
    };

    match hex.len() {
        3 => Ok(Color::new(
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        6 => Ok(Color::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        n => Err(ContrastError::invalid(
            input,
            format!("expected 3 or 6 hex digits, found {}", n),
        )),
    }
}

fn parse_rgb_function(input: &str, value: &str) -> Result<Color, ContrastError> {
    let caps = RGB_FUNCTION
        .captures(value)
        .ok_or_else(|| ContrastError::invalid(input, "malformed rgb()/rgba() expression"))?;

    let r = parse_channel(input, &caps[1])?;
    let g = parse_channel(input, &caps[2])?;
    let b = parse_channel(input, &caps[3])?;

    if let Some(alpha) = caps.get(4) {
        let alpha = parse_alpha(input, alpha.as_str())?;
        if alpha == 0.0 {
            return Err(ContrastError::invalid(
                input,
                "fully transparent color has no contrast",
            ));
        }
    }

    Ok(Color::new(r, g, b))
}

fn parse_channel(input: &str, raw: &str) -> Result<u8, ContrastError> {
    match raw.parse::<u32>() {
        Ok(v) if v <= 255 => Ok(v as u8),
        Ok(v) => Err(ContrastError::invalid(
            input,
            format!("channel value {} is out of range 0-255", v),
        )),
        Err(_) => Err(ContrastError::invalid(
            input,
            format!("channel value `{}` is not an integer 0-255", raw),
        )),
    }
}

fn parse_alpha(input: &str, raw: &str) -> Result<f64, ContrastError> {
    let parsed = match raw.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().map(|v| v / 100.0),
        None => raw.parse::<f64>(),
    };

    match parsed {
        Ok(a) if (0.0..=1.0).contains(&a) => Ok(a),
        _ => Err(ContrastError::invalid(
            input,
            format!("alpha value `{}` is not in 0-1", raw),
        )),
    }
}
