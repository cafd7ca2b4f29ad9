// SPDX-License-Identifier: PMPL-1.0-or-later
//! WCAG 2.x color contrast evaluation.
//!
//! Relative luminance follows the WCAG definition:
//! <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
//!
//! Thresholds by conformance level:
//! - AA: 4.5:1 for normal text, 3:1 for large text (1.4.3)
//! - AAA: 7:1 for normal text, 4.5:1 for large text (1.4.6)
//!
//! A pair passes only when its ratio is strictly greater than the threshold.

pub mod color;

pub use color::Color;

use crate::error::ContrastError;
use crate::findings::WcagLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// sRGB channel value below which the transfer function is linear
const LINEAR_SEGMENT_LIMIT: f64 = 0.03928;

/// Flare offset added to both luminances
const FLARE: f64 = 0.05;

/// Which WCAG threshold a color pair is held to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConformanceLevel {
    /// AA, normal-size text (4.5:1)
    #[default]
    AaNormal,
    /// AA, large text (3:1)
    AaLarge,
    /// AAA, normal-size text (7:1)
    AaaNormal,
    /// AAA, large text (4.5:1)
    AaaLarge,
}

impl ConformanceLevel {
    pub const ALL: [ConformanceLevel; 4] = [
        ConformanceLevel::AaNormal,
        ConformanceLevel::AaLarge,
        ConformanceLevel::AaaNormal,
        ConformanceLevel::AaaLarge,
    ];

    /// Minimum ratio the pair must exceed
    pub fn threshold(self) -> f64 {
        match self {
            ConformanceLevel::AaNormal => 4.5,
            ConformanceLevel::AaLarge => 3.0,
            ConformanceLevel::AaaNormal => 7.0,
            ConformanceLevel::AaaLarge => 4.5,
        }
    }

    /// WCAG success criterion this level checks
    pub fn wcag_criterion(self) -> &'static str {
        match self {
            ConformanceLevel::AaNormal | ConformanceLevel::AaLarge => "1.4.3",
            ConformanceLevel::AaaNormal | ConformanceLevel::AaaLarge => "1.4.6",
        }
    }

    pub fn wcag_level(self) -> WcagLevel {
        match self {
            ConformanceLevel::AaNormal | ConformanceLevel::AaLarge => WcagLevel::AA,
            ConformanceLevel::AaaNormal | ConformanceLevel::AaaLarge => WcagLevel::AAA,
        }
    }
}

impl fmt::Display for ConformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConformanceLevel::AaNormal => write!(f, "AA normal text"),
            ConformanceLevel::AaLarge => write!(f, "AA large text"),
            ConformanceLevel::AaaNormal => write!(f, "AAA normal text"),
            ConformanceLevel::AaaLarge => write!(f, "AAA large text"),
        }
    }
}

impl std::str::FromStr for ConformanceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "aa" | "aa-normal" => Ok(ConformanceLevel::AaNormal),
            "aa-large" => Ok(ConformanceLevel::AaLarge),
            "aaa" | "aaa-normal" => Ok(ConformanceLevel::AaaNormal),
            "aaa-large" => Ok(ConformanceLevel::AaaLarge),
            other => Err(format!("Unknown conformance level: {}", other)),
        }
    }
}

/// sRGB transfer function for one 8-bit channel
fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= LINEAR_SEGMENT_LIMIT {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an RGB triple, in [0, 1]
pub fn relative_luminance_rgb(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Contrast ratio from two luminances.
///
/// With `strict` the lighter luminance is always the numerator, giving a
/// ratio in [1, 21]. Without it the foreground is the numerator, which drops
/// below 1 whenever the background is the lighter color.
pub fn ratio_from_luminance(foreground: f64, background: f64, strict: bool) -> f64 {
    let (numerator, denominator) = if strict {
        (foreground.max(background), foreground.min(background))
    } else {
        (foreground, background)
    };
    (numerator + FLARE) / (denominator + FLARE)
}

/// Result of evaluating one color pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastOutcome {
    pub foreground: Color,
    pub background: Color,
    pub foreground_luminance: f64,
    pub background_luminance: f64,
    pub ratio: f64,
    pub threshold: f64,
    pub passes: bool,
}

/// Stateless contrast evaluator.
///
/// Holds only the threshold policy, so a single value can be shared and
/// called from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastEvaluator {
    pub level: ConformanceLevel,
    /// Order the two luminances lighter-over-darker before dividing
    pub strict_wcag_normalization: bool,
}

impl Default for ContrastEvaluator {
    fn default() -> Self {
        Self {
            level: ConformanceLevel::default(),
            strict_wcag_normalization: true,
        }
    }
}

impl ContrastEvaluator {
    pub fn new(level: ConformanceLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    pub fn with_strict_normalization(mut self, strict: bool) -> Self {
        self.strict_wcag_normalization = strict;
        self
    }

    pub fn ratio(&self, foreground: Color, background: Color) -> f64 {
        ratio_from_luminance(
            foreground.luminance(),
            background.luminance(),
            self.strict_wcag_normalization,
        )
    }

    /// Whether a ratio clears this evaluator's threshold (strictly greater)
    pub fn passes_ratio(&self, ratio: f64) -> bool {
        ratio > self.level.threshold()
    }

    pub fn evaluate(&self, foreground: Color, background: Color) -> ContrastOutcome {
        let foreground_luminance = foreground.luminance();
        let background_luminance = background.luminance();
        let ratio = ratio_from_luminance(
            foreground_luminance,
            background_luminance,
            self.strict_wcag_normalization,
        );

        ContrastOutcome {
            foreground,
            background,
            foreground_luminance,
            background_luminance,
            ratio,
            threshold: self.level.threshold(),
            passes: self.passes_ratio(ratio),
        }
    }

    /// Parse both colors and evaluate the pair
    pub fn evaluate_str(
        &self,
        foreground: &str,
        background: &str,
    ) -> Result<ContrastOutcome, ContrastError> {
        let fg = Color::parse(foreground)?;
        let bg = Color::parse(background)?;
        Ok(self.evaluate(fg, bg))
    }

    pub fn contrast_ratio(&self, foreground: &str, background: &str) -> Result<f64, ContrastError> {
        Ok(self.evaluate_str(foreground, background)?.ratio)
    }

    pub fn is_accessible(&self, foreground: &str, background: &str) -> Result<bool, ContrastError> {
        Ok(self.evaluate_str(foreground, background)?.passes)
    }
}

/// Relative luminance of a textual color
pub fn relative_luminance(color: &str) -> Result<f64, ContrastError> {
    Ok(Color::parse(color)?.luminance())
}

/// WCAG contrast ratio of a textual color pair, lighter over darker
pub fn contrast_ratio(foreground: &str, background: &str) -> Result<f64, ContrastError> {
    ContrastEvaluator::default().contrast_ratio(foreground, background)
}

/// Whether a pair passes `level` (AA normal text when `None`)
pub fn is_accessible_contrast(
    foreground: &str,
    background: &str,
    level: Option<ConformanceLevel>,
) -> Result<bool, ContrastError> {
    ContrastEvaluator::new(level.unwrap_or_default()).is_accessible(foreground, background)
}
