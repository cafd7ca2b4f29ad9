// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessweb - web page accessibility auditor
//!
//! Audits HTML pages for a fixed set of accessibility heuristics and renders
//! the results as a report. The color contrast evaluator at the center of
//! the audit implements the WCAG 2.x relative luminance and contrast ratio
//! definitions.
//!
//! ## Checks
//!
//! - **Alt Text** (1.1.1): images without alt text
//! - **Semantic HTML** (1.3.1): sectioning and landmark element usage
//! - **Keyboard** (2.1.1/2.4.3): focusable element inventory, tab order
//! - **Contrast** (1.4.3/1.4.6): text/background contrast ratio per element
//! - **Navigation** (2.4.1): presence of `<nav>` regions
//! - **Forms** (3.3.2): form inventory and control labels
//! - **Viewport** (1.4.10): responsive viewport meta tag

pub mod analyzers;
pub mod config;
pub mod contrast;
pub mod error;
pub mod findings;
pub mod page;
pub mod report;
pub mod scanner;

pub use contrast::{
    contrast_ratio, is_accessible_contrast, relative_luminance, Color, ConformanceLevel,
    ContrastEvaluator,
};
pub use error::{AuditError, ContrastError};
