// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page checks.
//!
//! Each analyzer covers one heuristic of the audit. It emits a single titled
//! summary finding and, where the heuristic maps to a WCAG criterion, issue
//! findings for individual elements.

pub mod alt_text;
pub mod compliance;
pub mod contrast;
pub mod forms;
pub mod keyboard;
pub mod navigation;
pub mod semantic;
pub mod viewport;

use crate::contrast::ContrastEvaluator;
use crate::findings::{Finding, FindingSet};
use scraper::{ElementRef, Html, Selector};
use std::path::{Path, PathBuf};

/// A parsed page handed to every analyzer
pub struct Page {
    pub path: PathBuf,
    pub document: Html,
}

impl Page {
    pub fn parse(path: &Path, content: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            document: Html::parse_document(content),
        }
    }

    /// Elements matching `selector`, or `None` when it does not parse
    pub fn try_select(&self, selector: &str) -> Option<Vec<ElementRef<'_>>> {
        let selector = Selector::parse(selector).ok()?;
        Some(self.document.select(&selector).collect())
    }

    /// Elements matching one of the checks' constant selectors
    pub(crate) fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        self.try_select(selector).expect("valid selector")
    }

    pub(crate) fn count(&self, selector: &str) -> usize {
        self.select(selector).len()
    }

    pub fn has_body(&self) -> bool {
        self.count("body") > 0
    }
}

/// Trait implemented by all analyzers
pub trait Analyzer: Send + Sync {
    /// Title used for the summary entry
    fn title(&self) -> &str;

    /// Short description of what this analyzer checks
    fn description(&self) -> &str;

    fn analyze(&self, page: &Page) -> Vec<Finding>;
}

/// All checks in report order
pub fn default_analyzers(evaluator: ContrastEvaluator) -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(alt_text::AltTextAnalyzer),
        Box::new(semantic::SemanticAnalyzer),
        Box::new(keyboard::KeyboardAnalyzer),
        Box::new(contrast::ContrastAnalyzer::new(evaluator)),
        Box::new(navigation::NavigationAnalyzer),
        Box::new(forms::FormAnalyzer),
        Box::new(viewport::ViewportAnalyzer),
        Box::new(compliance::ComplianceNote),
    ]
}

/// Run every check on one page
pub fn analyze_page(path: &Path, content: &str, evaluator: ContrastEvaluator) -> FindingSet {
    let page = Page::parse(path, content);
    let mut findings = FindingSet::new();

    for analyzer in default_analyzers(evaluator) {
        for finding in analyzer.analyze(&page) {
            findings.add(finding.with_file(page.path.clone()));
        }
    }

    findings
}
