// SPDX-License-Identifier: PMPL-1.0-or-later
//! Finding types produced by the page checks.
//!
//! Every check emits one titled summary (the `{title, details}` entry shown
//! in reports) and zero or more issue findings for individual problems.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Severity levels for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Accessibility failure
    Error,
    /// Should be addressed
    Warning,
    /// Informational
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Level A - minimum conformance
    A,
    /// Level AA - standard conformance
    AA,
    /// Level AAA - enhanced conformance
    AAA,
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

/// Whether a finding summarizes a whole check or reports one problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Summary,
    Issue,
}

/// Impact assessment: who is affected by an accessibility issue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub blind: bool,
    pub low_vision: bool,
    pub motor: bool,
}

impl ImpactAssessment {
    pub fn blind() -> Self {
        Self { blind: true, ..Self::default() }
    }

    pub fn low_vision() -> Self {
        Self { low_vision: true, ..Self::default() }
    }

    pub fn motor() -> Self {
        Self { motor: true, ..Self::default() }
    }

    /// Affects screen reader and keyboard users alike
    pub fn navigation() -> Self {
        Self { blind: true, motor: true, ..Self::default() }
    }

    pub fn affected_groups(&self) -> Vec<&'static str> {
        let mut groups = Vec::new();
        if self.blind { groups.push("blind"); }
        if self.low_vision { groups.push("low-vision"); }
        if self.motor { groups.push("motor"); }
        groups
    }
}

/// A finding from a page check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub id: Uuid,
    /// Rule identifier (e.g., "WCAG-1.1.1-missing-alt")
    pub rule_id: String,
    /// Check title (e.g., "Alt Text Check")
    pub title: String,
    pub details: String,
    pub kind: FindingKind,
    pub severity: Severity,
    /// Page the finding belongs to
    pub file: Option<PathBuf>,
    /// Element descriptor, such as `img.hero` or `form#signup`
    pub element: Option<String>,
    pub suggestion: Option<String>,
    pub created_at: DateTime<Utc>,
    pub wcag_criterion: Option<String>,
    pub wcag_level: Option<WcagLevel>,
    pub impact: Option<ImpactAssessment>,
}

impl Finding {
    /// Create an issue finding
    pub fn new(rule_id: &str, severity: Severity, title: &str, details: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            rule_id: rule_id.to_string(),
            title: title.to_string(),
            details: details.to_string(),
            kind: FindingKind::Issue,
            severity,
            file: None,
            element: None,
            suggestion: None,
            created_at: Utc::now(),
            wcag_criterion: None,
            wcag_level: None,
            impact: None,
        }
    }

    /// Create the informational summary for a check
    pub fn summary(rule_id: &str, title: &str, details: &str) -> Self {
        Self {
            kind: FindingKind::Summary,
            ..Self::new(rule_id, Severity::Info, title, details)
        }
    }

    pub fn with_wcag(mut self, criterion: &str, level: WcagLevel) -> Self {
        self.wcag_criterion = Some(criterion.to_string());
        self.wcag_level = Some(level);
        self
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_element(mut self, element: &str) -> Self {
        self.element = Some(element.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_impact(mut self, impact: ImpactAssessment) -> Self {
        self.impact = Some(impact);
        self
    }

    pub fn is_summary(&self) -> bool {
        self.kind == FindingKind::Summary
    }

    /// Get location string for display
    pub fn location_string(&self) -> String {
        match (&self.file, &self.element) {
            (Some(f), Some(e)) => format!("{} ({})", f.display(), e),
            (Some(f), None) => f.display().to_string(),
            (None, Some(e)) => e.clone(),
            (None, None) => "<unknown>".to_string(),
        }
    }
}

/// A collection of findings with aggregation methods
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingSet {
    pub findings: Vec<Finding>,
}

impl FindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    /// Check summaries in the order the checks ran
    pub fn summaries(&self) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.is_summary()).collect()
    }

    /// Individual problems, excluding summaries
    pub fn issues(&self) -> Vec<&Finding> {
        self.findings.iter().filter(|f| !f.is_summary()).collect()
    }

    /// Issues of the given severity
    pub fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| !f.is_summary() && f.severity == severity)
            .collect()
    }

    pub fn by_rule(&self, rule_id: &str) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.rule_id == rule_id).collect()
    }

    pub fn errors(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> FindingSet {
        let mut set = FindingSet::new();
        set.add(Finding::summary("alt-text-summary", "Alt Text Check", "Found 1 images without alt text."));
        set.add(
            Finding::new("WCAG-1.1.1-missing-alt", Severity::Error, "Alt Text Check", "Image is missing alt")
                .with_wcag("1.1.1", WcagLevel::A)
                .with_element("img.hero"),
        );
        set.add(Finding::new("WCAG-1.4.10-no-viewport", Severity::Warning, "Viewport", "No viewport"));
        set
    }

    #[test]
    fn test_summaries_and_issues_partition() {
        let set = sample_set();
        assert_eq!(set.summaries().len(), 1);
        assert_eq!(set.issues().len(), 2);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_severity_filters_skip_summaries() {
        let set = sample_set();
        assert_eq!(set.errors().len(), 1);
        assert_eq!(set.warnings().len(), 1);
        assert!(set.by_severity(Severity::Info).is_empty());
        assert!(set.has_errors());
    }

    #[test]
    fn test_location_string() {
        let f = Finding::new("r", Severity::Info, "t", "d")
            .with_file(PathBuf::from("index.html"))
            .with_element("img");
        assert_eq!(f.location_string(), "index.html (img)");
        assert_eq!(Finding::new("r", Severity::Info, "t", "d").location_string(), "<unknown>");
    }

    #[test]
    fn test_impact_groups() {
        assert_eq!(ImpactAssessment::navigation().affected_groups(), vec!["blind", "motor"]);
        assert!(ImpactAssessment::default().affected_groups().is_empty());
    }
}
