// SPDX-License-Identifier: PMPL-1.0-or-later
//! Navigational clarity check - WCAG 2.4.1 Bypass Blocks (Level A)

use crate::analyzers::{Analyzer, Page};
use crate::findings::{Finding, ImpactAssessment, Severity, WcagLevel};

const TITLE: &str = "Navigational Clarity Check";

pub struct NavigationAnalyzer;

impl Analyzer for NavigationAnalyzer {
    fn title(&self) -> &str {
        TITLE
    }

    fn description(&self) -> &str {
        "Counts <nav> regions (WCAG 2.4.1)"
    }

    fn analyze(&self, page: &Page) -> Vec<Finding> {
        let navs = page.count("nav");

        let mut findings = vec![Finding::summary(
            "navigation-summary",
            TITLE,
            &format!("Found {} navigation elements.", navs),
        )];

        if navs == 0 && page.has_body() {
            findings.push(
                Finding::new(
                    "WCAG-2.4.1-no-nav",
                    Severity::Warning,
                    TITLE,
                    "Page has no <nav> element; assistive technology cannot locate its navigation.",
                )
                .with_wcag("2.4.1", WcagLevel::A)
                .with_suggestion("Wrap primary navigation links in a <nav> element")
                .with_impact(ImpactAssessment::navigation()),
            );
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn run(html: &str) -> Vec<Finding> {
        NavigationAnalyzer.analyze(&Page::parse(Path::new("test.html"), html))
    }

    #[test]
    fn test_counts_navs() {
        let findings = run("<html><body><nav></nav><footer><nav></nav></footer></body></html>");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].details, "Found 2 navigation elements.");
    }

    #[test]
    fn test_missing_nav_warns() {
        let findings = run("<html><body><a href=\"/\">home</a></body></html>");
        assert_eq!(findings[0].details, "Found 0 navigation elements.");
        assert_eq!(findings[1].rule_id, "WCAG-2.4.1-no-nav");
    }
}
