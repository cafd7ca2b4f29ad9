// SPDX-License-Identifier: PMPL-1.0-or-later
//! Adaptive and responsive design check - WCAG 1.4.10 Reflow (Level AA)

use crate::analyzers::{Analyzer, Page};
use crate::findings::{Finding, ImpactAssessment, Severity, WcagLevel};

const TITLE: &str = "Adaptive and Responsive Design Check";

pub struct ViewportAnalyzer;

impl Analyzer for ViewportAnalyzer {
    fn title(&self) -> &str {
        TITLE
    }

    fn description(&self) -> &str {
        "Checks for a viewport meta tag (WCAG 1.4.10)"
    }

    fn analyze(&self, page: &Page) -> Vec<Finding> {
        let present = page.count(r#"meta[name="viewport"]"#) > 0;

        let mut findings = vec![Finding::summary(
            "viewport-summary",
            TITLE,
            &format!("Viewport meta tag present: {}", present),
        )];

        if !present {
            findings.push(
                Finding::new(
                    "WCAG-1.4.10-no-viewport",
                    Severity::Warning,
                    TITLE,
                    "Page has no viewport meta tag and will not reflow on small screens.",
                )
                .with_wcag("1.4.10", WcagLevel::AA)
                .with_suggestion(
                    "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
                )
                .with_impact(ImpactAssessment::low_vision()),
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
        ViewportAnalyzer.analyze(&Page::parse(Path::new("test.html"), html))
    }

    #[test]
    fn test_viewport_present() {
        let findings = run(r#"<html><head><meta name="viewport" content="width=device-width"></head><body></body></html>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].details, "Viewport meta tag present: true");
    }

    #[test]
    fn test_viewport_missing() {
        let findings = run(r#"<html><head><meta charset="utf-8"></head><body></body></html>"#);
        assert_eq!(findings[0].details, "Viewport meta tag present: false");
        assert_eq!(findings[1].rule_id, "WCAG-1.4.10-no-viewport");
    }
}
