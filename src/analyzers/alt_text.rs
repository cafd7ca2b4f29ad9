// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text check - WCAG 1.1.1 Non-text Content (Level A)
//!
//! The summary counts images with no usable alt text, that is a missing or
//! empty `alt`. Individual findings:
//! - missing `alt` attribute: error
//! - generic alt text ("image", "photo", ...): warning
//!
//! `alt=""` is the decorative-image convention and is not an issue on its
//! own, although it still counts towards the summary.

use crate::analyzers::{Analyzer, Page};
use crate::findings::{Finding, ImpactAssessment, Severity, WcagLevel};
use crate::page::describe_element;

const TITLE: &str = "Alt Text Check";

/// Alt text values that describe nothing
const GENERIC_ALT_VALUES: &[&str] = &[
    "image",
    "photo",
    "picture",
    "icon",
    "graphic",
    "img",
    "banner",
    "logo",
    "untitled",
    "screenshot",
    "thumbnail",
    "placeholder",
];

pub struct AltTextAnalyzer;

impl Analyzer for AltTextAnalyzer {
    fn title(&self) -> &str {
        TITLE
    }

    fn description(&self) -> &str {
        "Counts <img> elements without alt text (WCAG 1.1.1)"
    }

    fn analyze(&self, page: &Page) -> Vec<Finding> {
        let images = page.select("img");
        let mut issues = Vec::new();
        let mut without_alt = 0;

        for image in images {
            let element = describe_element(image);

            match image.value().attr("alt") {
                None => {
                    without_alt += 1;
                    let src = image.value().attr("src").unwrap_or("<no src>");
                    issues.push(
                        Finding::new(
                            "WCAG-1.1.1-missing-alt",
                            Severity::Error,
                            TITLE,
                            &format!("Image {} is missing an alt attribute.", src),
                        )
                        .with_wcag("1.1.1", WcagLevel::A)
                        .with_element(&element)
                        .with_suggestion(
                            "Add alt=\"description\" for informative images or alt=\"\" for decorative images",
                        )
                        .with_impact(ImpactAssessment::blind()),
                    );
                }
                Some(alt) if alt.trim().is_empty() => {
                    without_alt += 1;
                }
                Some(alt) => {
                    let normalized = alt.trim().to_lowercase();
                    if GENERIC_ALT_VALUES.contains(&normalized.as_str()) {
                        issues.push(
                            Finding::new(
                                "WCAG-1.1.1-generic-alt",
                                Severity::Warning,
                                TITLE,
                                &format!("Image has generic alt text \"{}\".", alt),
                            )
                            .with_wcag("1.1.1", WcagLevel::A)
                            .with_element(&element)
                            .with_suggestion("Describe what the image shows or what it is for")
                            .with_impact(ImpactAssessment::blind()),
                        );
                    }
                }
            }
        }

        let mut findings = vec![Finding::summary(
            "alt-text-summary",
            TITLE,
            &format!("Found {} images without alt text.", without_alt),
        )];
        findings.extend(issues);
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn run(html: &str) -> Vec<Finding> {
        AltTextAnalyzer.analyze(&Page::parse(Path::new("test.html"), html))
    }

    #[test]
    fn test_accessible_images() {
        let findings = run(r#"
            <html><body>
                <img src="logo.png" alt="Company logo">
                <img src="chart.png" alt="Bar chart showing Q4 revenue growth of 15%">
            </body></html>
        "#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].details, "Found 0 images without alt text.");
    }

    #[test]
    fn test_missing_alt() {
        let findings = run(r#"<html><body><img src="photo.jpg" class="hero"></body></html>"#);
        assert_eq!(findings[0].details, "Found 1 images without alt text.");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[1].rule_id, "WCAG-1.1.1-missing-alt");
        assert_eq!(findings[1].severity, Severity::Error);
        assert_eq!(findings[1].element.as_deref(), Some("img.hero"));
        assert!(findings[1].details.contains("photo.jpg"));
    }

    #[test]
    fn test_empty_alt_counts_but_is_not_an_issue() {
        let findings = run(r#"<html><body><img src="divider.png" alt=""></body></html>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].details, "Found 1 images without alt text.");
    }

    #[test]
    fn test_generic_alt_text() {
        let findings = run(r#"
            <html><body>
                <img src="a.jpg" alt="Image">
                <img src="b.svg" alt=" icon ">
            </body></html>
        "#);
        let generic: Vec<_> = findings.iter().filter(|f| f.rule_id == "WCAG-1.1.1-generic-alt").collect();
        assert_eq!(generic.len(), 2);
        assert!(generic.iter().all(|f| f.severity == Severity::Warning));
        assert_eq!(findings[0].details, "Found 0 images without alt text.");
    }
}
