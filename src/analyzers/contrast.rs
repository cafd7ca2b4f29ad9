// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast check - WCAG 1.4.3 Contrast (Minimum, AA) and
//! 1.4.6 Contrast (Enhanced, AAA)
//!
//! Every element yielded by the page scanner is evaluated once. A color that
//! cannot be parsed skips that element's check; skipped elements are counted
//! and reported so the audit stays complete.

use crate::analyzers::{Analyzer, Page};
use crate::contrast::ContrastEvaluator;
use crate::error::ContrastError;
use crate::findings::{Finding, ImpactAssessment, Severity, WcagLevel};
use crate::page::{PageScanner, StaticPageScanner};
use tracing::debug;

const TITLE: &str = "Color Contrast Check";

pub struct ContrastAnalyzer {
    evaluator: ContrastEvaluator,
}

impl ContrastAnalyzer {
    pub fn new(evaluator: ContrastEvaluator) -> Self {
        Self { evaluator }
    }

    /// Evaluate every element a scanner yields
    pub fn check(&self, scanner: &dyn PageScanner) -> Vec<Finding> {
        let level = self.evaluator.level;
        let mut issues = Vec::new();
        let mut failing = 0;
        let mut unparsable = 0;

        for element in scanner.elements() {
            let outcome = match self.evaluator.evaluate_str(&element.foreground, &element.background) {
                Ok(outcome) => outcome,
                Err(ContrastError::InvalidColorFormat { input, reason }) => {
                    debug!(element = %element.element, %input, %reason, "skipping contrast check");
                    unparsable += 1;
                    continue;
                }
            };

            if outcome.passes {
                continue;
            }

            failing += 1;
            issues.push(
                Finding::new(
                    &format!("WCAG-{}-contrast", level.wcag_criterion()),
                    Severity::Error,
                    TITLE,
                    &format!(
                        "Contrast ratio {:.2}:1 of {} on {} does not exceed {}:1 ({}).",
                        outcome.ratio, outcome.foreground, outcome.background, outcome.threshold, level
                    ),
                )
                .with_wcag(level.wcag_criterion(), level.wcag_level())
                .with_element(&element.element)
                .with_suggestion(&format!(
                    "Raise the contrast between text and background above {}:1",
                    outcome.threshold
                ))
                .with_impact(ImpactAssessment::low_vision()),
            );
        }

        let mut findings = vec![Finding::summary(
            "contrast-summary",
            TITLE,
            &format!("Found {} elements with insufficient color contrast.", failing),
        )];
        findings.extend(issues);

        if unparsable > 0 {
            findings.push(
                Finding::new(
                    "contrast-unparsable-color",
                    Severity::Warning,
                    TITLE,
                    &format!("{} elements had unparsable color values.", unparsable),
                )
                .with_wcag(level.wcag_criterion(), level.wcag_level())
                .with_suggestion("Use #rrggbb or rgb()/rgba() values so contrast can be measured"),
            );
        }

        findings
    }
}

impl Analyzer for ContrastAnalyzer {
    fn title(&self) -> &str {
        TITLE
    }

    fn description(&self) -> &str {
        "Checks text/background contrast ratios (WCAG 1.4.3/1.4.6)"
    }

    fn analyze(&self, page: &Page) -> Vec<Finding> {
        self.check(&StaticPageScanner::new(&page.document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::ConformanceLevel;
    use crate::page::ElementColors;
    use std::path::Path;

    struct FixedScanner(Vec<ElementColors>);

    impl PageScanner for FixedScanner {
        fn elements(&self) -> Box<dyn Iterator<Item = ElementColors> + '_> {
            Box::new(self.0.iter().cloned())
        }
    }

    fn pair(element: &str, fg: &str, bg: &str) -> ElementColors {
        ElementColors {
            element: element.to_string(),
            foreground: fg.to_string(),
            background: bg.to_string(),
        }
    }

    fn run(html: &str) -> Vec<Finding> {
        ContrastAnalyzer::new(ContrastEvaluator::default())
            .analyze(&Page::parse(Path::new("test.html"), html))
    }

    #[test]
    fn test_good_contrast_page() {
        let findings = run(r#"<html><body style="color: #000; background-color: #fff"><p>ok</p></body></html>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].details, "Found 0 elements with insufficient color contrast.");
    }

    #[test]
    fn test_poor_contrast_counts_each_element() {
        let findings = run(r#"
            <html><body>
                <div class="faint" style="color: #aaaaaa; background-color: #cccccc"><span>a</span></div>
            </body></html>
        "#);
        assert_eq!(findings[0].details, "Found 2 elements with insufficient color contrast.");
        let errors: Vec<_> = findings.iter().filter(|f| f.severity == Severity::Error).collect();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].rule_id, "WCAG-1.4.3-contrast");
        assert_eq!(errors[0].element.as_deref(), Some("div.faint"));
    }

    #[test]
    fn test_keyword_colors_are_resolved_not_skipped() {
        let findings = run(r#"
            <html><body style="color: #000; background-color: #fff">
                <button class="ghost" style="background-color: transparent; color: #777777">Go</button>
                <p style="color: inherit">text</p>
            </body></html>
        "#);
        assert_eq!(findings[0].details, "Found 1 elements with insufficient color contrast.");
        assert_eq!(findings[1].element.as_deref(), Some("button.ghost"));
        assert!(findings.iter().all(|f| f.rule_id != "contrast-unparsable-color"));
    }

    #[test]
    fn test_unparsable_colors_are_counted_not_fatal() {
        let scanner = FixedScanner(vec![
            pair("p#a", "banana", "#ffffff"),
            pair("p#b", "#777777", "#ffffff"),
            pair("p#c", "#000000", "transparent"),
            pair("p#d", "#000000", "#ffffff"),
        ]);
        let findings = ContrastAnalyzer::new(ContrastEvaluator::default()).check(&scanner);

        assert_eq!(findings[0].details, "Found 1 elements with insufficient color contrast.");
        let unparsable = findings
            .iter()
            .find(|f| f.rule_id == "contrast-unparsable-color")
            .expect("unparsable summary");
        assert_eq!(unparsable.details, "2 elements had unparsable color values.");
        assert_eq!(unparsable.severity, Severity::Warning);
    }

    #[test]
    fn test_level_selects_criterion() {
        let scanner = FixedScanner(vec![pair("p", "#767676", "#ffffff")]);

        let aa = ContrastAnalyzer::new(ContrastEvaluator::new(ConformanceLevel::AaNormal)).check(&scanner);
        assert_eq!(aa.len(), 1);

        let aaa = ContrastAnalyzer::new(ContrastEvaluator::new(ConformanceLevel::AaaNormal)).check(&scanner);
        assert_eq!(aaa.len(), 2);
        assert_eq!(aaa[1].rule_id, "WCAG-1.4.6-contrast");
        assert_eq!(aaa[1].wcag_level, Some(WcagLevel::AAA));
    }

    #[test]
    fn test_legacy_ratio_fails_dark_on_light() {
        let scanner = FixedScanner(vec![pair("p", "#000000", "#ffffff")]);

        let strict = ContrastAnalyzer::new(ContrastEvaluator::default()).check(&scanner);
        assert_eq!(strict.len(), 1);

        let legacy = ContrastAnalyzer::new(ContrastEvaluator::default().with_strict_normalization(false))
            .check(&scanner);
        assert_eq!(legacy[0].details, "Found 1 elements with insufficient color contrast.");
    }
}
