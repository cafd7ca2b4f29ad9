// SPDX-License-Identifier: PMPL-1.0-or-later
//! Keyboard accessibility check - WCAG 2.1.1 Keyboard (Level A),
//! 2.4.3 Focus Order (Level A)
//!
//! Inventories focusable elements and flags positive tabindex values, which
//! pull elements out of the natural tab order.

use crate::analyzers::{Analyzer, Page};
use crate::findings::{Finding, ImpactAssessment, Severity, WcagLevel};
use crate::page::describe_element;

const TITLE: &str = "Keyboard Accessibility Check";

const FOCUSABLE_SELECTOR: &str = "a, button, input, select, textarea, [tabindex]";

pub struct KeyboardAnalyzer;

impl Analyzer for KeyboardAnalyzer {
    fn title(&self) -> &str {
        TITLE
    }

    fn description(&self) -> &str {
        "Inventories focusable elements and tab order (WCAG 2.1.1, 2.4.3)"
    }

    fn analyze(&self, page: &Page) -> Vec<Finding> {
        let focusable = page.select(FOCUSABLE_SELECTOR);

        let mut findings = vec![Finding::summary(
            "keyboard-summary",
            TITLE,
            &format!("Found {} focusable elements.", focusable.len()),
        )];

        for el in &focusable {
            let Some(value) = el.value().attr("tabindex") else {
                continue;
            };
            let Ok(index) = value.trim().parse::<i32>() else {
                continue;
            };
            if index > 0 {
                findings.push(
                    Finding::new(
                        "WCAG-2.4.3-positive-tabindex",
                        Severity::Warning,
                        TITLE,
                        &format!(
                            "Element <{}> has tabindex=\"{}\". Positive tabindex disrupts natural tab order.",
                            el.value().name(),
                            index
                        ),
                    )
                    .with_wcag("2.4.3", WcagLevel::A)
                    .with_element(&describe_element(*el))
                    .with_suggestion("Use tabindex=\"0\" and order the markup instead")
                    .with_impact(ImpactAssessment::motor()),
                );
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn run(html: &str) -> Vec<Finding> {
        KeyboardAnalyzer.analyze(&Page::parse(Path::new("test.html"), html))
    }

    #[test]
    fn test_counts_focusable_elements_once() {
        // the button matches both `button` and `[tabindex]`
        let findings = run(r#"
            <html><body>
                <a href="/">home</a>
                <button tabindex="0">go</button>
                <input type="text"><select></select><textarea></textarea>
                <div tabindex="-1">panel</div>
                <p>not focusable</p>
            </body></html>
        "#);
        assert_eq!(findings[0].details, "Found 6 focusable elements.");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_positive_tabindex() {
        let findings = run(r#"<html><body><span id="jump" tabindex="3">x</span></body></html>"#);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[1].rule_id, "WCAG-2.4.3-positive-tabindex");
        assert_eq!(findings[1].element.as_deref(), Some("span#jump"));
    }
}
