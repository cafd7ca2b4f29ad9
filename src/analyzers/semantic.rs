// SPDX-License-Identifier: PMPL-1.0-or-later
//! Semantic HTML check - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Counts the sectioning elements a page uses and flags full documents that
//! use none of the landmark elements (header, nav, main, footer).

use crate::analyzers::{Analyzer, Page};
use crate::findings::{Finding, ImpactAssessment, Severity, WcagLevel};

const TITLE: &str = "Semantic HTML Check";

/// Tags counted in the summary, in report order
const SEMANTIC_TAGS: &[&str] = &["header", "nav", "main", "footer", "article", "section"];

const LANDMARK_TAGS: &[&str] = &["header", "nav", "main", "footer"];

pub struct SemanticAnalyzer;

impl Analyzer for SemanticAnalyzer {
    fn title(&self) -> &str {
        TITLE
    }

    fn description(&self) -> &str {
        "Counts semantic sectioning elements (WCAG 1.3.1)"
    }

    fn analyze(&self, page: &Page) -> Vec<Finding> {
        let counts: Vec<(&str, usize)> = SEMANTIC_TAGS
            .iter()
            .map(|tag| (*tag, page.count(tag)))
            .collect();

        let details = counts
            .iter()
            .map(|(tag, count)| format!("{}: {}", tag, count))
            .collect::<Vec<_>>()
            .join(", ");

        let mut findings = vec![Finding::summary(
            "semantic-summary",
            TITLE,
            &format!("Semantic tags found: {}", details),
        )];

        let has_landmark = counts
            .iter()
            .any(|(tag, count)| LANDMARK_TAGS.contains(tag) && *count > 0);

        if page.has_body() && !has_landmark {
            findings.push(
                Finding::new(
                    "WCAG-1.3.1-no-semantic",
                    Severity::Warning,
                    TITLE,
                    "Page does not use semantic landmark elements (header, nav, main, footer).",
                )
                .with_wcag("1.3.1", WcagLevel::A)
                .with_suggestion(
                    "Use <header>, <nav>, <main> and <footer> so screen readers can jump between regions",
                )
                .with_impact(ImpactAssessment::blind()),
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
        SemanticAnalyzer.analyze(&Page::parse(Path::new("test.html"), html))
    }

    #[test]
    fn test_counts_every_tag() {
        let findings = run(r#"
            <html><body>
                <header></header><nav></nav><nav></nav>
                <main><article><section></section><section></section></article></main>
                <footer></footer>
            </body></html>
        "#);
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].details,
            "Semantic tags found: header: 1, nav: 2, main: 1, footer: 1, article: 1, section: 2"
        );
    }

    #[test]
    fn test_div_soup_warns() {
        let findings = run("<html><body><div><div>content</div></div></body></html>");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[1].rule_id, "WCAG-1.3.1-no-semantic");
        assert_eq!(findings[1].severity, Severity::Warning);
    }

    #[test]
    fn test_article_alone_is_not_a_landmark() {
        let findings = run("<html><body><article>post</article></body></html>");
        assert!(findings.iter().any(|f| f.rule_id == "WCAG-1.3.1-no-semantic"));
    }
}
