// SPDX-License-Identifier: PMPL-1.0-or-later
//! Forms and interactive elements check - WCAG 3.3.2 Labels or
//! Instructions (Level A)
//!
//! Inventories each form (method, action, controls with their labels) and
//! flags controls that have no accessible label. A control counts as labelled
//! when a `<label for>` points at its id, a `<label>` wraps it, or it carries
//! `aria-label`, `aria-labelledby` or `title`.

use crate::analyzers::{Analyzer, Page};
use crate::findings::{Finding, ImpactAssessment, Severity, WcagLevel};
use crate::page::describe_element;
use scraper::{ElementRef, Selector};

const TITLE: &str = "Forms and Interactive Elements Check";

const CONTROL_SELECTOR: &str = "input, select, textarea";

/// Input types that need no visible label
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "reset", "button", "image"];

/// One form control as seen by the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
    /// `type` for inputs, otherwise the tag name
    pub kind: String,
    pub name: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInventory {
    pub method: String,
    pub action: Option<String>,
    pub controls: Vec<FormControl>,
}

pub struct FormAnalyzer;

impl Analyzer for FormAnalyzer {
    fn title(&self) -> &str {
        TITLE
    }

    fn description(&self) -> &str {
        "Inventories forms and checks control labels (WCAG 3.3.2)"
    }

    fn analyze(&self, page: &Page) -> Vec<Finding> {
        let labels = page.select("label");
        let forms = page.select("form");

        let mut findings = vec![Finding::summary(
            "forms-summary",
            TITLE,
            &format!("Found {} forms.", forms.len()),
        )];

        for (idx, form) in forms.iter().enumerate() {
            let inventory = inventory_form(*form, &labels);
            findings.push(
                Finding::new(
                    "form-inventory",
                    Severity::Info,
                    TITLE,
                    &describe_inventory(idx + 1, &inventory),
                )
                .with_element(&describe_element(*form)),
            );
        }

        for control in page.select(CONTROL_SELECTOR) {
            if is_exempt(control) || label_for(control, &labels).is_some() || has_aria_label(control) {
                continue;
            }

            let kind = control_kind(control);
            findings.push(
                Finding::new(
                    "WCAG-3.3.2-missing-label",
                    Severity::Error,
                    TITLE,
                    &format!("Form control <{}> has no associated label.", kind),
                )
                .with_wcag("3.3.2", WcagLevel::A)
                .with_element(&describe_element(control))
                .with_suggestion("Add a <label for=\"id\">, wrap the control in a <label>, or set aria-label")
                .with_impact(ImpactAssessment::blind()),
            );
        }

        findings
    }
}

/// Build the inventory of one `<form>`
pub fn inventory_form<'a>(form: ElementRef<'a>, labels: &[ElementRef<'a>]) -> FormInventory {
    let selector = Selector::parse(CONTROL_SELECTOR).expect("valid selector");
    let value = form.value();

    FormInventory {
        method: value
            .attr("method")
            .map(|m| m.trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "get".to_string()),
        action: value.attr("action").map(String::from),
        controls: form
            .select(&selector)
            .map(|control| FormControl {
                kind: control_kind(control),
                name: control.value().attr("name").map(String::from),
                label: label_for(control, labels),
            })
            .collect(),
    }
}

fn describe_inventory(number: usize, inventory: &FormInventory) -> String {
    let controls = inventory
        .controls
        .iter()
        .map(|c| {
            let name = c.name.as_deref().unwrap_or("-");
            match &c.label {
                Some(label) => format!("{} \"{}\" labelled \"{}\"", c.kind, name, label),
                None => format!("{} \"{}\" unlabelled", c.kind, name),
            }
        })
        .collect::<Vec<_>>();

    format!(
        "Form {} (method={}, action={}): {} controls{}{}",
        number,
        inventory.method,
        inventory.action.as_deref().unwrap_or("(none)"),
        controls.len(),
        if controls.is_empty() { "" } else { ": " },
        controls.join(", ")
    )
}

fn control_kind(control: ElementRef<'_>) -> String {
    let value = control.value();
    match value.name() {
        "input" => value
            .attr("type")
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "text".to_string()),
        other => other.to_string(),
    }
}

fn is_exempt(control: ElementRef<'_>) -> bool {
    control.value().name() == "input" && EXEMPT_INPUT_TYPES.contains(&control_kind(control).as_str())
}

fn has_aria_label(control: ElementRef<'_>) -> bool {
    let value = control.value();
    ["aria-label", "aria-labelledby", "title"]
        .iter()
        .any(|attr| value.attr(attr).is_some_and(|v| !v.trim().is_empty()))
}

/// Text of the first label attached to a control
fn label_for<'a>(control: ElementRef<'a>, labels: &[ElementRef<'a>]) -> Option<String> {
    let by_for = control.value().id().and_then(|id| {
        labels
            .iter()
            .find(|label| label.value().attr("for") == Some(id))
            .copied()
    });

    let wrapping = || {
        control
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "label")
    };

    by_for.or_else(wrapping).map(label_text)
}

fn label_text(label: ElementRef<'_>) -> String {
    label
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
