// SPDX-License-Identifier: PMPL-1.0-or-later
//! Closing advisory entry; it inspects nothing.

use crate::analyzers::{Analyzer, Page};
use crate::findings::Finding;

const TITLE: &str = "Accessibility Testing and Compliance";

const NOTE: &str = "Regular accessibility audits and testing are essential to identify and address accessibility barriers. Compliance with standards like WCAG ensures websites meet recognized accessibility criteria.";

pub struct ComplianceNote;

impl Analyzer for ComplianceNote {
    fn title(&self) -> &str {
        TITLE
    }

    fn description(&self) -> &str {
        "Reminder that automated checks do not replace manual audits"
    }

    fn analyze(&self, _page: &Page) -> Vec<Finding> {
        vec![Finding::summary("compliance-note", TITLE, NOTE)]
    }
}
