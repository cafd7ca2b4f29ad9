// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation and delivery.
//!
//! Supports multiple output formats:
//! - Text: the titled check summaries followed by individual issues
//! - JSON: summary entries plus the full findings for programmatic use
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration
//!
//! A [`ReportSink`] takes the rendered report somewhere: a file or stdout.

use crate::error::Result;
use crate::findings::{FindingSet, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// A titled result line, one per check and page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub title: String,
    pub details: String,
}

/// Summary entries in check order, prefixed with the page when the set spans
/// several pages
pub fn report_entries(findings: &FindingSet) -> Vec<ReportEntry> {
    let summaries = findings.summaries();
    let mut pages: Vec<_> = summaries.iter().filter_map(|f| f.file.as_ref()).collect();
    pages.dedup();
    let multi_page = pages.len() > 1;

    summaries
        .into_iter()
        .map(|f| ReportEntry {
            title: match (&f.file, multi_page) {
                (Some(file), true) => format!("{}: {}", file.display(), f.title),
                _ => f.title.clone(),
            },
            details: f.details.clone(),
        })
        .collect()
}

/// Generate a report from findings
pub fn generate_report(findings: &FindingSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(findings),
        OutputFormat::Json => generate_json_report(findings),
        OutputFormat::Sarif => generate_sarif_report(findings),
    }
}

fn generate_text_report(findings: &FindingSet) -> String {
    let mut output = String::new();

    output.push_str("=== Accessibility Report ===\n\n");

    let entries = report_entries(findings);
    if entries.is_empty() {
        output.push_str("No pages were audited.\n");
        return output;
    }

    for entry in &entries {
        output.push_str(&format!("{}\n", entry.title));
        output.push_str(&format!("  {}\n\n", entry.details));
    }

    let errors = findings.errors().len();
    let warnings = findings.warnings().len();

    for severity in [Severity::Error, Severity::Warning] {
        let sev_findings = findings.by_severity(severity);
        if sev_findings.is_empty() {
            continue;
        }

        output.push_str(&format!("--- {} ({}) ---\n", severity, sev_findings.len()));

        for finding in sev_findings {
            output.push_str(&format!("[{}] {}\n", finding.rule_id, finding.details));
            output.push_str(&format!("  Location: {}\n", finding.location_string()));

            if let (Some(criterion), Some(level)) = (&finding.wcag_criterion, &finding.wcag_level) {
                output.push_str(&format!("  WCAG: {} (Level {})\n", criterion, level));
            }

            if let Some(ref suggestion) = finding.suggestion {
                output.push_str(&format!("  Fix: {}\n", suggestion));
            }

            if let Some(ref impact) = finding.impact {
                let groups = impact.affected_groups();
                if !groups.is_empty() {
                    output.push_str(&format!("  Affects: {}\n", groups.join(", ")));
                }
            }

            output.push('\n');
        }
    }

    if errors > 0 {
        output.push_str(&format!("RESULT: FAIL ({} error(s), {} warning(s))\n", errors, warnings));
    } else if warnings > 0 {
        output.push_str(&format!("RESULT: PASS WITH WARNINGS ({} warning(s))\n", warnings));
    } else {
        output.push_str("RESULT: PASS\n");
    }

    output
}

#[derive(Serialize)]
struct JsonReport<'a> {
    results: Vec<ReportEntry>,
    #[serde(flatten)]
    findings: &'a FindingSet,
}

fn generate_json_report(findings: &FindingSet) -> String {
    let report = JsonReport {
        results: report_entries(findings),
        findings,
    };
    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize findings: {}\"}}", e)
    })
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

fn generate_sarif_report(findings: &FindingSet) -> String {
    let results: Vec<SarifResult> = findings
        .issues()
        .into_iter()
        .map(|f| {
            let level = match f.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Info => "note",
            };

            let locations = f
                .file
                .iter()
                .map(|file| SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: file.display().to_string(),
                        },
                    },
                })
                .collect();

            let text = match &f.element {
                Some(element) => format!("{} [{}]", f.details, element),
                None => f.details.clone(),
            };

            SarifResult {
                rule_id: f.rule_id.clone(),
                level: level.to_string(),
                message: SarifMessage { text },
                locations,
            }
        })
        .collect();

    let report = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            },
            results,
        }],
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize SARIF report: {}\"}}", e)
    })
}

/// Destination for an audit's findings
pub trait ReportSink {
    fn accept(&mut self, findings: &FindingSet) -> Result<()>;
}

/// Writes the rendered report to a file
pub struct FileSink {
    pub path: PathBuf,
    pub format: OutputFormat,
}

impl FileSink {
    pub fn new(path: PathBuf, format: OutputFormat) -> Self {
        Self { path, format }
    }
}

impl ReportSink for FileSink {
    fn accept(&mut self, findings: &FindingSet) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, generate_report(findings, self.format))?;
        tracing::info!("Report written to {}", self.path.display());
        Ok(())
    }
}

/// Prints the rendered report to stdout
pub struct StdoutSink {
    pub format: OutputFormat,
}

impl ReportSink for StdoutSink {
    fn accept(&mut self, findings: &FindingSet) -> Result<()> {
        println!("{}", generate_report(findings, self.format));
        Ok(())
    }
}
