//! Processing Report Generation
//!
//! Generates reports in two formats:
//! - JSON for build tooling
//! - Human-readable for terminal output

use crate::violation_trait::{Severity, Violation, ViolationCategory};
use crate::violations::InjectViolation;
use finject_domain::ClassName;
use serde::Serialize;
use std::path::PathBuf;

/// Report of one compilation
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingReport {
    /// Timestamp of the run
    pub timestamp: String,
    /// Declaration graph files the compilation read
    pub inputs: Vec<PathBuf>,
    /// Number of rounds run, terminal round included
    pub rounds: usize,
    pub summary: ProcessingSummary,
    /// Fully-qualified names of the generated types, in write order
    pub generated: Vec<String>,
    pub violations: Vec<InjectViolation>,
}

/// Summary of processing results
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingSummary {
    pub total_violations: usize,
    /// Violations on injection targets
    pub target_count: usize,
    /// Violations on the aggregator
    pub module_count: usize,
    /// Cross-round consistency violations
    pub consistency_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub generated_count: usize,
    /// No error-level violations
    pub passed: bool,
}

impl ProcessingReport {
    pub fn new(
        inputs: Vec<PathBuf>,
        rounds: usize,
        generated: &[ClassName],
        violations: Vec<InjectViolation>,
    ) -> Self {
        let count_category = |category: ViolationCategory| {
            violations.iter().filter(|v| v.category() == category).count()
        };
        let count_severity = |severity: Severity| {
            violations.iter().filter(|v| v.severity() == severity).count()
        };
        let summary = ProcessingSummary {
            total_violations: violations.len(),
            target_count: count_category(ViolationCategory::Target),
            module_count: count_category(ViolationCategory::Module),
            consistency_count: count_category(ViolationCategory::Consistency),
            error_count: count_severity(Severity::Error),
            warning_count: count_severity(Severity::Warning),
            generated_count: generated.len(),
            passed: !violations.iter().any(Violation::is_error),
        };
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            inputs,
            rounds,
            summary,
            generated: generated.iter().map(ClassName::reflection_name).collect(),
            violations,
        }
    }
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate JSON report
    pub fn to_json(report: &ProcessingReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &ProcessingReport) -> String {
        let mut output = String::new();

        output.push_str("=== FragmentInject Processing Report ===\n\n");
        output.push_str(&format!("Timestamp: {}\n", report.timestamp));
        output.push_str(&format!("Inputs:    {}\n", report.inputs.len()));
        output.push_str(&format!("Rounds:    {}\n\n", report.rounds));

        output.push_str("--- Summary ---\n");
        output.push_str(&format!(
            "Generated Types:  {}\n",
            report.summary.generated_count
        ));
        output.push_str(&format!(
            "Total Violations: {}\n",
            report.summary.total_violations
        ));
        output.push_str(&format!(
            "  Target:       {}\n",
            report.summary.target_count
        ));
        output.push_str(&format!(
            "  Module:       {}\n",
            report.summary.module_count
        ));
        output.push_str(&format!(
            "  Consistency:  {}\n",
            report.summary.consistency_count
        ));
        output.push('\n');

        let status = if report.summary.passed {
            "PASSED"
        } else {
            "FAILED"
        };
        output.push_str(&format!("Status: {}\n\n", status));

        if !report.generated.is_empty() {
            output.push_str("--- Generated ---\n");
            for name in &report.generated {
                output.push_str(&format!("  {name}\n"));
            }
            output.push('\n');
        }

        if !report.violations.is_empty() {
            output.push_str("--- Violations ---\n");
            for v in &report.violations {
                output.push_str(&format!(
                    "  [{}] {} {}: {}\n",
                    v.severity(),
                    v.id(),
                    v.element(),
                    v
                ));
                if let Some(suggestion) = v.suggestion() {
                    output.push_str(&format!("      hint: {suggestion}\n"));
                }
            }
            output.push('\n');
        }

        output
    }
}
