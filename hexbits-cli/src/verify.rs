//! Verify command - audit the compiled-in geometry
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: report_results()
//! - Level 3: formatting

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hexbits_core::{audit, AuditReport, CheckOutcome};

#[derive(Args)]
pub struct VerifyArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// List passing checks too
    #[arg(long)]
    pub all: bool,
}

#[derive(Serialize)]
struct Summary<'a> {
    clean: bool,
    passed: usize,
    failed: usize,
    checks: &'a [CheckOutcome],
}

impl<'a> Summary<'a> {
    fn new(report: &'a AuditReport) -> Self {
        let failed = report.failures().count();
        Self {
            clean: failed == 0,
            passed: report.checks.len() - failed,
            failed,
            checks: &report.checks,
        }
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run verify command; an unclean audit is an error so the exit code is non-zero
pub fn run(args: VerifyArgs) -> Result<()> {
    tracing::info!("Auditing board geometry...");
    let report = audit();

    for failure in report.failures() {
        tracing::warn!("FAILED {}: {}", failure.name, failure.detail);
    }

    report_results(&report, &args)?;

    let summary = Summary::new(&report);
    if !summary.clean {
        anyhow::bail!("{} of {} checks failed", summary.failed, report.checks.len());
    }
    tracing::info!("All {} checks passed", summary.passed);
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn report_results(report: &AuditReport, args: &VerifyArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&Summary::new(report))?);
    } else {
        print!("{}", format_text(report, args.all));
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - FORMATTING
// ============================================================================

fn format_text(report: &AuditReport, all: bool) -> String {
    let mut out = String::new();
    for check in &report.checks {
        if check.passed && !all {
            continue;
        }
        let status = if check.passed { "ok  " } else { "FAIL" };
        out.push_str(&format!("{} {}", status, check.name));
        if !check.detail.is_empty() {
            out.push_str(&format!(" ({})", check.detail));
        }
        out.push('\n');
    }
    let summary = Summary::new(report);
    out.push_str(&format!("{} passed, {} failed\n", summary.passed, summary.failed));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, passed: bool, detail: &str) -> CheckOutcome {
        CheckOutcome {
            name: name.to_string(),
            passed,
            detail: detail.to_string(),
        }
    }

    #[test]
    fn test_clean_audit_passes() {
        assert!(run(VerifyArgs { json: false, all: false }).is_ok());
    }

    #[test]
    fn test_summary_counts() {
        let report = AuditReport {
            checks: vec![outcome("a", true, ""), outcome("b", false, "(1, 1)")],
        };
        let summary = Summary::new(&report);
        assert!(!summary.clean);
        assert_eq!((summary.passed, summary.failed), (1, 1));
    }

    #[test]
    fn test_format_text_hides_passing_by_default() {
        let report = AuditReport {
            checks: vec![outcome("a", true, ""), outcome("b", false, "(1, 1)")],
        };
        let text = format_text(&report, false);
        assert_eq!(text, "FAIL b ((1, 1))\n1 passed, 1 failed\n");
        assert!(format_text(&report, true).starts_with("ok   a\n"));
    }
}
