//! Check command - report conflicts for one product and profile

use anyhow::Result;
use bioguard_graph::models::{ConflictReport, HealthProfile, Severity};
use bioguard_graph::reporters;
use bioguard_graph::ConflictEngine;
use std::io::Write;

pub fn run(
    engine: &ConflictEngine,
    ingredients: Vec<String>,
    conditions: Vec<String>,
    allergies: Vec<String>,
    format: &str,
    fail_on: Option<&str>,
) -> Result<()> {
    let profile = HealthProfile::new(conditions, allergies);
    let conflicts = engine.check_profile(&ingredients, &profile);
    let report = ConflictReport::new(ingredients, profile, conflicts);

    let output = reporters::report(&report, format)?;
    println!("{}", output);

    check_fail_threshold(fail_on, &report)
}

/// Exit with code 1 when a conflict meets the `--fail-on` threshold
fn check_fail_threshold(fail_on: Option<&str>, report: &ConflictReport) -> Result<()> {
    let Some(threshold) = fail_on else {
        return Ok(());
    };
    let threshold: Severity = threshold.parse()?;

    if should_fail(threshold, report) {
        std::io::stdout().flush()?;
        eprintln!("Failing due to --fail-on={} threshold", threshold);
        std::process::exit(1);
    }
    Ok(())
}

fn should_fail(threshold: Severity, report: &ConflictReport) -> bool {
    report.worst_severity().is_some_and(|worst| worst >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioguard_graph::models::ConflictRecord;

    fn report_with(severities: &[Severity]) -> ConflictReport {
        let conflicts = severities
            .iter()
            .map(|&s| ConflictRecord::direct("x", "y", "r", s))
            .collect();
        ConflictReport::new(vec!["x".into()], HealthProfile::default(), conflicts)
    }

    #[test]
    fn test_should_fail_thresholds() {
        let medium = report_with(&[Severity::Low, Severity::Medium]);
        assert!(should_fail(Severity::Low, &medium));
        assert!(should_fail(Severity::Medium, &medium));
        assert!(!should_fail(Severity::High, &medium));
    }

    #[test]
    fn test_no_conflicts_never_fails() {
        let empty = report_with(&[]);
        assert!(!should_fail(Severity::Low, &empty));
        assert!(check_fail_threshold(Some("low"), &empty).is_ok());
        assert!(check_fail_threshold(None, &empty).is_ok());
    }
}
