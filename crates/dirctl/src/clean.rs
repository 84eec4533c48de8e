use anyhow::Context;
use directory_core::normalizer::export_dataset;
use directory_core::{normalize_with_report, NormalizeReport};
use serde_json::Value;

/// Valid, sanitized entries in the input shape, plus what was dropped.
/// Fails instead of writing a file that silently lost a company.
pub fn clean(raw: &Value) -> anyhow::Result<(Value, NormalizeReport)> {
    let report = normalize_with_report(raw)?;
    let out = export_dataset(&report.companies).context("cannot write cleaned dataset")?;
    Ok((out, report))
}
