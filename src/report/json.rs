//! JSON report export

use crate::error::Result;
use crate::models::AuditReport;
use std::path::Path;
use tracing::info;

/// Exports an audit report as a JSON file
pub fn export(report: &AuditReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(output_path, json)?;
    info!("JSON report saved to {}", output_path.display());
    Ok(())
}

/// Loads an audit report from a JSON file
pub fn load(input_path: &Path) -> Result<AuditReport> {
    let content = std::fs::read_to_string(input_path)?;
    let report: AuditReport = serde_json::from_str(&content)?;
    Ok(report)
}
