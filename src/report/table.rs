//! Terminal table rendering of audit results

use crate::models::{AuditReport, Status};
use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Prints one table per site plus a run summary
pub fn render(report: &AuditReport) {
    for site in &report.sites {
        println!("\n  {}", site.base.bold());

        if site.results.is_empty() {
            println!("  {}", "no endpoints configured".dimmed());
            continue;
        }

        let mut builder = Builder::default();
        builder.push_record(["URL", "Basic Auth", "Wanted", "Success", "HTTP Status"]);

        for result in &site.results {
            builder.push_record([
                result.url.clone(),
                result.observed_label().to_string(),
                if result.auth_expected { "yes" } else { "no" }.to_string(),
                result.success.to_string(),
                result.status.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        println!("{table}");
    }

    let endpoints: usize = report.sites.iter().map(|s| s.results.len()).sum();
    println!(
        "\n  {} endpoint(s) checked, {} {}, {} {}",
        endpoints.to_string().bold(),
        report.failures.to_string().bold(),
        if report.failures == 1 {
            "failure"
        } else {
            "failures"
        },
        report.unknowns.to_string().bold(),
        if report.unknowns == 1 {
            "unknown"
        } else {
            "unknowns"
        },
    );

    let status_label = match report.status {
        Status::Ok => report.status.to_string().green().bold(),
        Status::Warning => report.status.to_string().yellow().bold(),
        Status::Critical => report.status.to_string().red().bold(),
        Status::Unknown => report.status.to_string().cyan().bold(),
    };
    println!("  Status: {status_label}");
}
