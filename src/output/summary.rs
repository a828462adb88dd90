//! Render the extraction report to stdout

use crate::cli::OutputFormat;
use crate::extract::ExtractionReport;
use crate::utils::Result;
use console::style;

const NO_MATCH: &str = "Extracted nothing, no match found at specified acme.json file";

/// Print the report in the requested format
pub fn print_report(report: &ExtractionReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => println!("{}", render_json(report)?),
    }
    Ok(())
}

/// One-line plain summary of a run
pub fn summary_line(report: &ExtractionReport) -> String {
    if report.is_empty() {
        NO_MATCH.to_string()
    } else {
        format!("Extracted for: [{}]", report.matched().join(", "))
    }
}

/// JSON document with the matched domains and the files written for each
pub fn render_json(report: &ExtractionReport) -> Result<String> {
    let document = serde_json::json!({
        "resolver": report.resolver,
        "matched": report.matched(),
        "extracted": report.extracted,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}

fn print_text(report: &ExtractionReport) {
    if report.is_empty() {
        println!("{} {}", style("!").yellow(), summary_line(report));
        return;
    }

    println!("{} {}", style("✓").green(), style(summary_line(report)).bold());
    for item in &report.extracted {
        for file in &item.files {
            println!("    {}", style(file.display()).dim());
        }
    }
}
