//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use claimlens_analysis::FactCheckReport;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a fact-check report.
    pub fn format_report(&self, report: &FactCheckReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => self.format_report_table(report),
            OutputFormat::Quiet => Ok(self.format_report_quiet(report)),
        }
    }

    /// Format a report as summary and analysis tables.
    fn format_report_table(&self, report: &FactCheckReport) -> Result<String> {
        let mut sections = Vec::new();

        let summary = &report.summary;
        let top_categories = summary
            .top_categories
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let breakdown = &summary.check_worthiness_breakdown;
        let total = summary.total_claims.to_string();
        let high = breakdown.high_priority.to_string();
        let medium = breakdown.medium_priority.to_string();
        let low = breakdown.low_priority.to_string();
        let confidence = format!("{:.2}", summary.average_confidence);
        let elapsed = format!("{} ms", report.batch_metrics.processing_time);

        let mut builder = Builder::default();
        builder.push_record(["Summary", ""]);
        builder.push_record(["Claims", total.as_str()]);
        builder.push_record(["High priority", high.as_str()]);
        builder.push_record(["Medium priority", medium.as_str()]);
        builder.push_record(["Low priority", low.as_str()]);
        builder.push_record(["Average confidence", confidence.as_str()]);
        builder.push_record(["Top categories", top_categories.as_str()]);
        builder.push_record(["Processing time", elapsed.as_str()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        sections.push(table.to_string());

        if !report.detailed_analysis.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Claim", "Score", "Category", "Check-Worthiness"]);

            for analysis in &report.detailed_analysis {
                let claim = truncate(&analysis.claim, 48);
                let score = format!("{:.2}", analysis.spotter_score);
                builder.push_record([
                    claim.as_str(),
                    score.as_str(),
                    analysis.category.as_str(),
                    analysis.check_worthiness.as_str(),
                ]);
            }

            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            sections.push(table.to_string());
        }

        for priority in &report.verification_priorities {
            sections.push(self.warning(priority));
        }

        Ok(sections.join("\n"))
    }

    /// Format a report in quiet mode (priority lines only).
    fn format_report_quiet(&self, report: &FactCheckReport) -> String {
        report.verification_priorities.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        let colored_text = match color {
            "green" => text.green(),
            "red" => text.red(),
            "yellow" => text.yellow(),
            "blue" => text.blue(),
            _ => text.normal(),
        };

        colored_text.to_string()
    }
}

/// Truncate text for table readability.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", truncated)
}
