//! Report rendering.

use crate::{VerificationOutcome, VerificationStatus};
use opendart_core::Category;
use serde_json::json;
use std::time::Duration;

const RULE_WIDTH: usize = 60;

/// Output format of a rendered report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text for a terminal
    #[default]
    Console,
    /// Pretty-printed JSON document
    Json,
    /// Markdown tables
    Markdown,
}

/// Aggregated view of one run.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct VerificationReport<'a> {
    /// Local time the report was built, ISO 8601 to the second
    timestamp: String,
    /// Wall-clock length of the run
    duration: Duration,
    /// Number of outcomes
    total: usize,
    /// Outcomes with data
    success_count: usize,
    /// Outcomes without data
    no_data_count: usize,
    /// Failed outcomes
    failed_count: usize,
    /// Outcomes never attempted
    skipped_count: usize,
    /// Outcomes in run order
    results: &'a [VerificationOutcome],
}

impl<'a> VerificationReport<'a> {
    /// Count outcomes by status, stamped with the current local time.
    pub fn from_outcomes(results: &'a [VerificationOutcome], duration: Duration) -> Self {
        let count = |status: VerificationStatus| {
            results.iter().filter(|r| *r.status() == status).count()
        };
        Self {
            timestamp: chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
            duration,
            total: results.len(),
            success_count: count(VerificationStatus::Success),
            no_data_count: count(VerificationStatus::NoData),
            failed_count: count(VerificationStatus::Failed),
            skipped_count: count(VerificationStatus::Skipped),
            results,
        }
    }

    /// Replace the timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Percentage of outcomes that reached the service and got an answer
    /// (success or no data). Zero for an empty run.
    pub fn success_rate(&self) -> f64 {
        self.percent(self.success_count + self.no_data_count)
    }

    /// The success rate to one decimal, as every rendering shows it.
    pub fn success_rate_label(&self) -> String {
        format!("{:.1}", self.success_rate())
    }

    fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    /// Render in the requested format.
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Console => self.to_console(),
            ReportFormat::Json => self.to_json(),
            ReportFormat::Markdown => self.to_markdown(),
        }
    }

    /// Plain-text report.
    pub fn to_console(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            "OpenDART API Endpoint Verification Report".to_string(),
            rule.clone(),
            format!("Timestamp: {}", self.timestamp),
            format!("Duration: {:.1}s", self.duration.as_secs_f64()),
            String::new(),
            "Summary:".to_string(),
            format!("  Total Endpoints: {}", self.total),
            self.console_count("Successful:     ", self.success_count),
            self.console_count("No Data:        ", self.no_data_count),
            self.console_count("Failed:         ", self.failed_count),
            self.console_count("Skipped:        ", self.skipped_count),
            format!("  Success Rate:    {}%", self.success_rate_label()),
            String::new(),
        ];

        for (category, group) in self.by_category() {
            lines.push(format!("{} - {}:", category, category_description(category)));
            for result in group {
                let time = if result.response_time().is_zero() {
                    String::new()
                } else {
                    format!("({:.0}ms)", result.response_time_ms())
                };
                lines.push(format!(
                    "  [{}] {} {}",
                    status_icon(*result.status()),
                    result.endpoint_name(),
                    time
                ));
                if let Some(message) = result.error_message() {
                    lines.push(format!("       {}", message));
                }
            }
        }

        lines.push(String::new());
        lines.push(rule);
        lines.join("\n")
    }

    fn console_count(&self, label: &str, count: usize) -> String {
        if self.total == 0 {
            format!("  {} {}", label, count)
        } else {
            format!("  {} {} ({:.1}%)", label, count, self.percent(count))
        }
    }

    /// JSON report.
    pub fn to_json(&self) -> String {
        let results: Vec<serde_json::Value> = self
            .results
            .iter()
            .map(|r| {
                json!({
                    "id": r.endpoint_id(),
                    "name": r.endpoint_name(),
                    "category": r.category(),
                    "status": r.status(),
                    "response_time_ms": r.response_time_ms(),
                    "error_message": r.error_message(),
                    "response_data": r.response_data(),
                })
            })
            .collect();

        let report = json!({
            "timestamp": self.timestamp,
            "duration_seconds": self.duration.as_secs_f64(),
            "summary": {
                "total": self.total,
                "success": self.success_count,
                "no_data": self.no_data_count,
                "failed": self.failed_count,
                "skipped": self.skipped_count,
                "success_rate": self.success_rate_label().parse::<f64>().unwrap_or_default(),
            },
            "results": results,
        });

        format!("{:#}", report)
    }

    /// Markdown report.
    pub fn to_markdown(&self) -> String {
        let mut lines = vec![
            "# OpenDART API Endpoint Verification Report".to_string(),
            String::new(),
            format!("- **Timestamp:** {}", self.timestamp),
            format!("- **Duration:** {:.1}s", self.duration.as_secs_f64()),
            format!("- **Success Rate:** {}%", self.success_rate_label()),
            String::new(),
            "## Summary".to_string(),
            String::new(),
            "| Metric | Count | Percentage |".to_string(),
            "|--------|-------|------------|".to_string(),
        ];

        if self.total == 0 {
            lines.push("| Total | 0 | 0% |".to_string());
        } else {
            lines.push(format!("| Total | {} | 100% |", self.total));
            for (label, count) in [
                ("Success", self.success_count),
                ("No Data", self.no_data_count),
                ("Failed", self.failed_count),
                ("Skipped", self.skipped_count),
            ] {
                lines.push(format!(
                    "| {} | {} | {:.1}% |",
                    label,
                    count,
                    self.percent(count)
                ));
            }
        }

        lines.extend([String::new(), "## Details".to_string(), String::new()]);

        for (category, group) in self.by_category() {
            lines.extend([
                String::new(),
                format!("### {} - {}", category, category_description(category)),
                String::new(),
                "| Status | Endpoint | Time (ms) | Notes |".to_string(),
                "|--------|----------|-----------|-------|".to_string(),
            ]);
            for result in group {
                let time = if result.response_time().is_zero() {
                    "-".to_string()
                } else {
                    format!("{:.0}", result.response_time_ms())
                };
                let notes = result
                    .error_message()
                    .as_deref()
                    .map(markdown_cell)
                    .unwrap_or_else(|| "-".to_string());
                lines.push(format!(
                    "| {} | {} | {} | {} |",
                    status_badge(*result.status()),
                    result.endpoint_name(),
                    time,
                    notes
                ));
            }
        }

        lines.join("\n")
    }

    /// Outcomes grouped by category, each group at the position of its first
    /// outcome.
    fn by_category(&self) -> Vec<(&'a str, Vec<&'a VerificationOutcome>)> {
        let mut groups: Vec<(&'a str, Vec<&'a VerificationOutcome>)> = Vec::new();
        for result in self.results {
            let category = result.category().as_str();
            match groups.iter_mut().find(|(name, _)| *name == category) {
                Some((_, group)) => group.push(result),
                None => groups.push((category, vec![result])),
            }
        }
        groups
    }
}

/// Render `results` from a run that took `duration`.
///
/// # Examples
///
/// ```
/// use opendart_verify::{ReportFormat, generate_report};
/// use std::time::Duration;
///
/// let report = generate_report(&[], Duration::ZERO, ReportFormat::Json);
/// assert!(report.contains("\"success_rate\": 0.0"));
/// ```
pub fn generate_report(
    results: &[VerificationOutcome],
    duration: Duration,
    format: ReportFormat,
) -> String {
    VerificationReport::from_outcomes(results, duration).render(format)
}

/// Escape a note so it stays inside one table cell.
fn markdown_cell(text: &str) -> String {
    text.replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
        .replace('|', "\\|")
}

fn category_description(category: &str) -> &'static str {
    category
        .parse::<Category>()
        .map(|c| c.description())
        .unwrap_or("")
}

fn status_icon(status: VerificationStatus) -> &'static str {
    match status {
        VerificationStatus::Success => "OK",
        VerificationStatus::NoData => "NO_DATA",
        VerificationStatus::Failed => "FAIL",
        VerificationStatus::Skipped => "SKIP",
    }
}

fn status_badge(status: VerificationStatus) -> &'static str {
    match status {
        VerificationStatus::Success => "SUCCESS",
        VerificationStatus::NoData => "NO_DATA",
        VerificationStatus::Failed => "FAILED",
        VerificationStatus::Skipped => "SKIPPED",
    }
}
