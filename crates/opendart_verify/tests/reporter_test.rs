//! Tests for report aggregation and rendering.

use opendart_verify::{
    PayloadSummary, ReportFormat, Registry, VerificationOutcome, VerificationReport,
    VerificationStatus, generate_report,
};
use std::time::Duration;

fn outcome(id: &str, status: VerificationStatus) -> VerificationOutcome {
    let registry = Registry::opendart();
    let spec = registry.get(id).expect("registered endpoint");
    VerificationOutcome::new(spec, status)
}

fn sample_outcomes() -> Vec<VerificationOutcome> {
    vec![
        outcome("DS001-01", VerificationStatus::Success)
            .with_response_time(Duration::from_millis(120))
            .with_response_data(PayloadSummary::List { count: 5 }),
        outcome("DS001-03", VerificationStatus::Skipped)
            .with_error_message("Requires rcept_no from disclosure.search"),
        outcome("DS002-02", VerificationStatus::NoData)
            .with_response_time(Duration::from_millis(80))
            .with_error_message("조회된 데이터 없음"),
        outcome("DS002-05", VerificationStatus::Failed)
            .with_response_time(Duration::from_millis(45))
            .with_error_message("Validation error: 잘못된 파라미터"),
    ]
}

#[test]
fn test_counts_and_success_rate() {
    let outcomes = sample_outcomes();
    let report = VerificationReport::from_outcomes(&outcomes, Duration::from_secs(3));

    assert_eq!(*report.total(), 4);
    assert_eq!(*report.success_count(), 1);
    assert_eq!(*report.no_data_count(), 1);
    assert_eq!(*report.failed_count(), 1);
    assert_eq!(*report.skipped_count(), 1);
    assert_eq!(report.success_rate(), 50.0);
}

#[test]
fn test_renderings_agree_on_counts() -> anyhow::Result<()> {
    let outcomes = sample_outcomes();
    let report = VerificationReport::from_outcomes(&outcomes, Duration::from_millis(2500))
        .with_timestamp("2024-03-12T09:30:00");

    let json: serde_json::Value = serde_json::from_str(&report.render(ReportFormat::Json))?;
    assert_eq!(json["timestamp"], "2024-03-12T09:30:00");
    assert_eq!(json["duration_seconds"], 2.5);
    assert_eq!(json["summary"]["total"], 4);
    assert_eq!(json["summary"]["success"], 1);
    assert_eq!(json["summary"]["no_data"], 1);
    assert_eq!(json["summary"]["failed"], 1);
    assert_eq!(json["summary"]["skipped"], 1);
    assert_eq!(json["summary"]["success_rate"], 50.0);

    let console = report.render(ReportFormat::Console);
    assert!(console.contains("Timestamp: 2024-03-12T09:30:00"));
    assert!(console.contains("Duration: 2.5s"));
    assert!(console.contains("  Total Endpoints: 4"));
    assert!(console.contains("  Successful:      1 (25.0%)"));
    assert!(console.contains("  No Data:         1 (25.0%)"));
    assert!(console.contains("  Failed:          1 (25.0%)"));
    assert!(console.contains("  Skipped:         1 (25.0%)"));
    assert!(console.contains("  Success Rate:    50.0%"));

    let markdown = report.render(ReportFormat::Markdown);
    assert!(markdown.contains("| Total | 4 | 100% |"));
    assert!(markdown.contains("| Success | 1 | 25.0% |"));
    assert!(markdown.contains("| No Data | 1 | 25.0% |"));
    assert!(markdown.contains("| Failed | 1 | 25.0% |"));
    assert!(markdown.contains("| Skipped | 1 | 25.0% |"));
    assert!(markdown.contains("- **Success Rate:** 50.0%"));
    Ok(())
}

#[test]
fn test_json_results_carry_every_field() -> anyhow::Result<()> {
    let outcomes = sample_outcomes();
    let rendered = generate_report(&outcomes, Duration::from_secs(1), ReportFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&rendered)?;

    let results = json["results"]
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("results is not an array"))?;
    assert_eq!(results.len(), 4);

    assert_eq!(results[0]["id"], "DS001-01");
    assert_eq!(results[0]["name"], "disclosure.search");
    assert_eq!(results[0]["category"], "DS001");
    assert_eq!(results[0]["status"], "SUCCESS");
    assert_eq!(results[0]["response_time_ms"], 120.0);
    assert!(results[0]["error_message"].is_null());
    assert_eq!(
        results[0]["response_data"],
        serde_json::json!({"type": "list", "count": 5})
    );

    assert_eq!(results[1]["status"], "SKIPPED");
    assert_eq!(results[1]["response_time_ms"], 0.0);
    assert!(results[1]["response_data"].is_null());

    assert_eq!(results[2]["status"], "NO_DATA");
    assert_eq!(results[2]["error_message"], "조회된 데이터 없음");
    assert_eq!(results[3]["status"], "FAILED");
    Ok(())
}

#[test]
fn test_payload_summary_json_shapes() -> anyhow::Result<()> {
    assert_eq!(
        serde_json::to_value(PayloadSummary::Null)?,
        serde_json::json!({"type": "null"})
    );
    assert_eq!(
        serde_json::to_value(PayloadSummary::Bytes { size: 2048 })?,
        serde_json::json!({"type": "bytes", "size": 2048})
    );
    assert_eq!(
        serde_json::to_value(PayloadSummary::Record {
            type_name: "Company"
        })?,
        serde_json::json!({"type": "Company"})
    );
    Ok(())
}

#[test]
fn test_console_lines_per_outcome() {
    let outcomes = sample_outcomes();
    let console = generate_report(&outcomes, Duration::from_secs(1), ReportFormat::Console);

    assert!(console.starts_with(&"=".repeat(60)));
    assert!(console.contains("OpenDART API Endpoint Verification Report"));
    assert!(console.contains("DS001 - 공시정보:"));
    assert!(console.contains("DS002 - 정기보고서 주요정보:"));
    assert!(console.contains("  [OK] disclosure.search (120ms)"));
    assert!(console.contains("  [SKIP] disclosure.download_document"));
    assert!(!console.contains("disclosure.download_document ("));
    assert!(console.contains("  [NO_DATA] report.get_dividends (80ms)"));
    assert!(console.contains("  [FAIL] report.get_executives (45ms)"));
    assert!(console.contains("       Validation error: 잘못된 파라미터"));
}

#[test]
fn test_category_block_appears_once_at_first_outcome() {
    let outcomes = vec![
        outcome("DS001-01", VerificationStatus::Success),
        outcome("DS002-01", VerificationStatus::Success),
        outcome("DS001-02", VerificationStatus::Success),
    ];
    let console = generate_report(&outcomes, Duration::ZERO, ReportFormat::Console);
    let markdown = generate_report(&outcomes, Duration::ZERO, ReportFormat::Markdown);

    assert_eq!(console.matches("DS001 - 공시정보:").count(), 1);
    assert_eq!(markdown.matches("### DS001 - 공시정보").count(), 1);

    let ds001 = console.find("DS001 - ").expect("DS001 block");
    let ds002 = console.find("DS002 - ").expect("DS002 block");
    let company = console
        .find("disclosure.get_company")
        .expect("company line");
    assert!(ds001 < ds002);
    assert!(company < ds002, "DS001 outcomes stay under their heading");
}

#[test]
fn test_markdown_rows() {
    let outcomes = sample_outcomes();
    let markdown = generate_report(&outcomes, Duration::from_secs(1), ReportFormat::Markdown);

    assert!(markdown.starts_with("# OpenDART API Endpoint Verification Report"));
    assert!(markdown.contains("| Status | Endpoint | Time (ms) | Notes |"));
    assert!(markdown.contains("| SUCCESS | disclosure.search | 120 | - |"));
    assert!(markdown.contains(
        "| SKIPPED | disclosure.download_document | - | Requires rcept_no from disclosure.search |"
    ));
    assert!(markdown.contains("| FAILED | report.get_executives | 45 | Validation error: 잘못된 파라미터 |"));
}

#[test]
fn test_renderings_agree_on_a_rounding_tie() -> anyhow::Result<()> {
    let registry = Registry::opendart();
    let outcomes: Vec<VerificationOutcome> = registry
        .iter()
        .take(16)
        .enumerate()
        .map(|(i, spec)| {
            let status = if i < 5 {
                VerificationStatus::Success
            } else {
                VerificationStatus::Failed
            };
            VerificationOutcome::new(spec, status)
        })
        .collect();
    let report = VerificationReport::from_outcomes(&outcomes, Duration::from_secs(1));
    assert_eq!(report.success_rate(), 31.25);

    let label = report.success_rate_label();
    let json: serde_json::Value = serde_json::from_str(&report.render(ReportFormat::Json))?;
    assert_eq!(json["summary"]["success_rate"], label.parse::<f64>()?);
    assert!(
        report
            .render(ReportFormat::Console)
            .contains(&format!("  Success Rate:    {}%", label))
    );
    assert!(
        report
            .render(ReportFormat::Markdown)
            .contains(&format!("- **Success Rate:** {}%", label))
    );
    Ok(())
}

#[test]
fn test_markdown_notes_stay_on_one_row() {
    let outcomes = vec![
        outcome("DS002-05", VerificationStatus::Failed)
            .with_error_message("HTTP 502: <html>\n<body>bad | gateway</body>\r\n</html>"),
    ];
    let markdown = generate_report(&outcomes, Duration::from_secs(1), ReportFormat::Markdown);

    let row = markdown
        .lines()
        .find(|line| line.contains("report.get_executives"))
        .expect("row for the failed endpoint");
    assert_eq!(
        row,
        "| FAILED | report.get_executives | - | HTTP 502: <html><br><body>bad \\| gateway</body><br></html> |"
    );
}

#[test]
fn test_empty_run_reports_zero_rate() -> anyhow::Result<()> {
    let report = VerificationReport::from_outcomes(&[], Duration::ZERO);
    assert_eq!(report.success_rate(), 0.0);

    let console = report.render(ReportFormat::Console);
    assert!(console.contains("  Total Endpoints: 0"));
    assert!(console.contains("  Successful:      0"));
    assert!(console.contains("  Success Rate:    0.0%"));

    let markdown = report.render(ReportFormat::Markdown);
    assert!(markdown.contains("| Total | 0 | 0% |"));

    let json: serde_json::Value = serde_json::from_str(&report.render(ReportFormat::Json))?;
    assert_eq!(json["summary"]["total"], 0);
    assert_eq!(json["summary"]["success_rate"], 0.0);
    assert_eq!(json["results"], serde_json::json!([]));
    Ok(())
}

#[test]
fn test_report_format_parses() {
    assert_eq!("console".parse::<ReportFormat>().ok(), Some(ReportFormat::Console));
    assert_eq!("json".parse::<ReportFormat>().ok(), Some(ReportFormat::Json));
    assert_eq!("markdown".parse::<ReportFormat>().ok(), Some(ReportFormat::Markdown));
    assert!("xml".parse::<ReportFormat>().is_err());
    assert_eq!(ReportFormat::default(), ReportFormat::Console);
}
