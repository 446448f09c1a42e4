//! Integration tests for the export and summary workflow.

use covimpact_data::{SimConfig, Simulator, records_from_frame};
use covimpact_output::{ExportFormat, Exporter, ImpactSummary, ReportBuilder};
use covimpact_stats::sector_breakdown;

#[test]
fn test_full_summary_workflow() {
    let simulator = Simulator::new(SimConfig {
        n_businesses: 500,
        ..SimConfig::default()
    })
    .unwrap();
    let df = simulator.generate_frame().unwrap();

    let summary = ImpactSummary::from_frame(&df).unwrap();
    assert_eq!(summary.n_businesses, 500);
    assert_eq!(summary.sectors.len(), 5);

    // Decline bounds follow from the default drop factor range [0.3, 1.0].
    assert!(summary.decline.min >= 0.0);
    assert!(summary.decline.max <= 70.0 + 1e-9);
    assert!(summary.total_post_revenue <= summary.total_pre_revenue);

    // Hardest hit first.
    assert!(
        summary
            .sectors
            .windows(2)
            .all(|w| w[0].mean_decline >= w[1].mean_decline)
    );

    let ascii = summary.to_ascii_table();
    assert!(ascii.contains("COVID-19 Economic Impact Summary"));
    assert!(ascii.contains("Sector Breakdown"));

    let markdown = summary.to_markdown();
    assert!(markdown.contains("# COVID-19 Economic Impact Summary"));
    assert!(markdown.contains("| Sector |"));
}

#[test]
fn test_dataset_export_matches_frame() {
    let simulator = Simulator::new(SimConfig {
        n_businesses: 50,
        ..SimConfig::default()
    })
    .unwrap();
    let df = simulator.generate_frame().unwrap();
    let records = records_from_frame(&df).unwrap();

    let csv = records.export_to_string(ExportFormat::Csv).unwrap();
    assert_eq!(csv.lines().count(), 51); // header + 50 rows

    let json = records.export_to_string(ExportFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 50);
}

#[test]
fn test_sector_stats_export() {
    let simulator = Simulator::new(SimConfig {
        n_businesses: 200,
        ..SimConfig::default()
    })
    .unwrap();
    let df = simulator.generate_frame().unwrap();

    let stats = sector_breakdown(&df).unwrap();
    assert_eq!(stats.len(), 5);

    let csv = stats.export_to_string(ExportFormat::Csv).unwrap();
    assert_eq!(csv.lines().count(), 6); // header + 5 sectors
    for row in &stats {
        assert!(csv.contains(&row.sector));
    }
}

#[test]
fn test_report_carries_summary() {
    let simulator = Simulator::new(SimConfig::default()).unwrap();
    let df = simulator.generate_frame().unwrap();
    let summary = ImpactSummary::from_frame(&df).unwrap();

    let report = ReportBuilder::new()
        .title("Full Run".to_string())
        .config(serde_json::to_value(simulator.config()).unwrap())
        .contents(serde_json::to_value(&summary).unwrap())
        .build()
        .unwrap();

    let json = report.to_json().unwrap();
    assert!(json.contains("\"Full Run\""));
    assert!(json.contains("\"n_businesses\""));
    assert!(json.contains("\"seed\": 42"));
}
