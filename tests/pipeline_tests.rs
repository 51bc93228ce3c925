use twelvedata_etl::application::pipeline::{PipelineReport, StageReport};

#[test]
fn report_defaults_to_zero() {
    let report = PipelineReport::default();
    assert_eq!(report.bars.requests, 0);
    assert_eq!(report.indicators.requests, 0);
    assert!(!report.has_failures());
}

#[test]
fn report_flags_failures_in_either_stage() {
    let report = PipelineReport {
        bars: StageReport {
            failures: 1,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(report.has_failures());

    let report = PipelineReport {
        indicators: StageReport {
            failures: 2,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(report.has_failures());
}
