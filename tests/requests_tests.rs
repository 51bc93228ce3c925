use chrono::NaiveDate;
use twelvedata_etl::error::AppError;
use twelvedata_etl::model::requests::{DateWindow, EndpointDescriptor};

#[test]
fn time_series_url_matches_provider_shape() {
    let endpoint =
        EndpointDescriptor::time_series("SPY", "30min", 13, DateWindow::Today).unwrap();
    let url = endpoint.to_url("https://api.twelvedata.com", "test_key");

    assert_eq!(
        url,
        "https://api.twelvedata.com/time_series?apikey=test_key&interval=30min&symbol=SPY&outputsize=13&date=today"
    );
}

#[test]
fn indicator_url_uses_name_as_path_and_start_date() {
    let window = DateWindow::Since(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let endpoint = EndpointDescriptor::indicator("rsi", "QQQ", "30min", 13, window).unwrap();
    let url = endpoint.to_url("https://api.twelvedata.com", "test_key");

    assert_eq!(
        url,
        "https://api.twelvedata.com/rsi?apikey=test_key&interval=30min&symbol=QQQ&outputsize=13&start_date=2024-01-01"
    );
}

#[test]
fn to_url_tolerates_trailing_slash_in_base() {
    let endpoint = EndpointDescriptor::time_series("SPY", "1h", 10, DateWindow::Today).unwrap();
    let url = endpoint.to_url("https://api.twelvedata.com/", "k");
    assert!(url.starts_with("https://api.twelvedata.com/time_series?"));
}

#[test]
fn interval_grammar_accepts_provider_values() {
    for good in ["1min", "5min", "30min", "45min", "1h", "2h", "1day", "1week", "1month"] {
        assert!(
            EndpointDescriptor::is_valid_interval(good),
            "should accept {good}"
        );
    }

    for bad in ["", "min", "0min", "30", "30 min", "1hour", "daily", "30MIN"] {
        assert!(
            !EndpointDescriptor::is_valid_interval(bad),
            "should reject {bad}"
        );
    }
}

#[test]
fn invalid_interval_is_rejected_at_build_time() {
    let err = EndpointDescriptor::time_series("SPY", "half-hour", 13, DateWindow::Today)
        .err()
        .expect("should be Err");
    match err {
        AppError::InvalidInput(msg) => assert!(msg.contains("half-hour")),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn empty_symbol_is_rejected() {
    let err = EndpointDescriptor::time_series("  ", "30min", 13, DateWindow::Today)
        .err()
        .expect("should be Err");
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn empty_indicator_name_is_rejected() {
    let err = EndpointDescriptor::indicator("", "SPY", "30min", 13, DateWindow::Today)
        .err()
        .expect("should be Err");
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn date_window_query_params() {
    assert_eq!(DateWindow::Today.to_query_param(), "date=today");
    assert_eq!(
        DateWindow::Since(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()).to_query_param(),
        "start_date=2024-06-30"
    );
}
