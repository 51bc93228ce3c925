use chrono::NaiveDateTime;
use serde_json::json;
use twelvedata_etl::error::AppError;
use twelvedata_etl::model::responses::ApiResponse;
use twelvedata_etl::normalize::{normalize_bars, normalize_indicator, parse_datetime};

fn payload(value: serde_json::Value) -> ApiResponse {
    serde_json::from_value(value).expect("valid payload")
}

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[test]
fn normalize_bars_end_to_end_example() {
    let payload = payload(json!({
        "meta": {"symbol": "SPY"},
        "values": [{
            "datetime": "2024-01-01 09:30:00",
            "open": "470.1",
            "high": "471.0",
            "low": "469.8",
            "close": "470.5",
            "volume": "1000000"
        }]
    }));

    let rows = normalize_bars(&payload).unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.ticker, "SPY");
    assert_eq!(row.datetime, dt("2024-01-01 09:30:00"));
    assert_eq!(row.open, 470.1);
    assert_eq!(row.high, 471.0);
    assert_eq!(row.low, 469.8);
    assert_eq!(row.close, 470.5);
    assert_eq!(row.volume, 1_000_000);
}

#[test]
fn normalize_bars_one_row_per_record_in_input_order() {
    let payload = payload(json!({
        "meta": {"symbol": "QQQ"},
        "values": [
            {"datetime": "2024-01-01 10:00:00", "open": "1", "high": "2", "low": "0.5", "close": "1.5", "volume": "10"},
            {"datetime": "2024-01-01 09:30:00", "open": "3", "high": "4", "low": "2.5", "close": "3.5", "volume": "20"},
            {"datetime": "2024-01-01 09:00:00", "open": "5", "high": "6", "low": "4.5", "close": "5.5", "volume": "30"}
        ]
    }));

    let rows = normalize_bars(&payload).unwrap();
    assert_eq!(rows.len(), 3);
    // Provider order (newest first) is preserved, every row tagged with the symbol
    assert_eq!(rows[0].datetime, dt("2024-01-01 10:00:00"));
    assert_eq!(rows[1].datetime, dt("2024-01-01 09:30:00"));
    assert_eq!(rows[2].datetime, dt("2024-01-01 09:00:00"));
    assert!(rows.iter().all(|r| r.ticker == "QQQ"));
}

#[test]
fn normalize_bars_accepts_json_numbers() {
    let payload = payload(json!({
        "meta": {"symbol": "GLD"},
        "values": [{
            "datetime": "2024-01-01 09:30:00",
            "open": 180.25,
            "high": 181.0,
            "low": 180.0,
            "close": 180.75,
            "volume": 5000
        }]
    }));

    let rows = normalize_bars(&payload).unwrap();
    assert_eq!(rows[0].open, 180.25);
    assert_eq!(rows[0].volume, 5000);
}

#[test]
fn normalize_bars_empty_values_yields_empty_rows() {
    let payload = payload(json!({"meta": {"symbol": "SPY"}, "values": []}));
    let rows = normalize_bars(&payload).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn normalize_bars_rejects_malformed_datetime() {
    let payload = payload(json!({
        "meta": {"symbol": "SPY"},
        "values": [{
            "datetime": "2024-01-01T09:30:00Z",
            "open": "1", "high": "2", "low": "0.5", "close": "1.5", "volume": "10"
        }]
    }));

    match normalize_bars(&payload) {
        Err(AppError::Parse(msg)) => assert!(msg.contains("2024-01-01T09:30:00Z")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn normalize_bars_rejects_missing_field() {
    let payload = payload(json!({
        "meta": {"symbol": "SPY"},
        "values": [{
            "datetime": "2024-01-01 09:30:00",
            "open": "1", "high": "2", "low": "0.5", "volume": "10"
        }]
    }));

    match normalize_bars(&payload) {
        Err(AppError::Parse(msg)) => assert!(msg.contains("close")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn normalize_bars_rejects_non_numeric_price() {
    let payload = payload(json!({
        "meta": {"symbol": "SPY"},
        "values": [{
            "datetime": "2024-01-01 09:30:00",
            "open": "n/a", "high": "2", "low": "0.5", "close": "1.5", "volume": "10"
        }]
    }));

    assert!(matches!(normalize_bars(&payload), Err(AppError::Parse(_))));
}

#[test]
fn normalize_indicator_end_to_end_example() {
    let payload = payload(json!({
        "meta": {"symbol": "SPY"},
        "values": [{"datetime": "2024-01-01 09:30:00", "rsi": "55.2"}]
    }));

    let rows = normalize_indicator(&payload, "rsi").unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.ticker, "SPY");
    assert_eq!(row.datetime, dt("2024-01-01 09:30:00"));
    assert_eq!(row.indicator, "rsi");
    assert_eq!(row.value, 55.2);
}

#[test]
fn normalize_indicator_looks_up_value_by_name_not_position() {
    // Extra keys before the indicator field must not confuse the lookup
    let payload = payload(json!({
        "meta": {"symbol": "XOM"},
        "values": [{
            "datetime": "2024-01-01 09:30:00",
            "unrelated": "99.9",
            "adx": "23.4"
        }]
    }));

    let rows = normalize_indicator(&payload, "adx").unwrap();
    assert_eq!(rows[0].value, 23.4);
    assert_eq!(rows[0].indicator, "adx");
}

#[test]
fn normalize_indicator_missing_value_is_an_error() {
    let payload = payload(json!({
        "meta": {"symbol": "XOM"},
        "values": [{"datetime": "2024-01-01 09:30:00", "rsi": "55.2"}]
    }));

    match normalize_indicator(&payload, "ema") {
        Err(AppError::Parse(msg)) => assert!(msg.contains("ema")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn normalize_indicator_empty_values_yields_empty_rows() {
    let payload = payload(json!({"meta": {"symbol": "SPY"}, "values": []}));
    let rows = normalize_indicator(&payload, "rsi").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn parse_datetime_accepts_exact_format_only() {
    assert_eq!(
        parse_datetime("2025-10-20 19:22:33").unwrap(),
        dt("2025-10-20 19:22:33")
    );

    for bad in [
        "",
        "2025/10/20 19:22:33",   // wrong separator
        "2025-13-01 00:00:00",   // invalid month
        "2025-10-32 00:00:00",   // invalid day
        "2025-10-20T19:22:33Z",  // unsupported layout
        "2025-10-20 19:22",      // missing seconds
        "2025-10-20",
    ] {
        assert!(parse_datetime(bad).is_err(), "should fail for {bad}");
    }
}
