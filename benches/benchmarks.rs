use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;
use twelvedata_etl::model::responses::ApiResponse;
use twelvedata_etl::normalize::{normalize_bars, normalize_indicator};

fn bar_payload(records: usize) -> ApiResponse {
    let values: Vec<_> = (0..records)
        .map(|i| {
            json!({
                "datetime": format!("2024-01-01 {:02}:30:00", 9 + i % 8),
                "open": "470.1",
                "high": "471.0",
                "low": "469.8",
                "close": "470.5",
                "volume": "1000000"
            })
        })
        .collect();
    serde_json::from_value(json!({"meta": {"symbol": "SPY"}, "values": values})).unwrap()
}

fn indicator_payload(records: usize) -> ApiResponse {
    let values: Vec<_> = (0..records)
        .map(|i| {
            json!({
                "datetime": format!("2024-01-01 {:02}:30:00", 9 + i % 8),
                "rsi": "55.2"
            })
        })
        .collect();
    serde_json::from_value(json!({"meta": {"symbol": "SPY"}, "values": values})).unwrap()
}

fn bench_normalizers(c: &mut Criterion) {
    let bars = bar_payload(13);
    c.bench_function("normalize_bars_13", |b| {
        b.iter(|| normalize_bars(black_box(&bars)).unwrap())
    });

    let indicators = indicator_payload(13);
    c.bench_function("normalize_indicator_13", |b| {
        b.iter(|| normalize_indicator(black_box(&indicators), black_box("rsi")).unwrap())
    });
}

criterion_group!(benches, bench_normalizers);
criterion_main!(benches);
