use bitthought_jobs::error::AppError;
use bitthought_jobs::model::records::{PriceRecord, RotationState};
use bitthought_jobs::model::responses::{CoinGeckoCoinResponse, CoinMarketCapQuotesResponse};
use chrono::{TimeZone, Utc};
use serde_json::json;

const CMC_SAMPLE: &str = r#"{
    "status": {"timestamp": "2025-01-01T00:00:00.000Z", "error_code": 0, "error_message": null},
    "data": {
        "BTC": {
            "id": 1,
            "name": "Bitcoin",
            "symbol": "BTC",
            "quote": {
                "USD": {
                    "price": 97123.456789123,
                    "percent_change_24h": -1.23456789,
                    "last_updated": "2025-01-01T00:00:00.000Z"
                }
            }
        }
    }
}"#;

const CG_SAMPLE: &str = r#"{
    "id": "bitcoin",
    "symbol": "btc",
    "market_data": {
        "current_price": {"usd": 97000.5, "eur": 90000.0},
        "high_24h": {"usd": 98000.25},
        "low_24h": {"usd": 95500.75},
        "price_change_24h": 1234.5678,
        "price_change_percentage_24h": 1.2875449
    }
}"#;

#[test]
fn coinmarketcap_mapping_keeps_values_unrounded() {
    let response: CoinMarketCapQuotesResponse = serde_json::from_str(CMC_SAMPLE).unwrap();
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();

    let record = PriceRecord::from_coinmarketcap(&response, "BTC", at).unwrap();

    assert_eq!(record.price, 97123.456789123);
    assert_eq!(record.percent_change_24h, -1.23456789);
    assert_eq!(record.last_updated, at);
    assert_eq!(record.high_24h, None);
    assert_eq!(record.low_24h, None);
    assert_eq!(record.price_change_24h, None);
}

#[test]
fn coinmarketcap_record_serialises_only_its_fields() {
    let response: CoinMarketCapQuotesResponse = serde_json::from_str(CMC_SAMPLE).unwrap();
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let record = PriceRecord::from_coinmarketcap(&response, "BTC", at).unwrap();

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "price": 97123.456789123,
            "last_updated": "2025-01-01T12:00:00Z",
            "percent_change_24h": -1.23456789
        })
    );
}

#[test]
fn coinmarketcap_mapping_reports_missing_symbol() {
    let response: CoinMarketCapQuotesResponse = serde_json::from_str(CMC_SAMPLE).unwrap();
    let result = PriceRecord::from_coinmarketcap(&response, "ETH", Utc::now());
    match result {
        Err(AppError::Deserialization(msg)) => assert!(msg.contains("data.ETH")),
        other => panic!("Expected Deserialization error, got {other:?}"),
    }
}

#[test]
fn coinmarketcap_payload_without_quote_fails_to_parse() {
    let body = r#"{"data": {"BTC": {"quote": {"USD": {"percent_change_24h": 1.0}}}}}"#;
    assert!(serde_json::from_str::<CoinMarketCapQuotesResponse>(body).is_err());
}

#[test]
fn coingecko_mapping_rounds_percent_change_only() {
    let response: CoinGeckoCoinResponse = serde_json::from_str(CG_SAMPLE).unwrap();
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();

    let record = PriceRecord::from_coingecko(&response, at).unwrap();

    assert_eq!(record.price, 97000.5);
    assert_eq!(record.percent_change_24h, 1.288);
    assert_eq!(record.high_24h, Some(98000.25));
    assert_eq!(record.low_24h, Some(95500.75));
    assert_eq!(record.price_change_24h, Some(1234.5678));
}

#[test]
fn coingecko_record_uses_table_column_names() {
    let response: CoinGeckoCoinResponse = serde_json::from_str(CG_SAMPLE).unwrap();
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let record = PriceRecord::from_coingecko(&response, at).unwrap();

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["24h_high"], json!(98000.25));
    assert_eq!(value["24h_low"], json!(95500.75));
    assert_eq!(value["price_change_24h"], json!(1234.5678));
}

#[test]
fn coingecko_mapping_reports_missing_usd_entry() {
    let body = r#"{
        "market_data": {
            "current_price": {"eur": 1.0},
            "high_24h": {"usd": 2.0},
            "low_24h": {"usd": 0.5},
            "price_change_24h": 0.1,
            "price_change_percentage_24h": 0.2
        }
    }"#;
    let response: CoinGeckoCoinResponse = serde_json::from_str(body).unwrap();
    match PriceRecord::from_coingecko(&response, Utc::now()) {
        Err(AppError::Deserialization(msg)) => assert!(msg.contains("current_price")),
        other => panic!("Expected Deserialization error, got {other:?}"),
    }
}

#[test]
fn rotation_state_defaults_missing_line_number_to_first_line() {
    let state: RotationState =
        serde_json::from_str(r#"{"id": 1, "quote": null, "created_at": "2025-01-01"}"#).unwrap();
    assert_eq!(state.current_line_number, 1);
    assert_eq!(state.quote, None);
    assert_eq!(state.last_updated, None);
}

#[test]
fn rotation_state_reads_rows_with_any_timestamp_format() {
    for stamp in [
        "2025-01-01T00:00:00.123456",
        "2025-01-01 00:00:00",
        "2025-01-01T00:00:00+00:00",
    ] {
        let body = json!({"id": 1, "quote": "HODL", "current_line_number": 5, "last_updated": stamp});
        let state: RotationState = serde_json::from_value(body).unwrap();
        assert_eq!(state.current_line_number, 5);
        assert_eq!(state.last_updated, None);
    }
}

#[test]
fn rotation_state_insert_body_leaves_timestamp_to_table() {
    let state = RotationState {
        id: 1,
        quote: Some("HODL".to_string()),
        current_line_number: 2,
        last_updated: None,
    };
    assert_eq!(
        serde_json::to_value(&state).unwrap(),
        json!({"id": 1, "quote": "HODL", "current_line_number": 2})
    );
}
