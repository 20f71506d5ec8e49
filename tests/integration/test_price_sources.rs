use crate::common::{CG_BODY, CG_KEY, CMC_BODY, CMC_KEY, cmc, coingecko};
use bitthought_jobs::application::interfaces::market::PriceSource;
use bitthought_jobs::error::AppError;
use bitthought_jobs::providers::{CoinGeckoClient, CoinMarketCapClient};
use mockito::{Matcher, Server};

#[tokio::test]
async fn coinmarketcap_sends_key_and_symbol() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/cryptocurrency/quotes/latest")
        .match_query(Matcher::UrlEncoded("symbol".into(), "BTC".into()))
        .match_header("x-cmc_pro_api_key", CMC_KEY)
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CMC_BODY)
        .create_async()
        .await;

    let client = CoinMarketCapClient::new(cmc(&server.url())).unwrap();
    let record = client.fetch_price().await.unwrap();

    assert_eq!(record.price, 101234.5678);
    assert_eq!(record.percent_change_24h, 2.3456789);
    assert_eq!(record.high_24h, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn coinmarketcap_rejected_key_is_unauthorized() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/cryptocurrency/quotes/latest")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"status": {"error_code": 1001, "error_message": "This API Key is invalid."}}"#)
        .create_async()
        .await;

    let client = CoinMarketCapClient::new(cmc(&server.url())).unwrap();
    let result = client.fetch_price().await;

    assert!(matches!(result, Err(AppError::Unauthorized)));
    mock.assert_async().await;
}

#[tokio::test]
async fn coinmarketcap_payload_without_price_is_a_data_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/cryptocurrency/quotes/latest")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"data": {"BTC": {"quote": {"USD": {"percent_change_24h": 1.0}}}}}"#)
        .create_async()
        .await;

    let client = CoinMarketCapClient::new(cmc(&server.url())).unwrap();
    let err = client.fetch_price().await.unwrap_err();

    assert!(matches!(err, AppError::Json(_)));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn coingecko_sends_key_and_maps_market_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/coins/bitcoin")
        .match_header("x-cg-pro-api-key", CG_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CG_BODY)
        .create_async()
        .await;

    let client = CoinGeckoClient::new(coingecko(&server.url())).unwrap();
    let record = client.fetch_price().await.unwrap();

    assert_eq!(record.price, 101000.1);
    assert_eq!(record.percent_change_24h, -0.507);
    assert_eq!(record.high_24h, Some(102000.2));
    assert_eq!(record.low_24h, Some(99000.3));
    assert_eq!(record.price_change_24h, Some(-512.75));
    mock.assert_async().await;
}

#[tokio::test]
async fn coingecko_server_error_is_reported() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v3/coins/bitcoin")
        .with_status(503)
        .create_async()
        .await;

    let client = CoinGeckoClient::new(coingecko(&server.url())).unwrap();
    match client.fetch_price().await {
        Err(AppError::Unexpected(status)) => assert_eq!(status.as_u16(), 503),
        other => panic!("Expected Unexpected(503), got {other:?}"),
    }
}

#[tokio::test]
async fn coingecko_rate_limit_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/coins/bitcoin")
        .with_status(429)
        .expect(1)
        .create_async()
        .await;

    let client = CoinGeckoClient::new(coingecko(&server.url())).unwrap();
    assert!(matches!(
        client.fetch_price().await,
        Err(AppError::RateLimitExceeded)
    ));
    mock.assert_async().await;
}
