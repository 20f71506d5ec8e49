use crate::common::{
    CMC_BODY, CMC_KEY, ONE_SIGNAL_APP_ID, ONE_SIGNAL_APP_KEY, SUPABASE_KEY, env_lock, set_vars,
};
use bitthought_jobs::application::jobs;
use bitthought_jobs::error::AppError;
use mockito::{Matcher, Mock, ServerGuard};

/// One mock per method that matches any path; each must stay unused
async fn silent_upstream(server: &mut ServerGuard) -> Vec<Mock> {
    let mut mocks = Vec::new();
    for method in ["GET", "POST", "PATCH"] {
        mocks.push(
            server
                .mock(method, Matcher::Any)
                .match_query(Matcher::Any)
                .expect(0)
                .create_async()
                .await,
        );
    }
    mocks
}

fn point_everything_at(url: &str) {
    let quotes_url = format!("{url}/bitthoughts.txt");
    set_vars(&[
        ("DATA_STORE_BACKEND", Some("supabase")),
        ("SUPABASE_URL", Some(url)),
        ("SUPABASE_KEY", Some(SUPABASE_KEY)),
        ("CMC_API_KEY", Some(CMC_KEY)),
        ("CMC_BASE_URL", Some(url)),
        ("CMC_SYMBOL", None),
        ("ONE_SIGNAL_APP_ID", Some(ONE_SIGNAL_APP_ID)),
        ("ONE_SIGNAL_APP_KEY", Some(ONE_SIGNAL_APP_KEY)),
        ("ONE_SIGNAL_BASE_URL", Some(url)),
        ("BITTHOUGHTS_URL", Some(quotes_url.as_str())),
        ("BITTHOUGHTS_TIMEOUT_SECS", None),
    ]);
}

#[tokio::test]
async fn missing_price_api_key_sends_no_request() {
    let _guard = env_lock();
    let mut server = mockito::Server::new_async().await;
    let mocks = silent_upstream(&mut server).await;
    point_everything_at(&server.url());
    set_vars(&[("CMC_API_KEY", None)]);

    let result = jobs::fetch_price_coinmarketcap_from_env().await;

    match result {
        Err(AppError::MissingEnv(name)) => assert_eq!(name, "CMC_API_KEY"),
        other => panic!("Expected MissingEnv, got {other:?}"),
    }
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn missing_store_key_sends_no_request() {
    let _guard = env_lock();
    let mut server = mockito::Server::new_async().await;
    let mocks = silent_upstream(&mut server).await;
    point_everything_at(&server.url());
    set_vars(&[("SUPABASE_KEY", Some("  "))]);

    let result = jobs::fetch_price_coinmarketcap_from_env().await;

    assert!(matches!(result, Err(AppError::MissingEnv(name)) if name == "SUPABASE_KEY"));
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn missing_push_key_skips_rotation_entirely() {
    let _guard = env_lock();
    let mut server = mockito::Server::new_async().await;
    let mocks = silent_upstream(&mut server).await;
    point_everything_at(&server.url());
    set_vars(&[("ONE_SIGNAL_APP_KEY", None)]);

    let result = jobs::send_daily_bitthought_from_env().await;

    assert!(matches!(result, Err(AppError::MissingEnv(name)) if name == "ONE_SIGNAL_APP_KEY"));
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn missing_push_app_id_fails_captains_log() {
    let _guard = env_lock();
    let mut server = mockito::Server::new_async().await;
    let mocks = silent_upstream(&mut server).await;
    point_everything_at(&server.url());
    set_vars(&[("ONE_SIGNAL_APP_ID", None)]);

    let result = jobs::send_captains_log_from_env().await;

    assert!(matches!(result, Err(AppError::MissingEnv(name)) if name == "ONE_SIGNAL_APP_ID"));
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn complete_environment_runs_the_price_job() {
    let _guard = env_lock();
    let mut server = mockito::Server::new_async().await;
    let quote = server
        .mock("GET", "/v1/cryptocurrency/quotes/latest")
        .match_query(Matcher::UrlEncoded("symbol".into(), "BTC".into()))
        .match_header("x-cmc_pro_api_key", CMC_KEY)
        .with_status(200)
        .with_body(CMC_BODY)
        .create_async()
        .await;
    let write = server
        .mock("PATCH", "/rest/v1/bitcoin_price")
        .match_query(Matcher::Any)
        .match_header("apikey", SUPABASE_KEY)
        .with_status(200)
        .with_body(r#"[{"id": 1}]"#)
        .create_async()
        .await;
    point_everything_at(&server.url());

    let ingestion = jobs::fetch_price_coinmarketcap_from_env().await.unwrap();

    assert_eq!(ingestion.row_id, Some(1));
    quote.assert_async().await;
    write.assert_async().await;
}
