//! Integration tests for the Twelve Data client against a mocked upstream.

use goldpulse::models::indicators::TrendIndicator;
use goldpulse::services::{MarketDataProvider, ServiceError, TwelveDataClient};
use wiremock::matchers::path;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{mock_closes, mock_macd, mock_rsi, mock_status, API_KEY, SYMBOL};

async fn client() -> (TwelveDataClient, MockServer) {
    let server = MockServer::start().await;
    let client = TwelveDataClient::with_client(server.uri(), API_KEY, reqwest::Client::new());
    (client, server)
}

#[tokio::test]
async fn rsi_series_parses_string_values_most_recent_first() {
    let (client, server) = client().await;
    mock_rsi(&server, &[("2024-05-03", "71.25"), ("2024-05-02", "68.5")]).await;

    let reading = client.rsi_series(SYMBOL).await.unwrap();

    assert_eq!(reading.current(), Some(71.25));
    assert_eq!(reading.history()[1].date, "2024-05-02");
    assert_eq!(reading.history()[1].value, 68.5);
}

#[tokio::test]
async fn rsi_series_keeps_non_numeric_points_as_nan() {
    let (client, server) = client().await;
    mock_rsi(
        &server,
        &[("2024-05-03", "55.0"), ("2024-05-02", "n/a"), ("2024-05-01", "52.0")],
    )
    .await;

    let reading = client.rsi_series(SYMBOL).await.unwrap();

    assert_eq!(reading.len(), 3);
    assert_eq!(reading.current(), Some(55.0));
    assert_eq!(reading.history()[1].date, "2024-05-02");
    assert!(reading.history()[1].value.is_nan());
    assert_eq!(reading.history()[2].value, 52.0);
}

#[tokio::test]
async fn rsi_series_with_non_numeric_head_has_no_current_reading() {
    let (client, server) = client().await;
    mock_rsi(&server, &[("2024-05-03", ""), ("2024-05-02", "52.0")]).await;

    let reading = client.rsi_series(SYMBOL).await.unwrap();

    assert!(reading.current().is_none());
}

#[tokio::test]
async fn rsi_series_keeps_at_most_thirty_points() {
    let (client, server) = client().await;
    let dates: Vec<String> = (0..40).map(|i| format!("day-{}", i)).collect();
    let values: Vec<(&str, &str)> = dates.iter().map(|d| (d.as_str(), "50.0")).collect();
    mock_rsi(&server, &values).await;

    let reading = client.rsi_series(SYMBOL).await.unwrap();

    assert_eq!(reading.len(), 30);
}

#[tokio::test]
async fn in_band_error_becomes_api_error() {
    let (client, server) = client().await;
    Mock::given(path("/rsi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 429,
            "message": "You have run out of API credits for the current minute.",
            "status": "error"
        })))
        .mount(&server)
        .await;

    let err = client.rsi_series(SYMBOL).await.unwrap_err();

    match err {
        ServiceError::Api(message) => assert!(message.contains("API credits")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn http_failure_becomes_status_error() {
    let (client, server) = client().await;
    mock_status(&server, "/macd", 502).await;

    let err = client.latest_macd(SYMBOL).await.unwrap_err();

    assert!(matches!(err, ServiceError::Status(502)));
}

#[tokio::test]
async fn latest_macd_reads_first_row() {
    let (client, server) = client().await;
    mock_macd(&server, "4.5", "3.25", "1.25").await;

    let macd = client.latest_macd(SYMBOL).await.unwrap();

    assert_eq!(macd, Some(TrendIndicator::new(4.5, 3.25, 1.25)));
}

#[tokio::test]
async fn latest_macd_with_unparseable_row_is_none() {
    let (client, server) = client().await;
    mock_macd(&server, "4.5", "oops", "1.25").await;

    assert_eq!(client.latest_macd(SYMBOL).await.unwrap(), None);
}

#[tokio::test]
async fn recent_closes_stop_at_first_bad_value() {
    let (client, server) = client().await;
    mock_closes(&server, &["2310.5", "2301.0", "bad", "2280.0"]).await;

    let closes = client.recent_closes(SYMBOL).await.unwrap();

    assert_eq!(closes, vec![2310.5, 2301.0]);
}
