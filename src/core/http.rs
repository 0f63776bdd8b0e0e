//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::Config;
use crate::metrics::Metrics;
use crate::services::{
    gather_market_inputs, MarketDataProvider, MetalsDevClient, NewsApiClient, ServiceError,
    TwelveDataClient,
};
use crate::signals::MarketHeatEngine;

const MARKET_HEAT_CACHE: &str = "s-maxage=3600, stale-while-revalidate";
const METALS_CACHE: &str = "s-maxage=60, stale-while-revalidate";

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub symbol: String,
    pub market_data: Option<Arc<dyn MarketDataProvider>>,
    pub metals: Option<Arc<MetalsDevClient>>,
    pub news: Option<Arc<NewsApiClient>>,
}

impl AppState {
    /// State with no upstream clients; every data route reports "not configured".
    pub fn new(metrics: Arc<Metrics>, symbol: impl Into<String>) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            symbol: symbol.into(),
            market_data: None,
            metals: None,
            news: None,
        }
    }

    pub fn with_market_data(mut self, provider: Arc<dyn MarketDataProvider>) -> Self {
        self.market_data = Some(provider);
        self
    }

    pub fn with_metals(mut self, client: Arc<MetalsDevClient>) -> Self {
        self.metals = Some(client);
        self
    }

    pub fn with_news(mut self, client: Arc<NewsApiClient>) -> Self {
        self.news = Some(client);
        self
    }

    /// Wire up every upstream client whose API key is present in `config`.
    pub fn from_config(config: &Config, metrics: Arc<Metrics>) -> Result<Self, ServiceError> {
        let timeout = Duration::from_secs(config.upstream_timeout_secs);
        let mut state = Self::new(metrics, config.symbol.clone());

        match &config.twelve_data_api_key {
            Some(key) => {
                let client =
                    TwelveDataClient::new(config.twelve_data_base_url.as_str(), key.clone(), timeout)?;
                state = state.with_market_data(Arc::new(client));
            }
            None => warn!("TWELVE_DATA_API_KEY not configured - /api/market-heat disabled"),
        }
        match &config.metals_dev_api_key {
            Some(key) => {
                let client =
                    MetalsDevClient::new(config.metals_dev_base_url.as_str(), key.clone(), timeout)?;
                state = state.with_metals(Arc::new(client));
            }
            None => warn!("METALS_DEV_API_KEY not configured - /api/metals disabled"),
        }
        match &config.news_api_key {
            Some(key) => {
                let client =
                    NewsApiClient::new(config.news_api_base_url.as_str(), key.clone(), timeout)?;
                state = state.with_news(Arc::new(client));
            }
            None => warn!("NEWS_API_KEY not configured - /api/news disabled"),
        }

        Ok(state)
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn with_cache(mut response: Response, cache_control: Option<&'static str>) -> Response {
    if let Some(value) = cache_control {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static(value));
    }
    response
}

fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "error": message }))).into_response()
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "goldpulse-api"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// RSI heat, overheat alert and entry/exit signal for the configured symbol.
async fn market_heat(State(state): State<AppState>) -> Response {
    let cache = Some(MARKET_HEAT_CACHE);

    let Some(provider) = state.market_data.as_ref() else {
        error!("TWELVE_DATA_API_KEY not configured");
        return with_cache(
            failure(StatusCode::INTERNAL_SERVER_ERROR, "Signal system not configured."),
            cache,
        );
    };

    let gathered = gather_market_inputs(provider.as_ref(), &state.symbol, &state.metrics).await;
    let inputs = match gathered {
        Ok(inputs) => inputs,
        Err(e) => {
            error!(error = %e, symbol = %state.symbol, "Error fetching market heat inputs");
            return with_cache(
                failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to calculate market signals. Please try again later.",
                ),
                cache,
            );
        }
    };

    let evaluation = match MarketHeatEngine::evaluate(&inputs) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            error!(error = %e, symbol = %state.symbol, "Error calculating signals");
            return with_cache(
                failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to calculate market signals. Please try again later.",
                ),
                cache,
            );
        }
    };

    state
        .metrics
        .signals_generated_total
        .with_label_values(&[evaluation.signal.kind.as_str()])
        .inc();
    info!(
        signal = %evaluation.signal.kind,
        strength = evaluation.signal.strength,
        heat = %format!("{:.1}", evaluation.report.current_heat),
        heat_level = evaluation.report.heat_level,
        "Signals calculated"
    );

    with_cache(
        Json(json!({
            "success": true,
            "data": evaluation.report,
            "timestamp": timestamp(),
        }))
        .into_response(),
        cache,
    )
}

/// Metals.dev latest spot prices, passed through.
async fn metals(State(state): State<AppState>) -> Response {
    let cache = Some(METALS_CACHE);

    let Some(client) = state.metals.as_ref() else {
        error!("METALS_DEV_API_KEY not configured");
        return with_cache(
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Metals price service not configured. Please contact administrator.",
            ),
            cache,
        );
    };

    let result = client.latest().await;
    state.metrics.record_upstream("metals_dev", result.is_ok());

    let response = match result {
        Ok(data) => {
            info!("Fetched metal prices");
            Json(json!({
                "success": true,
                "data": data,
                "timestamp": timestamp(),
            }))
            .into_response()
        }
        Err(ServiceError::RateLimited) => {
            warn!("Metals.dev rate limit reached");
            failure(
                StatusCode::TOO_MANY_REQUESTS,
                "Price service temporarily unavailable. Please try again later.",
            )
        }
        Err(e) => {
            error!(error = %e, "Error fetching metal prices");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch metal prices. Please try again later.",
            )
        }
    };

    with_cache(response, cache)
}

/// Latest gold market headlines from NewsAPI.
async fn news(State(state): State<AppState>) -> Response {
    let Some(client) = state.news.as_ref() else {
        error!("NEWS_API_KEY not configured");
        return failure(StatusCode::INTERNAL_SERVER_ERROR, "News service not configured.");
    };

    let result = client.gold_headlines().await;
    state.metrics.record_upstream("news_api", result.is_ok());

    match result {
        Ok(digest) => Json(json!({
            "success": true,
            "articles": digest.articles,
            "totalResults": digest.total_results,
        }))
        .into_response(),
        Err(e) => {
            error!(error = %e, "Error fetching news");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch news")
        }
    }
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> Response {
    failure(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route(
            "/api/market-heat",
            get(market_heat)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/metals",
            get(metals).options(preflight).fallback(method_not_allowed),
        )
        .route(
            "/api/news",
            get(news).options(preflight).fallback(method_not_allowed),
        )
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(cors),
        )
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let state = AppState::from_config(&config, metrics)?;
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
