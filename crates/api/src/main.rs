use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trybear_core::domain::section::{
    CheckKind, DatasetParams, DistributionKind, Mode, RankingCategory, Section,
};
use trybear_core::landing::catalog;
use trybear_core::landing::types::{LandingContent, Product};
use trybear_core::mock::cache::MemoCache;
use trybear_core::mock::dataset::Dataset;
use trybear_core::mock::period::DateRange;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = trybear_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let state = AppState {
        cache: Arc::new(MemoCache::default()),
        default_company_id: settings.company_id(),
    };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, default_company_id = state.default_company_id, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/v1/landing", get(get_landing))
        .route("/api/v1/products/", get(list_products))
        .route("/api/v1/products/:id", get(get_product))
        .route("/api/v1/companies", get(list_companies))
        .route("/api/v1/dashboard/balance-sheet", get(get_balance_sheet))
        .route("/api/v1/dashboard/profit-loss", get(get_profit_loss))
        .route("/api/v1/dashboard/sales", get(get_sales))
        .route("/api/v1/dashboard/checks/:kind", get(get_checks))
        .route("/api/v1/dashboard/rankings/:category", get(get_ranking))
        .route("/api/v1/dashboard/distribution/:kind", get(get_distribution))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Clone)]
struct AppState {
    cache: Arc<MemoCache>,
    default_company_id: u32,
}

#[derive(Debug, Default, Deserialize)]
struct DashboardQuery {
    company_id: Option<u32>,
    from: Option<String>,
    to: Option<String>,
    mode: Option<String>,
}

#[derive(Debug, Serialize)]
struct ApiDataset<'a> {
    company_id: u32,
    range: &'a DateRange,
    #[serde(flatten)]
    dataset: &'a Dataset,
}

async fn get_landing() -> Json<LandingContent> {
    Json(catalog::landing_content())
}

async fn list_products() -> Json<Vec<Product>> {
    Json(catalog::products())
}

async fn get_product(Path(id): Path<u64>) -> Result<Json<Product>, StatusCode> {
    catalog::product(id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_companies() -> Json<Vec<trybear_core::companies::Company>> {
    Json(trybear_core::companies::all())
}

async fn get_balance_sheet(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    serve_dataset(&state, Section::BalanceSheet, query)
}

async fn get_profit_loss(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    serve_dataset(&state, Section::ProfitLoss, query)
}

async fn get_sales(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, StatusCode> {
    let mode = match query.mode.as_deref() {
        Some(s) => parse_discriminant::<Mode>(s)?,
        None => Mode::default(),
    };
    Ok(serve_dataset(&state, Section::Sales(mode), query))
}

async fn get_checks(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, StatusCode> {
    let kind = parse_discriminant::<CheckKind>(&kind)?;
    Ok(serve_dataset(&state, Section::Checks(kind), query))
}

async fn get_ranking(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, StatusCode> {
    let category = parse_discriminant::<RankingCategory>(&category)?;
    Ok(serve_dataset(&state, Section::Ranking(category), query))
}

async fn get_distribution(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, StatusCode> {
    let kind = parse_discriminant::<DistributionKind>(&kind)?;
    Ok(serve_dataset(&state, Section::Distribution(kind), query))
}

fn parse_discriminant<T>(s: &str) -> Result<T, StatusCode>
where
    T: FromStr<Err = anyhow::Error>,
{
    s.parse::<T>().map_err(|e| {
        tracing::debug!(error = %e, "rejecting dashboard request");
        StatusCode::BAD_REQUEST
    })
}

fn resolve_range(query: &DashboardQuery, now: DateTime<Utc>) -> DateRange {
    if let (Some(from), Some(to)) = (&query.from, &query.to) {
        return DateRange::new(from.clone(), to.clone());
    }

    let current = trybear_core::time::jalali::current_year_range(now).unwrap_or_else(|e| {
        sentry_anyhow::capture_anyhow(&e);
        tracing::error!(error = %e, "failed to resolve current Jalali year");
        DateRange::year(trybear_core::mock::period::DEFAULT_YEAR)
    });
    DateRange::new(
        query.from.clone().unwrap_or(current.from),
        query.to.clone().unwrap_or(current.to),
    )
}

fn serve_dataset(state: &AppState, section: Section, query: DashboardQuery) -> Response {
    let params = DatasetParams::new(
        query.company_id.unwrap_or(state.default_company_id),
        resolve_range(&query, Utc::now()),
    );
    let dataset = state.cache.get_or_generate(section, &params);

    tracing::debug!(%section, company_id = params.company_id, from = %params.range.from, to = %params.range.to, "serving dataset");

    Json(ApiDataset {
        company_id: params.company_id,
        range: &params.range,
        dataset: &dataset,
    })
    .into_response()
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &trybear_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
