//! API handlers

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::auth::AuthenticatedUser;
use crate::market;
use crate::types::{
    ApiResponse, HealthResponse, MarketOverview, StatusMessage, StockListing, StockQuotes,
};

/// Liveness message on the base path
pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Backend is running!",
    })
}

/// Ticker for the dashboard, Basic auth required
pub async fn data(user: AuthenticatedUser) -> Json<StockQuotes> {
    tracing::debug!(username = %user.username, "Serving ticker data");
    Json(market::ticker())
}

/// Health check with version and server time
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Stock Market Analysis API is running",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn stocks() -> Json<ApiResponse<Vec<StockListing>>> {
    Json(ApiResponse::ok(
        market::listings(),
        "Stock data retrieved successfully",
    ))
}

pub async fn market_overview() -> Json<ApiResponse<MarketOverview>> {
    Json(ApiResponse::ok(
        market::overview(),
        "Market overview retrieved successfully",
    ))
}
