//! Response payloads served by the API

use serde::Serialize;

/// Plain status body, e.g. `{"message": "Backend is running!"}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}

/// One row of the dashboard ticker.
///
/// `change` is a signed percent string (`"+0.95%"`); the dashboard colours
/// the row by its leading sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockQuote {
    pub symbol: &'static str,
    pub price: f64,
    pub change: &'static str,
}

/// Body of `GET /api/data`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockQuotes {
    pub stocks: Vec<StockQuote>,
}

/// Detailed listing served by `GET /api/stocks`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockListing {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: u64,
}

/// Index level and its move. Aggregates such as total market cap are whole
/// rupees and use an integer `value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexSnapshot<V = f64> {
    pub value: V,
    pub change: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOverview {
    pub nifty_50: IndexSnapshot,
    pub sensex: IndexSnapshot,
    pub bank_nifty: IndexSnapshot,
    pub market_cap: IndexSnapshot<u64>,
}

/// Envelope used by the `/api/stocks` routes
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: &'static str,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: &'static str) -> Self {
        Self {
            success: true,
            data,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}
