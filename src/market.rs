//! Fixed market data compiled into the binary.
//!
//! Nothing here is fetched or mutated at runtime; every call returns the same
//! values in the same order.

use crate::types::{IndexSnapshot, MarketOverview, StockListing, StockQuote, StockQuotes};

/// The three-row ticker behind `GET /api/data`.
pub fn ticker() -> StockQuotes {
    StockQuotes {
        stocks: vec![
            StockQuote {
                symbol: "RELIANCE",
                price: 2456.78,
                change: "+0.95%",
            },
            StockQuote {
                symbol: "TCS",
                price: 3789.12,
                change: "+0.49%",
            },
            StockQuote {
                symbol: "HDFC_BANK",
                price: 1567.34,
                change: "-0.03%",
            },
        ],
    }
}

pub fn listings() -> Vec<StockListing> {
    vec![
        StockListing {
            symbol: "RELIANCE",
            name: "Reliance Industries Ltd",
            price: 2456.78,
            change: 2.34,
            change_percent: 0.95,
            volume: 12_500_000,
            market_cap: 1_800_000_000_000,
        },
        StockListing {
            symbol: "TCS",
            name: "Tata Consultancy Services",
            price: 3789.12,
            change: 1.87,
            change_percent: 0.49,
            volume: 8_900_000,
            market_cap: 1_300_000_000_000,
        },
        StockListing {
            symbol: "HDFC_BANK",
            name: "HDFC Bank Ltd",
            price: 1567.34,
            change: -0.45,
            change_percent: -0.03,
            volume: 15_200_000,
            market_cap: 900_000_000_000,
        },
        StockListing {
            symbol: "INFOSYS",
            name: "Infosys Ltd",
            price: 1234.56,
            change: 0.92,
            change_percent: 0.75,
            volume: 10_800_000,
            market_cap: 600_000_000_000,
        },
    ]
}

pub fn overview() -> MarketOverview {
    MarketOverview {
        nifty_50: IndexSnapshot {
            value: 22419.95,
            change: 0.85,
            change_percent: 0.38,
        },
        sensex: IndexSnapshot {
            value: 73852.94,
            change: 0.72,
            change_percent: 0.98,
        },
        bank_nifty: IndexSnapshot {
            value: 48123.45,
            change: -0.23,
            change_percent: -0.48,
        },
        market_cap: IndexSnapshot {
            value: 3_456_780_000_000_000,
            change: 1.2,
            change_percent: 0.35,
        },
    }
}
