//! Stockpulse - backend for the stock market analysis dashboard
//!
//! Serves a status message on `/`, a Basic-auth protected ticker on
//! `/api/data`, and a few static market endpoints for the dashboard's
//! API test page. All data is compiled in; there is no storage.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod market;
pub mod types;

pub use error::{Error, Result};
