//! Read side of diagnostic indicators.
//!
//! Indicators are derived data: only the indicator engine writes them, and it
//! rebuilds a diagnostic's whole set on every recalculation.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/indicators` | List indicators across diagnostics |
//! | GET | `/api/indicators/{id}` | Indicator with its diagnostic context |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::IndicatorService;
