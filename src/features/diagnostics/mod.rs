//! Diagnostics: one department evaluated against one questionnaire.
//!
//! Answers are submitted in batches. Every change to a diagnostic's answers
//! recomputes its overall score and per-category indicators in the same
//! transaction, see [`engine`] and [`services::IndicatorEngine`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/diagnostics` | List diagnostics |
//! | POST | `/api/diagnostics` | Start a diagnostic |
//! | GET | `/api/diagnostics/{id}` | Diagnostic with answers and indicators |
//! | PUT | `/api/diagnostics/{id}` | Update department, questionnaire or notes |
//! | DELETE | `/api/diagnostics/{id}` | Delete a diagnostic |
//! | PUT | `/api/diagnostics/{id}/answers` | Upsert answers and recalculate |
//! | DELETE | `/api/diagnostics/{id}/answers/{question_id}` | Remove an answer and recalculate |
//! | POST | `/api/diagnostics/{id}/recalculate` | Recalculate indicators |

pub mod dtos;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{DiagnosticService, IndicatorEngine};
