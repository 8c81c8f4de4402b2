//! Questionnaire catalog: surveys made of ordered, typed, categorized questions.
//!
//! A question's `category` is a free-form label; questions sharing the exact
//! same label form one indicator group when diagnostics are scored.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/questionnaires` | List questionnaires |
//! | POST | `/api/questionnaires` | Create a questionnaire (optionally with questions) |
//! | GET | `/api/questionnaires/{id}` | Questionnaire with its ordered questions |
//! | PUT | `/api/questionnaires/{id}` | Update title, description or active flag |
//! | DELETE | `/api/questionnaires/{id}` | Delete (cascades to diagnostics) |
//! | POST | `/api/questionnaires/{id}/questions` | Add a question |
//! | PUT | `/api/questionnaires/{id}/questions/{question_id}` | Update a question |
//! | DELETE | `/api/questionnaires/{id}/questions/{question_id}` | Delete a question |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionnaireService;
