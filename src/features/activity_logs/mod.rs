//! Activity trail for catalog and diagnostic actions.
//!
//! Entries are appended by the other services, inside the same transaction
//! as the action when there is one.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/activity-logs` | List entries, newest first |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ActivityLogService;
