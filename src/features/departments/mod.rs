//! Departments evaluated by diagnostics.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/departments` | List departments |
//! | POST | `/api/departments` | Create a department |
//! | GET | `/api/departments/{id}` | Get a department |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::DepartmentService;
