mod diagnostic_service;
mod indicator_engine;

pub use diagnostic_service::*;
pub use indicator_engine::*;
