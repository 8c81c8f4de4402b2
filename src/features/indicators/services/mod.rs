mod indicator_service;

pub use indicator_service::*;
