mod questionnaire_service;

pub use questionnaire_service::*;
