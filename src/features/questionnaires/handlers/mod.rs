mod questionnaire_handler;

pub use questionnaire_handler::*;
