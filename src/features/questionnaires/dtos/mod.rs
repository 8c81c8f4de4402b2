mod questionnaire_dto;

pub use questionnaire_dto::*;
