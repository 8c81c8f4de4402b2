mod answer_dto;
mod diagnostic_dto;

pub use answer_dto::*;
pub use diagnostic_dto::*;
