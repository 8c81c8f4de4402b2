mod indicator_dto;

pub use indicator_dto::*;
