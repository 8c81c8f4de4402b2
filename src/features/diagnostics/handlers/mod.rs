mod answer_handler;
mod diagnostic_handler;

pub use answer_handler::*;
pub use diagnostic_handler::*;
