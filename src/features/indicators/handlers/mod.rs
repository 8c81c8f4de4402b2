mod indicator_handler;

pub use indicator_handler::*;
