mod indicator;

pub use indicator::*;
