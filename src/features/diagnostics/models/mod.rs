mod answer;
mod diagnostic;

pub use answer::*;
pub use diagnostic::*;
