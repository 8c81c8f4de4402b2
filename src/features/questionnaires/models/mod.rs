mod question;
mod questionnaire;

pub use question::*;
pub use questionnaire::*;
