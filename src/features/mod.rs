pub mod activity_logs;
pub mod departments;
pub mod diagnostics;
pub mod indicators;
pub mod questionnaires;
