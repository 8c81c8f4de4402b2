/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ANSWER VALUES
// =============================================================================

/// Lowest value on the 1-5 scale
pub const SCALE_MIN: i32 = 1;

/// Highest value on the 1-5 scale
pub const SCALE_MAX: i32 = 5;

/// Numeric value stored for a "yes" on yes/no questions
pub const YES_VALUE: i32 = 5;

/// Numeric value stored for a "no" on yes/no questions
pub const NO_VALUE: i32 = 1;

/// Maximum number of answers accepted in one submission
pub const MAX_ANSWERS_PER_SUBMISSION: usize = 500;
