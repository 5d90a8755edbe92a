// Week Zero - Core Library
// Four independent utilities, exposed for the CLI driver and tests

pub mod repeat;          // Repeat Numbers
pub mod conditional_sum; // Conditional Sum
pub mod calendar;        // Talking Calendar
pub mod change;          // Change Calculator

// Re-export commonly used types
pub use repeat::{repeat_numbers, number_text, RepeatPair};
pub use conditional_sum::{conditional_sum, sum_by_parity, as_integer, Parity};
pub use calendar::{
    talking_calendar, talking_calendar_strict,
    month_name, ordinal_suffix, MONTHS,
};
pub use change::{
    calculate_change, breakdown,
    Change, Denomination, DENOMINATIONS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
