// Shared helpers
pub mod time_utils;

pub use time_utils::TimeUtils;
