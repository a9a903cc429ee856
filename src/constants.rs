use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

// Pagination bounds shared by the query layer and its consumers.
pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 12;
pub const MAX_LIMIT: i64 = 100;
pub const DEFAULT_FEATURED_LIMIT: i64 = 6;
