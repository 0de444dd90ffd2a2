/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ISO code of the base currency every story is normalized into.
pub const BASE_CURRENCY: &str = "USD";

/// Days per year used by the per-day rate bucket.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Weeks per year used by the per-week rate bucket.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Months per year used by the per-month rate bucket.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Upper bound of the relevance score scale.
pub const MAX_RELEVANCE_SCORE: f64 = 10.0;
