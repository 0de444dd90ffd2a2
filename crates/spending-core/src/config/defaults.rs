// Single source of truth for all default values.

// --- Relevance ---
pub const DEFAULT_ACCURACY_TOLERANCE: f64 = 0.97;
pub const DEFAULT_HIGH_RELEVANCE_SCORE: f64 = 8.0;

// --- Ranking ---
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

// --- Languages ---
pub const DEFAULT_LANGUAGE: &str = "en_GB";
pub const DEFAULT_SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en_GB", "English"),
    ("fr_FR", "French"),
    ("es_ES", "Spanish"),
];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
