//! Shared constants for the VerbaTerra toolkit.

/// VerbaTerra version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Column names ----

pub const RITUAL: &str = "ritual";
pub const TRADE: &str = "trade";
pub const SYMBOLISM: &str = "symbolism";
pub const HIERARCHY: &str = "hierarchy";
pub const LEXICAL_DIVERSITY: &str = "lexical_diversity";
pub const SYNTAX_COMPLEXITY: &str = "syntax_complexity";

/// The four cultural predictor columns, in canonical order.
pub const FEATURE_COLUMNS: [&str; 4] = [RITUAL, TRADE, SYMBOLISM, HIERARCHY];

/// The two linguistic target columns, in canonical order.
pub const TARGET_COLUMNS: [&str; 2] = [LEXICAL_DIVERSITY, SYNTAX_COMPLEXITY];

/// Every column an observation table must carry before metrics or models run.
pub const MANDATORY_COLUMNS: [&str; 6] = [
    RITUAL,
    TRADE,
    SYMBOLISM,
    HIERARCHY,
    LEXICAL_DIVERSITY,
    SYNTAX_COMPLEXITY,
];

/// Prediction column for the lexical-diversity regression.
pub const LEXICAL_DIVERSITY_HAT: &str = "lexical_diversity_hat";

/// Prediction column for the syntax-complexity regression.
pub const SYNTAX_COMPLEXITY_HAT: &str = "syntax_complexity_hat";

// ---- Normalization ----

/// Ranges at or below this magnitude are treated as zero (all-zeros output).
pub const NORMALIZE_RANGE_TOLERANCE: f64 = 1e-8;

// ---- Environment ----

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "VERBATERRA_LOG";

/// Default tracing filter when `VERBATERRA_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "verbaterra=info";

/// Prefix for per-parameter environment overrides (`VERBATERRA_PARAM_RITUAL_MEAN=55`).
pub const PARAM_ENV_PREFIX: &str = "VERBATERRA_PARAM_";
