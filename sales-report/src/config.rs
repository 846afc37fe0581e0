//! Report configuration
//!
//! Loaded from environment variables. Unset values take the defaults;
//! malformed ones fall back to them with a warning.

use shared::models::OrderState;

use crate::scope::TaxonomyMatch;

/// Report configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | REPORT_TOP_LIMIT | 10 | default top products limit |
/// | REPORT_TAXONOMY_MATCH | union | `union` or `intersection` |
/// | REPORT_ORDER_STATE | complete | order state reported on |
/// | LOG_LEVEL | info | log filter |
/// | LOG_DIR | - | directory for rolling log files |
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub top_limit: usize,
    pub taxonomy_match: TaxonomyMatch,
    pub order_state: OrderState,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_limit: 10,
            taxonomy_match: TaxonomyMatch::Union,
            order_state: OrderState::Complete,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

impl ReportConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    ///
    /// Unparsable values are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            top_limit: parse_or("REPORT_TOP_LIMIT", &lookup, defaults.top_limit),
            taxonomy_match: parse_or("REPORT_TAXONOMY_MATCH", &lookup, defaults.taxonomy_match),
            order_state: parse_or("REPORT_ORDER_STATE", &lookup, defaults.order_state),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
        }
    }

    /// Override the reporting knobs, keeping everything else
    ///
    /// Mostly used by tests.
    pub fn with_overrides(top_limit: usize, taxonomy_match: TaxonomyMatch) -> Self {
        Self {
            top_limit,
            taxonomy_match,
            ..Self::default()
        }
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Invalid config value, using default");
            default
        }),
        None => default,
    }
}
