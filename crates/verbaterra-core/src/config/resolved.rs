//! Pure configuration resolution: `(defaults, overrides) -> ResolvedConfig`.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::{ConfigMap, ConfigValue};
use crate::errors::ConfigError;

/// A fully resolved, immutable configuration for one run.
///
/// The row-count key always holds an `Integer` equal to `rows()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    values: ConfigMap,
    row_key: String,
    rows: usize,
}

/// Merge `overrides` onto a copy of `defaults` (override wins, unknown keys
/// pass through), then coerce `row_key` to an integer row count.
///
/// Row counts are truncated toward zero; anything non-positive resolves to
/// zero rows. A missing, non-numeric, or non-finite row count is rejected.
pub fn resolve(
    defaults: &ConfigMap,
    overrides: &ConfigMap,
    row_key: &str,
) -> Result<ResolvedConfig, ConfigError> {
    let mut values = defaults.clone();
    for (key, value) in overrides {
        values.insert(key.clone(), value.clone());
    }

    let raw = values
        .get(row_key)
        .ok_or_else(|| ConfigError::invalid(row_key, "row count is required"))?;
    let count = raw.as_f64().ok_or_else(|| {
        ConfigError::invalid(row_key, format!("expected a number, got {}", raw.kind_name()))
    })?;
    if !count.is_finite() {
        return Err(ConfigError::invalid(row_key, "row count must be finite"));
    }
    let truncated = count.trunc();
    let rows = if truncated <= 0.0 { 0 } else { truncated as usize };
    values.insert(row_key.to_string(), ConfigValue::Integer(rows as i64));

    Ok(ResolvedConfig {
        values,
        row_key: row_key.to_string(),
        rows,
    })
}

impl ResolvedConfig {
    /// Number of rows the run will produce.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn row_key(&self) -> &str {
        &self.row_key
    }

    pub fn values(&self) -> &ConfigMap {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// A finite scalar parameter.
    pub fn number(&self, key: &str) -> Result<f64, ConfigError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| ConfigError::invalid(key, "missing parameter"))?;
        let number = value.as_f64().ok_or_else(|| {
            ConfigError::invalid(key, format!("expected a number, got {}", value.kind_name()))
        })?;
        if !number.is_finite() {
            return Err(ConfigError::invalid(key, "must be finite"));
        }
        Ok(number)
    }

    /// A finite, non-negative scalar (standard deviations, scales).
    pub fn non_negative(&self, key: &str) -> Result<f64, ConfigError> {
        let number = self.number(key)?;
        if number < 0.0 {
            return Err(ConfigError::invalid(key, "must be non-negative"));
        }
        Ok(number)
    }

    /// A weight tuple of exactly `len` finite entries.
    pub fn weights(&self, key: &str, len: usize) -> Result<Vec<f64>, ConfigError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| ConfigError::invalid(key, "missing parameter"))?;
        let list = value.as_list().ok_or_else(|| {
            ConfigError::invalid(key, format!("expected a list, got {}", value.kind_name()))
        })?;
        if list.len() != len {
            return Err(ConfigError::invalid(
                key,
                format!("expected {len} weights, got {}", list.len()),
            ));
        }
        if list.iter().any(|w| !w.is_finite()) {
            return Err(ConfigError::invalid(key, "weights must be finite"));
        }
        Ok(list.to_vec())
    }
}

impl Serialize for ResolvedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::value::config_map;

    fn defaults() -> ConfigMap {
        let mut map = config_map([("n", 180i64)]);
        map.insert("ritual_core".into(), ConfigValue::Number(60.0));
        map.insert("weights".into(), ConfigValue::List(vec![0.2, 0.3]));
        map
    }

    #[test]
    fn test_override_wins_and_defaults_untouched() {
        let base = defaults();
        let overrides = config_map([("ritual_core", 55.0)]);
        let resolved = resolve(&base, &overrides, "n").unwrap();
        assert_eq!(resolved.number("ritual_core").unwrap(), 55.0);
        assert_eq!(base["ritual_core"], ConfigValue::Number(60.0));
    }

    #[test]
    fn test_row_count_truncated_to_integer() {
        let resolved = resolve(&defaults(), &config_map([("n", 12.9)]), "n").unwrap();
        assert_eq!(resolved.rows(), 12);
        assert_eq!(resolved.get("n"), Some(&ConfigValue::Integer(12)));
    }

    #[test]
    fn test_non_positive_rows_resolve_to_zero() {
        let resolved = resolve(&defaults(), &config_map([("n", -4i64)]), "n").unwrap();
        assert_eq!(resolved.rows(), 0);
        assert_eq!(resolved.get("n"), Some(&ConfigValue::Integer(0)));
    }

    #[test]
    fn test_non_finite_rows_rejected() {
        let err = resolve(&defaults(), &config_map([("n", f64::NAN)]), "n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "n"));
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let resolved = resolve(&defaults(), &config_map([("label", "pilot")]), "n").unwrap();
        assert_eq!(resolved.get("label"), Some(&ConfigValue::Text("pilot".into())));
    }

    #[test]
    fn test_weights_length_checked() {
        let resolved = resolve(&defaults(), &ConfigMap::new(), "n").unwrap();
        assert_eq!(resolved.weights("weights", 2).unwrap(), vec![0.2, 0.3]);
        assert!(resolved.weights("weights", 5).is_err());
        assert!(resolved.weights("ritual_core", 1).is_err());
    }

    #[test]
    fn test_non_negative_rejects_negative_std() {
        let resolved =
            resolve(&defaults(), &config_map([("ritual_core", -1.0)]), "n").unwrap();
        assert!(resolved.non_negative("ritual_core").is_err());
    }
}
