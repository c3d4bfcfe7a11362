//! Configuration values: the plain key-value shapes callers hand the core.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single configuration value.
///
/// Untagged so that YAML/TOML/JSON scalars and lists map directly:
/// `50` → `Integer`, `50.5` → `Number`, `[0.2, 0.3]` → `List`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Integer(i64),
    Number(f64),
    List(Vec<f64>),
    Text(String),
}

impl ConfigValue {
    /// Numeric view of scalar values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Number(v) => Some(*v),
            Self::List(_) | Self::Text(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[f64]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::List(_) => "list",
            Self::Text(_) => "text",
        }
    }

    /// Parse a command-line or environment string.
    ///
    /// Integers, then floats, then comma-separated float lists
    /// (`0.2,0.3,0.25,-0.1,20`) are tried before falling back to text.
    pub fn parse_str(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(v) = trimmed.parse::<i64>() {
            return Self::Integer(v);
        }
        if let Ok(v) = trimmed.parse::<f64>() {
            return Self::Number(v);
        }
        let inner = trimmed.trim_start_matches('[').trim_end_matches(']');
        if inner.contains(',') {
            let parsed: Result<Vec<f64>, _> =
                inner.split(',').map(|p| p.trim().parse::<f64>()).collect();
            if let Ok(list) = parsed {
                return Self::List(list);
            }
        }
        Self::Text(trimmed.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Vec<f64>> for ConfigValue {
    fn from(v: Vec<f64>) -> Self {
        Self::List(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::List(v) => {
                let parts: Vec<String> = v.iter().map(|x| x.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// Ordered mapping of parameter names to values.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// Build a `ConfigMap` from `(key, value)` pairs.
pub fn config_map<K, V, I>(pairs: I) -> ConfigMap
where
    K: Into<String>,
    V: Into<ConfigValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_variants() {
        assert_eq!(ConfigValue::parse_str("50"), ConfigValue::Integer(50));
        assert_eq!(ConfigValue::parse_str(" 8.5 "), ConfigValue::Number(8.5));
        assert_eq!(
            ConfigValue::parse_str("[0.2, 0.3,20]"),
            ConfigValue::List(vec![0.2, 0.3, 20.0])
        );
        assert_eq!(ConfigValue::parse_str("vsion"), ConfigValue::Text("vsion".into()));
    }

    #[test]
    fn test_untagged_json_shapes() {
        let map: ConfigMap =
            serde_json::from_str(r#"{"n": 40, "rate": 0.5, "w": [1, 2.5], "tag": "x"}"#).unwrap();
        assert_eq!(map["n"], ConfigValue::Integer(40));
        assert_eq!(map["rate"], ConfigValue::Number(0.5));
        assert_eq!(map["w"], ConfigValue::List(vec![1.0, 2.5]));
        assert_eq!(map["tag"], ConfigValue::Text("x".into()));
    }
}
