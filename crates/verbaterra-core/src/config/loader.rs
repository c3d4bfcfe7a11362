//! Override sources: config files, environment variables, and `key=value` flags.
//!
//! Layer order (highest priority first):
//! 1. CLI assignments (`--set ritual_mean=55`)
//! 2. Environment variables (`VERBATERRA_PARAM_RITUAL_MEAN=55`)
//! 3. Override file (YAML, TOML, or JSON by extension)
//! 4. Engine defaults (applied later by `resolve`)

use std::fs;
use std::io;
use std::path::Path;

use super::value::{ConfigMap, ConfigValue};
use crate::constants::PARAM_ENV_PREFIX;
use crate::errors::ConfigError;

/// Load a flat override mapping from `path`.
///
/// An empty YAML document means "no overrides".
pub fn load_overrides(path: &Path) -> Result<ConfigMap, ConfigError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::FileNotFound {
            path: display.clone(),
        },
        _ => ConfigError::ParseError {
            path: display.clone(),
            message: e.to_string(),
        },
    })?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parse_error = |message: String| ConfigError::ParseError {
        path: display.clone(),
        message,
    };

    match extension.as_str() {
        "yaml" | "yml" => {
            if content.trim().is_empty() {
                return Ok(ConfigMap::new());
            }
            let parsed: Option<ConfigMap> =
                serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?;
            Ok(parsed.unwrap_or_default())
        }
        "toml" => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
        "json" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        _ => Err(ConfigError::UnsupportedFormat {
            path: display.clone(),
            extension,
        }),
    }
}

/// Collect `VERBATERRA_PARAM_*` variables from the process environment.
/// Keys are lowercased after the prefix is stripped.
pub fn env_overrides() -> ConfigMap {
    env_overrides_from(std::env::vars())
}

/// `env_overrides` over an explicit variable list.
pub fn env_overrides_from<I>(vars: I) -> ConfigMap
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| {
            let param = key.strip_prefix(PARAM_ENV_PREFIX)?;
            if param.is_empty() {
                return None;
            }
            Some((param.to_ascii_lowercase(), ConfigValue::parse_str(&value)))
        })
        .collect()
}

/// Parse a `key=value` assignment.
pub fn parse_assignment(raw: &str) -> Result<(String, ConfigValue), ConfigError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ConfigError::invalid(raw, "expected key=value"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::invalid(raw, "empty parameter name"));
    }
    Ok((key.to_string(), ConfigValue::parse_str(value)))
}

/// Gather overrides from every layer. Later layers win.
pub fn collect_overrides(
    file: Option<&Path>,
    env: ConfigMap,
    assignments: &[String],
) -> Result<ConfigMap, ConfigError> {
    let mut merged = match file {
        Some(path) => load_overrides(path)?,
        None => ConfigMap::new(),
    };

    merged.extend(env);

    for raw in assignments {
        let (key, value) = parse_assignment(raw)?;
        merged.insert(key, value);
    }

    tracing::debug!(keys = merged.len(), "collected config overrides");
    Ok(merged)
}
