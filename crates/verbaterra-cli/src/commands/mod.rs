//! One module per subcommand.

pub mod catalog;
pub mod metrics;
pub mod model;
pub mod sim;

use std::collections::BTreeMap;

/// Metric means keyed by lower-case name, the on-disk convention.
pub(crate) fn lowercase_keys(means: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    means
        .iter()
        .map(|(name, value)| (name.to_ascii_lowercase(), *value))
        .collect()
}
