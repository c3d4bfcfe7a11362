//! Configuration system: flat parameter maps, layered overrides, and
//! pure resolution against engine defaults.

pub mod loader;
pub mod resolved;
pub mod value;

pub use loader::{
    collect_overrides, env_overrides, env_overrides_from, load_overrides, parse_assignment,
};
pub use resolved::{resolve, ResolvedConfig};
pub use value::{config_map, ConfigMap, ConfigValue};
