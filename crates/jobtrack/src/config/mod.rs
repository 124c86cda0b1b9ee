pub mod loader;
pub mod schema;

pub use loader::{discover_config, load_config, load_config_from_str, DiscoveredConfig};
pub use schema::Config;
