//! Command implementations

mod show_config;
mod validate;

use std::path::Path;

use scaffold_check::config::ValidatorConfig;

pub use show_config::show_config;
pub use validate::validate;

/// Load the explicit config file, or discover one under `root`
fn load_config(root: &Path, config_path: Option<&Path>) -> anyhow::Result<ValidatorConfig> {
    let config = match config_path {
        Some(path) => ValidatorConfig::load(path)?,
        None => ValidatorConfig::discover(root)?,
    };
    Ok(config)
}
