//! Print the effective configuration

use std::path::Path;

use anyhow::Context;
use scaffold_check::output::OutputMode;
use scaffold_check::paths;

use super::load_config;

/// Print the configuration that `validate` would use for `path`
pub fn show_config(
    path: &Path,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let root = paths::resolve_project_root(path)
        .with_context(|| format!("cannot open project {}", path.display()))?;
    let config = load_config(&root, config_path)?;

    match mode {
        OutputMode::Human => print!("{}", config.to_toml()?),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
