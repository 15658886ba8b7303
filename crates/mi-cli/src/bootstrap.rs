use anyhow::Context;
use mi_config::MiConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, TOML files, `MI_*` env) and apply flag overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<MiConfig> {
    let config = MiConfig::load_with_dotenv().context("failed to load mi configuration")?;

    match flags.base_url.as_deref() {
        Some(base_url) => config
            .with_base_url(base_url)
            .context("invalid --base-url"),
        None => Ok(config),
    }
}
