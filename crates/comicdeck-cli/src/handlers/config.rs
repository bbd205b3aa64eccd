use anyhow::{Result, bail};
use comicdeck_client::config::{ApiConfig, Config};
use comicdeck_client::CatalogSource;

use crate::context::AppContext;
use crate::logging::LOG_FILE_NAME;
use crate::presentation::presenters;
use crate::presentation::view_models::ConfigViewModel;

pub fn show(ctx: &AppContext) -> Result<()> {
    let config_path = ctx.config_path();
    let endpoint = ctx.catalog()?.describe();

    let content = ConfigViewModel {
        data_dir: ctx.data_dir().display().to_string(),
        config_path: config_path.display().to_string(),
        config_exists: config_path.exists(),
        base_url: ctx.base_url.clone(),
        endpoint,
        timeout_secs: ctx.config.api.timeout_secs,
        log_file: ctx.data_dir().join(LOG_FILE_NAME).display().to_string(),
    };

    ctx.render(presenters::present_config(content))
}

/// Write a config.toml pinned to the currently resolved backend
pub fn init(ctx: &AppContext, force: bool) -> Result<()> {
    let config_path = ctx.config_path();
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    let config = Config {
        api: ApiConfig {
            base_url: Some(ctx.base_url.clone()),
            timeout_secs: ctx.config.api.timeout_secs,
        },
    };
    config.save_to(&config_path)?;
    tracing::info!(path = %config_path.display(), "config written");

    println!("Wrote {}", config_path.display());
    Ok(())
}
