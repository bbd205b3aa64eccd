use anyhow::Result;
use comicdeck_client::config::API_URL_ENV;
use comicdeck_client::{Config, HttpCatalog, resolve_base_url, resolve_workspace_path};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::presentation::view_models::CommandResultViewModel;
use crate::types::OutputFormat;

/// Everything a handler needs: where data lives, which backend to talk to,
/// and how to print results.
pub struct AppContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub base_url: String,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn resolve(
        data_dir: Option<&str>,
        api_url: Option<&str>,
        format: OutputFormat,
    ) -> Result<Self> {
        let data_dir = resolve_workspace_path(data_dir)?;
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        let env_url = std::env::var(API_URL_ENV).ok();
        let base_url = resolve_base_url(api_url, env_url.as_deref(), &config);

        Ok(Self {
            data_dir,
            config,
            base_url,
            format,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn catalog(&self) -> Result<HttpCatalog> {
        Ok(HttpCatalog::new(&self.base_url, &self.config.api)?)
    }

    /// Render a view model using the configured output format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + std::fmt::Display,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json);
        renderer.render(view_model)
    }
}
