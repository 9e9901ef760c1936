use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;

pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    config_path: PathBuf,
}

impl AppContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_path {
            Some(p) => p,
            None => Config::default_config_path()?,
        };

        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new());

        Ok(Self {
            fetcher,
            config_path,
        })
    }

    /// Read a fresh preferences snapshot from disk.
    ///
    /// Called at the start of every fetch; values are never cached between
    /// fetches.
    pub fn config(&self) -> Result<Config> {
        Ok(Config::load_from(&self.config_path)?)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        Ok(config.save_to(&self.config_path)?)
    }
}
