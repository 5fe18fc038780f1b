use crate::{APP_NAME, Res, error::Error};
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use figment::{
    Figment,
    providers::{Format, Toml},
};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub status: StatusConfig,
    pub merge_base: MergeBaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusConfig {
    pub default_untracked_files: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MergeBaseConfig {
    pub trunk_branches: Vec<String>,
    pub integration_branch: String,
}

impl MergeBaseConfig {
    pub fn is_trunk(&self, branch: &str) -> bool {
        self.trunk_branches.iter().any(|trunk| trunk == branch)
    }
}

impl Default for Config {
    fn default() -> Self {
        Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .extract()
            .expect("Failed to parse default_config.toml")
    }
}

pub fn init_config(path: Option<PathBuf>) -> Res<Config> {
    let config_path = path.or_else(config_path);
    log::debug!("Loading config {:?}", config_path);

    let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));
    if let Some(config_path) = config_path {
        figment = figment.merge(Toml::file(config_path));
    }

    figment
        .extract()
        .map_err(Box::new)
        .map_err(Error::Config)
}

fn config_path() -> Option<PathBuf> {
    match choose_base_strategy() {
        Ok(strategy) => Some(strategy.config_dir().join(APP_NAME).join("config.toml")),
        Err(err) => {
            log::warn!("Couldn't resolve config directory: {}", err);
            None
        }
    }
}
