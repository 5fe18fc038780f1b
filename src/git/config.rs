use crate::{Res, error::Error};
use git2::Repository;
use std::{collections::HashMap, path::Path};

/// Resolves git settings. Unset keys read as the empty string.
pub trait ConfigReader {
    fn get_value(&self, key: &str) -> String;
}

pub struct GitConfig {
    config: git2::Config,
}

impl GitConfig {
    pub fn open(dir: &Path) -> Res<Self> {
        log::debug!("Opening repo");
        let repo = Repository::open(dir).map_err(Error::OpenRepo)?;
        let config = repo.config().map_err(Error::ReadGitConfig)?;

        Ok(Self { config })
    }
}

impl ConfigReader for GitConfig {
    fn get_value(&self, key: &str) -> String {
        match self.config.get_string(key) {
            Ok(value) => value,
            Err(e) if e.code() == git2::ErrorCode::NotFound => String::new(),
            Err(e) => {
                log::warn!("{}", Error::ReadGitConfig(e));
                String::new()
            }
        }
    }
}

impl ConfigReader for HashMap<String, String> {
    fn get_value(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_default()
    }
}
