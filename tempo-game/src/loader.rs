//! Loader backed by the assets compiled into this crate.
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::DataLoader;
use crate::catalog::{Catalog, CatalogError};
use crate::constants::CONFIG_NAME;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("no built-in config named {0:?}")]
    UnknownConfig(String),
    #[error("failed to parse built-in config {name:?}: {source}")]
    Config {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Serves the embedded deck and the default tuning.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLoader;

impl DataLoader for BuiltinLoader {
    type Error = LoaderError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::builtin()?)
    }

    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        if config_name != CONFIG_NAME {
            return Err(LoaderError::UnknownConfig(config_name.to_string()));
        }
        serde_json::from_str("{}").map_err(|source| LoaderError::Config {
            name: config_name.to_string(),
            source,
        })
    }
}
