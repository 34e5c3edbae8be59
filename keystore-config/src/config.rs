use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path, str::FromStr};

use crate::{error::KeyStoreConfigError, form::FormMode, labels::LabelCatalog};

/// Workflow configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
#[non_exhaustive]
pub struct Config {
    /// Client the keys are generated for. Also the default key alias.
    pub client_id: String,
    /// Key-store types known up front. Left empty when they are loaded from
    /// server info later.
    #[serde(default)]
    pub supported_keystore_types: Vec<String>,
    #[serde(default)]
    pub mode: FormMode,
    #[serde(default)]
    pub authorization: AuthorizationSpec,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

/// What the client's authorization settings already contain.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case", default)]
pub struct AuthorizationSpec {
    pub resource_available: bool,
    pub scope_available: bool,
}

impl Config {
    pub fn from_file(config_path: impl AsRef<Path>) -> Result<Self, KeyStoreConfigError> {
        let config_string = std::fs::read_to_string(&config_path)?;
        Self::from_str(&config_string)
    }

    /// Configuration for `client_id` with everything else defaulted.
    pub fn for_client(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            supported_keystore_types: Vec::new(),
            mode: FormMode::default(),
            authorization: AuthorizationSpec::default(),
            labels: HashMap::new(),
        }
    }

    pub fn label_catalog(&self) -> LabelCatalog {
        LabelCatalog::from(self.labels.clone())
    }
}

impl FromStr for Config {
    type Err = KeyStoreConfigError;

    fn from_str(config_string: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(config_string)?)
    }
}
