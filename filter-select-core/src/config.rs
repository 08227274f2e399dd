//! Construction-time configuration for a filter
//!
//! Mirrors the props a host passes when mounting a filter. Loadable from JSON:
//!
//! ```json
//! {
//!   "title": "Status",
//!   "isMulti": true,
//!   "container": "card",
//!   "value": ["open"],
//!   "options": [
//!     { "label": "Open", "value": "open" },
//!     { "label": "Archived", "value": "archived", "isDisabled": true }
//!   ],
//!   "trigger": { "placeholder": "Any status" }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::option::{FilterOption, OptionCatalog};
use crate::selection::{normalize, SelectMode, SelectionValue};

/// Which wrapper the presentation surface draws around the options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// Trigger line with a popup underneath
    #[default]
    Default,
    /// Bordered card titled with the filter title
    Card,
}

/// Opaque properties for the triggering control
///
/// Forwarded verbatim to the presentation surface. The bundled surface only
/// reads `"placeholder"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerProps(pub serde_json::Map<String, serde_json::Value>);

impl TriggerProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(serde_json::Value::as_str)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.get_str("placeholder")
    }
}

/// Errors raised while loading a [`FilterConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid filter config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Option '{label}' reuses a value already taken by another option")]
    DuplicateValue { label: String },
}

/// Everything a host supplies when it mounts a filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[serde(bound(deserialize = "V: Deserialize<'de>", serialize = "V: Serialize"))]
pub struct FilterConfig<V> {
    pub options: Vec<FilterOption<V>>,
    pub is_multi: bool,
    pub value: SelectionValue<V>,
    pub title: String,
    pub container: ContainerKind,
    pub trigger: TriggerProps,
}

impl<V> Default for FilterConfig<V> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            is_multi: false,
            value: SelectionValue::None,
            title: String::new(),
            container: ContainerKind::Default,
            trigger: TriggerProps::default(),
        }
    }
}

impl<V: Clone + PartialEq> FilterConfig<V> {
    pub fn mode(&self) -> SelectMode {
        SelectMode::from_is_multi(self.is_multi)
    }

    pub fn catalog(&self) -> OptionCatalog<'_, V> {
        OptionCatalog::new(&self.options)
    }

    /// The configured value coerced to the configured mode
    pub fn initial_value(&self) -> SelectionValue<V> {
        normalize(self.mode(), &self.value)
    }

    /// Reject catalogs where two options share a value
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].iter().any(|prev| prev.value == option.value) {
                return Err(ConfigError::DuplicateValue {
                    label: option.label.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<V: Clone + PartialEq + DeserializeOwned> FilterConfig<V> {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            options = config.options.len(),
            is_multi = config.is_multi,
            "Loaded filter config"
        );
        Ok(config)
    }
}
