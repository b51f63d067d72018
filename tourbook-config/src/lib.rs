// Site configuration for Tourbook
//
// Settings are collected into one flat key/value table from any mix of
// sources (environment, .env, JSON, TOML); later loads override earlier ones.

pub mod env;
pub mod error;
pub mod loader;
mod lenient;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tourbook_log::debug;

/// Environment prefix for site settings (`TOURBOOK_DEFAULT_LANGUAGE`, ...)
pub const ENV_PREFIX: &str = "TOURBOOK";

/// Main configuration manager
///
/// Keys are stored lowercase so file keys and environment keys line up.
#[derive(Clone, Debug)]
pub struct ConfigManager {
    config: Arc<RwLock<HashMap<String, Value>>>,
    env_prefix: Option<String>,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(HashMap::new())),
            env_prefix: None,
        }
    }

    /// Create with environment variable prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            config: Arc::new(RwLock::new(HashMap::new())),
            env_prefix: Some(prefix.into()),
        }
    }

    /// Create with the standard `TOURBOOK` prefix
    pub fn for_site() -> Self {
        Self::with_prefix(ENV_PREFIX)
    }

    /// Load configuration from environment variables
    pub fn load_env(&self) -> Result<()> {
        let loader = EnvLoader::new(self.env_prefix.clone());
        self.insert_strings(loader.load()?);
        Ok(())
    }

    /// Load configuration from explicit variable pairs, applying the prefix
    pub fn load_env_from<I, K, V>(&self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let loader = EnvLoader::new(self.env_prefix.clone());
        self.insert_strings(loader.load_from(vars));
    }

    /// Load configuration from a .env file, then the environment
    ///
    /// File entries go through the same prefix filter as environment
    /// variables and are stored in this table only; the process environment
    /// is left as is and overrides them. Without a path, `.env` is looked up
    /// from the current directory upwards and may be absent.
    pub fn load_dotenv(&self, path: Option<&str>) -> Result<()> {
        let entries = match path {
            Some(path) => {
                Some(dotenvy::from_path_iter(path).map_err(|e| ConfigError::LoadError(e.to_string()))?)
            }
            None => dotenvy::dotenv_iter().ok(),
        };

        if let Some(entries) = entries {
            let vars = entries
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            debug!("loaded {} entries from .env", vars.len());
            self.load_env_from(vars);
        }
        self.load_env()
    }

    /// Load configuration from file, detecting the format from its name
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = ConfigLoader::auto(path)?.load_file(path)?;
        debug!("loaded configuration from {}", path.display());
        self.insert_object(data);
        Ok(())
    }

    /// Load configuration from text in the given format
    pub fn load_str(&self, content: &str, format: FileFormat) -> Result<()> {
        let data = ConfigLoader::new(format).parse(content)?;
        self.insert_object(data);
        Ok(())
    }

    /// Set a configuration value
    pub fn set<T: serde::Serialize>(&self, key: &str, value: T) -> Result<()> {
        let json_value = serde_json::to_value(value)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;

        self.config.write().insert(key.to_lowercase(), json_value);
        Ok(())
    }

    /// Get a configuration value
    ///
    /// String values from the environment are reinterpreted as JSON scalars
    /// when the target type needs it, so `"true"` reads as a bool.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let config = self.config.read();

        let value = config
            .get(&key.to_lowercase())
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        lenient::from_value(value.clone())
    }

    /// Get a configuration value with default
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Get a string value
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get(key)
    }

    /// Get a boolean value
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get(key)
    }

    /// Check if a key exists
    pub fn has(&self, key: &str) -> bool {
        self.config.read().contains_key(&key.to_lowercase())
    }

    /// Get all configuration keys
    pub fn keys(&self) -> Vec<String> {
        self.config.read().keys().cloned().collect()
    }

    /// Merge configuration from another manager; its values win
    pub fn merge(&self, other: &ConfigManager) {
        if Arc::ptr_eq(&self.config, &other.config) {
            return;
        }
        let other_config = other.config.read();
        let mut config = self.config.write();

        for (key, value) in other_config.iter() {
            config.insert(key.clone(), value.clone());
        }
    }

    /// Deserialize the whole table into a typed settings struct
    ///
    /// Each field is read the way [`get`](Self::get) reads a single key.
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T> {
        let table: Map<String, Value> = self
            .config
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        lenient::from_value(Value::Object(table))
    }

    fn insert_strings(&self, vars: HashMap<String, String>) {
        let mut config = self.config.write();
        for (key, value) in vars {
            config.insert(key, Value::String(value));
        }
    }

    fn insert_object(&self, data: Value) {
        if let Value::Object(map) = data {
            let mut config = self.config.write();
            for (key, value) in map {
                config.insert(key.to_lowercase(), value);
            }
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
