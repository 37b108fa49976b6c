//! JSON-backed launcher configuration.
//!
//! The config is an ordered map from string key to JSON value. The settings
//! panel holds a mutable reference to it and writes through on every
//! committed edit; persistence always goes through [`Config::commit`] so the
//! save policy lives in exactly one place.

mod io;

pub use io::init_config;

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

/// Error raised by typed key access.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing config key: {0}")]
    MissingKey(String),

    #[error("config key `{key}` is not a {expected}")]
    TypeMismatch { key: String, expected: &'static str },
}

/// The launcher configuration: an ordered key/value store plus the path it
/// persists to.
#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    root: Map<String, Value>,
}

impl Config {
    /// Default config file location (~/.meteor/launcher.json).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".meteor")
            .join("launcher.json")
    }

    /// The keys every fresh install starts with. `jre` empty means
    /// "autodetect the runtime".
    pub fn default_root() -> Map<String, Value> {
        let mut root = Map::new();
        root.insert("jre".into(), Value::from(""));
        root.insert("ram".into(), Value::from(2048));
        root.insert("vm-args".into(), Value::Array(Vec::new()));
        root.insert("wrapper".into(), Value::from(""));
        root.insert("game".into(), Value::Object(Map::new()));
        root.insert("javaagents".into(), Value::Object(Map::new()));
        root.insert("data-sharing".into(), Value::from(true));
        root.insert("theme".into(), Value::from("dark"));
        root.insert("language".into(), Value::from("en"));
        root.insert("max-threads".into(), Value::from(32));
        root
    }

    pub fn new(path: PathBuf, root: Map<String, Value>) -> Self {
        Self { path, root }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The top-level key/value map, in file order.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn get_str(&self, key: &str) -> Result<&str, ConfigError> {
        self.require(key)?
            .as_str()
            .ok_or_else(|| ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "string",
            })
    }

    pub fn get_i64(&self, key: &str) -> Result<i64, ConfigError> {
        self.require(key)?
            .as_i64()
            .ok_or_else(|| ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "integer",
            })
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        self.require(key)?
            .as_bool()
            .ok_or_else(|| ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "boolean",
            })
    }

    fn require(&self, key: &str) -> Result<&Value, ConfigError> {
        self.root
            .get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    /// Insert or replace a top-level value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.root.insert(key.to_string(), value.into());
    }

    /// Read a value through a path of nested object keys.
    pub fn get_path(&self, path: &[String]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut value = self.root.get(first)?;
        for key in rest {
            value = value.as_object()?.get(key)?;
        }
        Some(value)
    }

    /// Replace a value through a path of nested object keys. Paths whose
    /// parents are missing or not objects are dropped with a warning.
    pub fn set_path(&mut self, path: &[String], value: impl Into<Value>) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        let mut obj = &mut self.root;
        for key in parents {
            match obj.get_mut(key) {
                Some(Value::Object(inner)) => obj = inner,
                _ => {
                    tracing::warn!("config path {} does not lead to an object", path.join("."));
                    return;
                }
            }
        }
        obj.insert(last.clone(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::new(PathBuf::from("/dev/null"), Config::default_root())
    }

    #[test]
    fn test_typed_getters() {
        let config = test_config();
        assert_eq!(config.get_str("jre").unwrap(), "");
        assert_eq!(config.get_i64("ram").unwrap(), 2048);
        assert!(config.get_bool("data-sharing").unwrap());
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let config = test_config();
        assert!(matches!(
            config.get_str("no-such-key"),
            Err(ConfigError::MissingKey(_))
        ));
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let config = test_config();
        assert!(matches!(
            config.get_str("ram"),
            Err(ConfigError::TypeMismatch { expected: "string", .. })
        ));
    }

    #[test]
    fn test_set_replaces_value() {
        let mut config = test_config();
        config.set("theme", "light");
        assert_eq!(config.get_str("theme").unwrap(), "light");
    }

    #[test]
    fn test_nested_path_access() {
        let mut config = test_config();
        let mut inner = Map::new();
        inner.insert("width".into(), Value::from(800));
        config.set("window", Value::Object(inner));

        let path = vec!["window".to_string(), "width".to_string()];
        assert_eq!(config.get_path(&path).and_then(Value::as_i64), Some(800));

        config.set_path(&path, 1024);
        assert_eq!(config.get_path(&path).and_then(Value::as_i64), Some(1024));
    }

    #[test]
    fn test_set_path_through_non_object_is_dropped() {
        let mut config = test_config();
        let path = vec!["ram".to_string(), "inner".to_string()];
        config.set_path(&path, 1);
        // "ram" is a number, the write must not clobber it
        assert_eq!(config.get_i64("ram").unwrap(), 2048);
    }

    #[test]
    fn test_root_preserves_insertion_order() {
        let config = test_config();
        let keys: Vec<&str> = config.root().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys[0], "jre");
        assert_eq!(*keys.last().unwrap(), "max-threads");
    }
}
