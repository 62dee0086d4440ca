use serde::{Serialize, de::DeserializeOwned};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// File-backed YAML store for a small config-like value. The first successful
/// read is cached; `store` writes through and refreshes the cache. A missing
/// file is not an error and yields the type's `Default`.
pub struct ConfigStore<T> {
    path: PathBuf,
    cached: Mutex<Option<T>>,
}

impl<T> ConfigStore<T>
where
    T: Clone + Serialize + DeserializeOwned + Validate + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: Mutex::new(None),
        }
    }

    pub fn load(&self) -> Result<T, String> {
        let mut cached = self.cached.lock().unwrap();
        if let Some(value) = cached.as_ref() {
            return Ok(value.clone());
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(T::default()),
            Err(err) => return Err(format!("Failed to read {}: {}", self.path.display(), err)),
        };

        let value: T = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", self.path.display(), e))?;
        value
            .validate()
            .map_err(|e| format!("Invalid {}: {}", self.path.display(), e))?;

        *cached = Some(value.clone());
        Ok(value)
    }

    pub fn store(&self, value: &T) -> Result<(), String> {
        value.validate()?;

        let content = serde_yaml_ng::to_string(value)
            .map_err(|e| format!("Failed to serialize {}: {}", self.path.display(), e))?;
        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write {}: {}", self.path.display(), e))?;

        *self.cached.lock().unwrap() = Some(value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
    struct Sample {
        count: u32,
    }

    impl Validate for Sample {
        fn validate(&self) -> Result<(), String> {
            if self.count > 1000 {
                return Err("count must be at most 1000".to_string());
            }
            Ok(())
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("snake_engine_{}_{}", name, std::process::id()));
        path
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let store: ConfigStore<Sample> = ConfigStore::new(temp_path("missing"));
        assert_eq!(store.load().unwrap(), Sample::default());
    }

    #[test]
    fn test_store_then_load_roundtrip() {
        let path = temp_path("roundtrip");
        let store: ConfigStore<Sample> = ConfigStore::new(&path);
        store.store(&Sample { count: 7 }).unwrap();

        // Fresh store, so the value comes from the file rather than the cache
        let reread: ConfigStore<Sample> = ConfigStore::new(&path);
        assert_eq!(reread.load().unwrap(), Sample { count: 7 });
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("malformed");
        std::fs::write(&path, "count: [not a number").unwrap();
        let store: ConfigStore<Sample> = ConfigStore::new(&path);
        assert!(store.load().is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_store_rejects_invalid_value() {
        let store: ConfigStore<Sample> = ConfigStore::new(temp_path("invalid"));
        assert!(store.store(&Sample { count: 5000 }).is_err());
    }
}
