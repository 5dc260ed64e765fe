//! Almacenamiento clave-valor donde se guardan las colecciones completas.
//!
//! Cada colección se escribe entera como un array JSON bajo su clave
//! (`questions`, `quizzes`). No hay bloqueo ni detección de conflictos: si dos
//! pestañas escriben la misma clave, gana la última escritura.

use crate::config::AppConfig;
use crate::error::StorageError;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

pub const QUESTIONS_KEY: &str = "questions";
pub const QUIZZES_KEY: &str = "quizzes";

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

pub type Backend = Box<dyn KeyValueStorage>;

/// Backend por defecto de la plataforma: `localStorage` en el navegador,
/// ficheros JSON en escritorio.
#[cfg(target_arch = "wasm32")]
pub fn default_backend(_config: &AppConfig) -> Backend {
    Box::new(LocalStorage)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_backend(config: &AppConfig) -> Backend {
    Box::new(FileStorage::new(config.data_dir.clone()))
}

/// Lee una colección. `Ok(None)` si la clave no existe todavía.
pub fn read_collection<T, S>(storage: &S, key: &str) -> Result<Option<Vec<T>>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    let items = serde_json::from_str(&raw).map_err(|source| StorageError::Deserialize {
        key: key.to_string(),
        source,
    })?;
    Ok(Some(items))
}

/// Reescribe la colección completa (snapshot), nunca de forma incremental.
pub fn write_collection<T, S>(storage: &mut S, key: &str, items: &[T]) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStorage + ?Sized,
{
    let raw = serde_json::to_string(items).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    debug!("Guardando {} elementos en `{}` ({} bytes)", items.len(), key, raw.len());
    storage.set(key, &raw)
}

/// Backend en memoria. Sirve para tests y como reserva si el navegador no
/// ofrece `localStorage`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simula un cupo: cualquier valor mayor que `bytes` falla al escribirse.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(bytes),
        }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.quota_bytes {
            if value.len() > limit {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    message: format!("quota exceeded ({} > {limit} bytes)", value.len()),
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_key_reads_as_none() {
        let storage = MemoryStorage::new();
        let got: Option<Vec<Question>> = read_collection(&storage, QUESTIONS_KEY).unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn collection_is_written_as_a_json_array() {
        let mut storage = MemoryStorage::new();
        let questions = vec![Question::empty("q1", "Art")];
        write_collection(&mut storage, QUESTIONS_KEY, &questions).unwrap();

        let raw = storage.raw(QUESTIONS_KEY).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"isCorrect\":false"));

        let back: Vec<Question> = read_collection(&storage, QUESTIONS_KEY).unwrap().unwrap();
        assert_eq!(back, questions);
    }

    #[test]
    fn corrupt_snapshot_is_a_deserialize_error() {
        let mut storage = MemoryStorage::new();
        storage.insert_raw(QUIZZES_KEY, "{not json");
        let err = read_collection::<Question, _>(&storage, QUIZZES_KEY).unwrap_err();
        assert!(matches!(err, StorageError::Deserialize { ref key, .. } if key == QUIZZES_KEY));
    }

    #[test]
    fn quota_rejects_large_values() {
        let mut storage = MemoryStorage::with_quota(8);
        let err = storage.set("k", "0123456789").unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
        assert!(storage.raw("k").is_none());
    }

    #[test]
    fn boxed_backend_delegates() {
        let mut backend: Backend = Box::new(MemoryStorage::new());
        backend.set("k", "v").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v"));
    }
}
