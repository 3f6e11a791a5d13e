// src/storage/memory.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{Storage, StorageError};

/// Backend em memória: o modo degradado de produção e o dublê padrão dos
/// testes. Clones compartilham o mesmo mapa, então "reiniciar o processo"
/// em um teste é só recarregar um store sobre o mesmo handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // Envenenamento só ocorre após um panic em outro dono do mapa;
        // os dados continuam válidos para leitura.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get("people-ui").unwrap().is_none());

        storage.set("people-ui", "[]").unwrap();
        assert_eq!(storage.get("people-ui").unwrap().as_deref(), Some("[]"));

        storage.remove("people-ui").unwrap();
        assert!(storage.get("people-ui").unwrap().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("theme", "\"dark\"").unwrap();
        assert_eq!(other.get("theme").unwrap().as_deref(), Some("\"dark\""));
    }
}
