// src/storage.rs

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::sync::Arc;

use thiserror::Error;

// Erros do colaborador de persistência. O store os captura e loga;
// eles nunca chegam ao chamador de uma mutação.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Falha de E/S no armazenamento local: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chave de armazenamento inválida: {0}")]
    InvalidKey(String),
}

/// Colaborador chave-valor síncrono que guarda cada coleção serializada
/// sob uma chave fixa. É o análogo local do storage do navegador que o
/// painel original usava.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Handle compartilhável para o mesmo backend, um clone por serviço.
pub type SharedStorage = Arc<dyn Storage + Send + Sync>;

impl<T: Storage + ?Sized> Storage for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
