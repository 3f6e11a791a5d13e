// src/store/record_store.rs

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::error::AppError;
use crate::storage::Storage;

use super::record::{Duplicable, Patchable, Record};

/// Versão do esquema persistido. Um snapshot gravado com outra versão é
/// tratado como dado inaproveitável: a coleção volta para o seed.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<R> {
    schema_version: u32,
    records: Vec<R>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a, R> {
    schema_version: u32,
    records: &'a [R],
}

/// Cópia canônica em memória de uma coleção de registros, sincronizada
/// com um blob serializado no colaborador de persistência.
///
/// Toda mutação regrava a coleção inteira. Falha de gravação não
/// propaga: a sessão segue só em memória, com o problema registrado no
/// log. Escrita concorrente de outro contexto não é coordenada — o
/// último gravador vence.
pub struct RecordStore<R, S> {
    storage: S,
    records: Vec<R>,
}

impl<R: Record, S: Storage> RecordStore<R, S> {
    /// Hidrata a coleção do snapshot persistido. Sem snapshot, com JSON
    /// inválido ou com versão de esquema diferente, usa o seed injetado
    /// e já o persiste.
    pub fn load(storage: S, seed: Vec<R>) -> Self {
        let hydrated = match storage.get(R::STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Snapshot<R>>(&raw) {
                Ok(snapshot) if snapshot.schema_version == SCHEMA_VERSION => {
                    Some(snapshot.records)
                }
                Ok(snapshot) => {
                    tracing::warn!(
                        "Snapshot de '{}' com esquema v{}, esperado v{}; usando seed",
                        R::STORAGE_KEY,
                        snapshot.schema_version,
                        SCHEMA_VERSION
                    );
                    None
                }
                Err(err) => {
                    tracing::error!(
                        "Snapshot de '{}' ilegível, usando seed: {}",
                        R::STORAGE_KEY,
                        err
                    );
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::error!(
                    "Falha ao carregar '{}', usando seed: {}",
                    R::STORAGE_KEY,
                    err
                );
                None
            }
        };

        match hydrated {
            Some(records) => Self { storage, records },
            None => {
                let store = Self {
                    storage,
                    records: seed,
                };
                tracing::info!(
                    "Coleção '{}' semeada com {} registro(s)",
                    R::STORAGE_KEY,
                    store.records.len()
                );
                store.persist();
                store
            }
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Insere no início da lista, com id e carimbos atribuídos pelo hook
    /// de criação da entidade. Devolve o id gerado.
    pub fn add(&mut self, mut record: R) -> String {
        let id = Uuid::new_v4().to_string();
        record.on_created(id.clone(), Utc::now());
        self.records.insert(0, record);
        self.persist();
        id
    }

    /// Merge parcial no registro com o id dado.
    pub fn update(&mut self, id: &str, patch: R::Patch) -> Result<(), AppError>
    where
        R: Patchable,
    {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(AppError::RecordNotFound)?;
        record.apply_update(patch, Utc::now());
        self.persist();
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.records.len() == before {
            return Err(AppError::RecordNotFound);
        }
        self.persist();
        Ok(())
    }

    /// Clona o registro como cópia decorada e a insere no início.
    pub fn duplicate(&mut self, id: &str) -> Result<String, AppError>
    where
        R: Duplicable,
    {
        let source = self.find(id).ok_or(AppError::RecordNotFound)?;
        let new_id = Uuid::new_v4().to_string();
        let copy = source.as_duplicate(new_id.clone(), Utc::now());
        self.records.insert(0, copy);
        self.persist();
        Ok(new_id)
    }

    /// Descarta o que há em memória e no storage e volta para o seed.
    pub fn reset(&mut self, seed: Vec<R>) {
        if let Err(err) = self.storage.remove(R::STORAGE_KEY) {
            tracing::error!("Falha ao limpar '{}': {}", R::STORAGE_KEY, err);
        }
        self.records = seed;
        self.persist();
    }

    fn persist(&self) {
        let snapshot = SnapshotRef {
            schema_version: SCHEMA_VERSION,
            records: &self.records,
        };
        let raw = match serde_json::to_string(&snapshot) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!(
                    "Falha ao serializar '{}', sessão segue só em memória: {}",
                    R::STORAGE_KEY,
                    err
                );
                return;
            }
        };
        if let Err(err) = self.storage.set(R::STORAGE_KEY, &raw) {
            tracing::error!(
                "Falha ao persistir '{}', sessão segue só em memória: {}",
                R::STORAGE_KEY,
                err
            );
        }
    }
}
