// src/services/people_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::person::{
    person_stats, NewPerson, Person, PersonDocument, PersonPatch, PersonStats, PersonStatus,
};
use crate::storage::Storage;
use crate::store::RecordStore;

/// Serviço da listagem de pessoas: dono do store da coleção e do
/// vocabulário de operações que as páginas consomem.
pub struct PeopleService<S: Storage> {
    store: RecordStore<Person, S>,
}

impl<S: Storage> PeopleService<S> {
    pub fn new(storage: S, seed: Vec<Person>) -> Self {
        Self {
            store: RecordStore::load(storage, seed),
        }
    }

    pub fn people(&self) -> &[Person] {
        self.store.records()
    }

    pub fn find(&self, id: &str) -> Option<&Person> {
        self.store.find(id)
    }

    pub fn add(&mut self, novo: NewPerson) -> String {
        let id = self.store.add(novo.into());
        tracing::debug!("Pessoa cadastrada ({id})");
        id
    }

    pub fn update(&mut self, id: &str, patch: PersonPatch) -> Result<(), AppError> {
        self.store.update(id, patch)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        self.store.delete(id)
    }

    pub fn duplicate(&mut self, id: &str) -> Result<String, AppError> {
        self.store.duplicate(id)
    }

    /// Aplica a mesma transição de status a cada id da seleção; ids
    /// ausentes são pulados em silêncio. Devolve quantos mudaram.
    pub fn bulk_update_status(&mut self, ids: &[String], status: PersonStatus) -> usize {
        let mut changed = 0;
        for id in ids {
            let patch = PersonPatch {
                status: Some(status),
                history_action: Some(format!("Status alterado para {}", status.as_str())),
                ..Default::default()
            };
            if self.store.update(id, patch).is_ok() {
                changed += 1;
            }
        }
        changed
    }

    pub fn bulk_delete(&mut self, ids: &[String]) -> usize {
        let mut removed = 0;
        for id in ids {
            if self.store.delete(id).is_ok() {
                removed += 1;
            }
        }
        removed
    }

    /// Simulação de upload: fabrica o registro do documento, sem backend
    /// real de arquivos. Devolve o id do documento criado.
    pub fn add_document(&mut self, person_id: &str, name: &str) -> Result<String, AppError> {
        let person = self.store.find(person_id).ok_or(AppError::RecordNotFound)?;

        let mut documents = person.documents.clone();
        let document = PersonDocument {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            url: None,
            uploaded_at: Utc::now(),
        };
        let document_id = document.id.clone();
        documents.push(document);

        self.store.update(
            person_id,
            PersonPatch {
                documents: Some(documents),
                history_action: Some("Documento adicionado".to_string()),
                ..Default::default()
            },
        )?;
        Ok(document_id)
    }

    /// Avatar simulado: guarda a referência (data URI) como veio.
    pub fn set_avatar(&mut self, id: &str, data_uri: String) -> Result<(), AppError> {
        self.store.update(
            id,
            PersonPatch {
                avatar_url: Some(data_uri),
                history_action: Some("Foto atualizada".to_string()),
                ..Default::default()
            },
        )
    }

    pub fn stats(&self) -> PersonStats {
        person_stats(self.store.records(), Utc::now())
    }
}
