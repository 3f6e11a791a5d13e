// src/services/user_service.rs

use crate::common::error::AppError;
use crate::models::user::{AppUser, NewUser};
use crate::storage::Storage;
use crate::store::RecordStore;

/// Contas de acesso ao painel: só entram e saem da lista.
pub struct UserService<S: Storage> {
    store: RecordStore<AppUser, S>,
}

impl<S: Storage> UserService<S> {
    pub fn new(storage: S, seed: Vec<AppUser>) -> Self {
        Self {
            store: RecordStore::load(storage, seed),
        }
    }

    pub fn users(&self) -> &[AppUser] {
        self.store.records()
    }

    pub fn find(&self, id: &str) -> Option<&AppUser> {
        self.store.find(id)
    }

    pub fn add(&mut self, novo: NewUser) -> String {
        let id = self.store.add(novo.into());
        tracing::debug!("Usuário criado ({id})");
        id
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        self.store.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::users::mock_users;
    use crate::models::user::UserRole;
    use crate::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_add_and_delete_user() {
        let mut service = UserService::new(MemoryStorage::new(), mock_users());
        assert_eq!(service.users().len(), 2);

        let id = service.add(NewUser {
            name: "Jogador Cinco".to_string(),
            email: "player5@empresa.com".to_string(),
            role: UserRole::Jogador,
            game: Some("League of Legends".to_string()),
        });

        assert_eq!(service.users().len(), 3);
        // Lista cresce pelo início.
        assert_eq!(service.users()[0].id, id);
        assert_eq!(service.find(&id).unwrap().role, UserRole::Jogador);

        service.delete(&id).unwrap();
        assert!(service.find(&id).is_none());
        assert!(matches!(service.delete(&id), Err(AppError::RecordNotFound)));
    }

    #[test]
    fn test_users_survive_reload_on_same_backend() {
        let storage = MemoryStorage::new();
        let mut service = UserService::new(storage.clone(), mock_users());
        service.add(NewUser {
            name: "Staff Novo".to_string(),
            email: "staff@empresa.com".to_string(),
            role: UserRole::Staff,
            game: None,
        });
        let before: Vec<AppUser> = service.users().to_vec();

        let reloaded = UserService::new(storage, mock_users());
        assert_eq!(reloaded.users(), before.as_slice());
    }
}
