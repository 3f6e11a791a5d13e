// src/config.rs

use std::{env, sync::Arc};

use crate::data;
use crate::services::{
    EmployeeService, PeopleService, ReimbursementService, SettingsService, UserService,
};
use crate::storage::{FileStorage, MemoryStorage, SharedStorage};

/// Estado montado da aplicação: um serviço por coleção, todos sobre o
/// mesmo backend de armazenamento. A apresentação consome daqui.
pub struct AppState {
    pub people: PeopleService<SharedStorage>,
    pub employees: EmployeeService<SharedStorage>,
    pub users: UserService<SharedStorage>,
    pub reimbursements: ReimbursementService<SharedStorage>,
    pub settings: SettingsService<SharedStorage>,
}

impl AppState {
    /// Monta o estado a partir do ambiente: com `PAINEL_DATA_DIR`
    /// definida, os dados persistem em disco; sem ela, a sessão roda
    /// apenas em memória.
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let storage: SharedStorage = match env::var("PAINEL_DATA_DIR") {
            Ok(dir) => {
                let file_storage = FileStorage::new(dir.clone())?;
                tracing::info!("✅ Armazenamento local em '{dir}'");
                Arc::new(file_storage)
            }
            Err(_) => {
                tracing::info!("PAINEL_DATA_DIR ausente; sessão apenas em memória");
                Arc::new(MemoryStorage::new())
            }
        };

        Ok(Self::with_storage(storage))
    }

    /// Monta o grafo de serviços sobre um backend já escolhido, com os
    /// seeds padrão. Os testes injetam `MemoryStorage` por aqui.
    pub fn with_storage(storage: SharedStorage) -> Self {
        Self {
            people: PeopleService::new(storage.clone(), data::people::mock_people()),
            employees: EmployeeService::new(storage.clone(), data::employees::mock_employees()),
            users: UserService::new(storage.clone(), data::users::mock_users()),
            reimbursements: ReimbursementService::new(
                storage.clone(),
                data::reimbursements::mock_reimbursements(),
            ),
            settings: SettingsService::new(storage),
        }
    }
}
