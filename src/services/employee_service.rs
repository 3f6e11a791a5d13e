// src/services/employee_service.rs

use chrono::Utc;

use crate::common::error::AppError;
use crate::models::employee::{
    employee_stats, Employee, EmployeePatch, EmployeeStats, EmployeeStatus, LeaveKind, NewEmployee,
};
use crate::storage::Storage;
use crate::store::RecordStore;

/// Serviço do quadro de funcionários. Os helpers de transição de status
/// (ativar, desativar, afastar) são açúcar sobre o update genérico, com
/// o valor do enum fixado — não há máquina de estados.
pub struct EmployeeService<S: Storage> {
    store: RecordStore<Employee, S>,
}

impl<S: Storage> EmployeeService<S> {
    pub fn new(storage: S, seed: Vec<Employee>) -> Self {
        Self {
            store: RecordStore::load(storage, seed),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        self.store.records()
    }

    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.store.find(id)
    }

    pub fn add(&mut self, novo: NewEmployee) -> String {
        let id = self.store.add(novo.into());
        tracing::debug!("Funcionário cadastrado ({id})");
        id
    }

    pub fn update(&mut self, id: &str, patch: EmployeePatch) -> Result<(), AppError> {
        self.store.update(id, patch)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        self.store.delete(id)
    }

    pub fn duplicate(&mut self, id: &str) -> Result<String, AppError> {
        self.store.duplicate(id)
    }

    fn set_status(&mut self, id: &str, status: EmployeeStatus) -> Result<(), AppError> {
        self.store.update(
            id,
            EmployeePatch {
                status: Some(status),
                ..Default::default()
            },
        )
    }

    pub fn activate(&mut self, id: &str) -> Result<(), AppError> {
        self.set_status(id, EmployeeStatus::Ativo)
    }

    pub fn deactivate(&mut self, id: &str) -> Result<(), AppError> {
        self.set_status(id, EmployeeStatus::Inativo)
    }

    pub fn set_on_leave(&mut self, id: &str, kind: LeaveKind) -> Result<(), AppError> {
        self.set_status(id, kind.into())
    }

    /// Registra uma avaliação: nota, data da revisão e, se vierem,
    /// observações novas.
    pub fn update_performance_rating(
        &mut self,
        id: &str,
        rating: f64,
        notes: Option<String>,
    ) -> Result<(), AppError> {
        self.store.update(
            id,
            EmployeePatch {
                performance_rating: Some(rating),
                last_review: Some(Utc::now().date_naive()),
                notes,
                ..Default::default()
            },
        )
    }

    pub fn stats(&self) -> EmployeeStats {
        employee_stats(self.store.records(), Utc::now())
    }
}
