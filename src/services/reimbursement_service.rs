// src/services/reimbursement_service.rs

use chrono::Utc;

use crate::common::error::AppError;
use crate::models::reimbursement::{
    reimbursement_stats, NewReimbursement, Reimbursement, ReimbursementPatch, ReimbursementStats,
    ReimbursementStatus,
};
use crate::storage::Storage;
use crate::store::RecordStore;

/// Pedidos de reembolso. Aprovar e rejeitar são transições de status
/// sobre o update genérico; quem aprova é um nome livre, sem vínculo
/// com as contas de usuário.
pub struct ReimbursementService<S: Storage> {
    store: RecordStore<Reimbursement, S>,
}

impl<S: Storage> ReimbursementService<S> {
    pub fn new(storage: S, seed: Vec<Reimbursement>) -> Self {
        Self {
            store: RecordStore::load(storage, seed),
        }
    }

    pub fn reimbursements(&self) -> &[Reimbursement] {
        self.store.records()
    }

    pub fn find(&self, id: &str) -> Option<&Reimbursement> {
        self.store.find(id)
    }

    pub fn add(&mut self, novo: NewReimbursement) -> String {
        let id = self.store.add(novo.into());
        tracing::debug!("Reembolso registrado ({id})");
        id
    }

    pub fn update(&mut self, id: &str, patch: ReimbursementPatch) -> Result<(), AppError> {
        self.store.update(id, patch)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        self.store.delete(id)
    }

    pub fn approve(&mut self, id: &str, approved_by: &str) -> Result<(), AppError> {
        self.store.update(
            id,
            ReimbursementPatch {
                status: Some(ReimbursementStatus::Aprovado),
                approved_at: Some(Utc::now()),
                approved_by: Some(approved_by.to_string()),
                ..Default::default()
            },
        )
    }

    pub fn reject(&mut self, id: &str, justification: &str) -> Result<(), AppError> {
        self.store.update(
            id,
            ReimbursementPatch {
                status: Some(ReimbursementStatus::Rejeitado),
                justification: Some(justification.to_string()),
                ..Default::default()
            },
        )
    }

    pub fn stats(&self) -> ReimbursementStats {
        reimbursement_stats(self.store.records())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::data::reimbursements::mock_reimbursements;
    use crate::storage::MemoryStorage;

    use super::*;

    fn service() -> ReimbursementService<MemoryStorage> {
        ReimbursementService::new(MemoryStorage::new(), mock_reimbursements())
    }

    #[test]
    fn test_approve_pending_request() {
        let mut service = service();
        let before = service.stats();

        let id = service
            .reimbursements()
            .iter()
            .find(|r| r.status == ReimbursementStatus::Pendente)
            .map(|r| r.id.clone())
            .expect("seed tem pendentes");

        service.approve(&id, "Lucia Rodrigues").unwrap();

        let pedido = service.find(&id).unwrap();
        assert_eq!(pedido.status, ReimbursementStatus::Aprovado);
        assert_eq!(pedido.approved_by.as_deref(), Some("Lucia Rodrigues"));
        assert!(pedido.approved_at.is_some());

        let after = service.stats();
        assert_eq!(after.pending, before.pending - 1);
        assert_eq!(after.approved, before.approved + 1);
        assert_eq!(
            after.approved_amount,
            before.approved_amount + pedido.amount
        );
    }

    #[test]
    fn test_reject_records_justification() {
        let mut service = service();
        let id = service
            .reimbursements()
            .iter()
            .find(|r| r.status == ReimbursementStatus::Pendente)
            .map(|r| r.id.clone())
            .unwrap();

        service.reject(&id, "Sem comprovante legível.").unwrap();

        let pedido = service.find(&id).unwrap();
        assert_eq!(pedido.status, ReimbursementStatus::Rejeitado);
        assert_eq!(
            pedido.justification.as_deref(),
            Some("Sem comprovante legível.")
        );
    }

    #[test]
    fn test_add_starts_pending_and_counts_in_stats() {
        let mut service = service();
        let before = service.stats();

        let id = service.add(NewReimbursement {
            employee_id: "EMP009".to_string(),
            employee_name: "Fernanda Lima".to_string(),
            amount: Decimal::new(12050, 2),
            category: "Hospedagem".to_string(),
            description: "Diária em congresso de marketing".to_string(),
            receipt_url: None,
        });

        let after = service.stats();
        assert_eq!(after.total, before.total + 1);
        assert_eq!(after.pending, before.pending + 1);
        assert_eq!(
            after.pending_amount,
            before.pending_amount + Decimal::new(12050, 2)
        );
        assert_eq!(service.find(&id).unwrap().employee_id, "EMP009");
    }
}
