// src/models/reimbursement.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::filters::Searchable;
use crate::store::{Patchable, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReimbursementStatus {
    #[default]
    Pendente,
    Aprovado,
    Rejeitado,
}

impl ReimbursementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReimbursementStatus::Pendente => "pendente",
            ReimbursementStatus::Aprovado => "aprovado",
            ReimbursementStatus::Rejeitado => "rejeitado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReimbursementStatus::Pendente => "Pendente",
            ReimbursementStatus::Aprovado => "Aprovado",
            ReimbursementStatus::Rejeitado => "Rejeitado",
        }
    }
}

// Pedido de reembolso. `employee_id` e `approved_by` são referências
// informais (matrícula e nome livres), sem integridade referencial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reimbursement {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub status: ReimbursementStatus,
    pub submitted_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<String>,
    /// Comprovante simulado: a referência nunca sai do processo.
    pub receipt_url: Option<String>,
    pub justification: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewReimbursement {
    #[validate(length(min = 1, message = "A matrícula do funcionário é obrigatória."))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "O nome do funcionário é obrigatório."))]
    pub employee_name: String,
    pub amount: Decimal,
    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    pub category: String,
    pub description: String,
    pub receipt_url: Option<String>,
}

impl From<NewReimbursement> for Reimbursement {
    fn from(novo: NewReimbursement) -> Self {
        Self {
            id: String::new(),
            employee_id: novo.employee_id,
            employee_name: novo.employee_name,
            amount: novo.amount,
            category: novo.category,
            description: novo.description,
            status: ReimbursementStatus::Pendente,
            submitted_at: Utc::now(),
            approved_at: None,
            approved_by: None,
            receipt_url: novo.receipt_url,
            justification: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReimbursementPatch {
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub status: Option<ReimbursementStatus>,
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<String>,
    pub receipt_url: Option<String>,
    pub justification: Option<String>,
}

impl Record for Reimbursement {
    const STORAGE_KEY: &'static str = "reimbursements";

    fn id(&self) -> &str {
        &self.id
    }

    fn on_created(&mut self, id: String, now: DateTime<Utc>) {
        self.id = id;
        self.submitted_at = now;
    }
}

impl Patchable for Reimbursement {
    type Patch = ReimbursementPatch;

    fn apply_update(&mut self, patch: ReimbursementPatch, _now: DateTime<Utc>) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(approved_at) = patch.approved_at {
            self.approved_at = Some(approved_at);
        }
        if let Some(approved_by) = patch.approved_by {
            self.approved_by = Some(approved_by);
        }
        if let Some(receipt_url) = patch.receipt_url {
            self.receipt_url = Some(receipt_url);
        }
        if let Some(justification) = patch.justification {
            self.justification = Some(justification);
        }
    }
}

impl Searchable for Reimbursement {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.employee_name.as_str(),
            self.employee_id.as_str(),
            self.category.as_str(),
        ]
    }
}

// --- ESTATÍSTICAS DERIVADAS ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReimbursementStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub pending_amount: Decimal,
    pub approved_amount: Decimal,
}

pub fn reimbursement_stats(reimbursements: &[Reimbursement]) -> ReimbursementStats {
    let sum_for = |status: ReimbursementStatus| {
        reimbursements
            .iter()
            .filter(|r| r.status == status)
            .map(|r| r.amount)
            .sum::<Decimal>()
    };

    ReimbursementStats {
        total: reimbursements.len(),
        pending: reimbursements
            .iter()
            .filter(|r| r.status == ReimbursementStatus::Pendente)
            .count(),
        approved: reimbursements
            .iter()
            .filter(|r| r.status == ReimbursementStatus::Aprovado)
            .count(),
        rejected: reimbursements
            .iter()
            .filter(|r| r.status == ReimbursementStatus::Rejeitado)
            .count(),
        pending_amount: sum_for(ReimbursementStatus::Pendente),
        approved_amount: sum_for(ReimbursementStatus::Aprovado),
    }
}
