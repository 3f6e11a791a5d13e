// src/data/reimbursements.rs

use rust_decimal::Decimal;

use crate::models::reimbursement::{Reimbursement, ReimbursementStatus};

use super::ts;

/// Categorias aceitas nos formulários de reembolso.
pub const CATEGORIES: &[&str] = &[
    "Transporte",
    "Alimentação",
    "Hospedagem",
    "Educação",
    "Material de Escritório",
    "Outros",
];

#[allow(clippy::too_many_arguments)]
fn reimbursement(
    id: &str,
    employee_id: &str,
    employee_name: &str,
    amount: Decimal,
    category: &str,
    description: &str,
    status: ReimbursementStatus,
    submitted_at: &str,
    receipt_url: &str,
) -> Reimbursement {
    Reimbursement {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        employee_name: employee_name.to_string(),
        amount,
        category: category.to_string(),
        description: description.to_string(),
        status,
        submitted_at: ts(submitted_at),
        approved_at: None,
        approved_by: None,
        receipt_url: Some(receipt_url.to_string()),
        justification: None,
    }
}

pub fn mock_reimbursements() -> Vec<Reimbursement> {
    let mut pedidos = vec![
        reimbursement(
            "1",
            "EMP001",
            "Ana Silva Santos",
            Decimal::new(25000, 2),
            "Transporte",
            "Uber para reunião com cliente importante",
            ReimbursementStatus::Aprovado,
            "2024-01-18T10:30:00Z",
            "/receipt1.pdf",
        ),
        reimbursement(
            "2",
            "EMP002",
            "Carlos Oliveira",
            Decimal::new(8990, 2),
            "Alimentação",
            "Almoço de negócios com parceiro",
            ReimbursementStatus::Pendente,
            "2024-01-20T14:15:00Z",
            "/receipt2.pdf",
        ),
        reimbursement(
            "3",
            "EMP003",
            "Mariana Costa",
            Decimal::new(4550, 2),
            "Transporte",
            "Estacionamento durante evento",
            ReimbursementStatus::Rejeitado,
            "2024-01-17T16:45:00Z",
            "/receipt3.pdf",
        ),
        reimbursement(
            "4",
            "EMP001",
            "Ana Silva Santos",
            Decimal::new(32000, 2),
            "Educação",
            "Curso online de certificação React",
            ReimbursementStatus::Aprovado,
            "2024-01-15T11:00:00Z",
            "/receipt4.pdf",
        ),
        reimbursement(
            "5",
            "EMP005",
            "Julia Ferreira",
            Decimal::new(15000, 2),
            "Material de Escritório",
            "Monitor externo para home office",
            ReimbursementStatus::Pendente,
            "2024-01-22T09:10:00Z",
            "/receipt5.pdf",
        ),
    ];

    pedidos[0].approved_at = Some(ts("2024-01-19T14:20:00Z"));
    pedidos[0].approved_by = Some("Carlos Oliveira".to_string());

    pedidos[2].justification =
        Some("Valor acima do limite permitido para estacionamento (R$ 30,00)".to_string());

    pedidos[3].approved_at = Some(ts("2024-01-16T09:30:00Z"));
    pedidos[3].approved_by = Some("Carlos Oliveira".to_string());

    pedidos
}
