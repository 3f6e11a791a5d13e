// src/data.rs

// Seeds de primeira execução: quando não há snapshot persistido (ou ele
// está ilegível), cada coleção nasce com estes dados. Eles são sempre
// injetados no store pelo chamador — os testes passam fixtures próprias.

pub mod employees;
pub mod people;
pub mod reimbursements;
pub mod users;

use chrono::{DateTime, NaiveDate, Utc};

// Os seeds são literais conhecidos; um parse falhando aqui é bug de
// digitação no próprio seed, não condição de runtime.
pub(crate) fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("timestamp fixo do seed inválido")
}

pub(crate) fn date(raw: &str) -> NaiveDate {
    raw.parse().expect("data fixa do seed inválida")
}
