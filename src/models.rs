// src/models.rs

pub mod employee;
pub mod person;
pub mod reimbursement;
pub mod settings;
pub mod user;
