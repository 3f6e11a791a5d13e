//src/lib.rs

// Declaração dos nossos módulos
pub mod common;
pub mod config;
pub mod data;
pub mod filters;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

// Reexportações principais: a camada de apresentação consome o estado
// montado e os serviços por entidade, sem conhecer o store genérico.
pub use config::AppState;
pub use common::error::AppError;
