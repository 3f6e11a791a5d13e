// src/services.rs

pub mod employee_service;
pub mod people_service;
pub mod reimbursement_service;
pub mod settings_service;
pub mod user_service;

pub use employee_service::EmployeeService;
pub use people_service::PeopleService;
pub use reimbursement_service::ReimbursementService;
pub use settings_service::SettingsService;
pub use user_service::UserService;
