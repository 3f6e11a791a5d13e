// src/models/employee.rs

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::filters::Searchable;
use crate::store::{Duplicable, Patchable, Record};

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Ativo,
    Inativo,
    Licenca,
    Ferias,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Ativo => "ativo",
            EmployeeStatus::Inativo => "inativo",
            EmployeeStatus::Licenca => "licenca",
            EmployeeStatus::Ferias => "ferias",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Ativo => "Ativo",
            EmployeeStatus::Inativo => "Inativo",
            EmployeeStatus::Licenca => "Licença",
            EmployeeStatus::Ferias => "Férias",
        }
    }

    /// Licença e férias contam juntas como afastamento nas estatísticas.
    pub fn is_on_leave(&self) -> bool {
        matches!(self, EmployeeStatus::Licenca | EmployeeStatus::Ferias)
    }
}

/// Tipos de afastamento aceitos pelo helper de transição de status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveKind {
    Licenca,
    Ferias,
}

impl From<LeaveKind> for EmployeeStatus {
    fn from(kind: LeaveKind) -> Self {
        match kind {
            LeaveKind::Licenca => EmployeeStatus::Licenca,
            LeaveKind::Ferias => EmployeeStatus::Ferias,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkLocation {
    Presencial,
    Remoto,
    Hibrido,
}

impl WorkLocation {
    pub fn label(&self) -> &'static str {
        match self {
            WorkLocation::Presencial => "Presencial",
            WorkLocation::Remoto => "Remoto",
            WorkLocation::Hibrido => "Híbrido",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Clt,
    Pj,
    Estagiario,
    Terceirizado,
}

impl ContractType {
    pub fn label(&self) -> &'static str {
        match self {
            ContractType::Clt => "CLT",
            ContractType::Pj => "PJ",
            ContractType::Estagiario => "Estagiário",
            ContractType::Terceirizado => "Terceirizado",
        }
    }
}

// --- ESTRUTURAS AUXILIARES ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

// --- FUNCIONÁRIO ---

// A matrícula (`employee_id`) é atribuída por humanos e única só por
// convenção; o sistema não verifica. `manager` é nome livre, não chave
// estrangeira — a resolução para outro registro é papel da apresentação.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub department: String,
    pub manager: Option<String>,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
    pub status: EmployeeStatus,
    pub work_location: WorkLocation,
    pub contract_type: ContractType,
    pub avatar_url: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<Address>,
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub performance_rating: Option<f64>,
    pub last_review: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados de contratação. Salário negativo não é barrado aqui: o store
// tolera registros parcialmente preenchidos ou estranhos, como o painel
// original fazia.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[validate(length(min = 1, message = "A matrícula é obrigatória."))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "O cargo é obrigatório."))]
    pub position: String,
    #[validate(length(min = 1, message = "O departamento é obrigatório."))]
    pub department: String,
    pub manager: Option<String>,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
    #[serde(default)]
    pub status: EmployeeStatus,
    pub work_location: WorkLocation,
    pub contract_type: ContractType,
    pub avatar_url: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<Address>,
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub performance_rating: Option<f64>,
    pub last_review: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl From<NewEmployee> for Employee {
    fn from(novo: NewEmployee) -> Self {
        Self {
            id: String::new(),
            employee_id: novo.employee_id,
            name: novo.name,
            email: novo.email,
            phone: novo.phone,
            position: novo.position,
            department: novo.department,
            manager: novo.manager,
            hire_date: novo.hire_date,
            salary: novo.salary,
            status: novo.status,
            work_location: novo.work_location,
            contract_type: novo.contract_type,
            avatar_url: novo.avatar_url,
            birth_date: novo.birth_date,
            address: novo.address,
            emergency_contact: novo.emergency_contact,
            benefits: novo.benefits,
            skills: novo.skills,
            performance_rating: novo.performance_rating,
            last_review: novo.last_review,
            notes: novo.notes,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub manager: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub salary: Option<Decimal>,
    pub status: Option<EmployeeStatus>,
    pub work_location: Option<WorkLocation>,
    pub contract_type: Option<ContractType>,
    pub avatar_url: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<Address>,
    pub emergency_contact: Option<EmergencyContact>,
    pub benefits: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub performance_rating: Option<f64>,
    pub last_review: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Record for Employee {
    const STORAGE_KEY: &'static str = "employees";

    fn id(&self) -> &str {
        &self.id
    }

    fn on_created(&mut self, id: String, now: DateTime<Utc>) {
        self.id = id;
        self.created_at = now;
        self.updated_at = now;
    }
}

impl Patchable for Employee {
    type Patch = EmployeePatch;

    // `created_at` é imutável após a criação; toda mutação refresca
    // apenas `updated_at`.
    fn apply_update(&mut self, patch: EmployeePatch, now: DateTime<Utc>) {
        if let Some(employee_id) = patch.employee_id {
            self.employee_id = employee_id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(manager) = patch.manager {
            self.manager = Some(manager);
        }
        if let Some(hire_date) = patch.hire_date {
            self.hire_date = hire_date;
        }
        if let Some(salary) = patch.salary {
            self.salary = salary;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(work_location) = patch.work_location {
            self.work_location = work_location;
        }
        if let Some(contract_type) = patch.contract_type {
            self.contract_type = contract_type;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = Some(birth_date);
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
        if let Some(emergency_contact) = patch.emergency_contact {
            self.emergency_contact = Some(emergency_contact);
        }
        if let Some(benefits) = patch.benefits {
            self.benefits = benefits;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(performance_rating) = patch.performance_rating {
            self.performance_rating = Some(performance_rating);
        }
        if let Some(last_review) = patch.last_review {
            self.last_review = Some(last_review);
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }

        self.updated_at = now;
    }
}

impl Duplicable for Employee {
    fn as_duplicate(&self, id: String, now: DateTime<Utc>) -> Self {
        let mut copy = self.clone();
        copy.id = id;
        copy.name = format!("{} (Cópia)", self.name);
        copy.email = format!("copia.{}", self.email);
        copy.employee_id = format!("{}_COPY", self.employee_id);
        copy.created_at = now;
        copy.updated_at = now;
        copy
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.employee_id.as_str(),
            self.position.as_str(),
        ]
    }
}

// --- ESTATÍSTICAS DERIVADAS ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub on_leave: usize,
    pub this_month: usize,
    pub avg_salary: Decimal,
    pub avg_rating: f64,
}

/// Agregados da listagem de funcionários. As médias dividem pelo número
/// de registros que definem o campo e devolvem zero para lista vazia —
/// NaN nunca chega à apresentação.
pub fn employee_stats(employees: &[Employee], now: DateTime<Utc>) -> EmployeeStats {
    let total = employees.len();

    let avg_salary = if total == 0 {
        Decimal::ZERO
    } else {
        employees.iter().map(|e| e.salary).sum::<Decimal>() / Decimal::from(total as u64)
    };

    let ratings: Vec<f64> = employees
        .iter()
        .filter_map(|e| e.performance_rating)
        .collect();
    let avg_rating = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    };

    EmployeeStats {
        total,
        active: employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Ativo)
            .count(),
        inactive: employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Inativo)
            .count(),
        on_leave: employees.iter().filter(|e| e.status.is_on_leave()).count(),
        this_month: employees
            .iter()
            .filter(|e| e.hire_date.month() == now.month() && e.hire_date.year() == now.year())
            .count(),
        avg_salary,
        avg_rating,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn employee(status: EmployeeStatus, salary: i64, rating: Option<f64>) -> Employee {
        Employee {
            id: String::new(),
            employee_id: "EMP999".to_string(),
            name: "Fulano de Tal".to_string(),
            email: "fulano@company.com".to_string(),
            phone: None,
            position: "Analista".to_string(),
            department: "Tecnologia".to_string(),
            manager: None,
            hire_date: NaiveDate::from_ymd_opt(2022, 3, 15).unwrap(),
            salary: Decimal::from(salary),
            status,
            work_location: WorkLocation::Hibrido,
            contract_type: ContractType::Clt,
            avatar_url: None,
            birth_date: None,
            address: None,
            emergency_contact: None,
            benefits: Vec::new(),
            skills: Vec::new(),
            performance_rating: rating,
            last_review: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_stats_aggregate_status_and_averages() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        let mut on_leave = employee(EmployeeStatus::Ferias, 6000, None);
        on_leave.hire_date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

        let employees = vec![
            employee(EmployeeStatus::Ativo, 8000, Some(4.0)),
            employee(EmployeeStatus::Ativo, 10000, Some(5.0)),
            employee(EmployeeStatus::Inativo, 4000, None),
            on_leave,
        ];

        let stats = employee_stats(&employees, now);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.on_leave, 1);
        assert_eq!(stats.this_month, 1);
        assert_eq!(stats.avg_salary, Decimal::from(7000));
        // Média só sobre quem tem avaliação definida.
        assert_eq!(stats.avg_rating, 4.5);
    }

    #[test]
    fn test_avg_rating_without_ratings_is_zero_not_nan() {
        let employees = vec![
            employee(EmployeeStatus::Ativo, 5000, None),
            employee(EmployeeStatus::Ativo, 7000, None),
        ];

        let stats = employee_stats(&employees, Utc::now());
        assert_eq!(stats.avg_rating, 0.0);
        assert!(stats.avg_rating.is_finite());
    }

    #[test]
    fn test_stats_on_empty_list_are_defined() {
        let stats = employee_stats(&[], Utc::now());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.avg_salary, Decimal::ZERO);
        assert_eq!(stats.avg_rating, 0.0);
    }

    #[test]
    fn test_empty_patch_refreshes_only_updated_at() {
        let mut e = employee(EmployeeStatus::Ativo, 8000, Some(4.5));
        e.id = "abc".to_string();
        let before = e.clone();

        e.apply_update(EmployeePatch::default(), Utc::now());
        assert_eq!(e.name, before.name);
        assert_eq!(e.salary, before.salary);
        assert_eq!(e.created_at, before.created_at);
        assert!(e.updated_at >= before.updated_at);
    }

    #[test]
    fn test_duplicate_decorates_code_name_and_email() {
        let mut source = employee(EmployeeStatus::Ativo, 8000, Some(4.5));
        source.id = "orig".to_string();
        source.employee_id = "EMP001".to_string();
        source.name = "Ana Silva Santos".to_string();
        source.email = "ana.silva@company.com".to_string();

        let copy = source.as_duplicate("copia".to_string(), Utc::now());
        assert_eq!(copy.employee_id, "EMP001_COPY");
        assert_eq!(copy.name, "Ana Silva Santos (Cópia)");
        assert_eq!(copy.email, "copia.ana.silva@company.com");
    }

    #[test]
    fn test_serializes_with_camel_case_and_lowercase_enums() {
        let e = employee(EmployeeStatus::Licenca, 5500, None);
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"employeeId\":\"EMP999\""));
        assert!(json.contains("\"status\":\"licenca\""));
        assert!(json.contains("\"workLocation\":\"hibrido\""));
        assert!(json.contains("\"contractType\":\"clt\""));
    }
}
