// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::filters::Searchable;
use crate::store::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Administrativo,
    Manager,
    Jogador,
    Staff,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Administrativo => "administrativo",
            UserRole::Manager => "manager",
            UserRole::Jogador => "jogador",
            UserRole::Staff => "staff",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Administrativo => "Administrativo",
            UserRole::Manager => "Manager",
            UserRole::Jogador => "Jogador",
            UserRole::Staff => "Staff",
        }
    }
}

// Conta de acesso ao painel. Ciclo de vida mínimo: entra e sai da
// lista, sem atualização parcial nem duplicação.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Modalidade; só faz sentido quando o papel é jogador.
    pub game: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    pub role: UserRole,
    pub game: Option<String>,
}

impl From<NewUser> for AppUser {
    fn from(novo: NewUser) -> Self {
        Self {
            id: String::new(),
            name: novo.name,
            email: novo.email,
            role: novo.role,
            game: novo.game,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

impl Record for AppUser {
    const STORAGE_KEY: &'static str = "app_users";

    fn id(&self) -> &str {
        &self.id
    }

    fn on_created(&mut self, id: String, now: DateTime<Utc>) {
        self.id = id;
        self.created_at = now;
        self.updated_at = now;
    }
}

impl Searchable for AppUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let novo = NewUser {
            name: "Jogador Um".to_string(),
            email: "jogador@empresa.com".to_string(),
            role: UserRole::Jogador,
            game: Some("Valorant".to_string()),
        };
        let user: AppUser = novo.into();
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"role\":\"jogador\""));
        assert!(json.contains("\"game\":\"Valorant\""));
    }

    #[test]
    fn test_labels_for_all_roles() {
        assert_eq!(UserRole::Administrativo.label(), "Administrativo");
        assert_eq!(UserRole::Manager.label(), "Manager");
        assert_eq!(UserRole::Jogador.label(), "Jogador");
        assert_eq!(UserRole::Staff.label(), "Staff");
    }
}
