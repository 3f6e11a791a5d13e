// src/data/users.rs

use crate::models::user::{AppUser, UserRole};

use super::ts;

/// Modalidades das equipes de esports atendidas pelo painel.
pub const GAMES: &[&str] = &[
    "League of Legends",
    "Valorant",
    "CS:GO",
    "FIFA",
    "Fortnite",
    "Dota 2",
    "Free Fire",
];

pub fn mock_users() -> Vec<AppUser> {
    vec![
        AppUser {
            id: "u1".to_string(),
            name: "Administrador".to_string(),
            email: "admin@empresa.com".to_string(),
            role: UserRole::Administrativo,
            game: None,
            created_at: ts("2024-01-02T08:00:00Z"),
            updated_at: ts("2024-01-02T08:00:00Z"),
        },
        AppUser {
            id: "u2".to_string(),
            name: "Gerente de Operações".to_string(),
            email: "manager@empresa.com".to_string(),
            role: UserRole::Manager,
            game: None,
            created_at: ts("2024-01-02T08:05:00Z"),
            updated_at: ts("2024-01-02T08:05:00Z"),
        },
    ]
}
