// src/models/settings.rs

use serde::{Deserialize, Serialize};

/// Preferência cosmética de tema, persistida sob chave própria —
/// não faz parte de nenhuma coleção de registros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Claro",
            Theme::Dark => "Escuro",
            Theme::System => "Sistema",
        }
    }
}
