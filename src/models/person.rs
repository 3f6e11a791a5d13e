// src/models/person.rs

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::filters::Searchable;
use crate::store::{Duplicable, Patchable, Record};

/// Não há autenticação real: todo histórico é assinado pelo usuário fixo.
pub const ACTING_USER: &str = "Admin";

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersonStatus {
    #[default]
    Ativo,
    Inativo,
}

impl PersonStatus {
    /// Valor de gravação/filtragem, igual ao persistido.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonStatus::Ativo => "ativo",
            PersonStatus::Inativo => "inativo",
        }
    }

    /// Rótulo de exibição em pt-BR, único para todos os consumidores.
    pub fn label(&self) -> &'static str {
        match self {
            PersonStatus::Ativo => "Ativo",
            PersonStatus::Inativo => "Inativo",
        }
    }
}

// --- COLEÇÕES ANINHADAS ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDocument {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub action: String,
    pub user: String,
}

impl HistoryEntry {
    pub fn new(action: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: now,
            action: action.into(),
            user: ACTING_USER.to_string(),
        }
    }
}

// --- PESSOA ---

// Registro genérico de "pessoa" do painel. O histórico é um log só de
// acréscimo: cada mutação via store adiciona exatamente uma entrada, e
// nada o trunca ou reordena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub avatar_url: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub status: PersonStatus,
    pub created_at: DateTime<Utc>,
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub documents: Vec<PersonDocument>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

// Dados para cadastro de uma nova pessoa. A validação é chamada pelos
// formulários da apresentação; o store aceita o registro como vier.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    #[serde(default)]
    pub status: PersonStatus,
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub avatar_url: Option<String>,
}

impl From<NewPerson> for Person {
    fn from(novo: NewPerson) -> Self {
        Self {
            // Id e carimbo reais vêm do hook de criação do store.
            id: String::new(),
            avatar_url: novo.avatar_url,
            name: novo.name,
            email: novo.email,
            phone: novo.phone,
            role: novo.role,
            department: novo.department,
            status: novo.status,
            created_at: Utc::now(),
            notes: novo.notes,
            tags: novo.tags,
            documents: Vec::new(),
            history: Vec::new(),
        }
    }
}

// Merge parcial: campo ausente fica como está (não há como "limpar" um
// campo opcional por patch, espelhando o comportamento do original).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub status: Option<PersonStatus>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub avatar_url: Option<String>,
    pub documents: Option<Vec<PersonDocument>>,
    /// Ação gravada no histórico; ausente vira "Dados atualizados".
    #[serde(skip)]
    pub history_action: Option<String>,
}

impl Record for Person {
    const STORAGE_KEY: &'static str = "people-ui";

    fn id(&self) -> &str {
        &self.id
    }

    fn on_created(&mut self, id: String, now: DateTime<Utc>) {
        self.id = id;
        self.created_at = now;
        self.history = vec![HistoryEntry::new("Cadastro criado", now)];
    }
}

impl Patchable for Person {
    type Patch = PersonPatch;

    fn apply_update(&mut self, patch: PersonPatch, now: DateTime<Utc>) {
        let action = patch
            .history_action
            .unwrap_or_else(|| "Dados atualizados".to_string());

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(role) = patch.role {
            self.role = Some(role);
        }
        if let Some(department) = patch.department {
            self.department = Some(department);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(documents) = patch.documents {
            self.documents = documents;
        }

        self.history.push(HistoryEntry::new(action, now));
    }
}

impl Duplicable for Person {
    fn as_duplicate(&self, id: String, now: DateTime<Utc>) -> Self {
        let mut copy = self.clone();
        copy.id = id;
        copy.name = format!("{} (Cópia)", self.name);
        copy.email = format!("copia.{}", self.email);
        copy.created_at = now;
        copy.history = vec![HistoryEntry::new("Cadastro duplicado", now)];
        copy
    }
}

impl Searchable for Person {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        if let Some(role) = &self.role {
            fields.push(role);
        }
        fields
    }
}

// --- ESTATÍSTICAS DERIVADAS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub this_month: usize,
}

/// Agregados recalculados a cada acesso, função pura da lista atual.
pub fn person_stats(people: &[Person], now: DateTime<Utc>) -> PersonStats {
    PersonStats {
        total: people.len(),
        active: people
            .iter()
            .filter(|p| p.status == PersonStatus::Ativo)
            .count(),
        inactive: people
            .iter()
            .filter(|p| p.status == PersonStatus::Inativo)
            .count(),
        this_month: people
            .iter()
            .filter(|p| p.created_at.month() == now.month() && p.created_at.year() == now.year())
            .count(),
    }
}
