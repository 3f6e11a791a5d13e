// tests/painel_flow.rs

// Sessão completa sobre armazenamento em disco: muta cada coleção,
// "reinicia o processo" reabrindo o mesmo diretório e confere que tudo
// voltou como ficou.

use std::sync::Arc;

use painel_core::AppState;
use painel_core::models::employee::EmployeeStatus;
use painel_core::models::person::{NewPerson, PersonStatus};
use painel_core::models::reimbursement::ReimbursementStatus;
use painel_core::models::settings::Theme;
use painel_core::storage::{FileStorage, SharedStorage};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}

#[test]
fn test_full_session_survives_restart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let storage: SharedStorage = Arc::new(FileStorage::new(dir.path()).unwrap());
    let mut state = AppState::with_storage(storage);

    let person_id = state.people.add(NewPerson {
        name: "Tatiane Borges".to_string(),
        email: "tatiane.borges@company.com".to_string(),
        phone: None,
        role: Some("Analista de Dados".to_string()),
        department: Some("Tecnologia".to_string()),
        status: PersonStatus::Ativo,
        notes: None,
        tags: vec!["dados".to_string()],
        avatar_url: None,
    });
    state.people.add_document(&person_id, "RG_Tatiane.pdf").unwrap();

    state.employees.deactivate("1").unwrap();
    state.reimbursements.approve("2", "Roberto Santos").unwrap();
    state.settings.set_theme(Theme::Dark);

    let people_before = state.people.people().to_vec();
    drop(state);

    // Novo "processo" sobre o mesmo diretório de dados.
    let reopened: SharedStorage = Arc::new(FileStorage::new(dir.path()).unwrap());
    let state = AppState::with_storage(reopened);

    assert_eq!(state.people.people(), people_before.as_slice());
    let person = state.people.find(&person_id).expect("pessoa persistida");
    assert_eq!(person.documents.len(), 1);
    assert_eq!(person.history.last().unwrap().action, "Documento adicionado");

    assert_eq!(
        state.employees.find("1").unwrap().status,
        EmployeeStatus::Inativo
    );
    assert_eq!(
        state.reimbursements.find("2").unwrap().status,
        ReimbursementStatus::Aprovado
    );
    assert_eq!(state.settings.theme(), Theme::Dark);
}
