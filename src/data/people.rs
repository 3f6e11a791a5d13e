// src/data/people.rs

use crate::models::person::{HistoryEntry, Person, PersonDocument, PersonStatus};

use super::ts;

fn doc(id: &str, name: &str, uploaded_at: &str) -> PersonDocument {
    PersonDocument {
        id: id.to_string(),
        name: name.to_string(),
        url: None,
        uploaded_at: ts(uploaded_at),
    }
}

fn hist(id: &str, date: &str, action: &str) -> HistoryEntry {
    HistoryEntry {
        id: id.to_string(),
        date: ts(date),
        action: action.to_string(),
        user: "Admin".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn person(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    role: &str,
    department: &str,
    status: PersonStatus,
    created_at: &str,
    notes: &str,
    tags: &[&str],
) -> Person {
    Person {
        id: id.to_string(),
        avatar_url: None,
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        role: Some(role.to_string()),
        department: Some(department.to_string()),
        status,
        created_at: ts(created_at),
        notes: Some(notes.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        documents: Vec::new(),
        history: Vec::new(),
    }
}

pub fn mock_people() -> Vec<Person> {
    let mut people = vec![
        person(
            "1",
            "Ana Silva",
            "ana.silva@company.com",
            "(11) 99999-9999",
            "Desenvolvedora Senior",
            "Tecnologia",
            PersonStatus::Ativo,
            "2024-01-15T10:00:00Z",
            "Especialista em React e TypeScript",
            &["frontend", "typescript", "react"],
        ),
        person(
            "2",
            "Carlos Santos",
            "carlos.santos@company.com",
            "(11) 88888-8888",
            "Designer UX",
            "Design",
            PersonStatus::Ativo,
            "2024-01-10T14:30:00Z",
            "Foco em experiência do usuário e prototipagem",
            &["ux", "figma", "design-thinking"],
        ),
        person(
            "3",
            "Maria Oliveira",
            "maria.oliveira@company.com",
            "(11) 77777-7777",
            "Gerente de Projetos",
            "Gestão",
            PersonStatus::Ativo,
            "2024-02-01T09:15:00Z",
            "Especialista em metodologias ágeis",
            &["scrum", "agile", "lideranca"],
        ),
        person(
            "4",
            "João Pereira",
            "joao.pereira@company.com",
            "(11) 66666-6666",
            "Analista de Marketing",
            "Marketing",
            PersonStatus::Inativo,
            "2024-01-25T16:45:00Z",
            "Especialista em marketing digital",
            &["marketing", "digital", "analytics"],
        ),
        person(
            "5",
            "Fernanda Costa",
            "fernanda.costa@company.com",
            "(11) 55555-5555",
            "Desenvolvedora Frontend",
            "Tecnologia",
            PersonStatus::Ativo,
            "2024-02-15T11:20:00Z",
            "Especialista em Vue.js e design systems",
            &["frontend", "vue", "design-system"],
        ),
        person(
            "6",
            "Roberto Silva",
            "roberto.silva@company.com",
            "(11) 44444-4444",
            "DevOps Engineer",
            "Tecnologia",
            PersonStatus::Ativo,
            "2024-01-30T08:00:00Z",
            "Especialista em AWS e containerização",
            &["devops", "aws", "docker"],
        ),
        person(
            "7",
            "Isabela Rodrigues",
            "isabela.rodrigues@company.com",
            "(11) 33333-3333",
            "QA Analyst",
            "Qualidade",
            PersonStatus::Ativo,
            "2024-02-20T13:15:00Z",
            "Especialista em testes automatizados",
            &["qa", "automation", "testing"],
        ),
        person(
            "8",
            "Lucas Almeida",
            "lucas.almeida@company.com",
            "(11) 22222-2222",
            "Product Manager",
            "Produto",
            PersonStatus::Ativo,
            "2024-01-05T15:30:00Z",
            "Foco em product discovery e user research",
            &["product", "discovery", "research"],
        ),
        person(
            "9",
            "Patrícia Martins",
            "patricia.martins@company.com",
            "(11) 11111-1111",
            "HR Specialist",
            "RH",
            PersonStatus::Ativo,
            "2024-02-10T12:00:00Z",
            "Especialista em recrutamento e seleção",
            &["hr", "recruitment", "people"],
        ),
        person(
            "10",
            "Alexandre Ferreira",
            "alexandre.ferreira@company.com",
            "(11) 99999-0000",
            "Data Analyst",
            "Dados",
            PersonStatus::Inativo,
            "2024-01-20T10:45:00Z",
            "Especialista em análise de dados e BI",
            &["data", "analytics", "bi"],
        ),
    ];

    people[0].documents = vec![
        doc("d1", "CV_Ana_Silva.pdf", "2024-01-15T10:00:00Z"),
        doc("d2", "Certificacao_React.pdf", "2024-01-20T14:30:00Z"),
    ];
    people[0].history = vec![
        hist("h1", "2024-01-15T10:00:00Z", "Cadastro criado"),
        hist("h2", "2024-01-20T14:30:00Z", "Documento adicionado"),
    ];

    people[1].documents = vec![doc("d3", "Portfolio_Carlos.pdf", "2024-01-10T14:30:00Z")];
    people[1].history = vec![hist("h3", "2024-01-10T14:30:00Z", "Cadastro criado")];

    people[2].documents = vec![doc("d4", "Certificacao_Scrum.pdf", "2024-02-01T09:15:00Z")];
    people[2].history = vec![hist("h4", "2024-02-01T09:15:00Z", "Cadastro criado")];

    people[3].history = vec![
        hist("h5", "2024-01-25T16:45:00Z", "Cadastro criado"),
        hist("h6", "2024-03-01T10:00:00Z", "Status alterado para inativo"),
    ];

    people[4].documents = vec![doc("d5", "Certificacao_Vue.pdf", "2024-02-15T11:20:00Z")];
    people[4].history = vec![hist("h7", "2024-02-15T11:20:00Z", "Cadastro criado")];

    people[5].history = vec![hist("h8", "2024-01-30T08:00:00Z", "Cadastro criado")];

    people[6].documents = vec![doc("d6", "Certificacao_ISTQB.pdf", "2024-02-20T13:15:00Z")];
    people[6].history = vec![hist("h9", "2024-02-20T13:15:00Z", "Cadastro criado")];

    people[7].history = vec![hist("h10", "2024-01-05T15:30:00Z", "Cadastro criado")];

    people[8].documents = vec![doc("d7", "Certificacao_HR.pdf", "2024-02-10T12:00:00Z")];
    people[8].history = vec![hist("h11", "2024-02-10T12:00:00Z", "Cadastro criado")];

    people[9].history = vec![
        hist("h12", "2024-01-20T10:45:00Z", "Cadastro criado"),
        hist("h13", "2024-02-28T16:00:00Z", "Status alterado para inativo"),
    ];

    people
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_ten_people_with_created_history() {
        let people = mock_people();
        assert_eq!(people.len(), 10);
        for p in &people {
            assert!(!p.history.is_empty(), "{} sem histórico", p.name);
            assert_eq!(p.history[0].action, "Cadastro criado");
        }
    }
}
