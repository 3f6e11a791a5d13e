// src/data/employees.rs

use rust_decimal::Decimal;

use crate::models::employee::{
    Address, ContractType, EmergencyContact, Employee, EmployeeStatus, WorkLocation,
};

use super::{date, ts};

/// Departamentos reconhecidos pelos formulários e filtros.
pub const DEPARTMENTS: &[&str] = &[
    "Tecnologia",
    "Recursos Humanos",
    "Financeiro",
    "Marketing",
    "Vendas",
    "Operações",
    "Jurídico",
    "Administrativo",
    "Produto",
    "Design",
];

pub const POSITIONS: &[&str] = &[
    // Tecnologia
    "Desenvolvedor Frontend",
    "Desenvolvedor Backend",
    "Desenvolvedor Full Stack",
    "DevOps Engineer",
    "Arquiteto de Software",
    "Tech Lead",
    "Gerente de Tecnologia",
    "QA Engineer",
    "UX/UI Designer",
    "Product Manager",
    // RH
    "Analista de RH",
    "Especialista em Recrutamento",
    "Gerente de RH",
    "Business Partner",
    "Analista de Treinamento",
    // Financeiro
    "Analista Financeiro",
    "Controller",
    "Gerente Financeiro",
    "Analista Contábil",
    "Tesoureiro",
    // Marketing
    "Analista de Marketing",
    "Especialista em Marketing Digital",
    "Gerente de Marketing",
    "Social Media",
    "Designer Gráfico",
    // Vendas
    "Vendedor",
    "Consultor de Vendas",
    "Gerente de Vendas",
    "Account Manager",
    "Pré-vendas",
    // Outros
    "Assistente Administrativo",
    "Coordenador",
    "Supervisor",
    "Diretor",
    "Estagiário",
];

/// Catálogo fixo de benefícios oferecidos.
pub const BENEFITS: &[&str] = &[
    "Vale Refeição",
    "Vale Transporte",
    "Plano de Saúde",
    "Plano Odontológico",
    "Vale Alimentação",
    "Seguro de Vida",
    "Participação nos Lucros",
    "Auxílio Creche",
    "Auxílio Educação",
    "Gympass",
    "Home Office",
    "Horário Flexível",
    "Day Off Aniversário",
];

pub const SKILLS: &[&str] = &[
    // Técnicas
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "AWS",
    "Docker",
    "SQL",
    "Power BI",
    "Excel Avançado",
    "Figma",
    "Adobe Creative Suite",
    "Google Analytics",
    // Comportamentais
    "Liderança",
    "Comunicação",
    "Negociação",
    "Organização",
    "Trabalho em Equipe",
    "Criatividade",
    "Proatividade",
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

struct EmployeeSeed<'a> {
    id: &'a str,
    employee_id: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    position: &'a str,
    department: &'a str,
    manager: Option<&'a str>,
    hire_date: &'a str,
    salary: i64,
    status: EmployeeStatus,
    work_location: WorkLocation,
    contract_type: ContractType,
    birth_date: &'a str,
    address: (&'a str, &'a str, &'a str, &'a str),
    emergency: (&'a str, &'a str, &'a str),
    benefits: &'a [&'a str],
    skills: &'a [&'a str],
    rating: f64,
    last_review: &'a str,
    notes: &'a str,
    created_at: &'a str,
    updated_at: &'a str,
}

impl EmployeeSeed<'_> {
    fn build(self) -> Employee {
        let (street, city, state, zip_code) = self.address;
        let (contact_name, contact_phone, relationship) = self.emergency;
        Employee {
            id: self.id.to_string(),
            employee_id: self.employee_id.to_string(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            phone: Some(self.phone.to_string()),
            position: self.position.to_string(),
            department: self.department.to_string(),
            manager: self.manager.map(|m| m.to_string()),
            hire_date: date(self.hire_date),
            salary: Decimal::from(self.salary),
            status: self.status,
            work_location: self.work_location,
            contract_type: self.contract_type,
            avatar_url: None,
            birth_date: Some(date(self.birth_date)),
            address: Some(Address {
                street: street.to_string(),
                city: city.to_string(),
                state: state.to_string(),
                zip_code: zip_code.to_string(),
            }),
            emergency_contact: Some(EmergencyContact {
                name: contact_name.to_string(),
                phone: contact_phone.to_string(),
                relationship: relationship.to_string(),
            }),
            benefits: strings(self.benefits),
            skills: strings(self.skills),
            performance_rating: Some(self.rating),
            last_review: Some(date(self.last_review)),
            notes: Some(self.notes.to_string()),
            created_at: ts(self.created_at),
            updated_at: ts(self.updated_at),
        }
    }
}

/// Os dez funcionários da primeira execução.
pub fn mock_employees() -> Vec<Employee> {
    vec![
        EmployeeSeed {
            id: "1",
            employee_id: "EMP001",
            name: "Ana Silva Santos",
            email: "ana.silva@company.com",
            phone: "(11) 99999-1234",
            position: "Desenvolvedora Frontend",
            department: "Tecnologia",
            manager: Some("Carlos Oliveira"),
            hire_date: "2022-03-15",
            salary: 8500,
            status: EmployeeStatus::Ativo,
            work_location: WorkLocation::Hibrido,
            contract_type: ContractType::Clt,
            birth_date: "1990-05-20",
            address: ("Rua das Flores, 123", "São Paulo", "SP", "01234-567"),
            emergency: ("João Silva", "(11) 99999-5678", "Marido"),
            benefits: &["Vale Refeição", "Plano de Saúde", "Home Office", "Horário Flexível"],
            skills: &["JavaScript", "React", "TypeScript", "Trabalho em Equipe"],
            rating: 4.5,
            last_review: "2024-01-15",
            notes: "Excelente desenvolvedora, sempre proativa e colaborativa.",
            created_at: "2022-03-15T09:00:00Z",
            updated_at: "2024-01-15T14:30:00Z",
        }
        .build(),
        EmployeeSeed {
            id: "2",
            employee_id: "EMP002",
            name: "Carlos Oliveira",
            email: "carlos.oliveira@company.com",
            phone: "(11) 99999-2345",
            position: "Tech Lead",
            department: "Tecnologia",
            manager: None,
            hire_date: "2020-08-10",
            salary: 15000,
            status: EmployeeStatus::Ativo,
            work_location: WorkLocation::Presencial,
            contract_type: ContractType::Clt,
            birth_date: "1985-11-12",
            address: ("Av. Paulista, 456", "São Paulo", "SP", "01310-100"),
            emergency: ("Maria Oliveira", "(11) 99999-6789", "Esposa"),
            benefits: &["Vale Refeição", "Plano de Saúde", "Plano Odontológico", "Participação nos Lucros"],
            skills: &["Liderança", "JavaScript", "Node.js", "AWS"],
            rating: 4.8,
            last_review: "2024-01-10",
            notes: "Líder técnico experiente, excelente mentor para a equipe.",
            created_at: "2020-08-10T10:00:00Z",
            updated_at: "2024-01-10T16:00:00Z",
        }
        .build(),
        EmployeeSeed {
            id: "3",
            employee_id: "EMP003",
            name: "Mariana Costa",
            email: "mariana.costa@company.com",
            phone: "(11) 99999-3456",
            position: "Analista de RH",
            department: "Recursos Humanos",
            manager: Some("Roberto Santos"),
            hire_date: "2021-06-01",
            salary: 6500,
            status: EmployeeStatus::Ativo,
            work_location: WorkLocation::Presencial,
            contract_type: ContractType::Clt,
            birth_date: "1992-08-30",
            address: ("Rua Augusta, 789", "São Paulo", "SP", "01305-000"),
            emergency: ("Pedro Costa", "(11) 99999-7890", "Pai"),
            benefits: &["Vale Refeição", "Vale Transporte", "Plano de Saúde", "Auxílio Educação"],
            skills: &["Comunicação", "Organização", "Excel Avançado"],
            rating: 4.2,
            last_review: "2023-12-20",
            notes: "Muito organizada e eficiente nos processos de RH.",
            created_at: "2021-06-01T08:30:00Z",
            updated_at: "2023-12-20T15:45:00Z",
        }
        .build(),
        EmployeeSeed {
            id: "4",
            employee_id: "EMP004",
            name: "Roberto Santos",
            email: "roberto.santos@company.com",
            phone: "(11) 99999-4567",
            position: "Gerente de RH",
            department: "Recursos Humanos",
            manager: None,
            hire_date: "2019-02-20",
            salary: 12000,
            status: EmployeeStatus::Ativo,
            work_location: WorkLocation::Presencial,
            contract_type: ContractType::Clt,
            birth_date: "1980-03-15",
            address: ("Rua Oscar Freire, 321", "São Paulo", "SP", "01426-001"),
            emergency: ("Lucia Santos", "(11) 99999-8901", "Esposa"),
            benefits: &["Vale Refeição", "Plano de Saúde", "Plano Odontológico", "Seguro de Vida"],
            skills: &["Liderança", "Negociação", "Comunicação"],
            rating: 4.6,
            last_review: "2024-01-05",
            notes: "Gestor experiente, excelente relacionamento interpessoal.",
            created_at: "2019-02-20T09:15:00Z",
            updated_at: "2024-01-05T11:20:00Z",
        }
        .build(),
        EmployeeSeed {
            id: "5",
            employee_id: "EMP005",
            name: "Julia Ferreira",
            email: "julia.ferreira@company.com",
            phone: "(11) 99999-5678",
            position: "UX/UI Designer",
            department: "Design",
            manager: Some("Ana Silva Santos"),
            hire_date: "2023-01-10",
            salary: 7000,
            status: EmployeeStatus::Ativo,
            work_location: WorkLocation::Remoto,
            contract_type: ContractType::Clt,
            birth_date: "1995-12-08",
            address: ("Rua Consolação, 654", "São Paulo", "SP", "01302-000"),
            emergency: ("Carlos Ferreira", "(11) 99999-9012", "Irmão"),
            benefits: &["Vale Refeição", "Plano de Saúde", "Home Office", "Gympass"],
            skills: &["Figma", "Adobe Creative Suite", "Criatividade"],
            rating: 4.3,
            last_review: "2023-12-15",
            notes: "Designer talentosa, sempre entrega trabalhos de alta qualidade.",
            created_at: "2023-01-10T10:45:00Z",
            updated_at: "2023-12-15T14:00:00Z",
        }
        .build(),
        EmployeeSeed {
            id: "6",
            employee_id: "EMP006",
            name: "Pedro Almeida",
            email: "pedro.almeida@company.com",
            phone: "(11) 99999-6789",
            position: "Analista Financeiro",
            department: "Financeiro",
            manager: Some("Lucia Rodrigues"),
            hire_date: "2021-09-15",
            salary: 7500,
            status: EmployeeStatus::Ferias,
            work_location: WorkLocation::Presencial,
            contract_type: ContractType::Clt,
            birth_date: "1988-07-22",
            address: ("Rua Vergueiro, 987", "São Paulo", "SP", "01504-001"),
            emergency: ("Ana Almeida", "(11) 99999-0123", "Esposa"),
            benefits: &["Vale Refeição", "Vale Transporte", "Plano de Saúde"],
            skills: &["Excel Avançado", "Power BI", "Organização"],
            rating: 4.1,
            last_review: "2023-11-30",
            notes: "Analista dedicado, muito preciso em suas análises.",
            created_at: "2021-09-15T08:00:00Z",
            updated_at: "2023-11-30T17:30:00Z",
        }
        .build(),
        EmployeeSeed {
            id: "7",
            employee_id: "EMP007",
            name: "Lucia Rodrigues",
            email: "lucia.rodrigues@company.com",
            phone: "(11) 99999-7890",
            position: "Gerente Financeiro",
            department: "Financeiro",
            manager: None,
            hire_date: "2018-11-05",
            salary: 14000,
            status: EmployeeStatus::Ativo,
            work_location: WorkLocation::Presencial,
            contract_type: ContractType::Clt,
            birth_date: "1982-09-18",
            address: ("Av. Faria Lima, 1234", "São Paulo", "SP", "04538-132"),
            emergency: ("Marcos Rodrigues", "(11) 99999-1234", "Marido"),
            benefits: &["Vale Refeição", "Plano de Saúde", "Participação nos Lucros", "Seguro de Vida"],
            skills: &["Liderança", "Negociação", "Power BI"],
            rating: 4.7,
            last_review: "2023-12-10",
            notes: "Gestora experiente com excelente visão estratégica.",
            created_at: "2018-11-05T09:30:00Z",
            updated_at: "2023-12-10T13:15:00Z",
        }
        .build(),
        EmployeeSeed {
            id: "8",
            employee_id: "EMP008",
            name: "Bruno Martins",
            email: "bruno.martins@company.com",
            phone: "(11) 99999-8901",
            position: "Estagiário",
            department: "Marketing",
            manager: Some("Fernanda Lima"),
            hire_date: "2024-02-01",
            salary: 1800,
            status: EmployeeStatus::Ativo,
            work_location: WorkLocation::Hibrido,
            contract_type: ContractType::Estagiario,
            birth_date: "2001-04-10",
            address: ("Rua da Liberdade, 555", "São Paulo", "SP", "01503-001"),
            emergency: ("Sandra Martins", "(11) 99999-2345", "Mãe"),
            benefits: &["Vale Refeição", "Vale Transporte"],
            skills: &["Proatividade", "Comunicação"],
            rating: 3.8,
            last_review: "2024-01-20",
            notes: "Estagiário dedicado e com muita vontade de aprender.",
            created_at: "2024-02-01T08:00:00Z",
            updated_at: "2024-01-20T16:00:00Z",
        }
        .build(),
        EmployeeSeed {
            id: "9",
            employee_id: "EMP009",
            name: "Fernanda Lima",
            email: "fernanda.lima@company.com",
            phone: "(11) 99999-9012",
            position: "Gerente de Marketing",
            department: "Marketing",
            manager: None,
            hire_date: "2020-04-20",
            salary: 11000,
            status: EmployeeStatus::Ativo,
            work_location: WorkLocation::Hibrido,
            contract_type: ContractType::Clt,
            birth_date: "1987-01-25",
            address: ("Rua Bela Cintra, 876", "São Paulo", "SP", "01415-000"),
            emergency: ("Ricardo Lima", "(11) 99999-3456", "Marido"),
            benefits: &["Vale Refeição", "Plano de Saúde", "Home Office", "Gympass"],
            skills: &["Google Analytics", "Liderança", "Criatividade"],
            rating: 4.4,
            last_review: "2024-01-08",
            notes: "Gerente criativa com excelentes resultados em campanhas.",
            created_at: "2020-04-20T10:00:00Z",
            updated_at: "2024-01-08T15:30:00Z",
        }
        .build(),
        EmployeeSeed {
            id: "10",
            employee_id: "EMP010",
            name: "Rafael Santos",
            email: "rafael.santos@company.com",
            phone: "(11) 99999-0123",
            position: "Consultor de Vendas",
            department: "Vendas",
            manager: Some("Amanda Silva"),
            hire_date: "2022-07-01",
            salary: 5500,
            status: EmployeeStatus::Licenca,
            work_location: WorkLocation::Presencial,
            contract_type: ContractType::Clt,
            birth_date: "1991-10-14",
            address: ("Rua Estados Unidos, 432", "São Paulo", "SP", "01427-001"),
            emergency: ("Carla Santos", "(11) 99999-4567", "Esposa"),
            benefits: &["Vale Refeição", "Vale Transporte", "Plano de Saúde"],
            skills: &["Negociação", "Comunicação"],
            rating: 4.0,
            last_review: "2023-10-15",
            notes: "Vendedor competente, atualmente em licença médica.",
            created_at: "2022-07-01T09:00:00Z",
            updated_at: "2023-10-15T14:45:00Z",
        }
        .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_ten_employees() {
        let employees = mock_employees();
        assert_eq!(employees.len(), 10);

        // Distribuição de status esperada pelo cenário de desativação.
        let active = employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Ativo)
            .count();
        let on_leave = employees.iter().filter(|e| e.status.is_on_leave()).count();
        assert_eq!(active, 8);
        assert_eq!(on_leave, 2);
    }

    #[test]
    fn test_seed_catalogs_cover_fixture_values() {
        for e in mock_employees() {
            assert!(DEPARTMENTS.contains(&e.department.as_str()), "{}", e.department);
            for b in &e.benefits {
                assert!(BENEFITS.contains(&b.as_str()), "{b}");
            }
            for s in &e.skills {
                assert!(SKILLS.contains(&s.as_str()), "{s}");
            }
        }
    }
}
