// src/filters.rs

// Contrato de filtragem das páginas de listagem: uma busca textual sem
// distinção de maiúsculas sobre campos fixos da entidade, mais filtros
// de igualdade sobre campos de enum, todos combinados com E lógico.
// Implementado uma vez aqui em vez de repetido por página.

/// Campos de texto que a busca livre da entidade considera
/// (nome, e-mail, matrícula, cargo — conforme a página).
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Nome reservado do predicado de busca textual dentro do `FilterSet`.
pub const QUERY_FILTER: &str = "busca";

type Predicate<R> = Box<dyn Fn(&R) -> bool>;

/// Conjunto de predicados nomeados, reduzidos com E lógico. Cada filtro
/// é limpável individualmente pelo nome, ou todos de uma vez.
pub struct FilterSet<R> {
    predicates: Vec<(String, Predicate<R>)>,
}

impl<R> Default for FilterSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> FilterSet<R> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Define (ou substitui) o predicado com o nome dado.
    pub fn set<F>(&mut self, name: &str, predicate: F)
    where
        F: Fn(&R) -> bool + 'static,
    {
        self.clear(name);
        self.predicates.push((name.to_string(), Box::new(predicate)));
    }

    pub fn clear(&mut self, name: &str) {
        self.predicates.retain(|(existing, _)| existing != name);
    }

    pub fn clear_all(&mut self) {
        self.predicates.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Nomes dos filtros ativos, na ordem em que foram definidos.
    pub fn active(&self) -> Vec<&str> {
        self.predicates.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn matches(&self, record: &R) -> bool {
        self.predicates.iter().all(|(_, predicate)| predicate(record))
    }

    /// Filtra preservando a ordem relativa original da lista.
    pub fn apply<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

impl<R: Searchable> FilterSet<R> {
    /// Busca textual por substring, sem distinção de maiúsculas. Query
    /// vazia (ou só espaços) remove o predicado de busca.
    pub fn set_query(&mut self, query: &str) {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            self.clear(QUERY_FILTER);
            return;
        }
        self.set(QUERY_FILTER, move |record: &R| {
            record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        name: String,
        email: String,
        status: &'static str,
        department: &'static str,
    }

    fn row(name: &str, status: &'static str, department: &'static str) -> Row {
        Row {
            name: name.to_string(),
            email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
            status,
            department,
        }
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.name, &self.email]
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("Ana Silva", "ativo", "Tecnologia"),
            row("Carlos Santos", "inativo", "Tecnologia"),
            row("Maria Oliveira", "ativo", "Marketing"),
            row("João Pereira", "ativo", "Tecnologia"),
            row("Fernanda Costa", "inativo", "Marketing"),
            row("Roberto Silva", "ativo", "Tecnologia"),
        ]
    }

    #[test]
    fn test_status_and_department_combined_with_and() {
        let rows = sample();
        let mut filters = FilterSet::new();
        filters.set("status", |r: &Row| r.status == "ativo");
        filters.set("departamento", |r: &Row| r.department == "Tecnologia");

        let result = filters.apply(&rows);
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();

        // Só quem satisfaz os dois predicados, na ordem relativa original.
        assert_eq!(names, vec!["Ana Silva", "João Pereira", "Roberto Silva"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let rows = sample();
        let mut filters = FilterSet::new();
        filters.set_query("SILVA");

        let result = filters.apply(&rows);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Ana Silva");
        assert_eq!(result[1].name, "Roberto Silva");
    }

    #[test]
    fn test_blank_query_clears_search_predicate() {
        let mut filters: FilterSet<Row> = FilterSet::new();
        filters.set_query("ana");
        assert_eq!(filters.active(), vec![QUERY_FILTER]);

        filters.set_query("   ");
        assert!(filters.is_empty());
    }

    #[test]
    fn test_filters_clear_individually_and_collectively() {
        let rows = sample();
        let mut filters = FilterSet::new();
        filters.set("status", |r: &Row| r.status == "inativo");
        filters.set("departamento", |r: &Row| r.department == "Marketing");
        assert_eq!(filters.apply(&rows).len(), 1);

        filters.clear("departamento");
        assert_eq!(filters.active(), vec!["status"]);
        assert_eq!(filters.apply(&rows).len(), 2);

        filters.clear_all();
        assert!(filters.is_empty());
        assert_eq!(filters.apply(&rows).len(), rows.len());
    }

    #[test]
    fn test_query_and_status_over_people_seed() {
        use crate::data::people::mock_people;
        use crate::models::person::{Person, PersonStatus};

        let people = mock_people();
        let mut filters: FilterSet<Person> = FilterSet::new();
        filters.set_query("silva");
        filters.set("status", |p: &Person| p.status == PersonStatus::Ativo);

        let result = filters.apply(&people);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ana Silva", "Roberto Silva"]);
    }

    #[test]
    fn test_set_replaces_predicate_with_same_name() {
        let rows = sample();
        let mut filters = FilterSet::new();
        filters.set("status", |r: &Row| r.status == "ativo");
        filters.set("status", |r: &Row| r.status == "inativo");

        assert_eq!(filters.active().len(), 1);
        assert_eq!(filters.apply(&rows).len(), 2);
    }
}
