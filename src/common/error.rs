use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
//
// A taxonomia é curta de propósito: falhas de leitura/gravação do
// armazenamento local nunca viram erro para o chamador (o store degrada
// para "apenas em memória" e loga), então o que sobra para a API pública
// é validação de entrada e registro não encontrado.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Registro não encontrado")]
    RecordNotFound,
}

impl AppError {
    /// Mensagem amigável para exibição, no mesmo idioma dos rótulos.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ValidationError(errors) => {
                let mut details = Vec::new();
                for (field, field_errors) in errors.field_errors() {
                    for field_error in field_errors {
                        if let Some(message) = &field_error.message {
                            details.push(format!("{field}: {message}"));
                        }
                    }
                }
                if details.is_empty() {
                    "Um ou mais campos são inválidos.".to_string()
                } else {
                    details.join("; ")
                }
            }
            AppError::RecordNotFound => "Registro não encontrado.".to_string(),
        }
    }
}
