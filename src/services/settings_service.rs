// src/services/settings_service.rs

use crate::models::settings::Theme;
use crate::storage::Storage;

const THEME_KEY: &str = "theme";

/// Preferências cosméticas, persistidas fora das coleções de registros.
/// Falha de armazenamento segue a mesma regra do resto: loga e segue.
pub struct SettingsService<S: Storage> {
    storage: S,
}

impl<S: Storage> SettingsService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn theme(&self) -> Theme {
        match self.storage.get(THEME_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!("Preferência de tema ilegível, usando padrão: {err}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::error!("Falha ao ler preferência de tema: {err}");
                Theme::default()
            }
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        let raw = match serde_json::to_string(&theme) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!("Falha ao serializar tema: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(THEME_KEY, &raw) {
            tracing::error!("Falha ao gravar preferência de tema: {err}");
        }
    }

    pub fn clear_theme(&self) {
        if let Err(err) = self.storage.remove(THEME_KEY) {
            tracing::error!("Falha ao limpar preferência de tema: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_theme_defaults_roundtrips_and_clears() {
        let storage = MemoryStorage::new();
        let service = SettingsService::new(storage.clone());

        assert_eq!(service.theme(), Theme::System);

        service.set_theme(Theme::Dark);
        assert_eq!(service.theme(), Theme::Dark);
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("\"dark\""));

        service.clear_theme();
        assert_eq!(service.theme(), Theme::System);
    }

    #[test]
    fn test_corrupt_theme_falls_back_to_default() {
        let storage = MemoryStorage::new();
        storage.set("theme", "roxo???").unwrap();

        let service = SettingsService::new(storage);
        assert_eq!(service.theme(), Theme::System);
    }
}
