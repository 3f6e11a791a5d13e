// src/store/record.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Contrato mínimo que uma entidade precisa cumprir para viver num
/// `RecordStore`: uma chave fixa de coleção, um id opaco e o hook de
/// criação que recebe o id e o instante gerados pelo store.
///
/// As capacidades extras ficam em traits separadas: nem toda entidade
/// aceita atualização parcial (`Patchable`) ou duplicação (`Duplicable`) —
/// usuários do painel, por exemplo, só entram e saem da lista.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const STORAGE_KEY: &'static str;

    fn id(&self) -> &str;

    fn on_created(&mut self, id: String, now: DateTime<Utc>);
}

/// Atualização por merge parcial. A implementação é dona dos efeitos
/// colaterais da própria entidade: refresh de `updated_at`, entrada de
/// histórico, etc. Um patch vazio ainda dispara esses efeitos.
pub trait Patchable: Record {
    type Patch;

    fn apply_update(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

/// Clonagem decorada: novo id, nome/e-mail/matrícula marcados como cópia
/// e campos de log zerados. A decoração sinaliza a cópia para o usuário,
/// não garante unicidade — ninguém checa colisões aqui, como no original.
pub trait Duplicable: Record {
    fn as_duplicate(&self, id: String, now: DateTime<Utc>) -> Self;
}
