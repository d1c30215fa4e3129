use std::collections::HashMap;

/// Respuestas del usuario, claveadas por `parte_pregunta` para que los ids
/// de pregunta de partes distintas no choquen. Sólo se insertan o
/// sobrescriben entradas; nunca se borran durante la sesión.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    entries: HashMap<String, String>,
}

impl AnswerStore {
    fn key(part_id: &str, item_id: &str) -> String {
        format!("{part_id}_{item_id}")
    }

    /// Upsert incondicional. Aquí no se valida contra la lista de opciones:
    /// un valor malformado se guarda tal cual y simplemente nunca puntuará.
    pub fn set_answer(&mut self, part_id: &str, item_id: &str, value: &str) {
        self.entries
            .insert(Self::key(part_id, item_id), value.to_owned());
    }

    pub fn answer(&self, part_id: &str, item_id: &str) -> Option<&str> {
        self.entries
            .get(&Self::key(part_id, item_id))
            .map(String::as_str)
    }

    /// Vista de una parte: sólo sus entradas, con el prefijo de parte ya
    /// quitado (`item_id → valor`).
    pub fn answers_for_part(&self, part_id: &str) -> HashMap<String, String> {
        let prefix = format!("{part_id}_");
        self.entries
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&prefix)
                    .map(|item_id| (item_id.to_owned(), value.clone()))
            })
            .collect()
    }
}
