//! Capacidades inyectadas: reloj y almacén clave-valor para las notas.
//! El núcleo de sesión no toca nunca recursos globales directamente.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

/// Fuente de tiempo. La sesión recibe instantes explícitos, así que en los
/// tests basta con fabricar `Instant`s desplazados.
pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Almacén clave-valor para el registro de notas ("correct/total" por test).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Clave bajo la que se guarda la última nota de un test.
pub fn score_key(test_id: &str) -> String {
    format!("score_{test_id}")
}

/// Almacén respaldado por un JSON en disco. Mejor esfuerzo: los fallos de
/// E/S se registran y se ignoran, nunca llegan al usuario.
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    fn flush(&self) {
        match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    log::warn!("No se pudo escribir {}: {e}", self.path.display());
                }
            }
            Err(e) => log::warn!("No se pudo serializar el almacén de notas: {e}"),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush();
    }
}

/// Almacén en memoria, sin persistencia. Útil en tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_on_set() {
        let mut store = MemoryStore::default();
        store.set("score_test1", "3/10");
        store.set("score_test1", "8/10");
        assert_eq!(store.get("score_test1").as_deref(), Some("8/10"));
        assert_eq!(store.get("score_test2"), None);
    }

    #[test]
    fn score_key_is_namespaced_by_test() {
        assert_eq!(score_key("test1"), "score_test1");
        assert_ne!(score_key("test1"), score_key("test2"));
    }

    #[test]
    fn file_store_round_trips_through_disk() {
        let path = std::env::temp_dir().join(format!(
            "reading_sim_store_test_{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        {
            let mut store = FileStore::open(path.clone());
            assert_eq!(store.get("score_test1"), None);
            store.set("score_test1", "5/9");
        }
        let reopened = FileStore::open(path.clone());
        assert_eq!(reopened.get("score_test1").as_deref(), Some("5/9"));

        let _ = std::fs::remove_file(&path);
    }
}
