use crate::data::read_tests_embedded;
use crate::model::{AppState, TestDefinition};
use crate::storage::{Clock, FileStore, KeyValueStore, SystemClock};
use egui_commonmark::CommonMarkCache;
use std::collections::HashMap;
use std::time::Instant;

// Submódulos
pub mod actions;
pub mod answers;
pub mod queries;
pub mod scoring;
pub mod session;
pub mod timer;
pub mod view_models;

pub use self::view_models::TestCardInfo;

use self::answers::AnswerStore;
use self::scoring::Score;
use self::timer::TimerEngine;

/// Fichero donde se guarda la última nota de cada test.
const SCORES_FILE: &str = "reading_scores.json";

/// Sesión viva de un intento de test: la máquina de estados completa.
///
/// Se crea al empezar un intento y se descarta entera al salir al panel o
/// al reiniciar; no hay nada que arrastrar entre intentos. Sólo este tipo
/// muta el estado de navegación/bloqueo, y el temporizador sólo descuenta a
/// través de su `poll`.
pub struct TestSession {
    test: TestDefinition,
    current_part: usize,
    /// Marca de agua: la parte más lejana desbloqueada. Nunca decrece, y
    /// toda parte con índice menor queda en sólo lectura para siempre.
    max_part_reached: usize,
    /// Segundos restantes guardados por parte ya visitada; la ausencia
    /// significa "no empezada" (se usa la duración completa).
    saved_times: HashMap<usize, u32>,
    timer: TimerEngine,
    answers: AnswerStore,
    submitted: bool,
    score_overlay: bool,
    score: Option<Score>,
}

/// Acción destructiva pendiente de confirmación del usuario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Avanzar bloqueando la parte indicada (el frente cuando se pidió la
    /// confirmación). Si el frente cambia mientras el diálogo está abierto,
    /// la confirmación queda obsoleta y no debe aplicarse.
    AdvancePart(usize),
    /// Envío final desde la última parte.
    FinishTest,
    /// Abandonar el intento en curso.
    ExitTest,
}

/// Estado raíz de la aplicación: banco de tests, sesión en curso (si la
/// hay) y las capacidades inyectadas de reloj y persistencia.
pub struct ExamApp {
    pub tests: Vec<TestDefinition>,
    pub selected_test: Option<usize>,
    pub session: Option<TestSession>,
    pub state: AppState,
    pub pending_confirm: Option<ConfirmAction>,
    pub clock: Box<dyn Clock>,
    pub scores: Box<dyn KeyValueStore>,
    pub cm_cache: CommonMarkCache,
    // Evita regrabar la nota en cada fotograma tras el envío.
    score_persisted: bool,
}

impl ExamApp {
    pub fn new() -> Self {
        Self::with_deps(
            read_tests_embedded(),
            Box::new(SystemClock),
            Box::new(FileStore::open(SCORES_FILE)),
        )
    }

    pub fn with_deps(
        tests: Vec<TestDefinition>,
        clock: Box<dyn Clock>,
        scores: Box<dyn KeyValueStore>,
    ) -> Self {
        Self {
            tests,
            selected_test: None,
            session: None,
            state: AppState::Dashboard,
            pending_confirm: None,
            clock,
            scores,
            cm_cache: CommonMarkCache::default(),
            score_persisted: false,
        }
    }
}

impl Default for ExamApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSession {
    /// Inicializa la sesión en la parte 0 con su duración completa.
    pub fn new(test: TestDefinition, now: Instant) -> Self {
        debug_assert!(!test.parts.is_empty(), "un test sin partes no es válido");
        let timer = TimerEngine::running(test.parts[0].timer_seconds, now);
        Self {
            test,
            current_part: 0,
            max_part_reached: 0,
            saved_times: HashMap::new(),
            timer,
            answers: AnswerStore::default(),
            submitted: false,
            score_overlay: false,
            score: None,
        }
    }
}
