use super::*;
use crate::model::Part;

// Accesores de sólo lectura sobre la sesión: banderas derivadas que consume
// la capa de presentación. Aquí no se muta nada.
impl TestSession {
    pub fn test(&self) -> &TestDefinition {
        &self.test
    }

    pub fn part_count(&self) -> usize {
        self.test.parts.len()
    }

    pub fn current_part_index(&self) -> usize {
        self.current_part
    }

    pub fn current_part(&self) -> &Part {
        &self.test.parts[self.current_part]
    }

    pub fn max_part_reached(&self) -> usize {
        self.max_part_reached
    }

    pub fn is_last_part(&self) -> bool {
        self.current_part + 1 == self.test.parts.len()
    }

    /// Segundos restantes de la parte actual (congelados si está bloqueada).
    pub fn time_left(&self) -> u32 {
        self.timer.time_left()
    }

    pub fn has_running_timer(&self) -> bool {
        self.timer.is_running()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_score_overlay_visible(&self) -> bool {
        self.score_overlay
    }

    /// Repaso: enviado y con la nota ya descartada de pantalla.
    pub fn is_review_mode(&self) -> bool {
        self.submitted && !self.score_overlay
    }

    /// Una parte es de sólo lectura si la sesión se envió o si quedó por
    /// detrás de la marca de agua.
    pub fn is_part_read_only(&self, index: usize) -> bool {
        self.submitted || index < self.max_part_reached
    }

    pub fn is_current_read_only(&self) -> bool {
        self.is_part_read_only(self.current_part)
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    /// Tiempo guardado de una parte ya visitada, si existe.
    pub fn saved_time(&self, index: usize) -> Option<u32> {
        self.saved_times.get(&index).copied()
    }

    /// Respuestas de la parte actual, con el prefijo de parte quitado.
    pub fn answers_for_current_part(&self) -> std::collections::HashMap<String, String> {
        self.answers.answers_for_part(&self.current_part().id)
    }
}
