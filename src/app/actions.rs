use super::*;
use crate::storage::score_key;

// Acciones de usuario a nivel de aplicación: arrancar/abandonar intentos,
// navegación con confirmación y persistencia de la nota. La sesión hace las
// transiciones; aquí sólo se decide cuándo hace falta preguntar antes.
impl ExamApp {
    /// Arranca (o reinicia desde cero) un intento del test `idx`.
    pub fn start_test(&mut self, idx: usize) {
        let Some(test) = self.tests.get(idx) else {
            return;
        };
        log::info!("Comienza el test '{}'", test.id);
        self.session = Some(TestSession::new(test.clone(), self.clock.now()));
        self.selected_test = Some(idx);
        self.pending_confirm = None;
        self.score_persisted = false;
        self.state = AppState::Runner;
    }

    /// Un avance de reloj por fotograma. Si el poll produce el envío (última
    /// parte expirada), la nota se persiste aquí mismo.
    pub fn poll_session(&mut self) {
        let now = self.clock.now();
        if let Some(session) = &mut self.session {
            session.poll(now);
        }
        self.persist_score_once();
    }

    /// Botón «siguiente». Dentro del rango ya desbloqueado navega sin más;
    /// desde el frente deja pendiente la confirmación que corresponda.
    pub fn request_next(&mut self) {
        let now = self.clock.now();
        let Some(session) = &mut self.session else {
            return;
        };
        if session.is_submitted() {
            return;
        }
        if session.current_part_index() < session.max_part_reached() {
            let next = session.current_part_index() + 1;
            session.navigate_to(next, now);
            return;
        }
        // En el frente: avanzar bloquea la parte actual para siempre.
        self.pending_confirm = Some(if session.is_last_part() {
            ConfirmAction::FinishTest
        } else {
            ConfirmAction::AdvancePart(session.current_part_index())
        });
    }

    pub fn request_previous(&mut self) {
        let now = self.clock.now();
        if let Some(session) = &mut self.session {
            let current = session.current_part_index();
            if current > 0 {
                session.navigate_to(current - 1, now);
            }
        }
    }

    /// Salir del intento. Con la sesión ya enviada no hay nada que perder y
    /// se vuelve directamente; si no, se pide confirmación.
    pub fn request_exit(&mut self) {
        match &self.session {
            Some(session) if !session.is_submitted() => {
                self.pending_confirm = Some(ConfirmAction::ExitTest);
            }
            _ => self.back_to_dashboard(),
        }
    }

    /// Resuelve el diálogo de confirmación pendiente. Declinar no toca nada.
    pub fn resolve_confirm(&mut self, accepted: bool) {
        let Some(action) = self.pending_confirm.take() else {
            return;
        };
        if !accepted {
            return;
        }
        let now = self.clock.now();
        match action {
            ConfirmAction::AdvancePart(from) => {
                // El reloj siguió corriendo con el diálogo abierto: si la
                // parte expiró entre medias, la sesión ya avanzó y esta
                // confirmación es obsoleta. Aplicarla avanzaría una parte que
                // el usuario nunca confirmó dejar.
                if let Some(session) = &mut self.session {
                    if session.current_part_index() == from
                        && session.max_part_reached() == from
                    {
                        session.navigate_to(from + 1, now);
                    }
                }
            }
            ConfirmAction::FinishTest => {
                if let Some(session) = &mut self.session {
                    session.submit();
                }
                self.persist_score_once();
            }
            ConfirmAction::ExitTest => self.back_to_dashboard(),
        }
    }

    /// Callback de la capa de presentación: `(pregunta, valor)`.
    pub fn on_answer_change(&mut self, item_id: &str, value: &str) {
        if let Some(session) = &mut self.session {
            session.set_answer(item_id, value);
        }
    }

    /// Descarta la sesión por completo y vuelve al panel. No hay reanudación.
    pub fn back_to_dashboard(&mut self) {
        self.session = None;
        self.selected_test = None;
        self.pending_confirm = None;
        self.state = AppState::Dashboard;
    }

    /// Graba "correct/total" bajo la clave del test, una sola vez por envío
    /// (cada envío nuevo del mismo test la sobrescribe).
    fn persist_score_once(&mut self) {
        if self.score_persisted {
            return;
        }
        let Some(session) = &self.session else {
            return;
        };
        let (Some(score), Some(idx)) = (session.score(), self.selected_test) else {
            return;
        };
        let key = score_key(&self.tests[idx].id);
        let record = score.as_record();
        self.scores.set(&key, &record);
        self.score_persisted = true;
        log::info!("Nota guardada: {key} = {record}");
    }
}
