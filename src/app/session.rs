use super::*;
use super::timer::TimerSignal;

impl TestSession {
    /// Navegación manual entre partes. Devuelve `true` si hubo cambio.
    ///
    /// Dos regímenes:
    /// - *Repaso* (`target <= max_part_reached`): libre en ambas direcciones
    ///   dentro del rango ya desbloqueado.
    /// - *Avance con bloqueo* (desde el frente a la parte siguiente): sube la
    ///   marca de agua y la parte que se abandona queda bloqueada para
    ///   siempre. La confirmación del usuario es cosa de la capa superior;
    ///   aquí sólo se ejecuta la transición ya confirmada.
    ///
    /// Peticiones fuera de rango, con salto de partes o tras el envío se
    /// rechazan en silencio.
    pub fn navigate_to(&mut self, target: usize, now: Instant) -> bool {
        if self.submitted {
            return false;
        }
        if target >= self.test.parts.len() || target == self.current_part {
            return false;
        }
        if target > self.max_part_reached {
            // Sólo se desbloquea avanzando una parte, y sólo desde el frente.
            if self.current_part != self.max_part_reached || target != self.current_part + 1 {
                return false;
            }
            self.max_part_reached = target;
            log::info!(
                "Parte {} bloqueada; frente en la parte {}",
                self.current_part + 1,
                target + 1
            );
        }
        self.switch_to(target, now);
        true
    }

    /// Guarda el tiempo de la parte que se deja, carga el de la de destino
    /// (guardado, o duración completa si nunca se visitó) y cambia de parte.
    fn switch_to(&mut self, target: usize, now: Instant) {
        self.saved_times
            .insert(self.current_part, self.timer.time_left());
        let seconds = self
            .saved_times
            .get(&target)
            .copied()
            .unwrap_or(self.test.parts[target].timer_seconds);
        self.current_part = target;
        // Sólo el frente corre; cualquier parte bloqueada queda congelada.
        self.timer = if self.is_part_read_only(target) {
            TimerEngine::frozen(seconds)
        } else {
            TimerEngine::running(seconds, now)
        };
    }

    /// Consume el tiempo transcurrido y aplica la expiración si se produce.
    /// Devuelve `true` si cambió algo visible (tick o transición).
    ///
    /// La expiración se procesa entera dentro de este mismo poll: el motor
    /// nuevo de la parte siguiente ancla en `now`, así que ningún tick puede
    /// intercalarse a media transición.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.submitted {
            return false;
        }
        match self.timer.poll(now) {
            TimerSignal::Expired => {
                self.advance_on_expiry(self.current_part, now);
                true
            }
            TimerSignal::Ticked => true,
            TimerSignal::Idle => false,
        }
    }

    /// Avance automático por expiración de `part`.
    ///
    /// Sólo actúa si `part` sigue siendo el frente activo; señales tardías o
    /// duplicadas (la parte ya quedó atrás, o la sesión ya se envió) son
    /// no-ops, lo que resuelve la carrera entre avance manual y expiración.
    pub fn advance_on_expiry(&mut self, part: usize, now: Instant) {
        if self.submitted || part != self.current_part || self.current_part != self.max_part_reached
        {
            return;
        }
        if self.is_last_part() {
            log::info!("Última parte expirada: envío automático");
            self.finish();
            return;
        }
        log::info!("Parte {} expirada: avance automático", part + 1);
        self.saved_times.insert(self.current_part, 0);
        let next = self.current_part + 1;
        // Asignación idempotente: fijar dos veces el mismo valor es inocuo.
        self.max_part_reached = next;
        self.switch_to(next, now);
    }

    /// Envío final explícito desde la última parte (ya confirmado por el
    /// usuario). Irreversible dentro de la sesión.
    pub fn submit(&mut self) {
        if self.submitted || !self.is_last_part() {
            return;
        }
        self.finish();
    }

    fn finish(&mut self) {
        self.saved_times
            .insert(self.current_part, self.timer.time_left());
        self.timer.pause();
        self.score = Some(scoring::compute_score(&self.test, &self.answers));
        self.submitted = true;
        self.score_overlay = true;
    }

    /// Oculta la nota y entra en modo repaso; el envío no se deshace.
    pub fn dismiss_score_overlay(&mut self) {
        self.score_overlay = false;
    }

    /// Callback de la capa de presentación: registra una respuesta de la
    /// parte actual, con su id ya espaciado por parte. Se ignora si la parte
    /// está en sólo lectura.
    pub fn set_answer(&mut self, item_id: &str, value: &str) {
        if self.is_part_read_only(self.current_part) {
            return;
        }
        let part_id = self.test.parts[self.current_part].id.clone();
        self.answers.set_answer(&part_id, item_id, value);
    }
}
