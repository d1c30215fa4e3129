use std::time::{Duration, Instant};

/// Fase del temporizador de una parte.
///
/// Sólo la parte más avanzada (el frente) tiene nunca un motor en `Running`;
/// las partes bloqueadas se representan con un motor `Paused` congelado en su
/// último valor guardado. `Expired` es terminal para esa parte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Running,
    Paused,
    Expired,
}

/// Resultado de consumir el tiempo transcurrido desde el último poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    Idle,
    Ticked,
    Expired,
}

/// Cuenta atrás de la parte activa. Se alimenta de instantes explícitos
/// (un poll por fotograma) y consume segundos enteros, restando uno por
/// segundo. Un tick que llega con el contador ya a cero produce `Expired`
/// exactamente una vez; después el motor queda inerte.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    phase: TimerPhase,
    time_left: u32,
    // Instante del último segundo entero consumido; `None` salvo en Running.
    anchor: Option<Instant>,
}

impl TimerEngine {
    pub fn running(seconds: u32, now: Instant) -> Self {
        Self {
            phase: TimerPhase::Running,
            time_left: seconds,
            anchor: Some(now),
        }
    }

    /// Motor congelado para una parte bloqueada: muestra el valor guardado
    /// y no descuenta nunca.
    pub fn frozen(seconds: u32) -> Self {
        Self {
            phase: TimerPhase::Paused,
            time_left: seconds,
            anchor: None,
        }
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    pub fn pause(&mut self) {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Paused;
            self.anchor = None;
        }
    }

    /// Consume los segundos enteros transcurridos hasta `now`.
    ///
    /// Si durante el consumo se alcanza la expiración, se devuelve `Expired`
    /// inmediatamente y se descarta el resto del tiempo pendiente: la
    /// transición debe aplicarse entera antes de que la parte siguiente
    /// empiece a contar.
    pub fn poll(&mut self, now: Instant) -> TimerSignal {
        if self.phase != TimerPhase::Running {
            return TimerSignal::Idle;
        }
        let Some(mut anchor) = self.anchor else {
            return TimerSignal::Idle;
        };

        let mut pending = now.saturating_duration_since(anchor).as_secs();
        let mut signal = TimerSignal::Idle;
        while pending > 0 {
            anchor += Duration::from_secs(1);
            pending -= 1;
            if self.time_left == 0 {
                self.phase = TimerPhase::Expired;
                self.anchor = None;
                return TimerSignal::Expired;
            }
            self.time_left -= 1;
            signal = TimerSignal::Ticked;
        }
        self.anchor = Some(anchor);
        signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t0: Instant, millis: u64) -> Instant {
        t0 + Duration::from_millis(millis)
    }

    #[test]
    fn decrements_once_per_whole_second() {
        let t0 = Instant::now();
        let mut timer = TimerEngine::running(5, t0);

        assert_eq!(timer.poll(at(t0, 500)), TimerSignal::Idle);
        assert_eq!(timer.time_left(), 5);

        assert_eq!(timer.poll(at(t0, 1000)), TimerSignal::Ticked);
        assert_eq!(timer.time_left(), 4);

        // Fracción sobrante: no descuenta hasta el siguiente segundo entero.
        assert_eq!(timer.poll(at(t0, 1900)), TimerSignal::Idle);
        assert_eq!(timer.poll(at(t0, 3000)), TimerSignal::Ticked);
        assert_eq!(timer.time_left(), 2);
    }

    #[test]
    fn expiry_fires_exactly_once() {
        let t0 = Instant::now();
        let mut timer = TimerEngine::running(1, t0);

        assert_eq!(timer.poll(at(t0, 1000)), TimerSignal::Ticked);
        assert_eq!(timer.time_left(), 0);

        assert_eq!(timer.poll(at(t0, 2000)), TimerSignal::Expired);
        assert_eq!(timer.phase(), TimerPhase::Expired);

        // Polls posteriores quedan inertes aunque siga pasando el tiempo.
        assert_eq!(timer.poll(at(t0, 3000)), TimerSignal::Idle);
        assert_eq!(timer.poll(at(t0, 60_000)), TimerSignal::Idle);
        assert_eq!(timer.time_left(), 0);
    }

    #[test]
    fn catch_up_stops_at_expiry() {
        // Un fotograma muy tardío consume varios segundos de golpe, pero la
        // expiración corta el consumo: el resto se descarta.
        let t0 = Instant::now();
        let mut timer = TimerEngine::running(2, t0);
        assert_eq!(timer.poll(at(t0, 10_000)), TimerSignal::Expired);
        assert_eq!(timer.time_left(), 0);
    }

    #[test]
    fn frozen_engine_never_ticks() {
        let t0 = Instant::now();
        let mut timer = TimerEngine::frozen(30);
        assert_eq!(timer.poll(at(t0, 5000)), TimerSignal::Idle);
        assert_eq!(timer.time_left(), 30);
        assert!(!timer.is_running());
    }

    #[test]
    fn pause_stops_the_countdown() {
        let t0 = Instant::now();
        let mut timer = TimerEngine::running(5, t0);
        assert_eq!(timer.poll(at(t0, 1000)), TimerSignal::Ticked);
        timer.pause();
        assert_eq!(timer.poll(at(t0, 10_000)), TimerSignal::Idle);
        assert_eq!(timer.time_left(), 4);
    }
}
