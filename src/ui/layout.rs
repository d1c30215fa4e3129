use crate::ExamApp;
use crate::ui::helpers::format_time;
use egui::{Align, Color32, Context, Layout, RichText, Visuals};

/// Cabecera del test en curso: título de la parte, posición, insignias de
/// estado, cuenta atrás y navegación.
pub fn top_panel(app: &mut ExamApp, ctx: &Context) {
    let Some(session) = &app.session else {
        return;
    };

    // Se lee todo lo necesario antes de pintar para no pelear con el préstamo.
    let part_title = session.current_part().title.clone();
    let position = format!(
        "Parte {} de {}",
        session.current_part_index() + 1,
        session.part_count()
    );
    let submitted = session.is_submitted();
    let read_only = session.is_current_read_only();
    let review = session.is_review_mode();
    let time_left = session.time_left();
    let show_prev = !submitted && session.current_part_index() > 0;
    let next_label = if session.is_last_part() {
        "Terminar test"
    } else {
        "Parte siguiente ▶"
    };

    let mut go_prev = false;
    let mut go_next = false;
    let mut exit = false;

    egui::TopBottomPanel::top("runner_header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.strong(&part_title);
                ui.horizontal(|ui| {
                    ui.small(&position);
                    if review {
                        ui.small(RichText::new("REPASO").strong().color(Color32::LIGHT_GREEN));
                    }
                    if !submitted && read_only {
                        ui.small(RichText::new("SÓLO LECTURA").strong().color(Color32::GOLD));
                    }
                });
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Salir").clicked() {
                    exit = true;
                }
                if submitted {
                    // Enviado: no hay más navegación, sólo salir del repaso.
                    return;
                }
                if ui.button(next_label).clicked() {
                    go_next = true;
                }
                if show_prev && ui.button("◀ Parte anterior").clicked() {
                    go_prev = true;
                }
                let color = if time_left < 60 {
                    Color32::LIGHT_RED
                } else {
                    Color32::LIGHT_BLUE
                };
                ui.label(
                    RichText::new(format!("Tiempo restante: {}", format_time(time_left)))
                        .monospace()
                        .strong()
                        .color(color),
                );
            });
        });
    });

    if go_next {
        app.request_next();
    }
    if go_prev {
        app.request_previous();
    }
    if exit {
        app.request_exit();
    }
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🌙 Tema oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Tema claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}
