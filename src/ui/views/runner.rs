use crate::ExamApp;
use crate::app::ConfirmAction;
use crate::ui::views::questions::{self, AnswerChanges};
use egui::{Align2, CentralPanel, Context, RichText, ScrollArea, SidePanel};
use egui_commonmark::CommonMarkViewer;

/// Vista del test en curso: pasaje a la izquierda, preguntas a la derecha,
/// más la nota final y los diálogos de confirmación por encima.
pub fn ui_runner(app: &mut ExamApp, ctx: &Context) {
    let Some(session) = &app.session else {
        // Sin sesión no hay nada que pintar: de vuelta al panel.
        app.back_to_dashboard();
        return;
    };

    // Copias locales para pintar sin retener el préstamo de la sesión.
    let part = session.current_part().clone();
    let answers = session.answers_for_current_part();
    let submitted = session.is_submitted();
    let read_only = session.is_current_read_only();
    let part_index = session.current_part_index();
    let overlay = session.is_score_overlay_visible();

    SidePanel::left("passage_panel")
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            ScrollArea::vertical()
                .id_salt(("passage", part_index))
                .show(ui, |ui| {
                    ui.heading(&part.passage.title);
                    ui.add_space(8.0);
                    for paragraph in &part.passage.paragraphs {
                        CommonMarkViewer::new().show(ui, &mut app.cm_cache, paragraph);
                        ui.add_space(8.0);
                    }
                });
        });

    let mut changes: AnswerChanges = Vec::new();
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .id_salt(("questions", part_index))
            .show(ui, |ui| {
                questions::show_sections(ui, &part, &answers, submitted, read_only, &mut changes);
            });
    });
    for (item_id, value) in changes {
        app.on_answer_change(&item_id, &value);
    }

    if overlay {
        score_overlay(app, ctx);
    }
    if app.pending_confirm.is_some() {
        confirm_window(app, ctx);
    }
}

fn score_overlay(app: &mut ExamApp, ctx: &Context) {
    let Some(score) = app.session.as_ref().and_then(|s| s.score()) else {
        return;
    };

    let mut review = false;
    let mut retake = false;
    let mut exit = false;

    egui::Window::new("Test completado")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("¡Test completado!");
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("{} / {}", score.correct, score.total))
                        .size(40.0)
                        .strong(),
                );
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("Revisar respuestas").clicked() {
                        review = true;
                    }
                    if ui.button("Repetir test").clicked() {
                        retake = true;
                    }
                    if ui.button("Volver al panel").clicked() {
                        exit = true;
                    }
                });
            });
        });

    if review {
        if let Some(session) = &mut app.session {
            session.dismiss_score_overlay();
        }
    }
    if retake {
        if let Some(idx) = app.selected_test {
            app.start_test(idx);
        }
    }
    if exit {
        app.back_to_dashboard();
    }
}

/// Diálogo bloqueante de sí/no para las tres acciones que lo requieren.
/// Declinar deja todo exactamente como estaba.
fn confirm_window(app: &mut ExamApp, ctx: &Context) {
    let Some(action) = app.pending_confirm else {
        return;
    };
    let (title, text, yes_label) = match action {
        ConfirmAction::AdvancePart(_) => (
            "Confirmar avance",
            "Vas a pasar a la parte siguiente. NO podrás volver a cambiar \
             tus respuestas en esta sección. ¿Continuar?",
            "Sí, avanzar",
        ),
        ConfirmAction::FinishTest => (
            "Confirmar envío",
            "¿Seguro que quieres TERMINAR el test y ver tu nota? Después no \
             podrás cambiar ninguna respuesta.",
            "Sí, terminar",
        ),
        ConfirmAction::ExitTest => (
            "Salir del test",
            "¿Salir de este test? Se perderá todo el progreso del intento.",
            "Sí, salir",
        ),
    };

    let mut decision: Option<bool> = None;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(text);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(yes_label).clicked() {
                    decision = Some(true);
                }
                if ui.button("No").clicked() {
                    decision = Some(false);
                }
            });
        });

    if let Some(accepted) = decision {
        app.resolve_confirm(accepted);
    }
}
