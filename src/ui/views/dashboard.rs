use crate::ExamApp;
use crate::ui::helpers::sized_button;
use egui::{Align, CentralPanel, Context, RichText, ScrollArea};

/// Panel inicial: lista de tests de práctica con su última nota registrada.
pub fn ui_dashboard(app: &mut ExamApp, ctx: &Context) {
    let cards = app.test_cards();
    let mut start: Option<usize> = None;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let content_width = ui.available_width().min(max_width);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.add_space(24.0);
            ui.heading("Simulador de lectura CELPIP");
            ui.label("Elige un test de práctica para empezar.");
            ui.add_space(16.0);

            ScrollArea::vertical().show(ui, |ui| {
                ui.set_width(content_width);
                for card in &cards {
                    egui::Frame::default()
                        .fill(ui.visuals().faint_bg_color)
                        .inner_margin(egui::Margin::symmetric(16, 12))
                        .show(ui, |ui| {
                            ui.set_width(content_width - 32.0);
                            ui.horizontal(|ui| {
                                ui.strong(&card.title);
                                ui.with_layout(
                                    egui::Layout::right_to_left(Align::Center),
                                    |ui| match &card.last_score {
                                        Some(score) => {
                                            ui.label(
                                                RichText::new(format!("Última nota: {score}"))
                                                    .small()
                                                    .strong(),
                                            );
                                        }
                                        None => {
                                            ui.label(RichText::new("NUEVO").small().weak());
                                        }
                                    },
                                );
                            });
                            ui.label(&card.description);
                            ui.small(format!(
                                "{} partes · ~{} minutos",
                                card.part_count, card.total_minutes
                            ));
                            ui.add_space(8.0);
                            if sized_button(ui, 180.0, 32.0, "▶ Empezar test") {
                                start = Some(card.idx);
                            }
                        });
                    ui.add_space(12.0);
                }
            });
        });
    });

    if let Some(idx) = start {
        app.start_test(idx);
    }
}
