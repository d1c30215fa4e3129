pub mod helpers;
pub mod layout;
pub mod views;

use crate::ExamApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use std::time::Duration;

impl App for ExamApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Un avance de reloj por fotograma; el repintado periódico mantiene
        // viva la cuenta atrás aunque el usuario no toque nada.
        if self.state == AppState::Runner {
            self.poll_session();
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        layout::bottom_panel(ctx);

        match self.state {
            AppState::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            AppState::Runner => {
                layout::top_panel(self, ctx);
                views::runner::ui_runner(self, ctx);
            }
        }
    }
}
