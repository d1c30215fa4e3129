use egui::{Button, Ui, Vec2};

/// Formatea segundos como mm:ss.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

pub fn sized_button(ui: &mut Ui, width: f32, height: f32, label: &str) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}
