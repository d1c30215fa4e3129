use reading_sim::ExamApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Simulador de lectura CELPIP",
        options,
        Box::new(|_cc| Ok(Box::new(ExamApp::new()))),
    )
}
