pub mod app;
pub mod data;
pub mod model;
pub mod storage;
pub mod ui;

pub use app::ExamApp;
