pub mod dashboard;
pub mod questions;
pub mod runner;
