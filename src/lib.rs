pub mod app;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod generator;
pub mod lookup;
pub mod models;
pub mod playlist;
pub mod utils;

pub use app::{RunSummary, run};
