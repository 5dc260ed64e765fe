pub mod app;
pub mod assembler;
pub mod config;
pub mod data;
pub mod editor;
pub mod error;
pub mod filter;
pub mod ids;
pub mod model;
pub mod storage;
pub mod store;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use config::AppConfig;
