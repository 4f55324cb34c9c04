pub mod answer_utils;
pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod filter_sections;
pub mod filters;
pub mod localization;
pub mod mappings;
pub mod model;
pub mod query;
pub mod remote;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
