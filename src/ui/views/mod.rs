pub mod filters;
pub mod quiz;
pub mod settings;
