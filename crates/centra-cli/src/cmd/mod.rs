pub mod analyze;
pub mod components;
