// Service exports
pub mod generator;

pub use generator::{Difficulty, ProjectSuggestion, TemplateGenerator, TextGenerator};
