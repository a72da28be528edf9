//! External API integrations

pub mod text_generation;

pub use text_generation::TextGenerationClient;
