pub mod traits;

// Generative-text provider implementations
pub mod gemini;
