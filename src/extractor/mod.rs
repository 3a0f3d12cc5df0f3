//! Extração de GHEs via serviço de IA
//!
//! - `types`: tipos de domínio (GheSummary, GheDetails, Risco) e de transporte
//! - `prompts`: prompts, esquemas e o vocabulário fixo de riscos
//! - `parser`: extração do JSON e limpeza pós-parse
//! - `gemini`: cliente HTTP do generateContent

pub mod gemini;
pub mod parser;
pub mod prompts;
pub mod types;

pub use gemini::GeminiClient;
pub use types::{GheDetails, GheSummary, Risco};
