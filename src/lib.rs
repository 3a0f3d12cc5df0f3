//! pgr-tools
//!
//! Assistente de documentos PGR (Programa de Gerenciamento de Riscos):
//! - extração de GHEs e formulários de análise de risco via Gemini
//! - agrupamento de fotos por GHE a partir da estrutura de pastas
//! - exportação de formulários e tabelas de fotos em HTML compatível com o Word

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod gallery;
pub mod generator;
pub mod review;
pub mod scanner;
