//! Fluxo de geração dos formulários
//!
//! - `status`: rastreador de status por GHE e cache de detalhes
//! - `batch`: laço sequencial de geração em massa
//! - `session`: arquivo de sessão compartilhado entre os comandos

pub mod batch;
pub mod session;
pub mod status;

pub use batch::{run_batch, BatchEvent, BatchRun};
pub use session::GenerationSession;
pub use status::{GenerationStatus, GenerationTracker};
