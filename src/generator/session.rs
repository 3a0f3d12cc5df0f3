//! Arquivo de sessão
//!
//! O estado de uma extração (resumos + formulários gerados) é gravado em
//! JSON para ser compartilhado entre `extract`, `generate`, `review` e
//! `export`. A impressão digital SHA-256 do PDF impede que uma sessão seja
//! retomada contra outro documento.

use crate::error::{PgrError, Result};
use crate::extractor::types::{GheDetails, GheSummary};
use crate::generator::status::GenerationTracker;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSession {
    /// Versão do formato (checagem de compatibilidade).
    version: u32,
    /// SHA-256 do PDF de origem.
    pub fingerprint: String,
    /// Data de criação, RFC 3339.
    pub created_at: String,
    /// Caminho do PDF de origem.
    pub pdf_path: String,
    /// Resumos na ordem da resposta do serviço.
    pub summaries: Vec<GheSummary>,
    /// Formulários gerados, chaveados pela identidade do resumo.
    pub details: HashMap<String, GheDetails>,
}

impl GenerationSession {
    const CURRENT_VERSION: u32 = 1;

    pub fn new(pdf_path: &Path, pdf_bytes: &[u8], summaries: Vec<GheSummary>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            fingerprint: fingerprint(pdf_bytes),
            created_at: chrono::Utc::now().to_rfc3339(),
            pdf_path: pdf_path.display().to_string(),
            summaries,
            details: HashMap::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PgrError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let session: GenerationSession = serde_json::from_reader(reader)?;

        if session.version != Self::CURRENT_VERSION {
            return Err(PgrError::SessionMismatch(format!(
                "versão {} não suportada",
                session.version
            )));
        }

        Ok(session)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Rejeita a sessão se o PDF fornecido não for o documento original.
    pub fn verify_pdf(&self, pdf_bytes: &[u8]) -> Result<()> {
        let atual = fingerprint(pdf_bytes);
        if atual != self.fingerprint {
            return Err(PgrError::SessionMismatch(
                "o PDF não corresponde ao documento desta sessão".into(),
            ));
        }
        Ok(())
    }

    /// Semeia o rastreador com os formulários já gerados, que passam a
    /// contar como `Success` e são pulados pela próxima geração em massa.
    pub fn seed_tracker(&self, tracker: &mut GenerationTracker) {
        for (id, details) in &self.details {
            tracker.seed(id, details.clone());
        }
    }

    /// Absorve os formulários gerados pelo rastreador de volta na sessão.
    pub fn absorb_tracker(&mut self, tracker: &GenerationTracker) {
        for (id, details) in tracker.iter_details() {
            self.details.insert(id.clone(), details.clone());
        }
    }

    /// Localiza um resumo pelo código do GHE.
    pub fn find_by_ghe(&self, ghe: &str) -> Option<&GheSummary> {
        self.summaries.iter().find(|s| s.ghe == ghe)
    }

    /// Formulários gerados, na ordem dos resumos.
    pub fn details_in_order(&self) -> Vec<&GheDetails> {
        self.summaries
            .iter()
            .filter_map(|s| self.details.get(&s.id))
            .collect()
    }
}

/// SHA-256 em hexadecimal.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
