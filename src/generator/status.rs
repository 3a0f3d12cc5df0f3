//! Estado de geração por GHE
//!
//! Mapa identidade → status e cache de detalhes, compartilhados entre a
//! geração individual e a geração em massa. Estado de sessão, em memória.

use crate::error::{PgrError, Result};
use crate::extractor::types::GheDetails;
use std::collections::HashMap;

/// Status de geração de um GHE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl std::fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationStatus::Idle => write!(f, "pendente"),
            GenerationStatus::Loading => write!(f, "gerando"),
            GenerationStatus::Success => write!(f, "gerado"),
            GenerationStatus::Error => write!(f, "erro"),
        }
    }
}

/// Rastreador de status e cache de detalhes, chaveados pela identidade
/// do resumo (`GheSummary::id`).
#[derive(Debug, Default)]
pub struct GenerationTracker {
    status: HashMap<String, GenerationStatus>,
    details: HashMap<String, GheDetails>,
}

impl GenerationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status atual; ausência equivale a `Idle`.
    pub fn status(&self, id: &str) -> GenerationStatus {
        self.status.get(id).copied().unwrap_or_default()
    }

    pub fn set_status(&mut self, id: &str, status: GenerationStatus) {
        self.status.insert(id.to_string(), status);
    }

    /// Guarda contra envio duplicado: marca `Loading` e falha se o item
    /// já estiver em geração.
    pub fn begin(&mut self, id: &str, ghe: &str) -> Result<()> {
        if self.status(id) == GenerationStatus::Loading {
            return Err(PgrError::GenerationInProgress(ghe.to_string()));
        }
        self.set_status(id, GenerationStatus::Loading);
        Ok(())
    }

    /// Registra um sucesso: cacheia os detalhes e marca `Success`.
    pub fn complete(&mut self, id: &str, details: GheDetails) {
        self.details.insert(id.to_string(), details);
        self.set_status(id, GenerationStatus::Success);
    }

    pub fn fail(&mut self, id: &str) {
        self.set_status(id, GenerationStatus::Error);
    }

    pub fn details(&self, id: &str) -> Option<&GheDetails> {
        self.details.get(id)
    }

    /// Detalhes de um item `Success`, com verificação de consistência:
    /// status `Success` sem detalhes em cache vira `Error` e pede nova
    /// geração, nunca é ignorado.
    pub fn cached_details(&mut self, id: &str, ghe: &str) -> Result<&GheDetails> {
        if self.status(id) != GenerationStatus::Success {
            return Err(PgrError::DetailsMissing(ghe.to_string()));
        }
        if !self.details.contains_key(id) {
            self.set_status(id, GenerationStatus::Error);
            return Err(PgrError::DetailsMissing(ghe.to_string()));
        }
        Ok(&self.details[id])
    }

    /// Semeia um par (status `Success`, detalhes) vindo de uma sessão salva.
    pub fn seed(&mut self, id: &str, details: GheDetails) {
        self.complete(id, details);
    }

    pub fn iter_details(&self) -> impl Iterator<Item = (&String, &GheDetails)> {
        self.details.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::prompts::riscos_padrao;

    fn details(ghe: &str) -> GheDetails {
        GheDetails {
            ghe: ghe.to_string(),
            cargos: "Operador".into(),
            setor: "Produção".into(),
            num_colaboradores: "5".into(),
            jornada_trabalho: "8 horas".into(),
            descricao_local: String::new(),
            descricao_atividade: String::new(),
            riscos: riscos_padrao(),
        }
    }

    #[test]
    fn test_status_padrao_idle() {
        let tracker = GenerationTracker::new();
        assert_eq!(tracker.status("01-0"), GenerationStatus::Idle);
    }

    #[test]
    fn test_begin_recusa_loading_duplicado() {
        let mut tracker = GenerationTracker::new();
        tracker.begin("01-0", "01").unwrap();
        assert!(tracker.begin("01-0", "01").is_err());
        // após erro ou sucesso, begin volta a ser permitido
        tracker.fail("01-0");
        assert!(tracker.begin("01-0", "01").is_ok());
    }

    #[test]
    fn test_complete_guarda_detalhes() {
        let mut tracker = GenerationTracker::new();
        tracker.complete("01-0", details("01"));
        assert_eq!(tracker.status("01-0"), GenerationStatus::Success);
        assert_eq!(tracker.cached_details("01-0", "01").unwrap().ghe, "01");
    }

    #[test]
    fn test_success_sem_cache_vira_erro() {
        let mut tracker = GenerationTracker::new();
        tracker.set_status("01-0", GenerationStatus::Success);

        let result = tracker.cached_details("01-0", "01");
        assert!(matches!(result, Err(PgrError::DetailsMissing(_))));
        assert_eq!(tracker.status("01-0"), GenerationStatus::Error);
    }

    #[test]
    fn test_cached_details_exige_success() {
        let mut tracker = GenerationTracker::new();
        tracker.fail("01-0");
        assert!(tracker.cached_details("01-0", "01").is_err());
    }
}
