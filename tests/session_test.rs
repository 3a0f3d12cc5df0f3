//! Testes do arquivo de sessão
//!
//! Gravação, releitura e retomada da geração a partir de uma sessão salva

use pgr_tools::error::PgrError;
use pgr_tools::extractor::prompts::riscos_padrao;
use pgr_tools::extractor::{GheDetails, GheSummary};
use pgr_tools::generator::{GenerationSession, GenerationStatus, GenerationTracker};
use std::path::Path;
use tempfile::tempdir;

fn summary(ghe: &str, indice: usize) -> GheSummary {
    GheSummary {
        id: format!("{}-{}", ghe, indice),
        ghe: ghe.to_string(),
        cargos: vec!["Soldador".into()],
        setor: "Caldeiraria".into(),
        funcionarios: 2,
    }
}

fn details(ghe: &str) -> GheDetails {
    GheDetails {
        ghe: ghe.to_string(),
        cargos: "Soldador".into(),
        setor: "Caldeiraria".into(),
        num_colaboradores: "2".into(),
        jornada_trabalho: "8 horas".into(),
        descricao_local: "Oficina".into(),
        descricao_atividade: "Solda".into(),
        riscos: riscos_padrao(),
    }
}

/// Gravar e reler preserva resumos e formulários
#[test]
fn test_salvar_e_recarregar() {
    let dir = tempdir().expect("Falha ao criar pasta temporária");
    let path = dir.path().join("doc.pdf.session.json");

    let mut session = GenerationSession::new(
        Path::new("doc.pdf"),
        b"conteudo do pdf",
        vec![summary("01", 0), summary("02", 1)],
    );
    session.details.insert("01-0".into(), details("01"));
    session.save(&path).unwrap();

    let relida = GenerationSession::load(&path).unwrap();
    assert_eq!(relida.fingerprint, session.fingerprint);
    assert_eq!(relida.summaries.len(), 2);
    assert_eq!(relida.summaries[0].ghe, "01");
    assert_eq!(relida.details.len(), 1);
    assert_eq!(relida.details["01-0"].setor, "Caldeiraria");
}

/// Sessão inexistente
#[test]
fn test_carregar_sessao_inexistente() {
    let result = GenerationSession::load(Path::new("/nao/existe/sessao.json"));
    assert!(matches!(result, Err(PgrError::FileNotFound(_))));
}

/// Versão de formato desconhecida é rejeitada
#[test]
fn test_versao_desconhecida_rejeitada() {
    let dir = tempdir().expect("Falha ao criar pasta temporária");
    let path = dir.path().join("sessao.json");

    std::fs::write(
        &path,
        r#"{"version":99,"fingerprint":"x","created_at":"2026-01-01T00:00:00Z","pdf_path":"doc.pdf","summaries":[],"details":{}}"#,
    )
    .unwrap();

    let result = GenerationSession::load(&path);
    assert!(matches!(result, Err(PgrError::SessionMismatch(_))));
}

/// PDF diferente do original é rejeitado na retomada
#[test]
fn test_pdf_trocado_rejeitado() {
    let session = GenerationSession::new(Path::new("doc.pdf"), b"original", vec![]);

    assert!(session.verify_pdf(b"original").is_ok());
    assert!(matches!(
        session.verify_pdf(b"outro documento"),
        Err(PgrError::SessionMismatch(_))
    ));
}

/// A retomada semeia o rastreador com os formulários já gerados
#[test]
fn test_retomada_semeia_o_rastreador() {
    let mut session = GenerationSession::new(
        Path::new("doc.pdf"),
        b"pdf",
        vec![summary("01", 0), summary("02", 1)],
    );
    session.details.insert("01-0".into(), details("01"));

    let mut tracker = GenerationTracker::new();
    session.seed_tracker(&mut tracker);

    assert_eq!(tracker.status("01-0"), GenerationStatus::Success);
    assert_eq!(tracker.status("02-1"), GenerationStatus::Idle);
    assert_eq!(tracker.cached_details("01-0", "01").unwrap().ghe, "01");
}

/// O rastreador devolve à sessão o que gerou
#[test]
fn test_absorver_o_rastreador() {
    let mut session =
        GenerationSession::new(Path::new("doc.pdf"), b"pdf", vec![summary("01", 0)]);

    let mut tracker = GenerationTracker::new();
    tracker.complete("01-0", details("01"));
    session.absorb_tracker(&tracker);

    assert_eq!(session.details.len(), 1);
    assert_eq!(session.details_in_order().len(), 1);
}
