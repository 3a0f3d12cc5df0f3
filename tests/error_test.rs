//! Testes de casos de erro
//!
//! Verifica o tratamento de erro nas várias condições de falha

use pgr_tools::error::PgrError;
use pgr_tools::scanner;
use std::path::Path;
use tempfile::tempdir;

/// Varredura de pasta inexistente
#[test]
fn test_scan_pasta_inexistente() {
    let result = scanner::scan_photo_folder(Path::new("/inexistente/caminho/12345"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, PgrError::FolderNotFound(_)));
}

/// Varredura de pasta vazia
#[test]
fn test_scan_pasta_vazia() {
    let dir = tempdir().expect("Falha ao criar pasta temporária");
    let result = scanner::scan_photo_folder(dir.path());

    // pasta sem nenhuma imagem é erro, não lista vazia
    assert!(matches!(result, Err(PgrError::NoImagesFound(_))));
}

/// Varredura de pasta sem imagens
#[test]
fn test_scan_pasta_sem_imagens() {
    let dir = tempdir().expect("Falha ao criar pasta temporária");

    std::fs::write(dir.path().join("teste.txt"), "olá").unwrap();
    std::fs::write(dir.path().join("dados.json"), "{}").unwrap();

    let result = scanner::scan_photo_folder(dir.path());
    assert!(matches!(result, Err(PgrError::NoImagesFound(_))));
}

/// Arquivos que não são imagens ficam de fora da listagem
#[test]
fn test_collect_ignora_nao_imagens() {
    let dir = tempdir().expect("Falha ao criar pasta temporária");

    std::fs::write(dir.path().join("documento.pdf"), "%PDF").unwrap();
    std::fs::write(dir.path().join("foto.jpg"), "nao-e-imagem-de-verdade").unwrap();

    let images = scanner::collect_images(dir.path()).unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].file_name, "foto.jpg");
}

/// Implementação de Display do PgrError
#[test]
fn test_error_display() {
    let errors = vec![
        PgrError::Config("erro de configuração de teste".to_string()),
        PgrError::FileNotFound("teste.pdf".to_string()),
        PgrError::FolderNotFound("/caminho/da/pasta".to_string()),
        PgrError::ImageLoad("imagem corrompida".to_string()),
        PgrError::ApiCall("falha na chamada".to_string()),
        PgrError::ApiParse("resposta inválida".to_string()),
        PgrError::NoImagesFound("pasta".to_string()),
        PgrError::DetailsMissing("01".to_string()),
        PgrError::GenerationInProgress("01".to_string()),
        PgrError::SessionMismatch("versão 2".to_string()),
        PgrError::InvalidMove("grupo inexistente".to_string()),
        PgrError::CliExecution("entrada abortada".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "Mensagem de erro vazia: {:?}", err);
    }
}

/// Mensagem do erro MissingApiKey
#[test]
fn test_missing_api_key_mensagem() {
    let err = PgrError::MissingApiKey;
    let display = format!("{}", err);

    assert!(display.contains("GEMINI_API_KEY"));
    assert!(display.contains("pgr-tools config"));
}

/// Implementação de Debug
#[test]
fn test_error_debug() {
    let err = PgrError::Config("teste".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("teste"));
}

/// Conversão a partir de erro de E/S
#[test]
fn test_conversao_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "arquivo não encontrado");
    let err: PgrError = io_err.into();

    assert!(matches!(err, PgrError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("E/S"));
}

/// Conversão a partir de erro de JSON
#[test]
fn test_conversao_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ inválido }").unwrap_err();
    let err: PgrError = json_err.into();

    assert!(matches!(err, PgrError::JsonParse(_)));
}
