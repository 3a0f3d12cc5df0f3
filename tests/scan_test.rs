//! Testes de integração da varredura de fotos
//!
//! Monta uma árvore de pastas com a convenção de nomenclatura e verifica o
//! agrupamento por GHE, a legenda e a orientação

use image::RgbImage;
use pgr_tools::classifier::GRUPO_SEM_GHE;
use pgr_tools::scanner::orientation::Orientation;
use pgr_tools::scanner::{collect_images, scan_photo_folder};
use std::path::Path;
use tempfile::tempdir;

fn criar_imagem(path: &Path, width: u32, height: u32) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    RgbImage::new(width, height).save(path).unwrap();
}

#[test]
fn test_agrupamento_por_ghe() {
    let dir = tempdir().expect("Falha ao criar pasta temporária");
    let raiz = dir.path().join("Fotos PGR");

    criar_imagem(
        &raiz.join("1. Ruído/GHE - 01.01/João Silva - Operador/foto1.png"),
        80,
        60,
    );
    criar_imagem(
        &raiz.join("1. Ruído/GHE - 01.01/João Silva - Operador/foto2.png"),
        60,
        80,
    );
    criar_imagem(&raiz.join("2. Calor/GHE - 02/foto3.png"), 50, 50);
    criar_imagem(&raiz.join("avulsas/foto4.png"), 80, 60);

    let groups = scan_photo_folder(&raiz).unwrap();

    assert_eq!(groups.len(), 3);
    assert_eq!(groups.total_photos(), 4);

    let chaves: Vec<_> = groups.keys().cloned().collect();
    assert_eq!(chaves, vec!["01.01", "02", GRUPO_SEM_GHE]);

    let ghe_01 = groups.get("01.01").unwrap();
    assert_eq!(ghe_01.len(), 2);
    assert_eq!(ghe_01[0].file_name, "foto1.png");
    assert_eq!(ghe_01[0].orientation, Orientation::Landscape);
    assert_eq!(ghe_01[0].description, "GHE: 01.01, Ruído, João Silva");
    assert!(ghe_01[0].data_url.starts_with("data:image/png;base64,"));
    assert_eq!(ghe_01[1].orientation, Orientation::Portrait);

    let ghe_02 = groups.get("02").unwrap();
    assert_eq!(ghe_02[0].orientation, Orientation::Square);
    // o segmento após o GHE é o próprio arquivo, então não há paradigma
    assert_eq!(ghe_02[0].description, "GHE: 02, Calor, ?");
}

/// O caminho relativo começa pelo nome da pasta selecionada
#[test]
fn test_caminho_relativo_inclui_a_raiz() {
    let dir = tempdir().expect("Falha ao criar pasta temporária");
    let raiz = dir.path().join("GHE - 07");

    criar_imagem(&raiz.join("sub/foto.png"), 10, 10);

    let images = collect_images(&raiz).unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].relative_path, "GHE - 07/sub/foto.png");

    // o nome da pasta raiz participa da classificação
    let groups = scan_photo_folder(&raiz).unwrap();
    assert!(groups.get("07").is_some());
}

/// Arquivos ilegíveis são pulados sem derrubar a varredura
#[test]
fn test_imagem_corrompida_e_pulada() {
    let dir = tempdir().expect("Falha ao criar pasta temporária");
    let raiz = dir.path().join("fotos");

    criar_imagem(&raiz.join("GHE - 01/boa.png"), 20, 10);
    std::fs::write(raiz.join("GHE - 01/ruim.jpg"), b"nao e imagem").unwrap();

    let groups = scan_photo_folder(&raiz).unwrap();
    assert_eq!(groups.total_photos(), 1);
    assert_eq!(groups.get("01").unwrap()[0].file_name, "boa.png");
}
