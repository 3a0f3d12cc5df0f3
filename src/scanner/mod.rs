//! Varredura da pasta de fotos
//!
//! Percorre a pasta recursivamente, filtra imagens por extensão e monta um
//! registro por foto: data URL autocontida, legenda deduzida do caminho e
//! orientação. O caminho relativo inclui o nome da própria pasta como
//! segmento raiz, como no seletor de pastas do navegador.

pub mod orientation;

use crate::classifier::classify_path;
use crate::error::{PgrError, Result};
use crate::gallery::PhotoGroups;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use orientation::{probe_orientation, Orientation};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Uma foto registrada em um grupo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    /// `data:<mime>;base64,...` com o conteúdo da imagem.
    pub data_url: String,
    /// Legenda deduzida do caminho.
    pub description: String,
    /// Nome do arquivo (identidade dentro do grupo).
    pub file_name: String,
    pub orientation: Orientation,
}

/// Uma imagem encontrada na varredura, ainda não carregada.
#[derive(Debug, Clone)]
pub struct FoundImage {
    pub path: PathBuf,
    /// Caminho relativo com a pasta selecionada como raiz.
    pub relative_path: String,
    pub file_name: String,
}

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e))
}

fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "image/jpeg",
    }
}

/// Lista as imagens da pasta, em ordem estável de caminho relativo.
pub fn collect_images(folder: &Path) -> Result<Vec<FoundImage>> {
    if !folder.exists() {
        return Err(PgrError::FolderNotFound(folder.display().to_string()));
    }

    let raiz = folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| folder.display().to_string());

    let mut images = Vec::new();

    for entry in WalkDir::new(folder).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = match path.extension() {
            Some(ext) => ext.to_string_lossy(),
            None => continue,
        };
        if !is_image_extension(&ext) {
            continue;
        }

        let relativo = path
            .strip_prefix(folder)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join("/");

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        images.push(FoundImage {
            path: path.to_path_buf(),
            relative_path: format!("{}/{}", raiz, relativo),
            file_name,
        });
    }

    images.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(images)
}

/// Carrega uma imagem encontrada: classifica o caminho, sonda a orientação
/// e monta a data URL. Retorna a chave de grupo junto com o registro.
pub fn load_photo(image: &FoundImage) -> Result<(String, PhotoRecord)> {
    let info = classify_path(&image.relative_path);
    let orientation = probe_orientation(&image.path)?;

    let bytes = std::fs::read(&image.path)?;
    let ext = image
        .path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    let data_url = format!(
        "data:{};base64,{}",
        mime_for_extension(&ext),
        STANDARD.encode(&bytes)
    );

    Ok((
        info.group_key,
        PhotoRecord {
            data_url,
            description: info.description,
            file_name: image.file_name.clone(),
            orientation,
        },
    ))
}

/// Varre a pasta inteira e agrupa as fotos por GHE. Imagens ilegíveis são
/// avisadas e puladas, sem interromper a varredura.
pub fn scan_photo_folder(folder: &Path) -> Result<PhotoGroups> {
    let images = collect_images(folder)?;

    if images.is_empty() {
        return Err(PgrError::NoImagesFound(folder.display().to_string()));
    }

    let mut groups = PhotoGroups::new();

    for image in &images {
        match load_photo(image) {
            Ok((group_key, record)) => groups.insert(&group_key, record),
            Err(err) => {
                eprintln!("⚠ Foto ignorada ({}): {}", image.relative_path, err);
            }
        }
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension("jpg"));
        assert!(is_image_extension("JPG"));
        assert!(is_image_extension("webp"));
        assert!(is_image_extension("bmp"));
        assert!(!is_image_extension("pdf"));
        assert!(!is_image_extension("txt"));
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("png"), "image/png");
        assert_eq!(mime_for_extension("JPEG"), "image/jpeg");
        assert_eq!(mime_for_extension("desconhecida"), "image/jpeg");
    }

    #[test]
    fn test_collect_images_pasta_inexistente() {
        let result = collect_images(Path::new("/nao/existe/aqui"));
        assert!(matches!(result, Err(PgrError::FolderNotFound(_))));
    }
}
