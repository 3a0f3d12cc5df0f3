//! Orientação de imagens
//!
//! Classifica cada foto como paisagem, retrato ou quadrada a partir das
//! dimensões em pixels, respeitando a tag EXIF Orientation (valores 5 a 8
//! giram a imagem em 90°, invertendo os eixos).

use crate::error::{PgrError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    /// Ordem de exportação: paisagem e quadrada vêm antes do retrato.
    pub fn rank(self) -> u8 {
        match self {
            Orientation::Landscape | Orientation::Square => 0,
            Orientation::Portrait => 1,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Landscape => write!(f, "paisagem"),
            Orientation::Portrait => write!(f, "retrato"),
            Orientation::Square => write!(f, "quadrada"),
        }
    }
}

/// Lê as dimensões do cabeçalho da imagem e classifica a orientação.
pub fn probe_orientation(path: &Path) -> Result<Orientation> {
    let (width, height) = image::image_dimensions(path)
        .map_err(|e| PgrError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let (width, height) = if exif_swaps_axes(path) {
        (height, width)
    } else {
        (width, height)
    };

    Ok(classify_dimensions(width, height))
}

pub fn classify_dimensions(width: u32, height: u32) -> Orientation {
    if height > width {
        Orientation::Portrait
    } else if width == height {
        Orientation::Square
    } else {
        Orientation::Landscape
    }
}

/// Tag EXIF Orientation com valor 5 a 8 indica rotação de 90°/270°.
/// Sem EXIF ou com tag ilegível, os eixos ficam como estão.
fn exif_swaps_axes(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };
    let mut reader = BufReader::new(file);
    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(e) => e,
        Err(_) => return false,
    };

    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(|valor| (5..=8).contains(&valor))
        .unwrap_or(false)
}
