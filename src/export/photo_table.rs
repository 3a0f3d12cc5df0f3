//! Tabelas de fotos em HTML compatível com o Word
//!
//! Cada GHE vira uma tabela de três colunas com legenda em negrito na
//! primeira linha. Fotos em paisagem e quadradas vêm antes das de retrato,
//! preservando a ordem relativa dentro de cada nível.

use crate::gallery::PhotoGroups;
use crate::scanner::PhotoRecord;

const COLUNAS: usize = 3;
const LARGURA_IMAGEM_PT: u32 = 150;

const DOCUMENT_STYLE: &str = r#"body { font-family: Calibri, sans-serif; font-size: 10pt; }
table { border-collapse: collapse; width: 100%; }
td { border: solid windowtext 1.0pt; padding: 3pt; text-align: center; vertical-align: middle; width: 33%; }
p { margin: 0; }"#;

/// Fotos na ordem de exportação: paisagem/quadrada antes de retrato,
/// ordem original preservada dentro de cada nível.
fn fotos_ordenadas(photos: &[PhotoRecord]) -> Vec<&PhotoRecord> {
    let mut ordenadas: Vec<&PhotoRecord> = photos.iter().collect();
    ordenadas.sort_by_key(|p| p.orientation.rank());
    ordenadas
}

/// Tabela de um grupo: linha de legenda + grade de 3 colunas. Linhas
/// incompletas são completadas com células vazias.
pub fn format_photo_table(group_key: &str, photos: &[PhotoRecord]) -> String {
    let ordenadas = fotos_ordenadas(photos);

    let mut html = String::new();
    html.push_str("<table>\n");
    html.push_str(&format!(
        "<tr><td colspan=\"{}\" style=\"background:#D9D9D9;\"><p><b>{}</b></p></td></tr>\n",
        COLUNAS, group_key
    ));

    for linha in ordenadas.chunks(COLUNAS) {
        html.push_str("<tr>\n");
        for foto in linha {
            html.push_str(&format!(
                "<td><p><img src=\"{}\" style=\"width:{}pt;\" alt=\"{}\"></p><p>{}</p></td>\n",
                foto.data_url, LARGURA_IMAGEM_PT, foto.file_name, foto.description
            ));
        }
        for _ in linha.len()..COLUNAS {
            html.push_str("<td><p>&nbsp;</p></td>\n");
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n");
    html
}

fn envelope(corpo: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<style>\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        DOCUMENT_STYLE, corpo
    )
}

/// Documento com todos os grupos, em ordem lexicográfica de chave, com um
/// parágrafo espaçador depois de cada tabela. Grupos vazios são pulados.
pub fn format_photos_document(groups: &PhotoGroups) -> String {
    let mut corpo = String::new();

    for (chave, fotos) in groups.iter() {
        if fotos.is_empty() {
            continue;
        }
        corpo.push_str(&format_photo_table(chave, fotos));
        corpo.push_str("<p style=\"margin-bottom:12pt;\">&nbsp;</p>\n");
    }

    envelope(&corpo)
}

/// Documento com a tabela de um único grupo.
pub fn format_single_group_document(group_key: &str, photos: &[PhotoRecord]) -> String {
    let mut corpo = format_photo_table(group_key, photos);
    corpo.push_str("<p style=\"margin-bottom:12pt;\">&nbsp;</p>\n");
    envelope(&corpo)
}
