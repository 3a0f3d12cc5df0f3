//! Exportação para arquivos
//!
//! Os formatadores são funções puras; este módulo escolhe nomes de arquivo
//! e grava o conteúdo. O `.doc` é HTML com estilos `mso-`, que o Word abre
//! diretamente.

pub mod photo_table;
pub mod txt;
pub mod word_html;

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Trechos do nome de arquivo derivados do código do GHE precisam ser
/// seguros no sistema de arquivos.
fn sanitize_file_stem(texto: &str) -> String {
    texto
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

pub fn ghe_form_file_name(ghe: &str) -> String {
    format!("formulario_ghe_{}.doc", sanitize_file_stem(ghe))
}

pub fn all_forms_file_name() -> &'static str {
    "formularios_ghe.doc"
}

pub fn ghe_list_file_name() -> &'static str {
    "lista_ghes.txt"
}

pub fn photos_file_name() -> &'static str {
    "tabela_fotos.doc"
}

pub fn photo_group_file_name(group_key: &str) -> String {
    format!("tabela_fotos_{}.doc", sanitize_file_stem(group_key))
}

/// Grava o documento na pasta de saída, criando a pasta se preciso.
/// Retorna o caminho completo do arquivo gravado.
pub fn write_document(output_dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    fs::write(&path, content)?;
    Ok(path)
}
