//! Classificação de caminhos de fotos
//!
//! Deduz o GHE, o tipo de medição e o nome do paradigma a partir da
//! hierarquia de pastas, por convenção de nomenclatura:
//! `1. Ruído/GHE - 01.01/João Silva - Operador/foto1.jpg`
//!
//! Heurística de melhor esforço, não uma gramática verificada.

use lazy_static::lazy_static;
use regex::Regex;

/// Chave de grupo para fotos sem segmento "GHE" no caminho.
pub const GRUPO_SEM_GHE: &str = "Sem GHE";

/// Conectivos que ficam em minúsculas no meio de nomes próprios.
const CONECTIVOS: &[&str] = &["de", "da", "do", "dos", "das", "e"];

/// Resultado da classificação de um caminho.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPathInfo {
    /// Chave de agrupamento (código do GHE ou [`GRUPO_SEM_GHE`]).
    pub group_key: String,
    /// Código do GHE, ou `?` quando ausente.
    pub ghe: String,
    /// Tipo de medição (pasta anterior ao GHE), ou `?`.
    pub tipo_medicao: String,
    /// Nome do paradigma (pasta seguinte ao GHE), ou `?`.
    pub nome_paradigma: String,
    /// Legenda da foto: `GHE: {ghe}, {tipo}, {nome}`.
    pub description: String,
}

/// Classifica um caminho delimitado por `/` (pastas + nome do arquivo).
///
/// Apenas o primeiro segmento contendo "GHE" (sem distinção de caixa) é
/// considerado; um caminho sem barras é tratado como um único segmento.
pub fn classify_path(path: &str) -> PhotoPathInfo {
    lazy_static! {
        static ref RE_GHE: Regex = Regex::new(r"(?i)GHE").unwrap();
        static ref RE_PREFIXO_GHE: Regex = Regex::new(r"(?i)GHE\s*-?\s*").unwrap();
        static ref RE_ORDINAL: Regex = Regex::new(r"^\d+\.\s*").unwrap();
        static ref RE_TRACO: Regex = Regex::new(r"\s*-\s*").unwrap();
    }

    let mut ghe = String::from("?");
    let mut tipo_medicao = String::from("?");
    let mut nome_paradigma = String::from("?");

    let partes: Vec<&str> = path.split('/').collect();
    let indice_ghe = partes.iter().position(|p| RE_GHE.is_match(p));

    if let Some(i) = indice_ghe {
        let codigo = RE_PREFIXO_GHE.replace(partes[i], "").trim().to_string();
        if !codigo.is_empty() {
            ghe = codigo;
        }

        if i > 0 {
            let tipo = RE_ORDINAL.replace(partes[i - 1], "").trim().to_string();
            if !tipo.is_empty() {
                tipo_medicao = tipo;
            }
        }

        // O segmento seguinte só vale quando não é o último (nome do arquivo).
        if i + 2 < partes.len() {
            if let Some(campo) = RE_TRACO.split(partes[i + 1]).next() {
                let nome = campo.trim();
                if !nome.is_empty() {
                    nome_paradigma = title_case_name(nome);
                }
            }
        }
    }

    let description = format!("GHE: {}, {}, {}", ghe, tipo_medicao, nome_paradigma);
    let group_key = if ghe == "?" {
        GRUPO_SEM_GHE.to_string()
    } else {
        ghe.clone()
    };

    PhotoPathInfo {
        group_key,
        ghe,
        tipo_medicao,
        nome_paradigma,
        description,
    }
}

/// Capitaliza cada palavra de um nome, mantendo conectivos em minúsculas
/// quando não estão na primeira posição.
pub fn title_case_name(nome: &str) -> String {
    if nome.is_empty() || nome == "?" {
        return nome.to_string();
    }

    nome.to_lowercase()
        .split(' ')
        .enumerate()
        .map(|(i, palavra)| {
            if i > 0 && CONECTIVOS.contains(&palavra) {
                palavra.to_string()
            } else {
                let mut chars = palavra.chars();
                match chars.next() {
                    Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
