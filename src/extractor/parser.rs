//! Parse e limpeza das respostas da API
//!
//! A resposta pode vir como JSON puro, cercada por um bloco ```json ... ```
//! ou com texto ao redor. Após o parse, os campos de texto passam por uma
//! limpeza de traços e a lista de riscos é normalizada para o vocabulário
//! fixo de 7 linhas.

use crate::error::{PgrError, Result};
use crate::extractor::prompts::riscos_padrao;
use crate::extractor::types::{GheDetails, GheSummary};
use lazy_static::lazy_static;
use regex::Regex;

/// Extrai o trecho JSON de uma resposta.
///
/// Ordem de busca:
/// 1. bloco ```json ... ```
/// 2. o primeiro `[` ... `]` ou `{` ... `}` do texto
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(inicio_marcador) = response.find("```json") {
        let inicio = inicio_marcador + 7;
        if let Some(fim_relativo) = response[inicio..].find("```") {
            let fim = inicio + fim_relativo;
            return Ok(response[inicio..fim].trim());
        }
    }

    let colchete = response.find('[');
    let chave = response.find('{');

    let (abre, fecha) = match (colchete, chave) {
        (Some(a), Some(b)) if a < b => ('[', ']'),
        (Some(_), None) => ('[', ']'),
        (_, Some(_)) => ('{', '}'),
        (None, None) => {
            return Err(PgrError::ApiParse("nenhum JSON encontrado na resposta".into()))
        }
    };

    let inicio = response.find(abre).unwrap();
    match response.rfind(fecha) {
        Some(fim) if fim >= inicio => Ok(&response[inicio..=fim]),
        _ => Err(PgrError::ApiParse("nenhum JSON encontrado na resposta".into())),
    }
}

/// Colapsa hífens e travessões (com espaços ao redor) em um único espaço.
fn clean_dashes(texto: &str) -> String {
    lazy_static! {
        static ref RE_TRACOS: Regex = Regex::new(r"\s*[-–]\s*").unwrap();
    }
    RE_TRACOS.replace_all(texto, " ").trim().to_string()
}

/// Parse da resposta de resumos; atribui `id = "{ghe}-{índice}"` na ordem
/// da resposta, para que códigos duplicados não colidam no rastreador.
pub fn parse_summaries(response: &str) -> Result<Vec<GheSummary>> {
    let json_str = extract_json(response)?;
    let mut summaries: Vec<GheSummary> = serde_json::from_str(json_str)
        .map_err(|e| PgrError::ApiParse(format!("lista de GHEs: {}", e)))?;

    for (indice, summary) in summaries.iter_mut().enumerate() {
        summary.id = format!("{}-{}", summary.ghe, indice);
    }

    Ok(summaries)
}

/// Parse da resposta de detalhes, com a limpeza pós-parse do serviço:
/// prefixo `GHE -` removido do código, traços colapsados nos campos de
/// texto e lista de riscos normalizada para exatamente 7 linhas.
pub fn parse_details(response: &str) -> Result<GheDetails> {
    lazy_static! {
        static ref RE_PREFIXO_GHE: Regex = Regex::new(r"(?i)GHE\s*-?\s*").unwrap();
    }

    let json_str = extract_json(response)?;
    let mut details: GheDetails = serde_json::from_str(json_str)
        .map_err(|e| PgrError::ApiParse(format!("detalhes do GHE: {}", e)))?;

    let sem_prefixo = RE_PREFIXO_GHE.replace(&details.ghe, "").trim().to_string();
    details.ghe = clean_dashes(&sem_prefixo);

    details.cargos = clean_dashes(&details.cargos);
    details.setor = clean_dashes(&details.setor);
    details.num_colaboradores = clean_dashes(&details.num_colaboradores);
    details.jornada_trabalho = clean_dashes(&details.jornada_trabalho);
    details.descricao_local = clean_dashes(&details.descricao_local);
    details.descricao_atividade = clean_dashes(&details.descricao_atividade);

    for risco in &mut details.riscos {
        if risco.fator_risco.trim().is_empty() {
            risco.fator_risco = String::new();
        }
    }

    details.riscos = normalize_riscos(details.riscos);

    Ok(details)
}

/// Garante exatamente as 7 linhas do vocabulário fixo: excedentes são
/// descartados e ausentes preenchidas com a linha canônica da posição.
fn normalize_riscos(
    mut riscos: Vec<crate::extractor::types::Risco>,
) -> Vec<crate::extractor::types::Risco> {
    let padrao = riscos_padrao();
    riscos.truncate(padrao.len());
    for faltante in padrao.iter().skip(riscos.len()) {
        riscos.push(faltante.clone());
    }
    riscos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::prompts::NAO_AMOSTRADO;

    // =============================================
    // extract_json
    // =============================================

    #[test]
    fn test_extract_json_bloco_cercado() {
        let response = "Segue a lista:\n```json\n[{\"ghe\": \"01\"}]\n```\nfim";
        assert_eq!(extract_json(response).unwrap(), r#"[{"ghe": "01"}]"#);
    }

    #[test]
    fn test_extract_json_array_puro() {
        let response = r#"[{"ghe": "01"}]"#;
        assert_eq!(extract_json(response).unwrap(), response);
    }

    #[test]
    fn test_extract_json_objeto_com_texto_ao_redor() {
        let response = r#"Resultado: {"ghe": "01.01"} obrigado"#;
        assert_eq!(extract_json(response).unwrap(), r#"{"ghe": "01.01"}"#);
    }

    #[test]
    fn test_extract_json_sem_json() {
        assert!(extract_json("sem nada aqui").is_err());
        assert!(extract_json("").is_err());
    }

    // =============================================
    // parse_summaries
    // =============================================

    #[test]
    fn test_parse_summaries_atribui_ids() {
        let response = r#"[
            {"ghe": "01.01", "cargos": ["Operador"], "setor": "Produção", "funcionarios": 5},
            {"ghe": "01.01", "cargos": ["Montador"], "setor": "Montagem", "funcionarios": 3},
            {"ghe": "02.01", "cargos": [], "setor": "ADM", "funcionarios": 1}
        ]"#;
        let summaries = parse_summaries(response).unwrap();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].id, "01.01-0");
        assert_eq!(summaries[1].id, "01.01-1"); // código duplicado não colide
        assert_eq!(summaries[2].id, "02.01-2");
    }

    #[test]
    fn test_parse_summaries_resposta_invalida() {
        assert!(parse_summaries("não é json").is_err());
        assert!(parse_summaries(r#"[{"cargos": 42}]"#).is_err());
    }

    // =============================================
    // parse_details e limpeza
    // =============================================

    fn resposta_details(ghe: &str) -> String {
        format!(
            r#"{{
                "ghe": "{}",
                "cargos": "Operador – Montador",
                "setor": "Produção",
                "numColaboradores": "12",
                "jornadaTrabalho": "8 horas",
                "descricaoLocal": "Galpão industrial",
                "descricaoAtividade": "Operação de prensas",
                "riscos": [
                    {{"fatorRisco": "Ruído", "tipoRisco": "Físico", "categoria": "N.A.", "nAmostrado": "N.A."}},
                    {{"fatorRisco": "  ", "tipoRisco": "Físico", "categoria": "N.A.", "nAmostrado": "N.A."}}
                ]
            }}"#,
            ghe
        )
    }

    #[test]
    fn test_parse_details_remove_prefixo_ghe() {
        let details = parse_details(&resposta_details("GHE - 01.01")).unwrap();
        assert_eq!(details.ghe, "01.01");
    }

    #[test]
    fn test_parse_details_colapsa_tracos() {
        let details = parse_details(&resposta_details("01.01")).unwrap();
        assert_eq!(details.cargos, "Operador Montador");
    }

    #[test]
    fn test_parse_details_completa_riscos_ate_sete() {
        let details = parse_details(&resposta_details("01.01")).unwrap();
        assert_eq!(details.riscos.len(), 7);
        // a segunda linha veio em branco e foi zerada
        assert_eq!(details.riscos[1].fator_risco, "");
        // as ausentes foram preenchidas com o vocabulário canônico
        assert_eq!(details.riscos[2].fator_risco, "Calor");
        assert_eq!(details.riscos[6].fator_risco, "Vírus, bactérias e protozoários");
        assert_eq!(details.riscos[6].categoria, NAO_AMOSTRADO);
    }

    #[test]
    fn test_parse_details_descarta_riscos_excedentes() {
        let response = r#"{
            "ghe": "01",
            "riscos": [
                {"fatorRisco": "Ruído", "tipoRisco": "Físico", "categoria": "N.A.", "nAmostrado": "N.A."},
                {"fatorRisco": "Vibração", "tipoRisco": "Físico", "categoria": "N.A.", "nAmostrado": "N.A."},
                {"fatorRisco": "Calor", "tipoRisco": "Físico", "categoria": "N.A.", "nAmostrado": "N.A."},
                {"fatorRisco": "Óleo Mineral", "tipoRisco": "Químico", "categoria": "N.A.", "nAmostrado": "N.A."},
                {"fatorRisco": "Poeira Total", "tipoRisco": "Químico", "categoria": "N.A.", "nAmostrado": "N.A."},
                {"fatorRisco": "Poeira Respirável", "tipoRisco": "Químico", "categoria": "N.A.", "nAmostrado": "N.A."},
                {"fatorRisco": "Vírus, bactérias e protozoários", "tipoRisco": "Biológicos", "categoria": "N.A.", "nAmostrado": "N.A."},
                {"fatorRisco": "Radiação", "tipoRisco": "Físico", "categoria": "N.A.", "nAmostrado": "N.A."}
            ]
        }"#;
        let details = parse_details(response).unwrap();
        assert_eq!(details.riscos.len(), 7);
        assert!(details.riscos.iter().all(|r| r.fator_risco != "Radiação"));
    }

    #[test]
    fn test_parse_details_em_bloco_cercado() {
        let response = format!("```json\n{}\n```", resposta_details("01.01"));
        let details = parse_details(&response).unwrap();
        assert_eq!(details.ghe, "01.01");
    }
}
