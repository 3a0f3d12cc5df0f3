//! Prompts e esquemas de resposta da extração
//!
//! - `RISCOS_PADRAO`: vocabulário fechado da tabela de riscos (7 linhas)
//! - `build_summaries_prompt` / `summaries_schema`: lista de GHEs
//! - `build_details_prompt` / `details_schema`: formulário de um GHE

use super::types::Risco;

/// Vocabulário fixo da tabela de identificação de riscos: (fator, tipo).
/// A tabela exportada tem sempre exatamente estas 7 linhas, nesta ordem.
pub const RISCOS_PADRAO: &[(&str, &str)] = &[
    ("Ruído", "Físico"),
    ("Vibração", "Físico"),
    ("Calor", "Físico"),
    ("Óleo Mineral", "Químico"),
    ("Poeira Total", "Químico"),
    ("Poeira Respirável", "Químico"),
    ("Vírus, bactérias e protozoários", "Biológicos"),
];

/// Valor padrão das colunas "Categoria" e "Nº Amostrado".
pub const NAO_AMOSTRADO: &str = "N.A.";

/// A lista de riscos padrão como registros prontos.
pub fn riscos_padrao() -> Vec<Risco> {
    RISCOS_PADRAO
        .iter()
        .map(|(fator, tipo)| Risco {
            fator_risco: (*fator).to_string(),
            tipo_risco: (*tipo).to_string(),
            categoria: NAO_AMOSTRADO.to_string(),
            n_amostrado: NAO_AMOSTRADO.to_string(),
        })
        .collect()
}

/// Prompt da extração da lista de GHEs.
pub fn build_summaries_prompt() -> String {
    "Analise o documento PGR (Programa de Gerenciamento de Riscos) fornecido.\n\
     Sua tarefa é extrair uma lista de todos os Grupos Homogêneos de Exposição (GHEs) mencionados.\n\
     Para cada GHE, extraia as seguintes informações: o código do GHE, o(s) cargo(s) associado(s), o setor e o número total de funcionários.\n\
     Preste atenção especial às tabelas de resumo e às páginas de detalhes de cada GHE.\n\
     Retorne os dados como um array de objetos JSON."
        .to_string()
}

/// Prompt da extração do formulário detalhado de um GHE.
pub fn build_details_prompt(ghe_code: &str) -> String {
    let linhas_riscos = RISCOS_PADRAO
        .iter()
        .map(|(fator, tipo)| {
            format!(
                "- {{ \"fatorRisco\": \"{}\", \"tipoRisco\": \"{}\", \"categoria\": \"{}\", \"nAmostrado\": \"{}\" }}",
                fator, tipo, NAO_AMOSTRADO, NAO_AMOSTRADO
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analise o documento PGR fornecido, focando especificamente na seção do GHE: \"{ghe_code}\".\n\
         Extraia as informações detalhadas de análise de risco para este GHE.\n\
         Preencha os seguintes campos: 'GHE', 'CARGOS', 'SETOR', 'Nº de colaboradores no GHE', 'Jornada de Trabalho', 'Descrição do local', 'Descrição da atividade'.\n\
         Para a tabela de identificação de riscos, você DEVE retornar a seguinte lista EXATA de riscos, sem adicionar, remover ou modificar nenhuma linha. Os campos 'categoria' e 'nAmostrado' devem ser sempre '{NAO_AMOSTRADO}':\n\
         {linhas_riscos}\n\
         Ignore quaisquer outros riscos mencionados no documento e use apenas esta lista predefinida para a propriedade 'riscos'.\n\
         Retorne os dados como um único objeto JSON."
    )
}

/// Esquema de resposta da lista de GHEs (responseSchema do Gemini).
pub fn summaries_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "ghe": { "type": "STRING", "description": "Código do GHE, ex: '01 01.01'" },
                "cargos": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Lista de cargos dentro do GHE" },
                "setor": { "type": "STRING", "description": "Setor associado ao GHE" },
                "funcionarios": { "type": "INTEGER", "description": "Número total de funcionários no GHE" }
            }
        }
    })
}

/// Esquema de resposta do formulário detalhado.
pub fn details_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "ghe": { "type": "STRING" },
            "cargos": { "type": "STRING" },
            "setor": { "type": "STRING" },
            "numColaboradores": { "type": "STRING" },
            "jornadaTrabalho": { "type": "STRING", "description": "Se não encontrar, retorne '8 horas'" },
            "descricaoLocal": { "type": "STRING" },
            "descricaoAtividade": { "type": "STRING" },
            "riscos": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "fatorRisco": { "type": "STRING" },
                        "tipoRisco": { "type": "STRING" },
                        "categoria": { "type": "STRING" },
                        "nAmostrado": { "type": "STRING" }
                    }
                }
            }
        }
    })
}
