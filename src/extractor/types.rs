//! Tipos de domínio e tipos de transporte da API Gemini

use serde::{Deserialize, Serialize};

/// Resumo de um GHE extraído da tabela geral do documento.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GheSummary {
    /// Identidade estável: `"{ghe}-{índice}"` na ordem da resposta.
    #[serde(default)]
    pub id: String,

    pub ghe: String,

    #[serde(default)]
    pub cargos: Vec<String>,

    #[serde(default)]
    pub setor: String,

    #[serde(default)]
    pub funcionarios: u32,
}

/// Uma linha da tabela de identificação de riscos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risco {
    #[serde(default)]
    pub fator_risco: String,

    #[serde(default)]
    pub tipo_risco: String,

    #[serde(default)]
    pub categoria: String,

    #[serde(default)]
    pub n_amostrado: String,
}

/// Formulário detalhado de análise de risco de um GHE.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GheDetails {
    pub ghe: String,

    #[serde(default)]
    pub cargos: String,

    #[serde(default)]
    pub setor: String,

    #[serde(default)]
    pub num_colaboradores: String,

    #[serde(default)]
    pub jornada_trabalho: String,

    #[serde(default)]
    pub descricao_local: String,

    #[serde(default)]
    pub descricao_atividade: String,

    #[serde(default)]
    pub riscos: Vec<Risco>,
}

// --- Transporte Gemini (generateContent) ---

#[derive(Serialize)]
pub(crate) struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Serialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub(crate) enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
pub(crate) struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Serialize)]
pub(crate) struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: serde_json::Value,
}

#[derive(Deserialize)]
pub(crate) struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
pub(crate) struct Candidate {
    pub content: ResponseContent,
}

#[derive(Deserialize)]
pub(crate) struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
pub(crate) struct ResponsePart {
    #[serde(default)]
    pub text: String,
}
