//! Cliente da API Gemini (generateContent)
//!
//! O PDF é enviado inteiro como `inline_data` em base64, junto com o
//! prompt; a resposta é forçada a JSON pelo `responseSchema`.

use crate::config::Config;
use crate::error::{PgrError, Result};
use crate::extractor::parser::{parse_details, parse_summaries};
use crate::extractor::prompts::{
    build_details_prompt, build_summaries_prompt, details_schema, summaries_schema,
};
use crate::extractor::types::{
    Content, GeminiRequest, GeminiResponse, GenerationConfig, GheDetails, GheSummary, InlineData,
    Part,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
}

impl GeminiClient {
    /// Cria o cliente a partir da configuração; falha imediatamente se a
    /// chave de API não estiver disponível.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    /// Extrai a lista de resumos de GHEs do documento.
    pub async fn extract_ghe_summaries(&self, pdf: &[u8]) -> Result<Vec<GheSummary>> {
        let text = self
            .generate(pdf, build_summaries_prompt(), summaries_schema())
            .await?;
        parse_summaries(&text)
    }

    /// Extrai o formulário detalhado de um GHE do documento.
    pub async fn extract_ghe_details(&self, pdf: &[u8], ghe_code: &str) -> Result<GheDetails> {
        let text = self
            .generate(pdf, build_details_prompt(ghe_code), details_schema())
            .await?;
        parse_details(&text)
    }

    async fn generate(
        &self,
        pdf: &[u8],
        prompt: String,
        schema: serde_json::Value,
    ) -> Result<String> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "application/pdf".to_string(),
                            data: STANDARD.encode(pdf),
                        },
                    },
                    Part::Text { text: prompt },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        );

        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PgrError::ApiCall(format!("status {}: {}", status, body)));
        }

        let payload: GeminiResponse = response.json().await?;

        payload
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| PgrError::ApiParse("resposta vazia do serviço".into()))
    }
}
