use crate::error::{PgrError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PgrError::Config("diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("pgr-tools").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".into(),
            temperature: 0.1,
            timeout_seconds: 120,
        }
    }

    pub fn get_api_key(&self) -> Result<String> {
        // variável de ambiente tem prioridade
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            return Ok(key);
        }

        self.api_key.clone().ok_or(PgrError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}
