use thiserror::Error;

#[derive(Error, Debug)]
pub enum PgrError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Chave de API não configurada. Use `pgr-tools config --set-api-key SUA_CHAVE` ou defina a variável GEMINI_API_KEY")]
    MissingApiKey,

    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Pasta não encontrada: {0}")]
    FolderNotFound(String),

    #[error("Erro ao ler imagem: {0}")]
    ImageLoad(String),

    #[error("Erro na chamada à API: {0}")]
    ApiCall(String),

    #[error("Falha ao interpretar a resposta da API: {0}")]
    ApiParse(String),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro de rede: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Nenhuma imagem encontrada em: {0}")]
    NoImagesFound(String),

    #[error("Detalhes para {0} não encontrados. Por favor, tente gerar novamente")]
    DetailsMissing(String),

    #[error("Geração de {0} já está em andamento")]
    GenerationInProgress(String),

    #[error("Sessão incompatível: {0}")]
    SessionMismatch(String),

    #[error("Operação inválida na galeria: {0}")]
    InvalidMove(String),

    #[error("Erro de interação: {0}")]
    CliExecution(String),
}

pub type Result<T> = std::result::Result<T, PgrError>;
