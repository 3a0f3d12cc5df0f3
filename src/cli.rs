use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pgr-tools")]
#[command(about = "Assistente de documentos PGR: formulários de GHE e tabelas de fotos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extrai a lista de GHEs de um PDF e cria a sessão
    Extract {
        /// Caminho do documento PGR (PDF)
        #[arg(required = true)]
        pdf: PathBuf,

        /// Arquivo de sessão (padrão: <pdf>.session.json)
        #[arg(short, long)]
        session: Option<PathBuf>,
    },

    /// Gera os formulários de análise de risco (um GHE ou todos)
    Generate {
        /// Arquivo de sessão criado por `extract`
        #[arg(required = true)]
        session: PathBuf,

        /// Gera apenas o GHE com este código (padrão: todos os pendentes)
        #[arg(short, long)]
        ghe: Option<String>,
    },

    /// Edita interativamente um formulário já gerado
    Review {
        /// Arquivo de sessão
        #[arg(required = true)]
        session: PathBuf,

        /// Código do GHE a editar
        #[arg(required = true)]
        ghe: String,
    },

    /// Exporta formulários (.doc) e a lista de GHEs (.txt)
    Export {
        /// Arquivo de sessão
        #[arg(required = true)]
        session: PathBuf,

        /// Formato de saída (doc/txt/both)
        #[arg(short, long, default_value = "doc")]
        format: ExportFormat,

        /// Exporta apenas o GHE com este código
        #[arg(short, long)]
        ghe: Option<String>,

        /// Pasta de saída (padrão: pasta atual)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Agrupa fotos por GHE e exporta tabelas para o Word
    Photos {
        /// Pasta de fotos (varrida recursivamente)
        #[arg(required = true)]
        folder: PathBuf,

        /// Exporta apenas o grupo com esta chave
        #[arg(long)]
        ghe: Option<String>,

        /// Edita os grupos antes de exportar (excluir/reordenar)
        #[arg(short, long)]
        interactive: bool,

        /// Pasta de saída (padrão: pasta atual)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extração, geração de todos os GHEs e exportação em sequência
    Run {
        /// Caminho do documento PGR (PDF)
        #[arg(required = true)]
        pdf: PathBuf,

        /// Arquivo de sessão (padrão: <pdf>.session.json)
        #[arg(short, long)]
        session: Option<PathBuf>,

        /// Pasta de saída (padrão: pasta atual)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Exibe ou altera a configuração
    Config {
        /// Grava a chave de API no arquivo de configuração
        #[arg(long)]
        set_api_key: Option<String>,

        /// Exibe a configuração atual
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Doc,
    Txt,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "doc" | "word" | "html" => Ok(ExportFormat::Doc),
            "txt" | "text" => Ok(ExportFormat::Txt),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Formato desconhecido: {}. Use doc, txt ou both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Doc => write!(f, "doc"),
            ExportFormat::Txt => write!(f, "txt"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
