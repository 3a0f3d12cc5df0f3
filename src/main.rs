use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pgr_tools::cli::{Cli, Commands, ExportFormat};
use pgr_tools::config::Config;
use pgr_tools::error::{PgrError, Result};
use pgr_tools::export;
use pgr_tools::extractor::GeminiClient;
use pgr_tools::gallery::run_interactive_gallery;
use pgr_tools::generator::{run_batch, BatchEvent, GenerationSession, GenerationTracker};
use pgr_tools::review::run_interactive_review;
use pgr_tools::scanner::scan_photo_folder;
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Extract { pdf, session } => {
            println!("📄 pgr-tools - extração de GHEs\n");

            // 1. Leitura do documento
            println!("[1/2] Lendo o documento...");
            let bytes = read_pdf(&pdf)?;
            println!("✔ {} ({} bytes)\n", pdf.display(), bytes.len());

            // 2. Extração da lista
            println!("[2/2] Extraindo a lista de GHEs...");
            let client = GeminiClient::new(&config)?;
            let summaries = client.extract_ghe_summaries(&bytes).await?;
            println!("✔ {} GHEs encontrados\n", summaries.len());

            for summary in &summaries {
                println!(
                    "  {} — {} ({} funcionários)",
                    summary.ghe, summary.setor, summary.funcionarios
                );
            }

            let session_path = session.unwrap_or_else(|| default_session_path(&pdf));
            let new_session = GenerationSession::new(&pdf, &bytes, summaries);
            new_session.save(&session_path)?;

            println!("\n✅ Sessão criada: {}", session_path.display());
        }

        Commands::Generate { session, ghe } => {
            println!("📝 pgr-tools - geração de formulários\n");

            let mut current = GenerationSession::load(&session)?;
            let bytes = read_pdf(Path::new(&current.pdf_path))?;
            current.verify_pdf(&bytes)?;

            let mut tracker = GenerationTracker::new();
            current.seed_tracker(&mut tracker);

            let client = GeminiClient::new(&config)?;

            match ghe {
                Some(codigo) => {
                    let summary = current
                        .find_by_ghe(&codigo)
                        .ok_or_else(|| {
                            PgrError::CliExecution(format!("GHE {} não está na sessão", codigo))
                        })?
                        .clone();

                    println!("Gerando o formulário do GHE {}...", summary.ghe);
                    tracker.begin(&summary.id, &summary.ghe)?;

                    match client.extract_ghe_details(&bytes, &summary.ghe).await {
                        Ok(details) => {
                            tracker.complete(&summary.id, details);
                            println!("✔ GHE {} gerado", summary.ghe);
                        }
                        Err(err) => {
                            tracker.fail(&summary.id);
                            return Err(err);
                        }
                    }
                }
                None => {
                    generate_all(&client, &bytes, &current, &mut tracker).await;
                }
            }

            current.absorb_tracker(&tracker);
            current.save(&session)?;
            println!("\n✅ Sessão atualizada: {}", session.display());
        }

        Commands::Review { session, ghe } => {
            println!("✏️  pgr-tools - revisão de formulário\n");

            let mut current = GenerationSession::load(&session)?;
            let id = current
                .find_by_ghe(&ghe)
                .map(|s| s.id.clone())
                .ok_or_else(|| {
                    PgrError::CliExecution(format!("GHE {} não está na sessão", ghe))
                })?;

            let details = current
                .details
                .get_mut(&id)
                .ok_or_else(|| PgrError::DetailsMissing(ghe.clone()))?;

            let alterados = run_interactive_review(details)?;
            current.save(&session)?;

            println!("\n✅ {} campo(s) alterado(s). Sessão salva.", alterados);
        }

        Commands::Export {
            session,
            format,
            ghe,
            output,
        } => {
            println!("📤 pgr-tools - exportação\n");

            let current = GenerationSession::load(&session)?;
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));

            if matches!(format, ExportFormat::Doc | ExportFormat::Both) {
                export_forms(&current, ghe.as_deref(), &output_dir)?;
            }

            if matches!(format, ExportFormat::Txt | ExportFormat::Both) {
                let texto = export::txt::format_ghe_list_txt(&current.summaries);
                let path =
                    export::write_document(&output_dir, export::ghe_list_file_name(), &texto)?;
                println!("✔ Lista exportada: {}", path.display());
            }

            println!("\n✅ Exportação concluída");
        }

        Commands::Photos {
            folder,
            ghe,
            interactive,
            output,
        } => {
            println!("📷 pgr-tools - tabelas de fotos\n");

            // 1. Varredura e agrupamento
            println!("[1/2] Varrendo a pasta de fotos...");
            let mut groups = scan_photo_folder(&folder)?;
            println!(
                "✔ {} fotos em {} grupos\n",
                groups.total_photos(),
                groups.len()
            );

            if interactive {
                run_interactive_gallery(&mut groups)?;
            }

            // 2. Exportação
            println!("[2/2] Exportando...");
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));

            let (file_name, html) = match ghe {
                Some(chave) => {
                    let fotos = groups.get(&chave).ok_or_else(|| {
                        PgrError::InvalidMove(format!("grupo {} não existe", chave))
                    })?;
                    (
                        export::photo_group_file_name(&chave),
                        export::photo_table::format_single_group_document(&chave, fotos),
                    )
                }
                None => (
                    export::photos_file_name().to_string(),
                    export::photo_table::format_photos_document(&groups),
                ),
            };

            let path = export::write_document(&output_dir, &file_name, &html)?;
            println!("✔ Tabela exportada: {}", path.display());

            println!("\n✅ Exportação concluída");
        }

        Commands::Run {
            pdf,
            session,
            output,
        } => {
            println!("🚀 pgr-tools - processamento completo\n");

            // 1. Extração da lista
            println!("[1/3] Extraindo a lista de GHEs...");
            let bytes = read_pdf(&pdf)?;
            let client = GeminiClient::new(&config)?;
            let summaries = client.extract_ghe_summaries(&bytes).await?;
            println!("✔ {} GHEs encontrados\n", summaries.len());

            let session_path = session.unwrap_or_else(|| default_session_path(&pdf));
            let mut current = GenerationSession::new(&pdf, &bytes, summaries);

            // 2. Geração de todos os formulários
            println!("[2/3] Gerando os formulários...");
            let mut tracker = GenerationTracker::new();
            generate_all(&client, &bytes, &current, &mut tracker).await;
            current.absorb_tracker(&tracker);
            current.save(&session_path)?;

            // 3. Exportação
            println!("\n[3/3] Exportando...");
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            export_forms(&current, None, &output_dir)?;
            let texto = export::txt::format_ghe_list_txt(&current.summaries);
            let path = export::write_document(&output_dir, export::ghe_list_file_name(), &texto)?;
            println!("✔ Lista exportada: {}", path.display());

            println!("\n✅ Processamento concluído. Sessão: {}", session_path.display());
        }

        Commands::Config { set_api_key, show } => {
            let mut current = Config::load()?;

            if let Some(key) = set_api_key {
                current.set_api_key(key)?;
                println!("✅ Chave de API gravada em {}", Config::config_path()?.display());
            } else if show {
                println!("Configuração ({})", Config::config_path()?.display());
                println!("  modelo:      {}", current.model);
                println!("  temperatura: {}", current.temperature);
                println!("  timeout:     {}s", current.timeout_seconds);
                println!(
                    "  chave:       {}",
                    if current.api_key.is_some() {
                        "configurada"
                    } else {
                        "não configurada"
                    }
                );
            } else {
                println!("Use --set-api-key SUA_CHAVE ou --show");
            }
        }
    }

    Ok(())
}

fn default_session_path(pdf: &Path) -> PathBuf {
    PathBuf::from(format!("{}.session.json", pdf.display()))
}

fn read_pdf(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(PgrError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read(path)?)
}

/// Geração em massa com barra de progresso. Falhas individuais aparecem na
/// barra e não interrompem a execução.
async fn generate_all(
    client: &GeminiClient,
    bytes: &[u8],
    session: &GenerationSession,
    tracker: &mut GenerationTracker,
) {
    let bar = ProgressBar::new(session.summaries.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let fetch = |ghe: String| {
        let client = &*client;
        async move { client.extract_ghe_details(bytes, &ghe).await }
    };

    run_batch(&session.summaries, tracker, fetch, |event| match event {
        BatchEvent::Started {
            total,
            already_done,
        } => {
            bar.set_length(*total as u64);
            bar.set_position(*already_done as u64);
            if *already_done > 0 {
                bar.println(format!("↻ {} já gerados na sessão", already_done));
            }
        }
        BatchEvent::Progress {
            completed,
            ghe,
            error,
            ..
        } => {
            bar.set_position(*completed as u64);
            match error {
                Some(msg) => bar.println(format!("✗ GHE {}: {}", ghe, msg)),
                None => bar.println(format!("✔ GHE {} gerado", ghe)),
            }
        }
        BatchEvent::Completed {
            succeeded, failed, ..
        } => {
            bar.finish_and_clear();
            println!("✔ {} gerado(s), {} com erro", succeeded, failed);
        }
    })
    .await;
}

/// Exporta formulários gerados: um GHE específico ou todos em um único
/// documento com quebra de página entre as seções.
fn export_forms(
    session: &GenerationSession,
    ghe: Option<&str>,
    output_dir: &Path,
) -> Result<()> {
    match ghe {
        Some(codigo) => {
            let summary = session.find_by_ghe(codigo).ok_or_else(|| {
                PgrError::CliExecution(format!("GHE {} não está na sessão", codigo))
            })?;
            let details = session
                .details
                .get(&summary.id)
                .ok_or_else(|| PgrError::DetailsMissing(codigo.to_string()))?;

            let html = export::word_html::format_ghe_document(details);
            let path = export::write_document(
                output_dir,
                &export::ghe_form_file_name(codigo),
                &html,
            )?;
            println!("✔ Formulário exportado: {}", path.display());
        }
        None => {
            let em_ordem = session.details_in_order();
            if em_ordem.is_empty() {
                println!("⚠ Nenhum formulário gerado ainda. Use `pgr-tools generate`.");
                return Ok(());
            }

            let html = export::word_html::format_all_ghe_document(&em_ordem);
            let path =
                export::write_document(output_dir, export::all_forms_file_name(), &html)?;
            println!(
                "✔ {} formulário(s) exportado(s): {}",
                em_ordem.len(),
                path.display()
            );
        }
    }

    Ok(())
}
