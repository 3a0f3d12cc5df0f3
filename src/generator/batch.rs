//! Geração em massa
//!
//! Percorre os resumos em ordem, estritamente em sequência (uma chamada ao
//! serviço por vez), atualizando o rastreador e o progresso agregado. A
//! falha de um item nunca interrompe a execução.

use crate::error::Result;
use crate::extractor::types::{GheDetails, GheSummary};
use crate::generator::status::{GenerationStatus, GenerationTracker};
use std::future::Future;

/// Estado agregado de uma execução em massa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRun {
    pub total: usize,
    pub completed: usize,
    pub active: bool,
}

/// Eventos publicados durante a execução.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    /// A execução começou; `already_done` é a base de itens já gerados.
    Started { total: usize, already_done: usize },
    /// Um item terminou (sucesso ou erro); `completed` inclui a base.
    Progress {
        completed: usize,
        total: usize,
        ghe: String,
        status: GenerationStatus,
        error: Option<String>,
    },
    /// Dispara exatamente uma vez, inclusive quando nada era elegível.
    Completed {
        total: usize,
        succeeded: usize,
        failed: usize,
    },
}

/// Executa a geração em massa sobre os itens ainda não gerados.
///
/// Elegíveis: status `Idle` ou `Error`. Itens `Success` contam como base
/// já concluída e são pulados. Com zero elegíveis a execução termina de
/// imediato, mas o evento `Completed` ainda é publicado.
pub async fn run_batch<F, Fut>(
    summaries: &[GheSummary],
    tracker: &mut GenerationTracker,
    fetch: F,
    mut on_event: impl FnMut(&BatchEvent),
) -> BatchRun
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<GheDetails>>,
{
    let total = summaries.len();
    let eligible: Vec<&GheSummary> = summaries
        .iter()
        .filter(|s| {
            matches!(
                tracker.status(&s.id),
                GenerationStatus::Idle | GenerationStatus::Error
            )
        })
        .collect();
    let already_done = total - eligible.len();

    if eligible.is_empty() {
        on_event(&BatchEvent::Completed {
            total,
            succeeded: 0,
            failed: 0,
        });
        return BatchRun {
            total,
            completed: total,
            active: false,
        };
    }

    let mut run = BatchRun {
        total,
        completed: already_done,
        active: true,
    };
    on_event(&BatchEvent::Started {
        total,
        already_done,
    });

    let mut succeeded = 0;
    let mut failed = 0;

    for summary in eligible {
        tracker.set_status(&summary.id, GenerationStatus::Loading);

        let (status, error) = match fetch(summary.ghe.clone()).await {
            Ok(details) => {
                tracker.complete(&summary.id, details);
                succeeded += 1;
                (GenerationStatus::Success, None)
            }
            Err(err) => {
                tracker.fail(&summary.id);
                failed += 1;
                (GenerationStatus::Error, Some(err.to_string()))
            }
        };

        // contabiliza o item independentemente do desfecho
        run.completed += 1;
        on_event(&BatchEvent::Progress {
            completed: run.completed,
            total,
            ghe: summary.ghe.clone(),
            status,
            error,
        });
    }

    run.active = false;
    on_event(&BatchEvent::Completed {
        total,
        succeeded,
        failed,
    });

    run
}
