//! Revisão interativa dos formulários gerados
//!
//! As edições passam por atualizações nomeadas por campo, nunca por
//! atribuição reflexiva: cada campo editável tem uma variante e um
//! despachante próprio.

use crate::error::{PgrError, Result};
use crate::extractor::types::GheDetails;
use dialoguer::Input;

/// Campos escalares do formulário.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Ghe,
    Cargos,
    Setor,
    NumColaboradores,
    JornadaTrabalho,
    DescricaoLocal,
    DescricaoAtividade,
}

impl DetailField {
    pub const ALL: [DetailField; 7] = [
        DetailField::Ghe,
        DetailField::Cargos,
        DetailField::Setor,
        DetailField::NumColaboradores,
        DetailField::JornadaTrabalho,
        DetailField::DescricaoLocal,
        DetailField::DescricaoAtividade,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailField::Ghe => "GHE",
            DetailField::Cargos => "Cargos",
            DetailField::Setor => "Setor",
            DetailField::NumColaboradores => "Nº de colaboradores",
            DetailField::JornadaTrabalho => "Jornada de trabalho",
            DetailField::DescricaoLocal => "Descrição do local",
            DetailField::DescricaoAtividade => "Descrição da atividade",
        }
    }
}

/// Colunas da tabela de riscos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskField {
    FatorRisco,
    TipoRisco,
    Categoria,
    NAmostrado,
}

impl RiskField {
    pub const ALL: [RiskField; 4] = [
        RiskField::FatorRisco,
        RiskField::TipoRisco,
        RiskField::Categoria,
        RiskField::NAmostrado,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RiskField::FatorRisco => "Fator de risco",
            RiskField::TipoRisco => "Tipo do risco",
            RiskField::Categoria => "Categoria",
            RiskField::NAmostrado => "Nº amostrado",
        }
    }
}

pub fn field_value(details: &GheDetails, field: DetailField) -> &str {
    match field {
        DetailField::Ghe => &details.ghe,
        DetailField::Cargos => &details.cargos,
        DetailField::Setor => &details.setor,
        DetailField::NumColaboradores => &details.num_colaboradores,
        DetailField::JornadaTrabalho => &details.jornada_trabalho,
        DetailField::DescricaoLocal => &details.descricao_local,
        DetailField::DescricaoAtividade => &details.descricao_atividade,
    }
}

pub fn apply_field(details: &mut GheDetails, field: DetailField, value: String) {
    match field {
        DetailField::Ghe => details.ghe = value,
        DetailField::Cargos => details.cargos = value,
        DetailField::Setor => details.setor = value,
        DetailField::NumColaboradores => details.num_colaboradores = value,
        DetailField::JornadaTrabalho => details.jornada_trabalho = value,
        DetailField::DescricaoLocal => details.descricao_local = value,
        DetailField::DescricaoAtividade => details.descricao_atividade = value,
    }
}

pub fn risk_field_value(details: &GheDetails, index: usize, field: RiskField) -> Option<&str> {
    details.riscos.get(index).map(|risco| match field {
        RiskField::FatorRisco => risco.fator_risco.as_str(),
        RiskField::TipoRisco => risco.tipo_risco.as_str(),
        RiskField::Categoria => risco.categoria.as_str(),
        RiskField::NAmostrado => risco.n_amostrado.as_str(),
    })
}

pub fn apply_risk_field(
    details: &mut GheDetails,
    index: usize,
    field: RiskField,
    value: String,
) -> Result<()> {
    let risco = details.riscos.get_mut(index).ok_or_else(|| {
        PgrError::CliExecution(format!("linha de risco {} não existe", index + 1))
    })?;

    match field {
        RiskField::FatorRisco => risco.fator_risco = value,
        RiskField::TipoRisco => risco.tipo_risco = value,
        RiskField::Categoria => risco.categoria = value,
        RiskField::NAmostrado => risco.n_amostrado = value,
    }

    Ok(())
}

fn prompt(label: &str, atual: &str) -> Result<Option<String>> {
    let entrada: String = Input::new()
        .with_prompt(format!("{} [{}]", label, atual))
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PgrError::CliExecution(e.to_string()))?;

    // Enter em branco mantém o valor atual
    if entrada.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(entrada))
    }
}

/// Percorre os campos do formulário e as linhas de risco, pedindo cada
/// valor. Retorna o número de campos alterados.
pub fn run_interactive_review(details: &mut GheDetails) -> Result<usize> {
    let mut alterados = 0;

    println!("--- Formulário do GHE {} ---", details.ghe);
    println!("(Enter mantém o valor atual)\n");

    for field in DetailField::ALL {
        let atual = field_value(details, field).to_string();
        if let Some(novo) = prompt(field.label(), &atual)? {
            apply_field(details, field, novo);
            alterados += 1;
        }
    }

    println!("\n--- Riscos ---");
    for indice in 0..details.riscos.len() {
        let fator = details.riscos[indice].fator_risco.clone();
        println!("\nRisco {}: {}", indice + 1, fator);
        for field in RiskField::ALL {
            let atual = risk_field_value(details, indice, field)
                .unwrap_or_default()
                .to_string();
            if let Some(novo) = prompt(field.label(), &atual)? {
                apply_risk_field(details, indice, field, novo)?;
                alterados += 1;
            }
        }
    }

    Ok(alterados)
}
