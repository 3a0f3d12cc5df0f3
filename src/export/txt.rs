//! Lista de GHEs em texto simples

use crate::extractor::types::GheSummary;

const SEPARADOR_LARGURA: usize = 50;

/// Lista textual dos GHEs extraídos, um bloco por GHE, na ordem recebida.
pub fn format_ghe_list_txt(summaries: &[GheSummary]) -> String {
    let separador = "-".repeat(SEPARADOR_LARGURA);

    let mut texto = String::new();
    texto.push_str("LISTA DE GRUPOS HOMOGÊNEOS DE EXPOSIÇÃO (GHE)\n");
    texto.push_str(&separador);
    texto.push('\n');

    for summary in summaries {
        texto.push('\n');
        texto.push_str(&format!("GHE: {}\n", summary.ghe));
        texto.push_str(&format!("Cargo(s): {}\n", summary.cargos.join(", ")));
        texto.push_str(&format!("Setor: {}\n", summary.setor));
        texto.push_str(&format!("Funcionários: {}\n", summary.funcionarios));
        texto.push('\n');
        texto.push_str(&separador);
        texto.push('\n');
    }

    texto
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(ghe: &str, cargos: &[&str], setor: &str, funcionarios: u32) -> GheSummary {
        GheSummary {
            id: format!("{}-0", ghe),
            ghe: ghe.to_string(),
            cargos: cargos.iter().map(|c| c.to_string()).collect(),
            setor: setor.to_string(),
            funcionarios,
        }
    }

    #[test]
    fn test_format_ghe_list_txt() {
        let summaries = vec![
            summary("01.01", &["Operador", "Montador"], "Produção", 12),
            summary("02", &["Soldador"], "Caldeiraria", 4),
        ];
        let texto = format_ghe_list_txt(&summaries);

        assert!(texto.starts_with("LISTA DE GRUPOS HOMOGÊNEOS DE EXPOSIÇÃO (GHE)\n"));
        assert!(texto.contains("GHE: 01.01\n"));
        assert!(texto.contains("Cargo(s): Operador, Montador\n"));
        assert!(texto.contains("Setor: Caldeiraria\n"));
        assert!(texto.contains("Funcionários: 4\n"));
        // separador do cabeçalho + um por bloco
        assert_eq!(texto.matches(&"-".repeat(50)).count(), 3);
    }

    #[test]
    fn test_lista_vazia_so_cabecalho() {
        let texto = format_ghe_list_txt(&[]);
        assert_eq!(texto.matches(&"-".repeat(50)).count(), 1);
        assert!(!texto.contains("GHE: "));
    }
}
