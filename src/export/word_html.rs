//! Formulários de GHE em HTML compatível com o Word
//!
//! Reproduz o modelo do formulário (tabela LAUDO + tabela IDENTIFICAÇÃO DOS
//! RISCOS) com os estilos `mso-` que o Word entende. Funções puras e
//! determinísticas: a mesma entrada gera sempre o mesmo documento.

use crate::extractor::types::GheDetails;

/// Quebra de página do Word entre seções consecutivas.
const PAGE_BREAK: &str =
    "<br clear=all style='mso-special-character:line-break;page-break-before:always'>";

const DOCUMENT_STYLE: &str = r#"body { font-family: Calibri, sans-serif; font-size: 11pt; }
p { margin: 0; padding: 2pt 0; text-align: left; }
h2 { font-size: 13pt; color: #2F5496; margin-top: 12pt; margin-bottom: 6pt; }
table { border-collapse: collapse; width: 100%; mso-yfti-tbllook:1184; }
th, td { vertical-align: top; }
.textarea-content { white-space: pre-wrap; text-align: justify; }"#;

const BORDA: &str = "border:solid windowtext 1.0pt;";
const BORDA_SEM_TOPO: &str =
    "border:solid windowtext 1.0pt; border-top:none; mso-border-top-alt:solid windowtext 1.0pt;";
const BORDA_INTERNA: &str = "border:solid windowtext 1.0pt; border-top:none; border-left:none; mso-border-top-alt:solid windowtext 1.0pt; mso-border-left-alt:solid windowtext 1.0pt;";
const PADDING: &str = "padding:0cm 5.4pt 0cm 5.4pt;";

/// Quebras de linha do texto viram `<br>`; células vazias viram `&nbsp;`.
fn celula(texto: &str) -> String {
    if texto.is_empty() {
        "&nbsp;".to_string()
    } else {
        texto.replace('\n', "<br>")
    }
}

/// Uma seção de formulário (as duas tabelas de um GHE), sem envelope HTML.
pub fn format_ghe_section(details: &GheDetails) -> String {
    let mut html = String::new();

    html.push_str("<div>\n");
    html.push_str(&format!("<h2>GHE {}</h2>\n", details.ghe));

    // tabela LAUDO
    html.push_str(
        "<table style=\"width:100%; border-collapse:collapse; border:none; mso-border-alt:solid windowtext 1.0pt;\">\n",
    );
    html.push_str(&format!(
        "<tr style=\"mso-yfti-irow:0;mso-yfti-firstrow:yes;\"><td colspan=\"6\" style=\"{} background:#D9D9D9; {}\"><p style=\"text-align:center;\"><b>LAUDO</b></p></td></tr>\n",
        BORDA, PADDING
    ));
    html.push_str(&format!(
        "<tr style=\"mso-yfti-irow:1;\"><td colspan=\"2\" style=\"{} background:#D9D9D9; {}\"><p style=\"text-align:center;\"><b>GHE</b></p></td><td colspan=\"2\" style=\"{} background:#D9D9D9; {}\"><p style=\"text-align:center;\"><b>CARGOS</b></p></td><td colspan=\"2\" style=\"{} background:#D9D9D9; {}\"><p style=\"text-align:center;\"><b>SETOR</b></p></td></tr>\n",
        BORDA_SEM_TOPO, PADDING, BORDA_INTERNA, PADDING, BORDA_INTERNA, PADDING
    ));
    html.push_str(&format!(
        "<tr style=\"mso-yfti-irow:2;\"><td colspan=\"2\" style=\"{} {}\"><p style=\"text-align:center;\">{}</p></td><td colspan=\"2\" style=\"{} {}\"><p style=\"text-align:center;\">{}</p></td><td colspan=\"2\" style=\"{} {}\"><p style=\"text-align:center;\">{}</p></td></tr>\n",
        BORDA_SEM_TOPO,
        PADDING,
        celula(&details.ghe),
        BORDA_INTERNA,
        PADDING,
        celula(&details.cargos),
        BORDA_INTERNA,
        PADDING,
        celula(&details.setor)
    ));
    html.push_str(&format!(
        "<tr style=\"mso-yfti-irow:3;\"><td colspan=\"3\" style=\"{} {}\"><p><b>Nº de colaboradores no GHE:</b> {}</p></td><td colspan=\"3\" style=\"{} {}\"><p><b>Jornada de Trabalho:</b> {}</p></td></tr>\n",
        BORDA_SEM_TOPO,
        PADDING,
        celula(&details.num_colaboradores),
        BORDA_INTERNA,
        PADDING,
        celula(&details.jornada_trabalho)
    ));
    html.push_str(&format!(
        "<tr style=\"mso-yfti-irow:4;\"><td colspan=\"2\" style=\"width:25%; {} background:#D9D9D9; {}\"><p><b>Descrição do local:</b></p></td><td colspan=\"4\" style=\"width:75%; {} {}\"><p class=\"textarea-content\">{}</p></td></tr>\n",
        BORDA_SEM_TOPO,
        PADDING,
        BORDA_INTERNA,
        PADDING,
        celula(&details.descricao_local)
    ));
    html.push_str(&format!(
        "<tr style=\"mso-yfti-irow:5;\"><td colspan=\"2\" style=\"width:25%; {} background:#D9D9D9; {}\"><p><b>Descrição da atividade:</b></p></td><td colspan=\"4\" style=\"width:75%; {} {}\"><p class=\"textarea-content\">{}</p></td></tr>\n",
        BORDA_SEM_TOPO,
        PADDING,
        BORDA_INTERNA,
        PADDING,
        celula(&details.descricao_atividade)
    ));
    html.push_str(&format!(
        "<tr style=\"mso-yfti-irow:6;mso-yfti-lastrow:yes;\"><td colspan=\"6\" style=\"{} height:100px; {}\"><p>&nbsp;</p></td></tr>\n",
        BORDA_SEM_TOPO, PADDING
    ));
    html.push_str("</table>\n");

    html.push_str("<p style=\"margin-bottom: 12pt;\">&nbsp;</p>\n");

    // tabela IDENTIFICAÇÃO DOS RISCOS
    html.push_str(
        "<table style=\"width:100%; border-collapse:collapse; border:none; mso-border-alt:solid windowtext 1.0pt;\">\n<thead>\n",
    );
    html.push_str(&format!(
        "<tr style=\"mso-yfti-irow:0;mso-yfti-firstrow:yes;\"><th colspan=\"4\" style=\"{} background:#D9D9D9; {}\"><p style=\"text-align:center;\"><b>IDENTIFICAÇÃO DOS RISCOS</b></p></th></tr>\n",
        BORDA, PADDING
    ));
    html.push_str(&format!(
        "<tr style=\"mso-yfti-irow:1; background:#D9D9D9;\"><th style=\"{} {}\"><p><b>Fator de Risco</b></p></th><th style=\"{} {}\"><p><b>Tipo do Risco</b></p></th><th style=\"{} {}\"><p><b>Categoria</b></p></th><th style=\"{} {}\"><p><b>Nº Amostrado</b></p></th></tr>\n",
        BORDA_SEM_TOPO, PADDING, BORDA_INTERNA, PADDING, BORDA_INTERNA, PADDING, BORDA_INTERNA, PADDING
    ));
    html.push_str("</thead>\n<tbody>\n");

    for (indice, risco) in details.riscos.iter().enumerate() {
        let ultima = if indice == details.riscos.len() - 1 {
            " mso-yfti-lastrow:yes;"
        } else {
            ""
        };
        html.push_str(&format!(
            "<tr style=\"mso-yfti-irow:{};{}\"><td style=\"{} {}\"><p>{}</p></td><td style=\"{} {}\"><p>{}</p></td><td style=\"{} {}\"><p>{}</p></td><td style=\"{} {}\"><p>{}</p></td></tr>\n",
            indice + 2,
            ultima,
            BORDA_SEM_TOPO,
            PADDING,
            celula(&risco.fator_risco),
            BORDA_INTERNA,
            PADDING,
            celula(&risco.tipo_risco),
            BORDA_INTERNA,
            PADDING,
            celula(&risco.categoria),
            BORDA_INTERNA,
            PADDING,
            celula(&risco.n_amostrado)
        ));
    }

    html.push_str("</tbody>\n</table>\n</div>\n");
    html
}

fn envelope(corpo: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<style>\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        DOCUMENT_STYLE, corpo
    )
}

/// Documento HTML completo para um único GHE.
pub fn format_ghe_document(details: &GheDetails) -> String {
    envelope(&format_ghe_section(details))
}

/// Documento com todos os formulários na ordem recebida, separados por
/// quebra de página do Word: N seções geram N-1 separadores, nunca antes
/// da primeira nem depois da última.
pub fn format_all_ghe_document(all_details: &[&GheDetails]) -> String {
    let corpo = all_details
        .iter()
        .map(|d| format_ghe_section(d))
        .collect::<Vec<_>>()
        .join(PAGE_BREAK);
    envelope(&corpo)
}
