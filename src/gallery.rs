//! Galeria de fotos agrupadas por GHE
//!
//! Os grupos são fixados na importação; dentro de um grupo o usuário pode
//! excluir fotos e reordená-las. A reordenação só é permitida entre fotos
//! do mesmo nível de orientação (paisagem/quadrada entre si, retrato entre
//! si), para não quebrar a paginação da grade exportada.

use crate::error::{PgrError, Result};
use crate::scanner::PhotoRecord;
use dialoguer::Input;
use std::collections::BTreeMap;

/// Mapeamento ordenado chave de grupo → fotos do grupo.
#[derive(Debug, Clone, Default)]
pub struct PhotoGroups {
    groups: BTreeMap<String, Vec<PhotoRecord>>,
}

impl PhotoGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, group_key: &str, record: PhotoRecord) {
        self.groups
            .entry(group_key.to_string())
            .or_default()
            .push(record);
    }

    pub fn get(&self, group_key: &str) -> Option<&[PhotoRecord]> {
        self.groups.get(group_key).map(|v| v.as_slice())
    }

    /// Grupos em ordem lexicográfica de chave.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<PhotoRecord>)> {
        self.groups.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.groups.keys()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_photos(&self) -> usize {
        self.groups.values().map(|v| v.len()).sum()
    }

    /// Exclui uma foto; o grupo desaparece quando fica vazio.
    pub fn remove_photo(&mut self, group_key: &str, file_name: &str) -> Result<()> {
        let fotos = self
            .groups
            .get_mut(group_key)
            .ok_or_else(|| PgrError::InvalidMove(format!("grupo {} não existe", group_key)))?;

        let antes = fotos.len();
        fotos.retain(|p| p.file_name != file_name);
        if fotos.len() == antes {
            return Err(PgrError::InvalidMove(format!(
                "foto {} não existe no grupo {}",
                file_name, group_key
            )));
        }

        if fotos.is_empty() {
            self.groups.remove(group_key);
        }

        Ok(())
    }

    /// Move uma foto para a posição de outra do mesmo grupo. Movimentos
    /// entre níveis de orientação diferentes são rejeitados.
    pub fn move_photo(&mut self, group_key: &str, from_name: &str, to_name: &str) -> Result<()> {
        if from_name == to_name {
            return Ok(());
        }

        let fotos = self
            .groups
            .get_mut(group_key)
            .ok_or_else(|| PgrError::InvalidMove(format!("grupo {} não existe", group_key)))?;

        let origem = fotos
            .iter()
            .position(|p| p.file_name == from_name)
            .ok_or_else(|| PgrError::InvalidMove(format!("foto {} não existe", from_name)))?;
        let destino = fotos
            .iter()
            .position(|p| p.file_name == to_name)
            .ok_or_else(|| PgrError::InvalidMove(format!("foto {} não existe", to_name)))?;

        if fotos[origem].orientation.rank() != fotos[destino].orientation.rank() {
            return Err(PgrError::InvalidMove(
                "fotos de orientações diferentes não podem trocar de posição".into(),
            ));
        }

        let record = fotos.remove(origem);
        let destino = fotos
            .iter()
            .position(|p| p.file_name == to_name)
            .unwrap_or(fotos.len());
        fotos.insert(destino, record);

        Ok(())
    }
}

/// Edição interativa dos grupos antes da exportação.
pub fn run_interactive_gallery(groups: &mut PhotoGroups) -> Result<()> {
    println!("---");
    println!("Comandos: [l]istar  e GHE ARQUIVO = excluir  m GHE DE PARA = mover  [q] concluir");
    println!("---\n");

    listar_grupos(groups);

    loop {
        let entrada: String = Input::new()
            .with_prompt("galeria")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PgrError::CliExecution(e.to_string()))?;

        let campos: Vec<&str> = entrada.split_whitespace().collect();

        match campos.as_slice() {
            [] | ["l"] => listar_grupos(groups),
            ["q"] | ["Q"] => break,
            ["e", grupo, arquivo] => match groups.remove_photo(grupo, arquivo) {
                Ok(()) => println!("  → excluída: {}\n", arquivo),
                Err(err) => println!("  → {}\n", err),
            },
            ["m", grupo, de, para] => match groups.move_photo(grupo, de, para) {
                Ok(()) => println!("  → movida: {} antes de {}\n", de, para),
                Err(err) => println!("  → {}\n", err),
            },
            _ => println!("  → comando não reconhecido\n"),
        }
    }

    Ok(())
}

fn listar_grupos(groups: &PhotoGroups) {
    for (chave, fotos) in groups.iter() {
        println!("{} ({} fotos)", chave, fotos.len());
        for foto in fotos {
            println!("  - {} [{}]", foto.file_name, foto.orientation);
        }
    }
    println!();
}
