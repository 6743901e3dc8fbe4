use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LarderError, Result};
use crate::model::{Ingredient, Recipe};
use crate::store::{RecipeStore, SlotBackend};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const EXPORT_VERSION: u32 = 1;

/// On-disk shape of an export file: both collections in one document.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportFile {
    pub version: u32,
    pub recipes: Vec<Recipe>,
    pub pantry: Vec<Ingredient>,
}

pub fn run<B: SlotBackend>(store: &RecipeStore<B>, path: &Path) -> Result<CmdResult> {
    let payload = render(store)?;
    fs::write(path, payload).map_err(LarderError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} recipes and {} pantry entries to {}",
        store.recipes().len(),
        store.pantry().len(),
        path.display()
    )));
    Ok(result)
}

pub fn render<B: SlotBackend>(store: &RecipeStore<B>) -> Result<String> {
    let file = ExportFile {
        version: EXPORT_VERSION,
        recipes: store.recipes().to_vec(),
        pantry: store.pantry().to_vec(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn render_carries_both_collections() {
        let fixture = StoreFixture::new()
            .with_pantry(&["egg"])
            .with_recipe("Omelette", &["egg"]);

        let payload = render(&fixture.store).unwrap();
        let file: ExportFile = serde_json::from_str(&payload).unwrap();
        assert_eq!(file.version, EXPORT_VERSION);
        assert_eq!(file.recipes.len(), 1);
        assert_eq!(file.pantry.len(), 1);
    }

    #[test]
    fn run_writes_the_file() {
        let fixture = StoreFixture::new().with_recipe("Toast", &[]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.json");

        run(&fixture.store, &path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("Toast"));
    }
}
