use crate::commands::export::ExportFile;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LarderError, Result};
use crate::store::{RecipeStore, SlotBackend};
use std::fs;
use std::path::Path;

/// Merge an export file into the store. Recipes already present (same id)
/// are skipped; pantry entries go through the usual duplicate suppression.
pub fn run<B: SlotBackend>(store: &mut RecipeStore<B>, path: &Path) -> Result<CmdResult> {
    let content = fs::read_to_string(path).map_err(LarderError::Io)?;
    let file: ExportFile =
        serde_json::from_str(&content).map_err(LarderError::Serialization)?;

    let mut recipes_added = 0usize;
    let mut recipes_skipped = 0usize;
    for recipe in file.recipes {
        if store.recipe(&recipe.id).is_some() {
            recipes_skipped += 1;
            continue;
        }
        store.add_recipe(recipe)?;
        recipes_added += 1;
    }

    let mut pantry_added = 0usize;
    let mut pantry_skipped = 0usize;
    for ingredient in file.pantry {
        match store.add_ingredient(ingredient) {
            Ok(()) => pantry_added += 1,
            Err(LarderError::DuplicateIngredient(_)) => pantry_skipped += 1,
            Err(e) => return Err(e),
        }
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} recipes and {} pantry entries",
        recipes_added, pantry_added
    )));
    if recipes_skipped + pantry_skipped > 0 {
        result.add_message(CmdMessage::info(format!(
            "Skipped {} recipes and {} pantry entries already present",
            recipes_skipped, pantry_skipped
        )));
    }
    Ok(result)
}
