use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LarderError, Result};
use crate::model::{Ingredient, IngredientCategory};
use crate::store::{RecipeStore, SlotBackend};

/// Add ingredients to the pantry. Blank names are skipped and duplicates are
/// reported as warnings rather than failing the whole batch; the first entry
/// with a given name (in any case) wins.
pub fn run<B: SlotBackend>(
    store: &mut RecipeStore<B>,
    names: &[String],
    category: Option<IngredientCategory>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for raw in names {
        let name = raw.trim();
        if name.is_empty() {
            result.add_message(CmdMessage::warning("Skipping empty ingredient name"));
            continue;
        }

        let mut ingredient = Ingredient::new(name.to_string());
        if let Some(category) = category {
            ingredient = ingredient.with_category(category);
        }

        match store.add_ingredient(ingredient) {
            Ok(()) => result.add_message(CmdMessage::success(format!("Added to pantry: {}", name))),
            Err(LarderError::DuplicateIngredient(existing)) => result.add_message(
                CmdMessage::warning(format!("Already in pantry: {}", existing)),
            ),
            Err(e) => return Err(e),
        }
    }

    Ok(result)
}
