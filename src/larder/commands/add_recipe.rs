use crate::commands::{helpers, CmdMessage, CmdResult, RecipeDraft};
use crate::error::{LarderError, Result};
use crate::model::Recipe;
use crate::store::{RecipeStore, SlotBackend};

pub fn run<B: SlotBackend>(store: &mut RecipeStore<B>, draft: RecipeDraft) -> Result<CmdResult> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(LarderError::EmptyName);
    }

    let mut recipe = Recipe::new(name.to_string());
    recipe.ingredients = helpers::normalize_ingredients(draft.ingredients);
    recipe.instructions = draft.instructions;
    recipe.image = draft.image;

    store.add_recipe(recipe.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Recipe added: {}", recipe.name)));
    result.affected_recipes.push(recipe);
    Ok(result)
}
