use crate::commands::{PantryRow, RecipeRow};
use crate::error::{LarderError, Result};
use crate::model::RecipeIngredient;
use crate::store::{RecipeStore, SlotBackend};
use uuid::Uuid;

pub fn recipe_rows<B: SlotBackend>(store: &RecipeStore<B>) -> Vec<RecipeRow> {
    store
        .recipes()
        .iter()
        .enumerate()
        .map(|(i, recipe)| RecipeRow {
            index: i + 1,
            missing: store.missing_for(recipe),
            recipe: recipe.clone(),
        })
        .collect()
}

pub fn pantry_rows<B: SlotBackend>(store: &RecipeStore<B>) -> Vec<PantryRow> {
    store
        .pantry()
        .iter()
        .enumerate()
        .map(|(i, ingredient)| PantryRow {
            index: i + 1,
            ingredient: ingredient.clone(),
        })
        .collect()
}

/// Resolve a 1-based catalog index against the current listing. Resolution
/// happens inside the same operation that uses the id; indexes are never
/// carried across mutations.
pub fn resolve_recipe_index<B: SlotBackend>(store: &RecipeStore<B>, index: usize) -> Result<Uuid> {
    index
        .checked_sub(1)
        .and_then(|i| store.recipes().get(i))
        .map(|r| r.id)
        .ok_or_else(|| LarderError::Api(format!("No recipe at index {}", index)))
}

pub fn resolve_ingredient_index<B: SlotBackend>(
    store: &RecipeStore<B>,
    index: usize,
) -> Result<Uuid> {
    index
        .checked_sub(1)
        .and_then(|i| store.pantry().get(i))
        .map(|i| i.id)
        .ok_or_else(|| LarderError::Api(format!("No pantry entry at index {}", index)))
}

/// Drop ingredient lines whose name trims to nothing and trim the rest.
pub fn normalize_ingredients(ingredients: Vec<RecipeIngredient>) -> Vec<RecipeIngredient> {
    ingredients
        .into_iter()
        .filter_map(|mut ingredient| {
            let name = ingredient.name.trim();
            if name.is_empty() {
                return None;
            }
            ingredient.name = name.to_string();
            Some(ingredient)
        })
        .collect()
}
