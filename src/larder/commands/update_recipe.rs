use crate::commands::{helpers, CmdMessage, CmdResult, RecipeUpdate};
use crate::error::{LarderError, Result};
use crate::store::{RecipeStore, SlotBackend};
use chrono::Utc;

/// Replace the recipe at a 1-based catalog index with the edited fields.
/// Whatever the update carries replaces the stored value wholesale; absent
/// fields are kept as they are.
pub fn run<B: SlotBackend>(
    store: &mut RecipeStore<B>,
    index: usize,
    update: RecipeUpdate,
) -> Result<CmdResult> {
    let id = helpers::resolve_recipe_index(store, index)?;
    // resolve_recipe_index only hands out ids from the live catalog
    let mut recipe = store
        .recipe(&id)
        .cloned()
        .ok_or(LarderError::RecipeNotFound(id))?;

    if let Some(name) = update.name {
        let name = name.trim();
        if name.is_empty() {
            return Err(LarderError::EmptyName);
        }
        recipe.name = name.to_string();
    }
    if let Some(ingredients) = update.ingredients {
        recipe.ingredients = helpers::normalize_ingredients(ingredients);
    }
    if let Some(instructions) = update.instructions {
        recipe.instructions = instructions;
    }
    if let Some(image) = update.image {
        recipe.image = Some(image);
    }
    recipe.updated_at = Utc::now();

    store.update_recipe(recipe.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe updated ({}): {}",
        index, recipe.name
    )));
    result.affected_recipes.push(recipe);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeIngredient;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn replaces_provided_fields_and_keeps_the_rest() {
        let mut fixture = StoreFixture::new().with_recipe("Soup", &["water", "salt"]);

        let update = RecipeUpdate {
            ingredients: Some(vec![RecipeIngredient::new("stone")]),
            ..RecipeUpdate::default()
        };
        run(&mut fixture.store, 1, update).unwrap();

        let recipe = &fixture.store.recipes()[0];
        assert_eq!(recipe.name, "Soup");
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "stone");
    }

    #[test]
    fn bad_index_is_rejected_without_changes() {
        let mut fixture = StoreFixture::new().with_recipe("Soup", &[]);
        let err = run(&mut fixture.store, 5, RecipeUpdate::default()).unwrap_err();
        assert!(matches!(err, LarderError::Api(_)));
        assert_eq!(fixture.store.recipes()[0].name, "Soup");
    }

    #[test]
    fn empty_replacement_name_is_rejected() {
        let mut fixture = StoreFixture::new().with_recipe("Soup", &[]);
        let update = RecipeUpdate {
            name: Some("  ".into()),
            ..RecipeUpdate::default()
        };
        assert!(matches!(
            run(&mut fixture.store, 1, update).unwrap_err(),
            LarderError::EmptyName
        ));
    }
}
