use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::store::{RecipeStore, SlotBackend};

/// Only the recipes cookable from the current pantry. Indexes still refer to
/// positions in the full catalog so they stay valid for view/edit/remove.
pub fn run<B: SlotBackend>(store: &RecipeStore<B>) -> Result<CmdResult> {
    let rows = helpers::recipe_rows(store)
        .into_iter()
        .filter(|row| row.available())
        .collect();
    Ok(CmdResult::default().with_recipe_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_only_cookable_recipes() {
        let fixture = StoreFixture::new()
            .with_pantry(&["egg", "flour"])
            .with_recipe("Pancakes", &["egg", "flour", "milk"])
            .with_recipe("Omelette", &["egg"]);

        let result = run(&fixture.store).unwrap();
        assert_eq!(result.recipe_rows.len(), 1);
        assert_eq!(result.recipe_rows[0].recipe.name, "Omelette");
        // Catalog position, not position within the filtered listing.
        assert_eq!(result.recipe_rows[0].index, 2);
    }

    #[test]
    fn empty_ingredient_list_is_trivially_cookable() {
        let fixture = StoreFixture::new().with_recipe("Glass of Water", &[]);
        let result = run(&fixture.store).unwrap();
        assert_eq!(result.recipe_rows.len(), 1);
    }
}
