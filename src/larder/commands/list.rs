use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::store::{RecipeStore, SlotBackend};

/// The full catalog, each row carrying its availability verdict.
pub fn run<B: SlotBackend>(store: &RecipeStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_recipe_rows(helpers::recipe_rows(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn rows_carry_missing_ingredients() {
        let fixture = StoreFixture::new()
            .with_pantry(&["egg"])
            .with_recipe("Omelette", &["egg"])
            .with_recipe("Pancakes", &["egg", "flour", "milk"]);

        let result = run(&fixture.store).unwrap();
        assert_eq!(result.recipe_rows.len(), 2);
        assert!(result.recipe_rows[0].available());
        assert_eq!(result.recipe_rows[1].missing, vec!["flour", "milk"]);
    }
}
