use crate::commands::{helpers, CmdResult, RecipeRow};
use crate::error::{LarderError, Result};
use crate::store::{RecipeStore, SlotBackend};

/// Full rows for the recipes at the given 1-based indexes.
pub fn run<B: SlotBackend>(store: &RecipeStore<B>, indexes: &[usize]) -> Result<CmdResult> {
    let rows = helpers::recipe_rows(store);
    let selected: Vec<RecipeRow> = indexes
        .iter()
        .map(|&index| {
            rows.iter()
                .find(|row| row.index == index)
                .cloned()
                .ok_or_else(|| LarderError::Api(format!("No recipe at index {}", index)))
        })
        .collect::<Result<_>>()?;
    Ok(CmdResult::default().with_recipe_rows(selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn selects_by_index() {
        let fixture = StoreFixture::new()
            .with_recipe("A", &[])
            .with_recipe("B", &[]);
        let result = run(&fixture.store, &[2]).unwrap();
        assert_eq!(result.recipe_rows.len(), 1);
        assert_eq!(result.recipe_rows[0].recipe.name, "B");
    }

    #[test]
    fn unknown_index_is_an_error() {
        let fixture = StoreFixture::new();
        assert!(run(&fixture.store, &[1]).is_err());
    }
}
