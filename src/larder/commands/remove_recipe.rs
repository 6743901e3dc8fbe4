use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecipeStore, SlotBackend};

/// Remove the recipes at the given 1-based indexes. All indexes are resolved
/// to ids against the same listing before anything is removed, so positions
/// shifting mid-operation cannot delete the wrong entry.
pub fn run<B: SlotBackend>(store: &mut RecipeStore<B>, indexes: &[usize]) -> Result<CmdResult> {
    let resolved: Vec<_> = indexes
        .iter()
        .map(|&index| helpers::resolve_recipe_index(store, index).map(|id| (index, id)))
        .collect::<Result<_>>()?;

    let mut result = CmdResult::default();
    for (index, id) in resolved {
        let removed = store.remove_recipe(&id)?;
        result.add_message(CmdMessage::success(format!(
            "Recipe removed ({}): {}",
            index, removed.name
        )));
        result.affected_recipes.push(removed);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_by_listed_position() {
        let mut fixture = StoreFixture::new()
            .with_recipe("A", &[])
            .with_recipe("B", &[])
            .with_recipe("C", &[]);
        run(&mut fixture.store, &[2]).unwrap();

        let names: Vec<&str> = fixture
            .store
            .recipes()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn multiple_indexes_resolve_before_any_removal() {
        let mut fixture = StoreFixture::new()
            .with_recipe("A", &[])
            .with_recipe("B", &[])
            .with_recipe("C", &[]);
        // Removing 1 first would shift 3 onto a different recipe if indexes
        // were resolved lazily.
        run(&mut fixture.store, &[1, 3]).unwrap();

        assert_eq!(fixture.store.recipes().len(), 1);
        assert_eq!(fixture.store.recipes()[0].name, "B");
    }

    #[test]
    fn unknown_index_fails_before_removing_anything() {
        let mut fixture = StoreFixture::new().with_recipe("A", &[]);
        assert!(run(&mut fixture.store, &[1, 9]).is_err());
        assert_eq!(fixture.store.recipes().len(), 1);
    }
}
