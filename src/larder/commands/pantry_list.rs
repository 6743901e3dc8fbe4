use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::store::{RecipeStore, SlotBackend};

pub fn run<B: SlotBackend>(store: &RecipeStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_pantry_rows(helpers::pantry_rows(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_insertion_order() {
        let fixture = StoreFixture::new().with_pantry(&["egg", "flour"]);
        let result = run(&fixture.store).unwrap();
        assert_eq!(result.pantry_rows.len(), 2);
        assert_eq!(result.pantry_rows[0].ingredient.name, "egg");
        assert_eq!(result.pantry_rows[1].index, 2);
    }
}
