use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecipeStore, SlotBackend};

/// Remove pantry entries at the given 1-based indexes; same snapshot rule as
/// recipe removal. Recipes naming the removed ingredient keep their own text.
pub fn run<B: SlotBackend>(store: &mut RecipeStore<B>, indexes: &[usize]) -> Result<CmdResult> {
    let resolved: Vec<_> = indexes
        .iter()
        .map(|&index| helpers::resolve_ingredient_index(store, index).map(|id| (index, id)))
        .collect::<Result<_>>()?;

    let mut result = CmdResult::default();
    for (index, id) in resolved {
        let removed = store.remove_ingredient(&id)?;
        result.add_message(CmdMessage::success(format!(
            "Removed from pantry ({}): {}",
            index, removed.name
        )));
    }
    Ok(result)
}
