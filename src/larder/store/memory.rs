use super::{Slot, SlotBackend};
use crate::error::{LarderError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory slots for testing and development.
///
/// Clones share the same underlying slots, so a handle kept outside a
/// [`crate::store::RecipeStore`] can inspect what the store persisted or
/// reopen it from the same data. Writes can be made to fail on demand to
/// exercise persistence error paths.
#[derive(Default, Clone)]
pub struct MemoryBackend {
    slots: Rc<RefCell<HashMap<Slot, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with a store error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn payload(&self, slot: Slot) -> Option<String> {
        self.slots.borrow().get(&slot).cloned()
    }
}

impl SlotBackend for MemoryBackend {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(&slot).cloned())
    }

    fn write(&mut self, slot: Slot, payload: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(LarderError::Store(format!(
                "Simulated write failure for slot '{}'",
                slot.key()
            )));
        }
        self.slots.borrow_mut().insert(slot, payload.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Ingredient, Recipe, RecipeIngredient};
    use crate::store::RecipeStore;

    pub struct StoreFixture {
        pub store: RecipeStore<MemoryBackend>,
        pub backend: MemoryBackend,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let backend = MemoryBackend::new();
            let store = RecipeStore::open(backend.clone()).unwrap();
            Self { store, backend }
        }

        pub fn with_pantry(mut self, names: &[&str]) -> Self {
            for name in names {
                self.store
                    .add_ingredient(Ingredient::new(name.to_string()))
                    .unwrap();
            }
            self
        }

        pub fn with_recipe(mut self, name: &str, ingredients: &[&str]) -> Self {
            let mut recipe = Recipe::new(name.to_string());
            recipe.ingredients = ingredients
                .iter()
                .map(|n| RecipeIngredient::new(*n))
                .collect();
            self.store.add_recipe(recipe).unwrap();
            self
        }
    }
}
