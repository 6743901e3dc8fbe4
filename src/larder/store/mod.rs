//! # Storage Layer
//!
//! [`RecipeStore`] is the sole owner of the two top-level collections (the
//! recipe catalog and the pantry) and the only component permitted to mutate
//! persisted state. Every mutating operation writes the affected collection's
//! slot before returning, so the in-memory state and the durable copy are
//! never observably out of sync (a failed write surfaces as an error while
//! the in-memory change is kept).
//!
//! The durable medium is abstracted behind [`SlotBackend`]:
//!
//! - [`fs::FsBackend`]: one JSON file per slot under the data directory
//! - [`memory::MemoryBackend`]: in-memory slots for tests, with a knob to
//!   simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! <data-dir>/
//! ├── recipes.json        # versioned envelope around the recipe catalog
//! ├── pantry.json         # versioned envelope around the pantry
//! └── config.json         # configuration (see config.rs)
//! ```
//!
//! The store is constructed once and handed to consumers explicitly; there
//! are no globals. Consumers that need to react to mutations register a
//! subscriber and receive a [`ChangeEvent`] per successful mutation.

use crate::error::{LarderError, Result};
use crate::model::{Ingredient, Recipe};
use std::collections::HashSet;
use uuid::Uuid;

pub mod codec;
pub mod fs;
pub mod memory;

/// The two persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Recipes,
    Pantry,
}

impl Slot {
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Recipes => "recipes",
            Slot::Pantry => "pantry",
        }
    }
}

/// Abstract interface over the durable slot medium.
pub trait SlotBackend {
    /// Read a slot's payload; `None` when the slot has never been written.
    fn read(&self, slot: Slot) -> Result<Option<String>>;

    /// Replace a slot's payload.
    fn write(&mut self, slot: Slot, payload: &str) -> Result<()>;
}

/// Emitted to subscribers after each successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    Recipes,
    Pantry,
}

type Subscriber = Box<dyn FnMut(ChangeEvent)>;

/// In-memory collections synchronized to the backend on every mutation.
pub struct RecipeStore<B: SlotBackend> {
    backend: B,
    recipes: Vec<Recipe>,
    pantry: Vec<Ingredient>,
    subscribers: Vec<Subscriber>,
}

impl<B: SlotBackend> RecipeStore<B> {
    /// Load both collections from the backend. Slots that are absent or
    /// unreadable come back empty rather than failing startup.
    pub fn open(backend: B) -> Result<Self> {
        let recipes = codec::decode(backend.read(Slot::Recipes)?.as_deref());
        let pantry = codec::decode(backend.read(Slot::Pantry)?.as_deref());
        Ok(Self {
            backend,
            recipes,
            pantry,
            subscribers: Vec::new(),
        })
    }

    /// Register a mutation observer.
    pub fn subscribe(&mut self, subscriber: impl FnMut(ChangeEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&mut self, event: ChangeEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn pantry(&self) -> &[Ingredient] {
        &self.pantry
    }

    pub fn recipe(&self, id: &Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == *id)
    }

    // --- Recipe Management ---

    /// Append a recipe to the catalog. Names are not required to be unique.
    pub fn add_recipe(&mut self, recipe: Recipe) -> Result<()> {
        self.recipes.push(recipe);
        self.persist_recipes()?;
        self.notify(ChangeEvent::Recipes);
        Ok(())
    }

    /// Replace the entry with the same id wholesale.
    pub fn update_recipe(&mut self, recipe: Recipe) -> Result<()> {
        let entry = self
            .recipes
            .iter_mut()
            .find(|r| r.id == recipe.id)
            .ok_or(LarderError::RecipeNotFound(recipe.id))?;
        *entry = recipe;
        self.persist_recipes()?;
        self.notify(ChangeEvent::Recipes);
        Ok(())
    }

    /// Remove a recipe by id, returning it. Relative order of the remaining
    /// catalog is preserved. The id is resolved to a position inside this
    /// call; positions are never cached across operations.
    pub fn remove_recipe(&mut self, id: &Uuid) -> Result<Recipe> {
        let position = self
            .recipes
            .iter()
            .position(|r| r.id == *id)
            .ok_or(LarderError::RecipeNotFound(*id))?;
        let removed = self.recipes.remove(position);
        self.persist_recipes()?;
        self.notify(ChangeEvent::Recipes);
        Ok(removed)
    }

    // --- Pantry Management ---

    /// Add a pantry entry unless one with the same name already exists under
    /// case-insensitive comparison; the first entry wins.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> Result<()> {
        let folded = ingredient.name.to_lowercase();
        if let Some(existing) = self.pantry.iter().find(|i| i.name.to_lowercase() == folded) {
            return Err(LarderError::DuplicateIngredient(existing.name.clone()));
        }
        self.pantry.push(ingredient);
        self.persist_pantry()?;
        self.notify(ChangeEvent::Pantry);
        Ok(())
    }

    /// Remove a pantry entry by id, returning it. Recipes that name the
    /// ingredient are left untouched.
    pub fn remove_ingredient(&mut self, id: &Uuid) -> Result<Ingredient> {
        let position = self
            .pantry
            .iter()
            .position(|i| i.id == *id)
            .ok_or(LarderError::IngredientNotFound(*id))?;
        let removed = self.pantry.remove(position);
        self.persist_pantry()?;
        self.notify(ChangeEvent::Pantry);
        Ok(removed)
    }

    // --- Recipe Matching ---

    /// Every recipe whose ingredient names, case-folded, form a subset of the
    /// pantry. A recipe with no ingredients is trivially available.
    pub fn available_recipes(&self) -> Vec<&Recipe> {
        let pantry = self.pantry_names();
        self.recipes
            .iter()
            .filter(|recipe| {
                recipe
                    .ingredient_names()
                    .all(|name| pantry.contains(&name.to_lowercase()))
            })
            .collect()
    }

    /// The ingredient names of a recipe that are not in the pantry, in recipe
    /// order, case-insensitively deduplicated. Empty means cookable.
    pub fn missing_for(&self, recipe: &Recipe) -> Vec<String> {
        let pantry = self.pantry_names();
        let mut seen = HashSet::new();
        recipe
            .ingredient_names()
            .filter(|name| {
                let folded = name.to_lowercase();
                !pantry.contains(&folded) && seen.insert(folded)
            })
            .map(str::to_string)
            .collect()
    }

    fn pantry_names(&self) -> HashSet<String> {
        self.pantry.iter().map(|i| i.name.to_lowercase()).collect()
    }

    // --- Persistence ---

    fn persist_recipes(&mut self) -> Result<()> {
        let payload = codec::encode(&self.recipes)?;
        self.backend.write(Slot::Recipes, &payload)
    }

    fn persist_pantry(&mut self) -> Result<()> {
        let payload = codec::encode(&self.pantry)?;
        self.backend.write(Slot::Pantry, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryBackend;
    use super::*;
    use crate::model::RecipeIngredient;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
        let mut recipe = Recipe::new(name.to_string());
        recipe.ingredients = ingredients
            .iter()
            .map(|n| RecipeIngredient::new(*n))
            .collect();
        recipe
    }

    fn store_with(pantry: &[&str], recipes: Vec<Recipe>) -> RecipeStore<MemoryBackend> {
        let mut store = RecipeStore::open(MemoryBackend::new()).unwrap();
        for name in pantry {
            store.add_ingredient(Ingredient::new(name.to_string())).unwrap();
        }
        for r in recipes {
            store.add_recipe(r).unwrap();
        }
        store
    }

    #[test]
    fn availability_is_a_case_folded_subset_check() {
        let store = store_with(
            &["egg", "flour"],
            vec![
                recipe("Pancakes", &["egg", "flour", "milk"]),
                recipe("Omelette", &["egg"]),
            ],
        );

        let available = store.available_recipes();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].name, "Omelette");
    }

    #[test]
    fn availability_ignores_case_both_ways() {
        let store = store_with(&["Egg", "FLOUR"], vec![recipe("Crepes", &["egg", "Flour"])]);
        assert_eq!(store.available_recipes().len(), 1);
    }

    #[test]
    fn recipe_with_no_ingredients_is_always_available() {
        let store = store_with(&[], vec![recipe("Tap Water", &[])]);
        assert_eq!(store.available_recipes().len(), 1);
    }

    #[test]
    fn duplicate_ingredient_keeps_the_first_entry() {
        let mut store = store_with(&["Egg"], vec![]);
        let err = store.add_ingredient(Ingredient::new("egg".into())).unwrap_err();
        assert!(matches!(err, LarderError::DuplicateIngredient(name) if name == "Egg"));
        assert_eq!(store.pantry().len(), 1);
        assert_eq!(store.pantry()[0].name, "Egg");
    }

    #[test]
    fn removal_preserves_relative_order() {
        let mut store = store_with(
            &[],
            vec![recipe("A", &[]), recipe("B", &[]), recipe("C", &[])],
        );
        let id = store.recipes()[1].id;
        let removed = store.remove_recipe(&id).unwrap();
        assert_eq!(removed.name, "B");
        let names: Vec<&str> = store.recipes().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn update_miss_leaves_catalog_unchanged() {
        let mut store = store_with(&[], vec![recipe("A", &[])]);
        let before = store.recipes().to_vec();

        let stranger = recipe("Stranger", &[]);
        let err = store.update_recipe(stranger).unwrap_err();
        assert!(matches!(err, LarderError::RecipeNotFound(_)));
        assert_eq!(store.recipes(), &before[..]);
    }

    #[test]
    fn update_replaces_the_entry_wholesale() {
        let mut store = store_with(&[], vec![recipe("Soup", &["water"])]);
        let mut edited = store.recipes()[0].clone();
        edited.name = "Stone Soup".into();
        edited.ingredients = vec![RecipeIngredient::new("stone")];
        edited.instructions = "Boil the stone".into();
        store.update_recipe(edited.clone()).unwrap();

        assert_eq!(store.recipes().len(), 1);
        assert_eq!(store.recipes()[0], edited);
    }

    #[test]
    fn deleting_a_pantry_entry_does_not_touch_recipes() {
        let mut store = store_with(&["egg"], vec![recipe("Omelette", &["egg"])]);
        let id = store.pantry()[0].id;
        store.remove_ingredient(&id).unwrap();

        assert_eq!(store.recipes()[0].ingredients.len(), 1);
        assert!(store.available_recipes().is_empty());
    }

    #[test]
    fn mutations_survive_a_reopen() {
        let backend = MemoryBackend::new();
        let mut store = RecipeStore::open(backend.clone()).unwrap();
        store.add_ingredient(Ingredient::new("butter".into())).unwrap();
        store.add_recipe(recipe("Toast", &["bread", "butter"])).unwrap();

        let reopened = RecipeStore::open(backend).unwrap();
        assert_eq!(reopened.pantry().len(), 1);
        assert_eq!(reopened.recipes().len(), 1);
        assert_eq!(reopened.recipes()[0].name, "Toast");
    }

    #[test]
    fn failed_write_surfaces_but_keeps_the_in_memory_change() {
        let backend = MemoryBackend::new();
        backend.set_fail_writes(true);
        let mut store = RecipeStore::open(backend.clone()).unwrap();

        let err = store.add_recipe(recipe("Ghost", &[])).unwrap_err();
        assert!(matches!(err, LarderError::Store(_)));
        // In-memory state is ahead of disk until the next successful write.
        assert_eq!(store.recipes().len(), 1);
        assert!(RecipeStore::open(backend).unwrap().recipes().is_empty());
    }

    #[test]
    fn subscribers_see_one_event_per_mutation() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut store = RecipeStore::open(MemoryBackend::new()).unwrap();
        store.subscribe(move |event| sink.borrow_mut().push(event));

        store.add_ingredient(Ingredient::new("salt".into())).unwrap();
        store.add_recipe(recipe("Salted Salt", &["salt"])).unwrap();
        let id = store.recipes()[0].id;
        store.remove_recipe(&id).unwrap();

        assert_eq!(
            *events.borrow(),
            vec![ChangeEvent::Pantry, ChangeEvent::Recipes, ChangeEvent::Recipes]
        );
    }

    #[test]
    fn available_recipes_is_a_pure_query() {
        let store = store_with(&["egg"], vec![recipe("Omelette", &["egg"])]);
        let first: Vec<String> = store.available_recipes().iter().map(|r| r.name.clone()).collect();
        let second: Vec<String> = store.available_recipes().iter().map(|r| r.name.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(store.recipes().len(), 1);
    }
}
