//! # API Facade
//!
//! The single entry point for all larder operations, regardless of the UI on
//! top. It dispatches to the command layer and returns structured
//! `Result<CmdResult>` values; it never prints, never formats, never touches
//! the terminal. Generic over [`SlotBackend`] so the whole stack runs against
//! `MemoryBackend` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::IngredientCategory;
use crate::store::{RecipeStore, SlotBackend};
use std::path::{Path, PathBuf};

pub struct LarderApi<B: SlotBackend> {
    store: RecipeStore<B>,
    config_dir: PathBuf,
}

impl<B: SlotBackend> LarderApi<B> {
    pub fn new(store: RecipeStore<B>, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn add_recipe(&mut self, draft: commands::RecipeDraft) -> Result<commands::CmdResult> {
        commands::add_recipe::run(&mut self.store, draft)
    }

    pub fn update_recipe(
        &mut self,
        index: usize,
        update: commands::RecipeUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update_recipe::run(&mut self.store, index, update)
    }

    pub fn remove_recipes(&mut self, indexes: &[usize]) -> Result<commands::CmdResult> {
        commands::remove_recipe::run(&mut self.store, indexes)
    }

    pub fn list_recipes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_recipes(&self, indexes: &[usize]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, indexes)
    }

    pub fn available_recipes(&self) -> Result<commands::CmdResult> {
        commands::available::run(&self.store)
    }

    pub fn add_ingredients(
        &mut self,
        names: &[String],
        category: Option<IngredientCategory>,
    ) -> Result<commands::CmdResult> {
        commands::pantry_add::run(&mut self.store, names, category)
    }

    pub fn remove_ingredients(&mut self, indexes: &[usize]) -> Result<commands::CmdResult> {
        commands::pantry_remove::run(&mut self.store, indexes)
    }

    pub fn pantry(&self) -> Result<commands::CmdResult> {
        commands::pantry_list::run(&self.store)
    }

    pub fn export(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn import(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &RecipeStore<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecipeStore<B> {
        &mut self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, MessageLevel, PantryRow, RecipeDraft, RecipeRow, RecipeUpdate,
};
