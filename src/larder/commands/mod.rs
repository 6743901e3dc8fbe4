use crate::config::LarderConfig;
use crate::model::{Ingredient, Recipe, RecipeIngredient};

pub mod add_recipe;
pub mod available;
pub mod config;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod pantry_add;
pub mod pantry_list;
pub mod pantry_remove;
pub mod remove_recipe;
pub mod update_recipe;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A catalog entry as listed: 1-based position plus the availability verdict
/// computed against the current pantry.
#[derive(Debug, Clone)]
pub struct RecipeRow {
    pub index: usize,
    pub recipe: Recipe,
    pub missing: Vec<String>,
}

impl RecipeRow {
    pub fn available(&self) -> bool {
        self.missing.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct PantryRow {
    pub index: usize,
    pub ingredient: Ingredient,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_recipes: Vec<Recipe>,
    pub recipe_rows: Vec<RecipeRow>,
    pub pantry_rows: Vec<PantryRow>,
    pub config: Option<LarderConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_recipe_rows(mut self, rows: Vec<RecipeRow>) -> Self {
        self.recipe_rows = rows;
        self
    }

    pub fn with_pantry_rows(mut self, rows: Vec<PantryRow>) -> Self {
        self.pantry_rows = rows;
        self
    }

    pub fn with_config(mut self, config: LarderConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Everything needed to create a recipe. Identity and timestamps are
/// generated at the editing boundary, not supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: String,
    pub image: Option<Vec<u8>>,
}

/// A partial edit: fields left as `None` keep their current value, fields
/// that are present replace the stored ones wholesale.
#[derive(Debug, Clone, Default)]
pub struct RecipeUpdate {
    pub name: Option<String>,
    pub ingredients: Option<Vec<RecipeIngredient>>,
    pub instructions: Option<String>,
    pub image: Option<Vec<u8>>,
}
