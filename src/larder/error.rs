use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum LarderError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(Uuid),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(Uuid),

    #[error("Already in pantry: {0}")]
    DuplicateIngredient(String),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, LarderError>;
