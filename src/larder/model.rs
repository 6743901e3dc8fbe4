use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Optional grouping tag for pantry entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Produce,
    Dairy,
    Meat,
    Grain,
    Spice,
    Other,
}

impl IngredientCategory {
    pub fn label(&self) -> &'static str {
        match self {
            IngredientCategory::Produce => "Produce",
            IngredientCategory::Dairy => "Dairy",
            IngredientCategory::Meat => "Meat",
            IngredientCategory::Grain => "Grain",
            IngredientCategory::Spice => "Spice",
            IngredientCategory::Other => "Other",
        }
    }
}

impl FromStr for IngredientCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "produce" => Ok(IngredientCategory::Produce),
            "dairy" => Ok(IngredientCategory::Dairy),
            "meat" => Ok(IngredientCategory::Meat),
            "grain" => Ok(IngredientCategory::Grain),
            "spice" => Ok(IngredientCategory::Spice),
            "other" => Ok(IngredientCategory::Other),
            _ => Err(format!(
                "Unknown category '{}' (expected produce, dairy, meat, grain, spice or other)",
                s
            )),
        }
    }
}

/// Measurement units for recipe ingredients.
///
/// The serialized values match the layout the store has always used, so the
/// persisted slots stay readable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CookingUnit {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "tsp")]
    Teaspoon,
    #[serde(rename = "tbsp")]
    Tablespoon,
    #[serde(rename = "cup")]
    Cup,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "pinch")]
    Pinch,
    #[serde(rename = "dash")]
    Dash,
    #[serde(rename = "to taste")]
    ToTaste,
}

impl CookingUnit {
    pub const ALL: [CookingUnit; 13] = [
        CookingUnit::None,
        CookingUnit::Teaspoon,
        CookingUnit::Tablespoon,
        CookingUnit::Cup,
        CookingUnit::Milliliter,
        CookingUnit::Liter,
        CookingUnit::Gram,
        CookingUnit::Kilogram,
        CookingUnit::Ounce,
        CookingUnit::Pound,
        CookingUnit::Pinch,
        CookingUnit::Dash,
        CookingUnit::ToTaste,
    ];

    /// Short form used on listings and in the persisted slots.
    pub fn abbrev(&self) -> &'static str {
        match self {
            CookingUnit::None => "",
            CookingUnit::Teaspoon => "tsp",
            CookingUnit::Tablespoon => "tbsp",
            CookingUnit::Cup => "cup",
            CookingUnit::Milliliter => "ml",
            CookingUnit::Liter => "l",
            CookingUnit::Gram => "g",
            CookingUnit::Kilogram => "kg",
            CookingUnit::Ounce => "oz",
            CookingUnit::Pound => "lb",
            CookingUnit::Pinch => "pinch",
            CookingUnit::Dash => "dash",
            CookingUnit::ToTaste => "to taste",
        }
    }

    /// Long form for detail views and help text.
    pub fn label(&self) -> &'static str {
        match self {
            CookingUnit::None => "No unit",
            CookingUnit::Teaspoon => "Teaspoon (tsp)",
            CookingUnit::Tablespoon => "Tablespoon (tbsp)",
            CookingUnit::Cup => "Cup",
            CookingUnit::Milliliter => "Milliliter (ml)",
            CookingUnit::Liter => "Liter (l)",
            CookingUnit::Gram => "Gram (g)",
            CookingUnit::Kilogram => "Kilogram (kg)",
            CookingUnit::Ounce => "Ounce (oz)",
            CookingUnit::Pound => "Pound (lb)",
            CookingUnit::Pinch => "Pinch",
            CookingUnit::Dash => "Dash",
            CookingUnit::ToTaste => "To taste",
        }
    }
}

impl fmt::Display for CookingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

impl FromStr for CookingUnit {
    type Err = String;

    /// Accepts either the short or the spelled-out form, case-insensitively.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "none" => Ok(CookingUnit::None),
            "tsp" | "teaspoon" => Ok(CookingUnit::Teaspoon),
            "tbsp" | "tablespoon" => Ok(CookingUnit::Tablespoon),
            "cup" | "cups" => Ok(CookingUnit::Cup),
            "ml" | "milliliter" => Ok(CookingUnit::Milliliter),
            "l" | "liter" => Ok(CookingUnit::Liter),
            "g" | "gram" => Ok(CookingUnit::Gram),
            "kg" | "kilogram" => Ok(CookingUnit::Kilogram),
            "oz" | "ounce" => Ok(CookingUnit::Ounce),
            "lb" | "pound" => Ok(CookingUnit::Pound),
            "pinch" => Ok(CookingUnit::Pinch),
            "dash" => Ok(CookingUnit::Dash),
            "to taste" | "to-taste" | "totaste" => Ok(CookingUnit::ToTaste),
            _ => Err(format!("Unknown unit '{}'", s)),
        }
    }
}

/// A pantry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<IngredientCategory>,
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl Ingredient {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category: None,
            added_at: Utc::now(),
        }
    }

    pub fn with_category(mut self, category: IngredientCategory) -> Self {
        self.category = Some(category);
        self
    }
}

/// One line of a recipe's ingredient list.
///
/// The name is free text matched case-insensitively against pantry entries;
/// the quantity is free text too, no arithmetic is ever performed on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: CookingUnit,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: String::new(),
            unit: CookingUnit::None,
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>, unit: CookingUnit) -> Self {
        self.quantity = quantity.into();
        self.unit = unit;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            ingredients: Vec::new(),
            instructions: String::new(),
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    /// Instructions split into display steps, one per non-blank line.
    pub fn instruction_steps(&self) -> impl Iterator<Item = &str> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_abbrev_matches_wire_value() {
        for unit in CookingUnit::ALL {
            let json = serde_json::to_string(&unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit.abbrev()));
        }
    }

    #[test]
    fn unit_parses_short_and_long_forms() {
        assert_eq!("tbsp".parse::<CookingUnit>().unwrap(), CookingUnit::Tablespoon);
        assert_eq!("Tablespoon".parse::<CookingUnit>().unwrap(), CookingUnit::Tablespoon);
        assert_eq!("to taste".parse::<CookingUnit>().unwrap(), CookingUnit::ToTaste);
        assert_eq!("none".parse::<CookingUnit>().unwrap(), CookingUnit::None);
        assert!("handful".parse::<CookingUnit>().is_err());
    }

    #[test]
    fn recipe_ingredient_equality_is_structural() {
        let a = RecipeIngredient::new("flour").with_quantity("2", CookingUnit::Cup);
        let b = RecipeIngredient::new("flour").with_quantity("2", CookingUnit::Cup);
        let c = RecipeIngredient::new("flour").with_quantity("3", CookingUnit::Cup);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn instruction_steps_skip_blank_lines() {
        let mut recipe = Recipe::new("Toast".into());
        recipe.instructions = "Slice bread\n\n  Toast it  \n".into();
        let steps: Vec<&str> = recipe.instruction_steps().collect();
        assert_eq!(steps, vec!["Slice bread", "Toast it"]);
    }

    #[test]
    fn recipe_decodes_without_optional_fields() {
        // Entries written before categories/images existed must still load.
        let raw = format!(
            r#"{{"id":"{}","name":"Soup"}}"#,
            Uuid::new_v4()
        );
        let recipe: Recipe = serde_json::from_str(&raw).unwrap();
        assert_eq!(recipe.name, "Soup");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.image.is_none());
    }

    #[test]
    fn category_round_trip() {
        let ingredient = Ingredient::new("Milk".into()).with_category(IngredientCategory::Dairy);
        let json = serde_json::to_string(&ingredient).unwrap();
        assert!(json.contains("\"dairy\""));
        let back: Ingredient = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ingredient);
    }
}
