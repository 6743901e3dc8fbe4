use clap::{Parser, Subcommand};
use larder::error::{LarderError, Result};
use larder::model::{CookingUnit, RecipeIngredient};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "larder", version)]
#[command(about = "Pantry-aware recipe tracker for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the recipe catalog
    #[command(subcommand, alias = "r")]
    Recipe(RecipeCommand),

    /// Manage the pantry
    #[command(subcommand, alias = "p")]
    Pantry(PantryCommand),

    /// List recipes cookable from the current pantry
    #[command(alias = "cook")]
    Available,

    /// Export recipes and pantry to a JSON file
    Export {
        path: PathBuf,
    },

    /// Import recipes and pantry from a JSON file
    Import {
        path: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., default-unit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecipeCommand {
    /// Add a recipe
    #[command(alias = "n")]
    Add {
        name: String,

        /// Ingredient as NAME[:QUANTITY[:UNIT]] (repeatable)
        #[arg(short, long = "ingredient", value_name = "SPEC")]
        ingredients: Vec<String>,

        /// Instruction text, one step per line
        #[arg(long)]
        instructions: Option<String>,

        /// Attach an image file
        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,

        /// Write the instructions in $EDITOR
        #[arg(short, long)]
        edit: bool,
    },

    /// List the catalog
    #[command(alias = "ls")]
    List,

    /// Show one or more recipes in full
    #[command(alias = "v")]
    View {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Edit a recipe (given fields replace the stored ones wholesale)
    #[command(alias = "e")]
    Edit {
        index: usize,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// Replacement ingredient list as NAME[:QUANTITY[:UNIT]] (repeatable)
        #[arg(short, long = "ingredient", value_name = "SPEC")]
        ingredients: Vec<String>,

        /// Replacement instruction text
        #[arg(long)]
        instructions: Option<String>,

        /// Replacement image file
        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,

        /// Rewrite the instructions in $EDITOR
        #[arg(short, long)]
        edit: bool,
    },

    /// Remove one or more recipes
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PantryCommand {
    /// Add ingredients to the pantry
    #[command(alias = "a")]
    Add {
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,

        /// Category tag (produce, dairy, meat, grain, spice, other)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the pantry
    #[command(alias = "ls")]
    List,

    /// Remove one or more pantry entries
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },
}

/// Parse an ingredient spec of the form `NAME[:QUANTITY[:UNIT]]`.
/// A spec without a unit falls back to the configured default.
pub fn parse_ingredient_spec(spec: &str, default_unit: CookingUnit) -> Result<RecipeIngredient> {
    let mut parts = spec.splitn(3, ':');
    let name = parts.next().unwrap_or("").trim();
    if name.is_empty() {
        return Err(LarderError::Api(format!(
            "Ingredient name missing in '{}'",
            spec
        )));
    }
    let quantity = parts.next().unwrap_or("").trim().to_string();
    let unit = match parts.next().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw
            .parse::<CookingUnit>()
            .map_err(LarderError::Api)?,
        _ => default_unit,
    };

    Ok(RecipeIngredient {
        name: name.to_string(),
        quantity,
        unit,
    })
}

pub fn parse_ingredient_specs(
    specs: &[String],
    default_unit: CookingUnit,
) -> Result<Vec<RecipeIngredient>> {
    specs
        .iter()
        .map(|spec| parse_ingredient_spec(spec, default_unit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_with_all_parts() {
        let parsed = parse_ingredient_spec("flour:2:cup", CookingUnit::None).unwrap();
        assert_eq!(parsed.name, "flour");
        assert_eq!(parsed.quantity, "2");
        assert_eq!(parsed.unit, CookingUnit::Cup);
    }

    #[test]
    fn bare_name_uses_the_default_unit() {
        let parsed = parse_ingredient_spec("egg", CookingUnit::Gram).unwrap();
        assert_eq!(parsed.name, "egg");
        assert_eq!(parsed.quantity, "");
        assert_eq!(parsed.unit, CookingUnit::Gram);
    }

    #[test]
    fn quantity_is_free_text() {
        let parsed = parse_ingredient_spec("butter:a knob", CookingUnit::None).unwrap();
        assert_eq!(parsed.quantity, "a knob");
    }

    #[test]
    fn bad_unit_and_missing_name_are_rejected() {
        assert!(parse_ingredient_spec("salt:1:handful", CookingUnit::None).is_err());
        assert!(parse_ingredient_spec(":2:cup", CookingUnit::None).is_err());
    }
}
