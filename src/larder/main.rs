use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use larder::api::{
    CmdMessage, ConfigAction, LarderApi, MessageLevel, PantryRow, RecipeDraft, RecipeRow,
    RecipeUpdate,
};
use larder::config::LarderConfig;
use larder::editor::edit_instructions;
use larder::error::{LarderError, Result};
use larder::model::{CookingUnit, IngredientCategory};
use larder::store::fs::FsBackend;
use larder::store::RecipeStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{parse_ingredient_specs, Cli, Commands, PantryCommand, RecipeCommand};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: LarderApi<FsBackend>,
    default_unit: CookingUnit,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Recipe(cmd)) => handle_recipe(&mut ctx, cmd),
        Some(Commands::Pantry(cmd)) => handle_pantry(&mut ctx, cmd),
        Some(Commands::Available) => handle_available(&ctx),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "larder", "larder")
            .ok_or_else(|| LarderError::Store("Could not determine the data directory".into()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = LarderConfig::load(&data_dir).unwrap_or_default();
    let store = RecipeStore::open(FsBackend::new(data_dir.clone()))?;
    let api = LarderApi::new(store, data_dir);

    Ok(AppContext {
        api,
        default_unit: config.default_unit,
    })
}

fn handle_recipe(ctx: &mut AppContext, cmd: RecipeCommand) -> Result<()> {
    match cmd {
        RecipeCommand::Add {
            name,
            ingredients,
            instructions,
            image,
            edit,
        } => {
            let instructions = if edit {
                edit_instructions(instructions.as_deref().unwrap_or(""))?
            } else {
                instructions.unwrap_or_default()
            };
            let draft = RecipeDraft {
                name,
                ingredients: parse_ingredient_specs(&ingredients, ctx.default_unit)?,
                instructions,
                image: read_image(image)?,
            };
            let result = ctx.api.add_recipe(draft)?;
            print_messages(&result.messages);
            Ok(())
        }
        RecipeCommand::List => handle_list(ctx),
        RecipeCommand::View { indexes } => {
            let result = ctx.api.view_recipes(&indexes)?;
            print_full_recipes(&result.recipe_rows);
            print_messages(&result.messages);
            Ok(())
        }
        RecipeCommand::Edit {
            index,
            name,
            ingredients,
            instructions,
            image,
            edit,
        } => {
            let instructions = if edit {
                let current = ctx.api.view_recipes(&[index])?;
                let initial = instructions.unwrap_or_else(|| {
                    current.recipe_rows[0].recipe.instructions.clone()
                });
                Some(edit_instructions(&initial)?)
            } else {
                instructions
            };
            let update = RecipeUpdate {
                name,
                ingredients: if ingredients.is_empty() {
                    None
                } else {
                    Some(parse_ingredient_specs(&ingredients, ctx.default_unit)?)
                },
                instructions,
                image: read_image(image)?,
            };
            let result = ctx.api.update_recipe(index, update)?;
            print_messages(&result.messages);
            Ok(())
        }
        RecipeCommand::Remove { indexes } => {
            let result = ctx.api.remove_recipes(&indexes)?;
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_pantry(ctx: &mut AppContext, cmd: PantryCommand) -> Result<()> {
    match cmd {
        PantryCommand::Add { names, category } => {
            let category = category
                .map(|raw| raw.parse::<IngredientCategory>().map_err(LarderError::Api))
                .transpose()?;
            let result = ctx.api.add_ingredients(&names, category)?;
            print_messages(&result.messages);
            Ok(())
        }
        PantryCommand::List => {
            let result = ctx.api.pantry()?;
            print_pantry_rows(&result.pantry_rows);
            print_messages(&result.messages);
            Ok(())
        }
        PantryCommand::Remove { indexes } => {
            let result = ctx.api.remove_ingredients(&indexes)?;
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_recipes()?;
    print_recipe_rows(&result.recipe_rows, "No recipes yet.");
    print_messages(&result.messages);
    Ok(())
}

fn handle_available(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.available_recipes()?;
    print_recipe_rows(
        &result.recipe_rows,
        "Nothing cookable from the current pantry.",
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.export(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("default-unit"), None) => ConfigAction::ShowKey("default-unit".to_string()),
        (Some("default-unit"), Some(v)) => {
            ConfigAction::SetDefaultUnit(v.parse::<CookingUnit>().map_err(LarderError::Api)?)
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("default-unit = {}", config.default_unit.label());
    }
    print_messages(&result.messages);
    Ok(())
}

fn read_image(path: Option<PathBuf>) -> Result<Option<Vec<u8>>> {
    path.map(|p| std::fs::read(p).map_err(LarderError::Io))
        .transpose()
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const COOKABLE_MARKER: &str = "✓";

fn print_recipe_rows(rows: &[RecipeRow], empty_message: &str) {
    if rows.is_empty() {
        println!("{}", empty_message);
        return;
    }

    for row in rows {
        let idx_str = format!("{:>3}. ", row.index);
        let marker = if row.available() {
            format!(" {} ", COOKABLE_MARKER)
        } else {
            "   ".to_string()
        };

        let summary = recipe_summary(row);
        let fixed_width = marker.width() + idx_str.width() + TIME_WIDTH;
        let available_width = LINE_WIDTH.saturating_sub(fixed_width);
        let summary = truncate_to_width(&summary, available_width);
        let padding = available_width.saturating_sub(summary.width());

        println!(
            "{}{}{}{}{}",
            if row.available() {
                marker.green()
            } else {
                marker.normal()
            },
            idx_str,
            summary,
            " ".repeat(padding),
            format_time_ago(row.recipe.created_at).dimmed()
        );
    }
}

fn recipe_summary(row: &RecipeRow) -> String {
    let count = row.recipe.ingredients.len();
    let counted = match count {
        0 => row.recipe.name.clone(),
        1 => format!("{} (1 ingredient)", row.recipe.name),
        n => format!("{} ({} ingredients)", row.recipe.name, n),
    };
    if row.available() {
        counted
    } else {
        format!("{} (missing: {})", counted, row.missing.join(", "))
    }
}

fn print_pantry_rows(rows: &[PantryRow]) {
    if rows.is_empty() {
        println!("The pantry is empty.");
        return;
    }

    for row in rows {
        let idx_str = format!("{:>3}. ", row.index);
        let name = match row.ingredient.category {
            Some(category) => format!("{} ({})", row.ingredient.name, category.label()),
            None => row.ingredient.name.clone(),
        };

        let fixed_width = idx_str.width() + TIME_WIDTH;
        let available_width = LINE_WIDTH.saturating_sub(fixed_width);
        let name = truncate_to_width(&name, available_width);
        let padding = available_width.saturating_sub(name.width());

        println!(
            "{}{}{}{}",
            idx_str,
            name,
            " ".repeat(padding),
            format_time_ago(row.ingredient.added_at).dimmed()
        );
    }
}

fn print_full_recipes(rows: &[RecipeRow]) {
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            format!("{}.", row.index).yellow(),
            row.recipe.name.bold()
        );
        println!("--------------------------------");
        if row.available() {
            println!("{}", "Cookable with the current pantry".green());
        } else {
            println!("{}", format!("Missing: {}", row.missing.join(", ")).yellow());
        }

        if !row.recipe.ingredients.is_empty() {
            println!();
            println!("Ingredients:");
            for ingredient in &row.recipe.ingredients {
                let mut line = String::from("  - ");
                if !ingredient.quantity.is_empty() {
                    line.push_str(&ingredient.quantity);
                    line.push(' ');
                }
                let abbrev = ingredient.unit.abbrev();
                if !abbrev.is_empty() {
                    line.push_str(abbrev);
                    line.push(' ');
                }
                line.push_str(&ingredient.name);
                println!("{}", line);
            }
        }

        let steps: Vec<&str> = row.recipe.instruction_steps().collect();
        if !steps.is_empty() {
            println!();
            println!("Steps:");
            for (n, step) in steps.iter().enumerate() {
                println!("  {}. {}", n + 1, step);
            }
        }

        if let Some(image) = &row.recipe.image {
            println!();
            println!("{}", format!("[image attached, {} bytes]", image.len()).dimmed());
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
