//! External editor integration for writing recipe instructions.

use crate::error::{LarderError, Result};
use std::env;
use std::fs;
use std::process::Command;

const BUFFER_HEADER: &str = "# One step per line. Lines starting with '#' are ignored.\n";

/// Gets the editor command from the environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(LarderError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens the user's editor pre-filled with the current instructions and
/// returns the edited text, comment lines stripped.
pub fn edit_instructions(initial: &str) -> Result<String> {
    let temp_file = env::temp_dir().join("larder_instructions.txt");
    fs::write(&temp_file, format!("{}{}", BUFFER_HEADER, initial)).map_err(LarderError::Io)?;

    let editor = get_editor()?;
    let status = Command::new(&editor)
        .arg(&temp_file)
        .status()
        .map_err(|e| LarderError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;
    if !status.success() {
        let _ = fs::remove_file(&temp_file);
        return Err(LarderError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    let buffer = fs::read_to_string(&temp_file).map_err(LarderError::Io)?;
    let _ = fs::remove_file(&temp_file);
    Ok(strip_comments(&buffer))
}

fn strip_comments(buffer: &str) -> String {
    buffer
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_comments_removes_header_and_inline_comments() {
        let buffer = format!("{}Whisk eggs\n# a note to self\nFry gently\n", BUFFER_HEADER);
        assert_eq!(strip_comments(&buffer), "Whisk eggs\nFry gently");
    }

    #[test]
    fn strip_comments_on_empty_buffer() {
        assert_eq!(strip_comments(BUFFER_HEADER), "");
    }
}
