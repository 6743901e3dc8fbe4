use crate::commands::{CmdMessage, CmdResult};
use crate::config::LarderConfig;
use crate::error::Result;
use crate::model::CookingUnit;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDefaultUnit(CookingUnit),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = LarderConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetDefaultUnit(unit) => {
            config.default_unit = unit;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "default-unit set to {}",
                unit.label()
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_returns_current_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), LarderConfig::default());
    }

    #[test]
    fn set_persists_the_unit() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), ConfigAction::SetDefaultUnit(CookingUnit::Gram)).unwrap();

        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().default_unit, CookingUnit::Gram);
    }
}
