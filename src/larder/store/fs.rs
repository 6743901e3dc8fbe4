use super::{Slot, SlotBackend};
use crate::error::{LarderError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed slots: `<root>/recipes.json` and `<root>/pantry.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, slot: Slot) -> PathBuf {
        self.root.join(format!("{}.json", slot.key()))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LarderError::Io)?;
        }
        Ok(())
    }
}

impl SlotBackend for FsBackend {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(path).map(Some).map_err(LarderError::Io)
    }

    fn write(&mut self, slot: Slot, payload: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.slot_path(slot), payload).map_err(LarderError::Io)
    }
}
