//! Persistence for best-ever records.
//!
//! Two numeric records (best score, best lines cleared) stored as a small
//! JSON file in the platform config directory. A missing or unreadable file
//! defaults to zero records; writes happen only when the runner observes a
//! new record.

use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::types::BestScores;

const SAVEFILE_NAME: &str = "blockfall_best.json";

/// Handle to the savefile location.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Store under the platform config directory (falling back to the
    /// current directory when none is known).
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(SAVEFILE_NAME);
        Self { path }
    }

    /// Store at an explicit path (used by tests).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read the stored records. Missing or malformed files yield zeros.
    pub fn load(&self) -> BestScores {
        let mut contents = String::new();
        let read = File::open(&self.path)
            .and_then(|mut file| file.read_to_string(&mut contents));
        if read.is_err() {
            return BestScores::default();
        }
        serde_json::from_str(&contents).unwrap_or_default()
    }

    /// Write the records, replacing any previous file.
    pub fn save(&self, best: BestScores) -> Result<()> {
        let contents = serde_json::to_string(&best)?;
        let mut file = File::create(&self.path)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new()
    }
}
