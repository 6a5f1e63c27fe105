//! TOML configuration for the terminal front end.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Who sits on a side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Human,
    Computer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Search depth in plies for the computer side.
    pub depth: u8,
    /// Node cap for the search arena.
    pub arena_capacity: usize,
    /// Engine driving computer seats: "arena" or "random".
    pub engine: String,
    pub white: Seat,
    pub black: Seat,
    /// Where to write the plain-text game log when a game ends.
    pub log_path: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            depth: 4,
            arena_capacity: arena_engine::DEFAULT_NODE_CAPACITY,
            engine: "arena".to_string(),
            white: Seat::Human,
            black: Seat::Computer,
            log_path: None,
        }
    }
}

impl CliConfig {
    /// Load from a TOML file; a missing file is simply the defaults.
    pub fn load(path: &Path) -> Result<CliConfig, String> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CliConfig::default()),
            Err(e) => return Err(format!("Failed to read {}: {}", path.display(), e)),
        };
        toml::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
