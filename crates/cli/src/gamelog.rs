//! Game logging: a plain-text move list and a JSON game record, both
//! produced by walking the history stack.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use chess_core::GameSession;

use crate::render::status_line;

/// Write the played line as numbered move pairs plus a final status line.
pub fn write_text_log(path: &Path, session: &GameSession) -> io::Result<()> {
    fs::write(path, format_moves(session))
}

pub fn format_moves(session: &GameSession) -> String {
    let mut out = String::new();
    // Skip the initial frame; it carries no move.
    for (ply, frame) in session.history().line().iter().skip(1).enumerate() {
        let mv = frame.mv.expect("non-initial frame without a move");
        if ply % 2 == 0 {
            out.push_str(&format!("{}. {}", ply / 2 + 1, mv));
        } else {
            out.push_str(&format!(" {}\n", mv));
        }
    }
    if !out.ends_with('\n') && !out.is_empty() {
        out.push('\n');
    }
    out.push_str(status_line(session.board().check));
    out.push('\n');
    out
}

/// Serializable record of a finished (or abandoned) game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub result: String,
    pub ply: usize,
}

impl GameRecord {
    pub fn from_session(session: &GameSession) -> GameRecord {
        GameRecord {
            moves: session
                .history()
                .line()
                .iter()
                .filter_map(|frame| frame.mv.map(|m| m.to_string()))
                .collect(),
            result: status_line(session.board().check).to_string(),
            ply: session.history().ply(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize game record: {}", e))?;
        fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }
}

#[cfg(test)]
#[path = "gamelog_tests.rs"]
mod gamelog_tests;
