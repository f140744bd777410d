//! Persisted CLI settings

use serde::{Deserialize, Serialize};

/// User-facing knobs saved between sessions as pretty JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Board dimension for new games
    pub size: usize,
    /// Search depth in plies
    pub depth: u8,
    /// Engine spec: "alphabeta", "minimax", or "random"
    pub engine: String,
    /// Heuristic spec: "constructive" or "conflicts"
    pub heuristic: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: 8,
            depth: 4,
            engine: "alphabeta".to_string(),
            heuristic: "constructive".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }
}
