//! Persist the navigation state across runs.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;
use super::navigation::History;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub location: String,
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default)]
    pub cursor: usize,
}

impl SessionData {
    pub fn from_history(history: &History) -> Self {
        Self {
            location: history.current().to_string(),
            history: history.entries().to_vec(),
            cursor: history.cursor(),
        }
    }

    /// Rebuild the history stack; falls back to a fresh single-entry
    /// history when the persisted parts do not line up.
    pub fn into_history(self) -> History {
        History::from_parts(self.history, self.cursor)
            .unwrap_or_else(|| History::new(self.location))
    }
}

/// Returns the session file path: data_dir/metadocs/session.json
pub fn session_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("metadocs");
    path.push("session.json");
    path
}

/// Save the current navigation state to disk.
pub fn save_session(history: &History) -> Result<()> {
    write_session(&session_path(), &SessionData::from_history(history))
}

/// Load the previous session, if one was saved and parses.
pub fn load_session() -> Option<SessionData> {
    read_session(&session_path())
}

fn write_session(path: &Path, data: &SessionData) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

fn read_session(path: &Path) -> Option<SessionData> {
    let contents = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(data) => Some(data),
        Err(e) => {
            eprintln!("Failed to parse session: {}. Starting fresh.", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigation::location_for;

    #[test]
    fn test_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut history = History::new(location_for("mongodb"));
        history.push(location_for("postgresql"));
        history.back();

        write_session(&path, &SessionData::from_history(&history)).unwrap();
        let restored = read_session(&path).unwrap().into_history();
        assert_eq!(restored, history);
        assert_eq!(restored.current(), "db=mongodb");
    }

    #[test]
    fn test_missing_session_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_session(&dir.path().join("nope.json")).is_none());
    }

    #[test]
    fn test_corrupt_session_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(read_session(&path).is_none());
    }

    #[test]
    fn test_inconsistent_parts_fall_back_to_location() {
        let data = SessionData {
            location: "db=sqlite".to_string(),
            history: Vec::new(),
            cursor: 7,
        };
        let history = data.into_history();
        assert_eq!(history.current(), "db=sqlite");
        assert_eq!(history.entries().len(), 1);
    }
}
