//! Selection state and its location-string mirror.
//!
//! The selected entry is always derivable from a query string of the form
//! `db=<id>` (a leading `?` and unrelated parameters are tolerated). User
//! selections push a new location onto [`History`]; Back/Forward move the
//! cursor and the selection is re-derived from whatever location the cursor
//! lands on, so the visible document always matches the current location.

use super::catalog::{Catalog, DocEntry};

/// Query parameter naming the selected entry.
const DB_PARAM: &str = "db";

/// Extract the `db` parameter value from a query string, if present.
pub fn db_param(query: &str) -> Option<&str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == DB_PARAM && !value.is_empty()).then_some(value)
    })
}

/// Resolve a query string to a catalog entry. An unrecognized or missing id
/// silently falls back to the first entry; there is no not-found state.
pub fn initial_selection<'a>(catalog: &'a Catalog, query: &str) -> &'a DocEntry {
    db_param(query)
        .and_then(|id| catalog.find(id))
        .unwrap_or_else(|| catalog.first())
}

/// The location string for an entry id.
pub fn location_for(id: &str) -> String {
    format!("{}={}", DB_PARAM, id)
}

/// Linear back/forward history of location strings, pushState-style:
/// pushing while the cursor is mid-stack drops the forward tail.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new(initial: String) -> Self {
        Self { entries: vec![initial], cursor: 0 }
    }

    /// Rebuild from persisted parts. Returns None when they are inconsistent.
    pub fn from_parts(entries: Vec<String>, cursor: usize) -> Option<Self> {
        if entries.is_empty() || cursor >= entries.len() {
            return None;
        }
        Some(Self { entries, cursor })
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Push a new location, discarding any forward entries. Pushing the
    /// current location again is a no-op.
    pub fn push(&mut self, location: String) {
        if self.current() == location {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog::{ContentBlock, DocEntry};

    fn catalog() -> Catalog {
        let entries = ["mongodb", "postgresql"]
            .iter()
            .map(|id| DocEntry {
                id: id.to_string(),
                name: id.to_string(),
                content: vec![ContentBlock::title("Installation")],
            })
            .collect();
        Catalog::new(entries).unwrap()
    }

    #[test]
    fn test_db_param_parsing() {
        assert_eq!(db_param("?db=mongodb"), Some("mongodb"));
        assert_eq!(db_param("db=mongodb"), Some("mongodb"));
        assert_eq!(db_param("?tab=intro&db=sqlite"), Some("sqlite"));
        assert_eq!(db_param("?db="), None);
        assert_eq!(db_param("?tab=intro"), None);
        assert_eq!(db_param(""), None);
    }

    #[test]
    fn test_every_known_id_resolves_to_itself() {
        let catalog = catalog();
        for entry in catalog.entries() {
            let query = format!("?db={}", entry.id);
            assert_eq!(initial_selection(&catalog, &query).id, entry.id);
        }
    }

    #[test]
    fn test_unknown_or_missing_id_falls_back_to_first() {
        let catalog = catalog();
        assert_eq!(initial_selection(&catalog, "?db=postgresql").id, "postgresql");
        assert_eq!(initial_selection(&catalog, "?db=unknown").id, "mongodb");
        assert_eq!(initial_selection(&catalog, "").id, "mongodb");
        assert_eq!(initial_selection(&catalog, "?other=1").id, "mongodb");
    }

    #[test]
    fn test_history_push_back_forward() {
        let mut history = History::new(location_for("mongodb"));
        history.push(location_for("postgresql"));
        history.push(location_for("sqlite"));

        assert_eq!(history.current(), "db=sqlite");
        assert_eq!(history.back(), Some("db=postgresql"));
        assert_eq!(history.back(), Some("db=mongodb"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some("db=postgresql"));
        assert_eq!(history.forward(), Some("db=sqlite"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_tail() {
        let mut history = History::new(location_for("mongodb"));
        history.push(location_for("postgresql"));
        history.push(location_for("sqlite"));
        history.back();
        history.back();

        history.push(location_for("mysql"));
        assert_eq!(history.current(), "db=mysql");
        assert_eq!(history.forward(), None);
        assert_eq!(history.entries(), &["db=mongodb".to_string(), "db=mysql".to_string()]);
    }

    #[test]
    fn test_push_current_location_is_noop() {
        let mut history = History::new(location_for("mongodb"));
        history.push(location_for("mongodb"));
        assert_eq!(history.entries().len(), 1);
    }

    #[test]
    fn test_from_parts_rejects_inconsistent_state() {
        assert!(History::from_parts(Vec::new(), 0).is_none());
        assert!(History::from_parts(vec!["db=mongodb".to_string()], 1).is_none());
        let restored = History::from_parts(
            vec!["db=mongodb".to_string(), "db=sqlite".to_string()],
            1,
        )
        .unwrap();
        assert_eq!(restored.current(), "db=sqlite");
    }
}
