use crate::store::{KeyValueStore, StoreError};

pub const HISTORY_KEY: &str = "calcHistory";

/// Bounded list of `"<expression> = <result>"` lines, most recent first.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: Vec<String>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Records a finished calculation, dropping the oldest entries past the limit.
    pub fn push(&mut self, expression: &str, result: &str) {
        self.entries
            .insert(0, format!("{} = {}", expression.trim(), result));
        self.entries.truncate(self.limit);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The result part of the entry at `index`.
    pub fn result_at(&self, index: usize) -> Option<&str> {
        self.entries
            .get(index)
            .and_then(|entry| entry.split_once('='))
            .map(|(_, result)| result.trim())
    }

    /// Reads the history saved under [`HISTORY_KEY`]; absent means empty.
    pub fn load(store: &impl KeyValueStore, limit: usize) -> Result<Self, StoreError> {
        let mut entries: Vec<String> = match store.get(HISTORY_KEY) {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        entries.truncate(limit);
        Ok(Self { entries, limit })
    }

    /// Writes the history as a JSON array; an empty history removes the key.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        if self.entries.is_empty() {
            return store.remove(HISTORY_KEY);
        }
        let json = serde_json::to_string(&self.entries)?;
        store.set(HISTORY_KEY, &json)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_most_recent_first() {
        let mut history = History::default();
        history.push("1 + 1", "2");
        history.push("2 × 3", "6");

        assert_eq!(history.entries(), ["2 × 3 = 6", "1 + 1 = 2"]);
        assert_eq!(history.result_at(0), Some("6"));
        assert_eq!(history.result_at(1), Some("2"));
        assert_eq!(history.result_at(2), None);
    }

    #[test]
    fn test_bounded_to_limit() {
        let mut history = History::new(20);
        for i in 0..25 {
            history.push(&format!("{} + 0", i), &i.to_string());
        }

        assert_eq!(history.len(), 20);
        assert_eq!(history.entries()[0], "24 + 0 = 24");
        assert_eq!(history.entries()[19], "5 + 0 = 5");
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        let mut history = History::default();
        history.push("2 ^ 10", "1024");
        history.save(&mut store).unwrap();

        assert_eq!(
            store.get(HISTORY_KEY).as_deref(),
            Some("[\"2 ^ 10 = 1024\"]")
        );
        assert_eq!(History::load(&store, 20).unwrap(), history);
    }

    #[test]
    fn test_load_truncates_to_limit() {
        let mut store = MemoryStore::new();
        store
            .set(HISTORY_KEY, "[\"a = 1\", \"b = 2\", \"c = 3\"]")
            .unwrap();

        let history = History::load(&store, 2).unwrap();
        assert_eq!(history.entries(), ["a = 1", "b = 2"]);
    }

    #[test]
    fn test_clearing_removes_the_key() {
        let mut store = MemoryStore::new();
        let mut history = History::default();
        history.push("1", "1");
        history.save(&mut store).unwrap();

        history.clear();
        history.save(&mut store).unwrap();
        assert_eq!(store.get(HISTORY_KEY), None);
    }

    #[test]
    fn test_corrupt_history() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, "not a list").unwrap();
        assert!(matches!(
            History::load(&store, 20),
            Err(StoreError::Json(_))
        ));
    }
}
