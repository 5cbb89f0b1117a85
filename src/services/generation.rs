use std::sync::Arc;

use dashmap::DashMap;

/// Hands out monotonically increasing fetch generations per key so
/// overlapping fetches can tell whether they have been superseded by a
/// newer request for the same ticker. A response whose generation is no
/// longer the latest should be discarded by the consumer instead of
/// overwriting newer state.
#[derive(Clone, Default)]
pub struct FetchLedger {
    generations: Arc<DashMap<String, u64>>,
}

impl FetchLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new fetch for `key`. The returned ticket stays current
    /// until another fetch for the same key begins.
    pub fn begin(&self, key: &str) -> FetchTicket {
        let mut entry = self.generations.entry(key.to_string()).or_insert(0);
        *entry += 1;
        let generation = *entry;
        drop(entry);

        FetchTicket {
            ledger: self.clone(),
            key: key.to_string(),
            generation,
        }
    }

    fn latest(&self, key: &str) -> u64 {
        self.generations.get(key).map(|g| *g).unwrap_or(0)
    }
}

/// One registered fetch attempt.
pub struct FetchTicket {
    ledger: FetchLedger,
    key: String,
    generation: u64,
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.ledger.latest(&self.key) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_fetch_is_current() {
        let ledger = FetchLedger::new();
        let ticket = ledger.begin("financial-health:AAPL");
        assert!(ticket.is_current());
    }

    #[test]
    fn newer_fetch_supersedes_older_one() {
        let ledger = FetchLedger::new();
        let first = ledger.begin("financial-health:AAPL");
        let second = ledger.begin("financial-health:AAPL");
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn keys_are_independent() {
        let ledger = FetchLedger::new();
        let aapl = ledger.begin("growth-outlook:AAPL");
        let tsla = ledger.begin("growth-outlook:TSLA");
        assert!(aapl.is_current());
        assert!(tsla.is_current());
    }
}
