use rustc_hash::FxHashSet;

/// Order-preserving, deduplicated set of host tokens.
///
/// Owned by the coordinator; workers never touch it, so there is no locking.
#[derive(Debug, Default)]
pub struct Accumulator {
    seen: FxHashSet<Box<str>>,
    entries: Vec<Box<str>>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `token` unless it was added before. Returns true if it was new.
    pub fn add(&mut self, token: &str) -> bool {
        if self.seen.contains(token) {
            return false;
        }
        let token: Box<str> = token.into();
        self.seen.insert(token.clone());
        self.entries.push(token);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tokens in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| &**e)
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries.into_iter().map(String::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order_without_duplicates() {
        let mut acc = Accumulator::new();
        assert!(acc.add("b.com"));
        assert!(acc.add("a.com"));
        assert!(!acc.add("b.com"));
        assert!(acc.add("c.com"));
        assert!(!acc.add("a.com"));

        assert_eq!(acc.len(), 3);
        assert_eq!(acc.iter().collect::<Vec<_>>(), vec!["b.com", "a.com", "c.com"]);
        assert_eq!(acc.into_entries(), vec!["b.com", "a.com", "c.com"]);
    }

    #[test]
    fn test_new_is_empty() {
        let acc = Accumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.iter().count(), 0);
    }
}
