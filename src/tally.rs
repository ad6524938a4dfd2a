use std::collections::HashMap;

/// Case-folds an address to its tally key. Applies to the whole string,
/// local part included.
pub fn normalize_address(address: &str) -> String {
    address.to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEntry {
    pub address: String,
    pub count: u64,
}

/// Occurrence counts per normalized address. Entries keep first-seen order.
#[derive(Debug, Default)]
pub struct EmailTally {
    entries: Vec<TallyEntry>,
    index: HashMap<String, usize>,
}

impl EmailTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one sighting of `address`. Returns `true` when the normalized
    /// address had not been seen before.
    pub fn record(&mut self, address: &str) -> bool {
        let key = normalize_address(address);
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].count += 1;
            return false;
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(TallyEntry {
            address: key,
            count: 1,
        });
        true
    }

    pub fn snapshot(&self) -> &[TallyEntry] {
        &self.entries
    }

    pub fn count(&self, address: &str) -> u64 {
        self.index
            .get(&normalize_address(address))
            .map_or(0, |&slot| self.entries[slot].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
