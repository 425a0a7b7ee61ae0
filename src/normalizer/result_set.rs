use indexmap::IndexSet;

/// Numbers accepted so far, in the order they were found. Exact duplicates
/// are ignored, the first occurrence keeps its position.
#[derive(Debug, Default)]
pub(super) struct ResultSet {
    numbers: IndexSet<String>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the number was already present.
    pub fn insert(&mut self, number: String) -> bool {
        self.numbers.insert(number)
    }

    /// Returns whether `cleaned` appears inside an accepted number, in which
    /// case completing it with the dialing prefix can only produce a less
    /// specific duplicate.
    pub fn subsumes(&self, cleaned: &str) -> bool {
        self.numbers.iter().any(|number| number.contains(cleaned))
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.numbers.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ResultSet;

    #[test]
    fn keeps_first_seen_order_without_duplicates() {
        let mut results = ResultSet::new();
        assert!(results.insert("+40773818041".to_owned()));
        assert!(results.insert("+97172273000".to_owned()));
        assert!(!results.insert("+40773818041".to_owned()));
        assert_eq!(results.len(), 2);
        assert_eq!(results.into_vec(), vec!["+40773818041", "+97172273000"]);
    }

    #[test]
    fn subsumes_contained_digits() {
        let mut results = ResultSet::new();
        assert!(!results.subsumes("554396334"));
        results.insert("+971554396334".to_owned());
        assert!(results.subsumes("554396334"));
        assert!(results.subsumes("396334"));
        assert!(results.subsumes(""));
        assert!(!results.subsumes("0554396334"));
    }
}
