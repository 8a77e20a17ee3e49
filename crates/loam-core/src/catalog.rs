//! The ordered, name-keyed registry of stampable patterns.

use indexmap::IndexMap;

use crate::error::CatalogError;
use crate::pattern::Pattern;

/// Insertion-ordered pattern registry.
///
/// Order is load-bearing: entry `i` is selection index `i` and occupies
/// the `i`-th slot of the picker strip, so iteration always yields
/// patterns in registration order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: IndexMap<String, Pattern>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pattern under its own name, appending it to the order.
    pub fn insert(&mut self, pattern: Pattern) -> Result<(), CatalogError> {
        if self.entries.contains_key(pattern.name()) {
            return Err(CatalogError::DuplicateName {
                name: pattern.name().to_owned(),
            });
        }
        self.entries.insert(pattern.name().to_owned(), pattern);
        Ok(())
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The pattern at selection index `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.entries.get_index(index).map(|(_, p)| p)
    }

    /// Looks a pattern up by name.
    pub fn get_by_name(&self, name: &str) -> Option<&Pattern> {
        self.entries.get(name)
    }

    /// The selection index registered for `name`, if any.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    /// Iterates patterns in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.entries.values()
    }

    /// Largest extents over all patterns as `(rows, cols)`, or `None`
    /// when the catalog is empty. The maxima are taken per axis and may
    /// come from different patterns.
    pub fn max_extent(&self) -> Option<(u32, u32)> {
        let mut it = self.entries.values();
        let first = it.next()?;
        let mut max = (first.rows(), first.cols());
        for p in it {
            max.0 = max.0.max(p.rows());
            max.1 = max.1.max(p.cols());
        }
        Some(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(name: &str, rows: &[&str]) -> Pattern {
        Pattern::parse(name, rows).unwrap()
    }

    #[test]
    fn insertion_order_defines_selection_indices() {
        let mut c = Catalog::new();
        c.insert(pattern("b", &["#"])).unwrap();
        c.insert(pattern("a", &["##"])).unwrap();
        c.insert(pattern("z", &["###"])).unwrap();

        let names: Vec<&str> = c.iter().map(Pattern::name).collect();
        assert_eq!(names, ["b", "a", "z"]);
        assert_eq!(c.get(1).map(Pattern::name), Some("a"));
        assert_eq!(c.index_of("z"), Some(2));
        assert_eq!(c.get(3), None);
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut c = Catalog::new();
        c.insert(pattern("dup", &["#"])).unwrap();
        let err = c.insert(pattern("dup", &["##"])).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName { name: "dup".into() });
        // First registration survives.
        assert_eq!(c.len(), 1);
        assert_eq!(c.get_by_name("dup").map(Pattern::cols), Some(1));
    }

    #[test]
    fn max_extent_spans_different_patterns() {
        let mut c = Catalog::new();
        assert_eq!(c.max_extent(), None);
        c.insert(pattern("tall", &["#", "#", "#"])).unwrap();
        c.insert(pattern("wide", &["####"])).unwrap();
        assert_eq!(c.max_extent(), Some((3, 4)));
    }
}
