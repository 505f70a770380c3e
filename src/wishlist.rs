//! Session wishlist of catalog indices

use std::collections::BTreeSet;

use crate::catalog::Catalog;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    items: BTreeSet<usize>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `actual`. Returns true if it is now wishlisted.
    pub fn toggle(&mut self, actual: usize) -> bool {
        if self.items.remove(&actual) {
            false
        } else {
            self.items.insert(actual);
            true
        }
    }

    pub fn contains(&self, actual: usize) -> bool {
        self.items.contains(&actual)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().copied()
    }

    pub fn names<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a str> + 'a {
        self.iter()
            .filter_map(|i| catalog.get(i))
            .map(|p| p.name.as_str())
    }
}
