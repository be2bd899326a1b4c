#![forbid(unsafe_code)]

//! Item catalog and picker selection.
//!
//! The catalog is the fixed list of placeable item names shown as cells in
//! the bottom card. [`Picker`] mirrors the platform collection view's
//! select/deselect delegate pair: at most one index is selected, selecting an
//! out-of-range index is ignored, and deselecting only clears the selection
//! if it names the currently selected index.

use tracing::debug;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The fixed list of placeable item names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<String>,
}

impl Catalog {
    /// Create a catalog from item names.
    #[must_use]
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of items (cells) in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item name at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Iterate over the item names in cell order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl Default for Catalog {
    /// The stock furniture catalog.
    fn default() -> Self {
        Self::new(["cup", "vase", "boxing", "table"])
    }
}

// ---------------------------------------------------------------------------
// Picker
// ---------------------------------------------------------------------------

/// The catalog plus its at-most-one selected cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picker {
    catalog: Catalog,
    selected: Option<usize>,
}

impl Picker {
    /// Create a picker with nothing selected.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: None,
        }
    }

    /// Select the cell at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.catalog.len() {
            debug!(index, item = self.catalog.get(index), "picker item selected");
            self.selected = Some(index);
        }
    }

    /// Deselect the cell at `index` if it is the current selection.
    pub fn deselect(&mut self, index: usize) {
        if self.selected == Some(index) {
            self.selected = None;
        }
    }

    /// Currently selected index, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Name of the currently selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&str> {
        self.selected.and_then(|i| self.catalog.get(i))
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_catalog_order() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.iter().collect::<Vec<_>>(),
            ["cup", "vase", "boxing", "table"]
        );
    }

    #[test]
    fn select_then_read_back() {
        let mut picker = Picker::default();
        assert_eq!(picker.selected_item(), None);
        picker.select(1);
        assert_eq!(picker.selected_item(), Some("vase"));
        assert_eq!(picker.selected_index(), Some(1));
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut picker = Picker::default();
        picker.select(99);
        assert_eq!(picker.selected_item(), None);
        picker.select(0);
        picker.select(99);
        assert_eq!(picker.selected_item(), Some("cup"));
    }

    #[test]
    fn deselect_only_clears_matching_index() {
        let mut picker = Picker::default();
        picker.select(2);
        picker.deselect(1);
        assert_eq!(picker.selected_index(), Some(2));
        picker.deselect(2);
        assert_eq!(picker.selected_index(), None);
    }

    #[test]
    fn reselect_replaces_previous_selection() {
        let mut picker = Picker::default();
        picker.select(0);
        picker.select(3);
        assert_eq!(picker.selected_item(), Some("table"));
    }
}
