//! Lookup from option id to option data and selected state.
//!
//! The index is rebuilt from scratch whenever the options or the selected
//! values change. Option sets are expected to stay in the tens to low
//! thousands, so a full rebuild is cheaper than tracking patches.

use super::types::{DropdownItem, OptionId};
use std::collections::HashMap;
use tracing::warn;

/// An option together with whether it is part of the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedItem {
    /// The option.
    pub item: DropdownItem,
    /// Whether the option's id is in the selected values.
    pub is_selected: bool,
}

/// Id-keyed view of the options, annotated with selection state.
#[derive(Debug, Clone, Default)]
pub struct OptionIndex {
    entries: HashMap<OptionId, IndexedItem>,
}

impl OptionIndex {
    /// Builds the index. When two options share an id the later one wins.
    pub fn build(options: &[DropdownItem], values: &[OptionId]) -> Self {
        let mut entries = HashMap::with_capacity(options.len());
        for item in options {
            let indexed = IndexedItem {
                item: item.clone(),
                is_selected: values.contains(&item.id),
            };
            if entries.insert(item.id.clone(), indexed).is_some() {
                warn!(id = %item.id, "duplicate dropdown option id, keeping the last one");
            }
        }
        Self { entries }
    }

    /// Looks up an option by id.
    pub fn get(&self, id: &OptionId) -> Option<&IndexedItem> {
        self.entries.get(id)
    }

    /// Whether `id` names a known option that is selected.
    pub fn is_selected(&self, id: &OptionId) -> bool {
        self.entries.get(id).is_some_and(|e| e.is_selected)
    }

    /// Number of distinct option ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no options.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The options named by `values`, in selection order. Ids with no
    /// matching option are skipped.
    pub fn selected_items<'a>(&'a self, values: &'a [OptionId]) -> Vec<&'a DropdownItem> {
        values
            .iter()
            .filter_map(|id| self.entries.get(id).map(|e| &e.item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<DropdownItem> {
        vec![
            DropdownItem::new(1, "A"),
            DropdownItem::new(2, "B"),
            DropdownItem::new(3, "C"),
        ]
    }

    #[test]
    fn test_selected_flag_follows_values() {
        let index = OptionIndex::build(&fruit(), &[OptionId::from(2)]);
        assert_eq!(index.len(), 3);
        assert!(index.is_selected(&OptionId::from(2)));
        assert!(!index.is_selected(&OptionId::from(1)));
        assert_eq!(index.get(&OptionId::from(2)).map(|e| e.item.value.as_str()), Some("B"));
    }

    #[test]
    fn test_unknown_selected_ids_are_absent() {
        let values = vec![OptionId::from(9), OptionId::from(3)];
        let index = OptionIndex::build(&fruit(), &values);
        assert!(index.get(&OptionId::from(9)).is_none());
        assert!(!index.is_selected(&OptionId::from(9)));
        let labels: Vec<_> = index
            .selected_items(&values)
            .iter()
            .map(|i| i.value.clone())
            .collect();
        assert_eq!(labels, vec!["C"]);
    }

    #[test]
    fn test_selected_items_keep_selection_order() {
        let values = vec![OptionId::from(3), OptionId::from(1)];
        let index = OptionIndex::build(&fruit(), &values);
        let labels: Vec<_> = index
            .selected_items(&values)
            .iter()
            .map(|i| i.value.as_str())
            .collect();
        assert_eq!(labels, vec!["C", "A"]);
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let options = vec![DropdownItem::new(1, "first"), DropdownItem::new(1, "second")];
        let index = OptionIndex::build(&options, &[]);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get(&OptionId::from(1)).map(|e| e.item.value.as_str()),
            Some("second")
        );
    }

    #[test]
    fn test_empty_index() {
        let index = OptionIndex::build(&[], &[OptionId::from(1)]);
        assert!(index.is_empty());
    }
}
