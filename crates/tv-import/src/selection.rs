//! Selection tree state

use indexmap::IndexSet;
use tracing::debug;

use tv_data::{DatasetIndex, DatasetRef};

/// How the checked set changed relative to the previous selection
///
/// The transitions drive different range-recomputation policies; see the
/// range engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTransition {
    /// Empty selection became non-empty
    BecameNonEmpty,
    /// Non-empty selection was cleared
    BecameEmpty,
    /// Selection changed but stayed non-empty
    StillNonEmpty,
    /// Selection stayed empty
    StillEmpty,
}

/// Ordered, duplicate-free set of checked leaves
///
/// Insertion order is the user's check order; the same leaf cannot be
/// selected twice.
#[derive(Debug, Default)]
pub struct SelectionState {
    selected: IndexSet<DatasetRef>,
}

impl SelectionState {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole selection with the widget's current checked set
    ///
    /// The tree widget reports the complete checked set on every change,
    /// never a delta. References that do not resolve against the index are
    /// dropped silently as stale-state noise; duplicates keep their first
    /// position.
    pub fn on_check(
        &mut self,
        checked: &[DatasetRef],
        index: &DatasetIndex,
    ) -> SelectionTransition {
        let was_empty = self.selected.is_empty();

        let mut next = IndexSet::with_capacity(checked.len());
        for node in checked {
            if index.resolve(node).is_none() {
                debug!(node = ?node, "dropping unresolvable selection reference");
                continue;
            }
            next.insert(node.clone());
        }
        self.selected = next;

        match (was_empty, self.selected.is_empty()) {
            (true, false) => SelectionTransition::BecameNonEmpty,
            (false, true) => SelectionTransition::BecameEmpty,
            (false, false) => SelectionTransition::StillNonEmpty,
            (true, true) => SelectionTransition::StillEmpty,
        }
    }

    /// Iterate the selection in check order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DatasetRef> {
        self.selected.iter()
    }

    /// Number of selected leaves
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tv_data::{DataSource, Dataset};

    fn index() -> DatasetIndex {
        DatasetIndex::from_sources(&[DataSource {
            id: "s1".to_string(),
            name: "Primary".to_string(),
            features: Vec::new(),
            datasets: vec![
                Dataset {
                    id: "cpu".to_string(),
                    name: "CPU".to_string(),
                    source: "s1".to_string(),
                    available_x_range: [100, 200],
                    variants: None,
                },
                Dataset {
                    id: "mem".to_string(),
                    name: "Memory".to_string(),
                    source: "s1".to_string(),
                    available_x_range: [0, 50],
                    variants: None,
                },
            ],
        }])
    }

    #[test]
    fn test_transitions() {
        let index = index();
        let mut selection = SelectionState::new();
        let cpu = DatasetRef::new("s1", "cpu");
        let mem = DatasetRef::new("s1", "mem");

        assert_eq!(
            selection.on_check(&[], &index),
            SelectionTransition::StillEmpty
        );
        assert_eq!(
            selection.on_check(&[cpu.clone()], &index),
            SelectionTransition::BecameNonEmpty
        );
        assert_eq!(
            selection.on_check(&[cpu.clone(), mem.clone()], &index),
            SelectionTransition::StillNonEmpty
        );
        assert_eq!(
            selection.on_check(&[], &index),
            SelectionTransition::BecameEmpty
        );
    }

    #[test]
    fn test_stale_references_are_dropped() {
        let index = index();
        let mut selection = SelectionState::new();

        let transition = selection.on_check(
            &[
                DatasetRef::new("s1", "cpu"),
                DatasetRef::new("s1", "gone"),
                DatasetRef::new("s9", "cpu"),
            ],
            &index,
        );

        assert_eq!(transition, SelectionTransition::BecameNonEmpty);
        let selected: Vec<_> = selection.iter().cloned().collect();
        assert_eq!(selected, vec![DatasetRef::new("s1", "cpu")]);
    }

    #[test]
    fn test_all_stale_keeps_selection_empty() {
        let index = index();
        let mut selection = SelectionState::new();

        let transition = selection.on_check(&[DatasetRef::new("s1", "gone")], &index);
        assert_eq!(transition, SelectionTransition::StillEmpty);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let index = index();
        let mut selection = SelectionState::new();
        let cpu = DatasetRef::new("s1", "cpu");
        let mem = DatasetRef::new("s1", "mem");

        selection.on_check(&[cpu.clone(), mem.clone(), cpu.clone()], &index);
        let selected: Vec<_> = selection.iter().cloned().collect();
        assert_eq!(selected, vec![cpu, mem]);
    }
}
