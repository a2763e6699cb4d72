//! Core traits for the model layer.
//!
//! The sort engine never touches rows directly. It reads cells through
//! [`ItemModel`] and applies its result through [`SortableModel`].

use horizon_sortable_core::Signal;

use super::column::ColumnMeta;
use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};

/// Read access to a flat table of cells.
///
/// # Example
///
/// ```ignore
/// use horizon_sortable::model::{ItemModel, ItemData, ItemRole, ModelIndex, ModelSignals};
///
/// struct Names {
///     items: Vec<String>,
///     signals: ModelSignals,
/// }
///
/// impl ItemModel for Names {
///     fn row_count(&self) -> usize {
///         self.items.len()
///     }
///
///     fn column_count(&self) -> usize {
///         1
///     }
///
///     fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
///         match (index.is_valid(), role) {
///             (true, ItemRole::Display) => ItemData::from(&self.items[index.row()]),
///             _ => ItemData::None,
///         }
///     }
///
///     fn signals(&self) -> &ModelSignals {
///         &self.signals
///     }
/// }
/// ```
pub trait ItemModel: Send + Sync {
    /// Returns the number of rows.
    fn row_count(&self) -> usize;

    /// Returns the number of columns.
    fn column_count(&self) -> usize;

    /// Returns the data stored under the given role for the cell at index.
    ///
    /// Return `ItemData::None` for invalid indices and unsupported roles.
    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData;

    /// Returns the signals for this model.
    fn signals(&self) -> &ModelSignals;

    /// Creates an index for the given cell, or an invalid one if out of range.
    fn index(&self, row: usize, column: usize) -> ModelIndex {
        if row < self.row_count() && column < self.column_count() {
            ModelIndex::new(row, column)
        } else {
            ModelIndex::invalid()
        }
    }

    /// Returns the sort metadata for a column.
    ///
    /// The default treats every column as sortable text.
    fn column_meta(&self, _column: usize) -> ColumnMeta {
        ColumnMeta::default()
    }

    /// Returns the display text of a cell (convenience for `data(index, Display)`).
    fn display_text(&self, index: &ModelIndex) -> Option<String> {
        self.data(index, ItemRole::Display).display_text()
    }
}

/// A model whose rows can be reordered in place.
pub trait SortableModel: ItemModel {
    /// Rearranges rows so that new row `i` is the old row `order[i]`.
    ///
    /// Returns `false` and leaves the rows alone when `order` is not a
    /// permutation of `0..row_count()`, which happens when rows were added
    /// or removed after the order was computed. Implementations must not
    /// emit signals here: callers wrap the call in
    /// [`ModelSignals::emit_layout_changed`].
    fn reorder_rows(&self, order: &[usize]) -> bool;
}

/// Returns `true` if `order` is a permutation of `0..len`.
pub(crate) fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &row in order {
        match seen.get_mut(row) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Applies a validated permutation to a vector of rows.
pub(crate) fn apply_permutation<T>(rows: &mut Vec<T>, order: &[usize]) {
    let mut taken: Vec<Option<T>> = rows.drain(..).map(Some).collect();
    rows.extend(order.iter().filter_map(|&row| taken[row].take()));
}

/// Signals emitted by models.
///
/// `layout_about_to_change` / `layout_changed` bracket every reorder.
pub struct ModelSignals {
    /// Emitted before rows are reordered.
    pub layout_about_to_change: Signal<()>,

    /// Emitted after rows have been reordered.
    pub layout_changed: Signal<()>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            layout_about_to_change: Signal::new(),
            layout_changed: Signal::new(),
        }
    }

    /// Emits signals for a layout change.
    ///
    /// Calls the provided function between the about_to_change and changed signals.
    pub fn emit_layout_changed<F>(&self, change_fn: F)
    where
        F: FnOnce(),
    {
        self.layout_about_to_change.emit(());
        change_fn();
        self.layout_changed.emit(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(is_permutation(&[], 0));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
    }

    #[test]
    fn test_apply_permutation() {
        let mut rows = vec!["a", "b", "c", "d"];
        apply_permutation(&mut rows, &[3, 1, 0, 2]);
        assert_eq!(rows, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_emit_layout_changed_brackets_change() {
        let signals = ModelSignals::new();
        let events = Arc::new(Mutex::new(Vec::new()));

        let about = events.clone();
        signals
            .layout_about_to_change
            .connect(move |_| about.lock().push("about"));
        let done = events.clone();
        signals.layout_changed.connect(move |_| done.lock().push("changed"));

        signals.emit_layout_changed(|| events.lock().push("change"));

        assert_eq!(*events.lock(), vec!["about", "change", "changed"]);
    }
}
