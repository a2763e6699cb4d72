//! Reading sort keys out of a model.

use crate::model::ItemModel;

/// Reads the text of a cell, as the sort engine sees it.
///
/// Implemented for every [`ItemModel`]: the `Display` role is rendered as
/// text and surrounding whitespace is trimmed. A cell that exists but holds
/// no data reads as the empty string; `None` means the row or column is out
/// of range.
pub trait ColumnValueExtractor {
    /// Returns the trimmed text of the cell at `(row, column)`.
    fn cell_text(&self, row: usize, column: usize) -> Option<String>;
}

impl<M: ItemModel + ?Sized> ColumnValueExtractor for M {
    fn cell_text(&self, row: usize, column: usize) -> Option<String> {
        let index = self.index(row, column);
        if !index.is_valid() {
            return None;
        }
        let text = self.display_text(&index).unwrap_or_default();
        Some(text.trim().to_string())
    }
}
