//! Model index for addressing cells in tabular models.

/// Represents a cell position within an `ItemModel`.
///
/// Indices should be used immediately and not stored long-term: after a sort
/// the same row number refers to a different row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelIndex {
    row: usize,
    column: usize,
    valid: bool,
}

impl Default for ModelIndex {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ModelIndex {
    /// Creates a valid index for the given row and column.
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            valid: true,
        }
    }

    /// Creates an invalid index, used for out-of-range lookups.
    pub fn invalid() -> Self {
        Self {
            row: 0,
            column: 0,
            valid: false,
        }
    }

    /// Returns `true` if this index refers to a cell.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The row of this index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The column of this index.
    pub fn column(&self) -> usize {
        self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index() {
        let index = ModelIndex::invalid();
        assert!(!index.is_valid());
        assert_eq!(index, ModelIndex::default());
    }

    #[test]
    fn test_valid_index() {
        let index = ModelIndex::new(3, 2);
        assert!(index.is_valid());
        assert_eq!((index.row(), index.column()), (3, 2));
    }
}
