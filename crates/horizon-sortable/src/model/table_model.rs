//! Table model implementations for 2D grid data.
//!
//! `TableModel` maps rows of any type to cells through an extractor function.
//! `SimpleTableModel` stores `ItemData` directly. Both carry per-column sort
//! metadata and can be reordered by the sort engine.

use parking_lot::RwLock;
use std::sync::Arc;

use super::column::ColumnMeta;
use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};
use super::traits::{apply_permutation, is_permutation, ItemModel, ModelSignals, SortableModel};

/// Type alias for a cell data extractor function.
pub type CellExtractor<T> = Arc<dyn Fn(&T, usize, ItemRole) -> ItemData + Send + Sync>;

/// Returns the metadata for `column`, defaulting to sortable text.
fn meta_at(metas: &[ColumnMeta], column: usize) -> ColumnMeta {
    metas.get(column).cloned().unwrap_or_default()
}

/// A table model for displaying rows of arbitrary data.
///
/// # Example
///
/// ```ignore
/// use horizon_sortable::model::{ColumnMeta, ItemData, ItemRole, TableModel};
///
/// struct Release {
///     name: String,
///     date: String,
/// }
///
/// let model = TableModel::new(
///     vec![
///         Release { name: "zulu".into(), date: "05-03-2020".into() },
///         Release { name: "bravo".into(), date: "17-11-2019".into() },
///     ],
///     2,
///     |release, column, role| {
///         if role != ItemRole::Display {
///             return ItemData::None;
///         }
///         match column {
///             0 => ItemData::from(&release.name),
///             1 => ItemData::from(&release.date),
///             _ => ItemData::None,
///         }
///     },
/// )
/// .with_column_meta(vec![ColumnMeta::text(), ColumnMeta::date_format("dd-MM-yyyy")]);
/// ```
pub struct TableModel<T> {
    rows: RwLock<Vec<T>>,
    column_count: usize,
    cell_extractor: CellExtractor<T>,
    column_meta: Vec<ColumnMeta>,
    signals: ModelSignals,
}

impl<T: Send + Sync + 'static> TableModel<T> {
    /// Creates a new table model.
    ///
    /// # Arguments
    ///
    /// * `rows` - The row data
    /// * `column_count` - Number of columns
    /// * `cell_extractor` - Function to extract cell data: (row_data, column, role) -> data
    pub fn new<F>(rows: Vec<T>, column_count: usize, cell_extractor: F) -> Self
    where
        F: Fn(&T, usize, ItemRole) -> ItemData + Send + Sync + 'static,
    {
        Self {
            rows: RwLock::new(rows),
            column_count,
            cell_extractor: Arc::new(cell_extractor),
            column_meta: Vec::new(),
            signals: ModelSignals::new(),
        }
    }

    /// Sets the sort metadata for each column. Missing entries are sortable text.
    pub fn with_column_meta(mut self, metas: Vec<ColumnMeta>) -> Self {
        self.column_meta = metas;
        self
    }

    /// Appends a row to the end of the table.
    ///
    /// The row stays at the end until the next sort or
    /// [`SortEngine::resort`](crate::sort::SortEngine::resort).
    pub fn push_row(&self, row: T) {
        self.rows.write().push(row);
    }

    /// Returns a reference to the rows (read-only access).
    pub fn rows(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.rows.read()
    }
}

impl<T: Send + Sync + 'static> ItemModel for TableModel<T> {
    fn row_count(&self) -> usize {
        self.rows.read().len()
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        if !index.is_valid() || index.column() >= self.column_count {
            return ItemData::None;
        }

        let rows = self.rows.read();
        match rows.get(index.row()) {
            Some(row) => (self.cell_extractor)(row, index.column(), role),
            None => ItemData::None,
        }
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    fn column_meta(&self, column: usize) -> ColumnMeta {
        meta_at(&self.column_meta, column)
    }
}

impl<T: Send + Sync + 'static> SortableModel for TableModel<T> {
    fn reorder_rows(&self, order: &[usize]) -> bool {
        let mut rows = self.rows.write();
        if !is_permutation(order, rows.len()) {
            return false;
        }
        apply_permutation(&mut rows, order);
        true
    }
}

/// A simple table model that stores cell data in a 2D vector.
pub struct SimpleTableModel {
    data: RwLock<Vec<Vec<ItemData>>>,
    column_count: usize,
    column_meta: Vec<ColumnMeta>,
    signals: ModelSignals,
}

impl SimpleTableModel {
    /// Creates a new simple table model with the specified column count.
    pub fn new(column_count: usize) -> Self {
        Self {
            data: RwLock::new(Vec::new()),
            column_count,
            column_meta: Vec::new(),
            signals: ModelSignals::new(),
        }
    }

    /// Creates a simple table model from 2D data.
    ///
    /// The column count is taken from the widest row.
    pub fn from_data(data: Vec<Vec<ItemData>>) -> Self {
        let column_count = data.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            data: RwLock::new(data),
            column_count,
            column_meta: Vec::new(),
            signals: ModelSignals::new(),
        }
    }

    /// Creates a simple table model from rows of string slices.
    pub fn from_strings<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_data(
            rows.into_iter()
                .map(|row| row.into_iter().map(|cell| ItemData::String(cell.into())).collect())
                .collect(),
        )
    }

    /// Sets the sort metadata for each column. Missing entries are sortable text.
    pub fn with_column_meta(mut self, metas: Vec<ColumnMeta>) -> Self {
        self.column_meta = metas;
        self
    }

    /// Appends a row.
    ///
    /// The row stays at the end until the next sort or
    /// [`SortEngine::resort`](crate::sort::SortEngine::resort).
    pub fn append_row(&self, row: Vec<ItemData>) {
        self.data.write().push(row);
    }

    /// Returns the display text of every cell in a column, top to bottom.
    pub fn column_values(&self, column: usize) -> Vec<String> {
        self.data
            .read()
            .iter()
            .map(|row| {
                row.get(column)
                    .and_then(ItemData::display_text)
                    .unwrap_or_default()
            })
            .collect()
    }
}

impl ItemModel for SimpleTableModel {
    fn row_count(&self) -> usize {
        self.data.read().len()
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        if !index.is_valid() || role != ItemRole::Display || index.column() >= self.column_count {
            return ItemData::None;
        }

        self.data
            .read()
            .get(index.row())
            .and_then(|row| row.get(index.column()))
            .cloned()
            .unwrap_or_default()
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    fn column_meta(&self, column: usize) -> ColumnMeta {
        meta_at(&self.column_meta, column)
    }
}

impl SortableModel for SimpleTableModel {
    fn reorder_rows(&self, order: &[usize]) -> bool {
        let mut data = self.data.write();
        if !is_permutation(order, data.len()) {
            return false;
        }
        apply_permutation(&mut data, order);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColumnKind;

    struct TestRow {
        name: String,
        value: i32,
    }

    fn test_model() -> TableModel<TestRow> {
        TableModel::new(
            vec![
                TestRow {
                    name: "First".into(),
                    value: 100,
                },
                TestRow {
                    name: "Second".into(),
                    value: 200,
                },
            ],
            2,
            |row, col, role| {
                if role != ItemRole::Display {
                    return ItemData::None;
                }
                match col {
                    0 => ItemData::from(row.name.as_str()),
                    1 => ItemData::from(row.value as i64),
                    _ => ItemData::None,
                }
            },
        )
    }

    #[test]
    fn test_table_model_basic() {
        let model = test_model();

        assert_eq!(model.row_count(), 2);
        assert_eq!(model.column_count(), 2);

        let index = model.index(0, 0);
        assert!(index.is_valid());
        assert_eq!(model.data(&index, ItemRole::Display), ItemData::from("First"));
        assert_eq!(model.display_text(&model.index(1, 1)).as_deref(), Some("200"));
        assert!(!model.index(2, 0).is_valid());
        assert_eq!(model.display_text(&model.index(2, 0)), None);
    }

    #[test]
    fn test_column_meta_defaults() {
        let model = test_model().with_column_meta(vec![ColumnMeta::disabled()]);
        assert!(!model.column_meta(0).sortable);
        assert_eq!(model.column_meta(1), ColumnMeta::default());
        assert_eq!(model.column_meta(1).kind, ColumnKind::Text);
    }

    #[test]
    fn test_table_reorder_rows() {
        let model = test_model();
        assert!(model.reorder_rows(&[1, 0]));
        assert_eq!(model.rows()[0].name, "Second");

        assert!(!model.reorder_rows(&[0, 0]));
        assert_eq!(model.rows()[0].name, "Second");
    }

    #[test]
    fn test_table_reorder_rejects_stale_order() {
        let model = test_model();
        model.push_row(TestRow {
            name: "Third".into(),
            value: 300,
        });

        assert!(!model.reorder_rows(&[1, 0]));
        let rows = model.rows();
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_simple_table_model() {
        let model = SimpleTableModel::from_strings([["a1", "b1"], ["a2", "b2"]]);

        assert_eq!(model.row_count(), 2);
        assert_eq!(model.column_count(), 2);
        assert_eq!(model.display_text(&model.index(0, 1)).as_deref(), Some("b1"));

        assert!(model.reorder_rows(&[1, 0]));
        assert_eq!(model.column_values(0), vec!["a2", "a1"]);
    }

    #[test]
    fn test_simple_table_append() {
        let model = SimpleTableModel::new(1);
        model.append_row(vec![ItemData::from("x")]);
        model.append_row(vec![ItemData::from("y")]);
        assert_eq!(model.column_values(0), vec!["x", "y"]);
        assert!(!model.reorder_rows(&[0]));
    }
}
