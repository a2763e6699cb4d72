//! Model layer for Horizon Sortable.
//!
//! Models stand in for the rows and cells of a rendered table. The sort
//! engine reads cell text through [`ItemModel`], finds out how each column
//! should be compared through [`ColumnMeta`], and writes its result back with
//! [`SortableModel::reorder_rows`].
//!
//! # Core Types
//!
//! - `ModelIndex`: Identifies a cell
//! - `ItemRole` / `ItemData`: What is being asked for, and the answer
//! - `ItemModel` / `SortableModel`: The traits models implement
//! - `ModelSignals`: The layout bracket around every sort
//! - `ColumnMeta`: Sortable flag and date format of a column
//!
//! # Model Implementations
//!
//! - `TableModel`: Rows of any type plus a cell extractor closure
//! - `SimpleTableModel`: A 2D grid of `ItemData`
//!
//! # Example
//!
//! ```
//! use horizon_sortable::model::{ItemModel, SimpleTableModel};
//!
//! let model = SimpleTableModel::from_strings([["zulu", "3"], ["bravo", "2"]]);
//!
//! model.signals().layout_changed.connect(|_| {
//!     println!("rows were reordered");
//! });
//!
//! assert_eq!(model.display_text(&model.index(0, 0)).as_deref(), Some("zulu"));
//! ```

mod column;
mod index;
mod role;
mod table_model;
mod traits;

pub use column::{ColumnKind, ColumnMeta};
pub use index::ModelIndex;
pub use role::{ItemData, ItemRole};
pub use table_model::{CellExtractor, SimpleTableModel, TableModel};
pub use traits::{ItemModel, ModelSignals, SortableModel};
