//! Horizon Sortable - click-to-sort tables.
//!
//! This is the main crate. It re-exports the core crate and adds the model
//! layer, the sort engine and the header binding.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_sortable::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let model = Arc::new(
//!         SimpleTableModel::from_strings([
//!             ["foxtrot", "05-03-2020"],
//!             ["zulu", "17-11-2019"],
//!             ["bravo", ""],
//!         ])
//!         .with_column_meta(vec![ColumnMeta::text(), ColumnMeta::date_format("dd-MM-yyyy")]),
//!     );
//!
//!     let table = SortableTable::new(SortEngine::builder(model.clone()))?;
//!     assert_eq!(model.column_values(0), ["bravo", "foxtrot", "zulu"]);
//!
//!     table.click_header(1);
//!     assert_eq!(model.column_values(0), ["zulu", "foxtrot", "bravo"]);
//!     Ok(())
//! }
//! ```

pub use horizon_sortable_core::*;

pub mod model;
pub mod prelude;
pub mod sort;
pub mod view;
