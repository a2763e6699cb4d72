//! Sorting: key extraction, comparison, date parsing and the engine that
//! ties them together.
//!
//! # Core Types
//!
//! - `SortEngine`: Sorts a [`SortableModel`](crate::model::SortableModel) when a
//!   column is activated, toggling direction on repeat activation
//! - `SortComparator`: Three-way ordering of extracted keys
//! - `DateFormatParser`: Turns date strings into comparable instants
//! - `ColumnValueExtractor`: Reads a cell's trimmed text
//! - `SortableConfig`: Construction options, loadable from TOML
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_sortable::model::SimpleTableModel;
//! use horizon_sortable::sort::{SortEngine, SortOrder, SortableConfig};
//!
//! let model = Arc::new(SimpleTableModel::from_strings([
//!     ["foxtrot", "4"],
//!     ["zulu", "3"],
//!     ["uniform", "1"],
//!     ["bravo", "2"],
//! ]));
//!
//! let engine = SortEngine::builder(model.clone())
//!     .config(SortableConfig::default())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(model.column_values(0), ["bravo", "foxtrot", "uniform", "zulu"]);
//!
//! engine.sort(0, None);
//! assert_eq!(engine.state().order, SortOrder::Descending);
//! assert_eq!(model.column_values(0), ["zulu", "uniform", "foxtrot", "bravo"]);
//! ```

mod comparator;
mod config;
mod date_format;
mod engine;
mod extract;

use serde::{Deserialize, Serialize};

pub use comparator::{SortComparator, SortKey, SortMode, collate};
pub use config::{SortClasses, SortableConfig};
pub use date_format::{DateFormatParser, ParsedInstant};
pub use engine::{SortEngine, SortEngineBuilder, SortState};
pub use extract::ColumnValueExtractor;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    /// Largest first.
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Applies this direction to an ascending comparison result.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }

    #[test]
    fn test_sort_order_apply() {
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Descending.apply(Ordering::Equal), Ordering::Equal);
    }
}
