//! Prelude module for Horizon Sortable.
//!
//! ```ignore
//! use horizon_sortable::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/slot system (`Signal`, `ConnectionId`)
//! - Errors (`Result`, `SortableError`)
//! - Models (`SimpleTableModel`, `TableModel`, `ColumnMeta`)
//! - Sorting (`SortEngine`, `SortOrder`, `SortableConfig`)
//! - Presentation (`SortableTable`, `SortHeader`)

pub use crate::signal::{ConnectionId, Signal};
pub use crate::{Result, SortableError};

pub use crate::model::{
    ColumnKind, ColumnMeta, ItemData, ItemModel, ItemRole, ModelIndex, SimpleTableModel,
    SortableModel, TableModel,
};

pub use crate::sort::{
    ColumnValueExtractor, DateFormatParser, ParsedInstant, SortClasses, SortEngine, SortOrder,
    SortState, SortableConfig,
};

pub use crate::view::{SortHeader, SortableTable};
