//! Header and row presentation for a sorted table.
//!
//! [`SortHeader`] keeps the sort indicator and answers which class each header
//! section and row should carry. [`SortableTable`] connects a header to a
//! [`SortEngine`]: clicking a section sorts by it, and every sort moves the
//! indicator.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_sortable::model::SimpleTableModel;
//! use horizon_sortable::sort::SortEngine;
//! use horizon_sortable::view::SortableTable;
//!
//! let model = Arc::new(SimpleTableModel::from_strings([["zulu", "3"], ["bravo", "2"]]));
//! let table = SortableTable::new(SortEngine::builder(model.clone())).unwrap();
//!
//! assert_eq!(table.header().header_class(0), Some("is-sorted-asc"));
//!
//! table.click_header(0);
//! assert_eq!(table.header().header_class(0), Some("is-sorted-desc"));
//! assert_eq!(model.column_values(0), ["zulu", "bravo"]);
//! ```

use std::sync::Arc;

use horizon_sortable_core::logging::targets;
use horizon_sortable_core::{Result, Signal};
use parking_lot::RwLock;

use crate::model::SortableModel;
use crate::sort::{SortClasses, SortEngine, SortEngineBuilder, SortOrder};

/// The sort indicator of a table header.
///
/// # Signals
///
/// - `sort_indicator_changed((usize, SortOrder))`: The indicator moved or
///   changed direction
/// - `section_clicked(usize)`: A section was clicked
pub struct SortHeader {
    indicator: RwLock<Option<(usize, SortOrder)>>,
    indicator_shown: RwLock<bool>,
    classes: SortClasses,

    /// Emitted when the sort indicator changes.
    pub sort_indicator_changed: Signal<(usize, SortOrder)>,

    /// Emitted when a section is clicked.
    pub section_clicked: Signal<usize>,
}

static_assertions::assert_impl_all!(SortHeader: Send, Sync);

impl Default for SortHeader {
    fn default() -> Self {
        Self::new(SortClasses::default())
    }
}

impl SortHeader {
    /// Creates a header with no indicator.
    pub fn new(classes: SortClasses) -> Self {
        Self {
            indicator: RwLock::new(None),
            indicator_shown: RwLock::new(true),
            classes,
            sort_indicator_changed: Signal::new(),
            section_clicked: Signal::new(),
        }
    }

    /// The class names in use.
    pub fn classes(&self) -> &SortClasses {
        &self.classes
    }

    /// Returns the section showing the sort indicator, if any.
    pub fn sort_indicator_section(&self) -> Option<usize> {
        if *self.indicator_shown.read() {
            self.indicator.read().map(|(section, _)| section)
        } else {
            None
        }
    }

    /// Returns the indicated sort order, ascending if there is none.
    pub fn sort_indicator_order(&self) -> SortOrder {
        self.indicator
            .read()
            .map(|(_, order)| order)
            .unwrap_or_default()
    }

    /// Sets the sort indicator on a section.
    pub fn set_sort_indicator(&self, section: usize, order: SortOrder) {
        let changed = {
            let mut indicator = self.indicator.write();
            let changed = *indicator != Some((section, order));
            *indicator = Some((section, order));
            changed
        };

        if changed {
            tracing::trace!(target: targets::VIEW, section, ?order, "sort indicator moved");
            self.sort_indicator_changed.emit((section, order));
        }
    }

    /// Clears the sort indicator.
    pub fn clear_sort_indicator(&self) {
        *self.indicator.write() = None;
    }

    /// Returns whether the sort indicator is shown.
    pub fn sort_indicator_shown(&self) -> bool {
        *self.indicator_shown.read()
    }

    /// Sets whether to show the sort indicator.
    pub fn set_sort_indicator_shown(&self, shown: bool) {
        *self.indicator_shown.write() = shown;
    }

    /// Reports a click on `section`.
    pub fn click(&self, section: usize) {
        tracing::trace!(target: targets::VIEW, section, "header section clicked");
        self.section_clicked.emit(section);
    }

    /// The class for a header section: the direction class on the indicated
    /// section, nothing elsewhere.
    pub fn header_class(&self, section: usize) -> Option<&str> {
        if !*self.indicator_shown.read() {
            return None;
        }
        match *self.indicator.read() {
            Some((indicated, order)) if indicated == section => Some(self.classes.header(order)),
            _ => None,
        }
    }

    /// The striping class for the row at `row`.
    pub fn row_class(&self, row: usize) -> Option<&str> {
        self.classes.row(row)
    }
}

/// A sort engine bound to a header.
pub struct SortableTable<M: SortableModel + 'static> {
    engine: Arc<SortEngine<M>>,
    header: Arc<SortHeader>,
}

impl<M: SortableModel + 'static> SortableTable<M> {
    /// Builds the engine from `builder` and connects it to a new header.
    ///
    /// The header is connected before the initial sort, so it already shows
    /// the indicator when this returns.
    pub fn new(builder: SortEngineBuilder<M>) -> Result<Self> {
        let header = Arc::new(SortHeader::new(builder.classes().clone()));

        let indicator = header.clone();
        let engine = Arc::new(
            builder
                .on_sorted(move |&(section, order)| indicator.set_sort_indicator(section, order))
                .build()?,
        );

        let weak = Arc::downgrade(&engine);
        header.section_clicked.connect(move |&section| {
            if let Some(engine) = weak.upgrade() {
                engine.sort(section, None);
            }
        });

        tracing::debug!(
            target: targets::VIEW,
            columns = engine.model().column_count(),
            "sortable table connected"
        );

        Ok(Self { engine, header })
    }

    /// Simulates a click on a header section.
    pub fn click_header(&self, section: usize) {
        self.header.click(section);
    }

    /// The engine.
    pub fn engine(&self) -> &Arc<SortEngine<M>> {
        &self.engine
    }

    /// The header.
    pub fn header(&self) -> &Arc<SortHeader> {
        &self.header
    }

    /// The model.
    pub fn model(&self) -> &Arc<M> {
        self.engine.model()
    }

    /// The class of every header section, left to right.
    pub fn header_classes(&self) -> Vec<Option<String>> {
        (0..self.model().column_count())
            .map(|section| self.header.header_class(section).map(str::to_string))
            .collect()
    }

    /// The striping class of every row, top to bottom.
    pub fn row_classes(&self) -> Vec<Option<String>> {
        (0..self.model().row_count())
            .map(|row| self.header.row_class(row).map(str::to_string))
            .collect()
    }
}
