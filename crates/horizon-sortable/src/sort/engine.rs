//! The sort engine.
//!
//! [`SortEngine`] owns the current [`SortState`] and reorders a
//! [`SortableModel`] whenever a column is activated. Activating the active
//! column again flips the direction; activating another column sorts it
//! ascending.
//!
//! Each accepted activation runs in this order:
//!
//! 1. `before_sort` is emitted with the column.
//! 2. Inside the model's layout bracket, keys are extracted, row positions
//!    are sorted, and the rows are reordered and the state updated together.
//! 3. `sorted` is emitted with the resolved column and direction.
//! 4. `after_sort` is emitted with the column.
//!
//! Activations of disabled or nonexistent columns change nothing and emit
//! nothing. If the model's row count changes between key extraction and the
//! reorder, the model rejects the stale order: rows and state stay as they
//! were and neither `sorted` nor `after_sort` is emitted.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use horizon_sortable_core::logging::{span_names, targets};
use horizon_sortable_core::{PerfSpan, Result, Signal, SortableError};
use parking_lot::RwLock;

use super::comparator::{SortComparator, SortKey, SortMode};
use super::config::{SortClasses, SortableConfig};
use super::extract::ColumnValueExtractor;
use super::SortOrder;
use crate::model::SortableModel;

/// Which column the table is sorted by, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    /// The column of the last accepted sort, if any.
    pub active_column: Option<usize>,
    /// The direction of the last accepted sort, or the configured initial
    /// direction before the first one.
    pub order: SortOrder,
}

type Hook<Args> = Box<dyn Fn(&Args) + Send + Sync>;

/// Sorts a model's rows by column.
///
/// Build one with [`SortEngine::builder`].
pub struct SortEngine<M: SortableModel> {
    model: Arc<M>,
    config: SortableConfig,
    state: RwLock<SortState>,
    reference_time: Option<NaiveDateTime>,

    /// Emitted with the column index before rows are reordered.
    pub before_sort: Signal<usize>,

    /// Emitted with the column index after rows are reordered and `sorted`
    /// has been delivered.
    pub after_sort: Signal<usize>,

    /// Emitted with the resolved column and direction once rows are in
    /// their new order. Presentation layers listen to this.
    pub sorted: Signal<(usize, SortOrder)>,
}

static_assertions::assert_impl_all!(SortEngine<crate::model::SimpleTableModel>: Send, Sync);

impl<M: SortableModel> SortEngine<M> {
    /// Starts building an engine for `model`.
    pub fn builder(model: Arc<M>) -> SortEngineBuilder<M> {
        SortEngineBuilder::new(model)
    }

    /// The current sort state.
    pub fn state(&self) -> SortState {
        *self.state.read()
    }

    /// The model being sorted.
    pub fn model(&self) -> &Arc<M> {
        &self.model
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &SortableConfig {
        &self.config
    }

    /// How `column` would be compared, or `None` if it cannot be sorted.
    pub fn column_mode(&self, column: usize) -> Option<SortMode> {
        if column >= self.model.column_count() {
            return None;
        }
        let meta = self.model.column_meta(column);
        meta.sortable.then(|| SortMode::from(&meta.kind))
    }

    /// Sorts by `column`.
    ///
    /// With `explicit_order`, that direction is used. Without it, the
    /// direction flips if `column` is already active and resets to
    /// ascending otherwise.
    pub fn sort(&self, column: usize, explicit_order: Option<SortOrder>) {
        let Some(mode) = self.column_mode(column) else {
            tracing::debug!(
                target: targets::SORT,
                column,
                column_count = self.model.column_count(),
                "ignoring sort request for a disabled or missing column"
            );
            return;
        };

        let _perf = PerfSpan::new(span_names::SORT);
        let current = self.state();
        let order = match explicit_order {
            Some(order) => order,
            None if current.active_column == Some(column) => current.order.toggled(),
            None => SortOrder::Ascending,
        };

        self.before_sort.emit(column);

        let mut applied = false;
        self.model.signals().emit_layout_changed(|| {
            let permutation = self.row_order(column, &mode, order);
            applied = self.model.reorder_rows(&permutation);
            if applied {
                *self.state.write() = SortState {
                    active_column: Some(column),
                    order,
                };
            }
        });

        if !applied {
            tracing::warn!(
                target: targets::SORT,
                column,
                rows = self.model.row_count(),
                "rows changed during the sort, keeping the previous order"
            );
            return;
        }

        self.sorted.emit((column, order));
        self.after_sort.emit(column);
    }

    /// Sorts again by the current column and direction.
    ///
    /// Use after the model's rows have changed. Does nothing before the
    /// first sort.
    pub fn resort(&self) {
        let state = self.state();
        if let Some(column) = state.active_column {
            self.sort(column, Some(state.order));
        }
    }

    /// Computes the new row order: `result[i]` is the current position of
    /// the row that should end up at position `i`.
    fn row_order(&self, column: usize, mode: &SortMode, order: SortOrder) -> Vec<usize> {
        let reference = self
            .reference_time
            .unwrap_or_else(|| Local::now().naive_local());

        let keys: Vec<SortKey> = {
            let _perf = PerfSpan::new(span_names::EXTRACT);
            (0..self.model.row_count())
                .map(|row| {
                    let text = self.model.cell_text(row, column).unwrap_or_default();
                    mode.key(&text, reference)
                })
                .collect()
        };

        let missing = keys.iter().filter(|key| key.is_missing()).count();
        tracing::debug!(
            target: targets::SORT,
            column,
            ?order,
            date = mode.is_date(),
            rows = keys.len(),
            missing,
            "sorting column"
        );

        let comparator = SortComparator::new(order, self.config.empty_last);
        let mut rows: Vec<usize> = (0..keys.len()).collect();
        rows.sort_by(|&a, &b| comparator.compare(&keys[a], &keys[b]));
        tracing::trace!(target: targets::SORT, ?rows, "computed row order");
        rows
    }
}

/// Builder for [`SortEngine`].
///
/// Hooks added here are connected before the initial sort, so they observe
/// it.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_sortable::model::SimpleTableModel;
/// use horizon_sortable::sort::{SortEngine, SortOrder, SortableConfig};
///
/// let model = Arc::new(SimpleTableModel::from_strings([["b", "1"], ["a", "2"]]));
/// let engine = SortEngine::builder(model.clone())
///     .config(SortableConfig::default().with_initial_sort(1, SortOrder::Descending))
///     .on_after_sort(|column| println!("sorted column {column}"))
///     .build()
///     .unwrap();
///
/// assert_eq!(model.column_values(1), ["2", "1"]);
/// assert_eq!(engine.state().active_column, Some(1));
/// ```
pub struct SortEngineBuilder<M: SortableModel> {
    model: Arc<M>,
    config: SortableConfig,
    reference_time: Option<NaiveDateTime>,
    before_sort: Vec<Hook<usize>>,
    after_sort: Vec<Hook<usize>>,
    sorted: Vec<Hook<(usize, SortOrder)>>,
}

impl<M: SortableModel> SortEngineBuilder<M> {
    /// Creates a builder with the default configuration.
    pub fn new(model: Arc<M>) -> Self {
        Self {
            model,
            config: SortableConfig::default(),
            reference_time: None,
            before_sort: Vec::new(),
            after_sort: Vec::new(),
            sorted: Vec::new(),
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: SortableConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a hook called with the column before each sort.
    pub fn on_before_sort<F>(mut self, f: F) -> Self
    where
        F: Fn(&usize) + Send + Sync + 'static,
    {
        self.before_sort.push(Box::new(f));
        self
    }

    /// Adds a hook called with the column after each sort.
    pub fn on_after_sort<F>(mut self, f: F) -> Self
    where
        F: Fn(&usize) + Send + Sync + 'static,
    {
        self.after_sort.push(Box::new(f));
        self
    }

    /// Adds a hook called with the resolved column and direction.
    pub fn on_sorted<F>(mut self, f: F) -> Self
    where
        F: Fn(&(usize, SortOrder)) + Send + Sync + 'static,
    {
        self.sorted.push(Box::new(f));
        self
    }

    pub(crate) fn classes(&self) -> &SortClasses {
        &self.config.classes
    }

    /// Fixes the instant that supplies date fields a template leaves out.
    ///
    /// Defaults to the local time at each sort.
    pub fn reference_time(mut self, reference: NaiveDateTime) -> Self {
        self.reference_time = Some(reference);
        self
    }

    /// Builds the engine, running the initial sort if configured.
    ///
    /// Fails if the initial sort column does not exist in a model that has
    /// columns.
    pub fn build(self) -> Result<SortEngine<M>> {
        let column_count = self.model.column_count();
        let config = self.config;
        if config.sort_at_start && column_count > 0 && config.initial_sort_column >= column_count {
            return Err(SortableError::InitialColumnOutOfRange {
                column: config.initial_sort_column,
                column_count,
            });
        }

        let engine = SortEngine {
            model: self.model,
            state: RwLock::new(SortState {
                active_column: None,
                order: config.initial_sort_order,
            }),
            reference_time: self.reference_time,
            config,
            before_sort: Signal::new(),
            after_sort: Signal::new(),
            sorted: Signal::new(),
        };

        for hook in self.before_sort {
            engine.before_sort.connect(hook);
        }
        for hook in self.after_sort {
            engine.after_sort.connect(hook);
        }
        for hook in self.sorted {
            engine.sorted.connect(hook);
        }

        tracing::debug!(
            target: targets::SORT,
            column_count,
            rows = engine.model.row_count(),
            sort_at_start = engine.config.sort_at_start,
            "sort engine built"
        );

        if engine.config.sort_at_start {
            engine.sort(
                engine.config.initial_sort_column,
                Some(engine.config.initial_sort_order),
            );
        }

        Ok(engine)
    }
}
