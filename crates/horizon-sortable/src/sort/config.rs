//! Sort engine configuration.
//!
//! Every field has a default, so a configuration file only needs to list what
//! it changes:
//!
//! ```toml
//! sort_at_start = true
//! initial_sort_column = 1
//! initial_sort_order = "desc"
//!
//! [classes]
//! odd_rows = "odd"
//! ```

use horizon_sortable_core::{ConfigError, Result};
use serde::{Deserialize, Serialize};

use super::SortOrder;

/// Options applied when a sort engine is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortableConfig {
    /// Sort once by `initial_sort_column` as soon as the engine is built.
    pub sort_at_start: bool,
    /// Column used for the initial sort.
    pub initial_sort_column: usize,
    /// Direction of the initial sort.
    pub initial_sort_order: SortOrder,
    /// Keep empty and unparseable values at the bottom in both directions.
    pub empty_last: bool,
    /// Presentation class names.
    pub classes: SortClasses,
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            sort_at_start: true,
            initial_sort_column: 0,
            initial_sort_order: SortOrder::Ascending,
            empty_last: true,
            classes: SortClasses::default(),
        }
    }
}

impl SortableConfig {
    /// Decodes a configuration from TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text).map_err(ConfigError::from)?)
    }

    /// Sets whether to sort at construction.
    pub fn with_sort_at_start(mut self, sort_at_start: bool) -> Self {
        self.sort_at_start = sort_at_start;
        self
    }

    /// Sets the initial sort column and direction.
    pub fn with_initial_sort(mut self, column: usize, order: SortOrder) -> Self {
        self.initial_sort_column = column;
        self.initial_sort_order = order;
        self
    }

    /// Sets the empty-value policy.
    pub fn with_empty_last(mut self, empty_last: bool) -> Self {
        self.empty_last = empty_last;
        self
    }

    /// Sets the presentation class names.
    pub fn with_classes(mut self, classes: SortClasses) -> Self {
        self.classes = classes;
        self
    }
}

/// Class names the view layer attaches to headers and rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortClasses {
    /// Class of the header sorted ascending.
    pub header_ascending: String,
    /// Class of the header sorted descending.
    pub header_descending: String,
    /// Class for rows 0, 2, 4, …
    pub odd_rows: Option<String>,
    /// Class for rows 1, 3, 5, …
    pub even_rows: Option<String>,
}

impl Default for SortClasses {
    fn default() -> Self {
        Self {
            header_ascending: "is-sorted-asc".to_string(),
            header_descending: "is-sorted-desc".to_string(),
            odd_rows: None,
            even_rows: None,
        }
    }
}

impl SortClasses {
    /// The header class for a direction.
    pub fn header(&self, order: SortOrder) -> &str {
        match order {
            SortOrder::Ascending => &self.header_ascending,
            SortOrder::Descending => &self.header_descending,
        }
    }

    /// The row class for a zero-based row position.
    ///
    /// Rows are numbered from one for striping, so position 0 is odd.
    pub fn row(&self, row: usize) -> Option<&str> {
        if row % 2 == 0 {
            self.odd_rows.as_deref()
        } else {
            self.even_rows.as_deref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_sortable_core::SortableError;

    #[test]
    fn test_defaults() {
        let config = SortableConfig::default();
        assert!(config.sort_at_start);
        assert_eq!(config.initial_sort_column, 0);
        assert_eq!(config.initial_sort_order, SortOrder::Ascending);
        assert!(config.empty_last);
        assert_eq!(config.classes.header(SortOrder::Ascending), "is-sorted-asc");
        assert_eq!(config.classes.header(SortOrder::Descending), "is-sorted-desc");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(SortableConfig::from_toml_str("").unwrap(), SortableConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = SortableConfig::from_toml_str(
            r#"
            initial_sort_column = 1
            initial_sort_order = "desc"
            empty_last = false

            [classes]
            header_ascending = "up"
            odd_rows = "odd"
            "#,
        )
        .unwrap();

        assert!(config.sort_at_start);
        assert_eq!(config.initial_sort_column, 1);
        assert_eq!(config.initial_sort_order, SortOrder::Descending);
        assert!(!config.empty_last);
        assert_eq!(config.classes.header_ascending, "up");
        assert_eq!(config.classes.header_descending, "is-sorted-desc");
        assert_eq!(config.classes.odd_rows.as_deref(), Some("odd"));
        assert_eq!(config.classes.even_rows, None);
    }

    #[test]
    fn test_order_spellings() {
        for (text, order) in [
            ("ascending", SortOrder::Ascending),
            ("asc", SortOrder::Ascending),
            ("descending", SortOrder::Descending),
            ("desc", SortOrder::Descending),
        ] {
            let config =
                SortableConfig::from_toml_str(&format!("initial_sort_order = \"{text}\"")).unwrap();
            assert_eq!(config.initial_sort_order, order);
        }
    }

    #[test]
    fn test_invalid_toml() {
        let err = SortableConfig::from_toml_str("initial_sort_order = \"sideways\"").unwrap_err();
        assert!(matches!(err, SortableError::Config(ConfigError::Toml { .. })));

        let err = SortableConfig::from_toml_str("sort_at_start = ").unwrap_err();
        assert!(err.to_string().starts_with("configuration error"));
    }

    #[test]
    fn test_builder_methods() {
        let config = SortableConfig::default()
            .with_sort_at_start(false)
            .with_initial_sort(2, SortOrder::Descending)
            .with_empty_last(false);
        assert!(!config.sort_at_start);
        assert_eq!(config.initial_sort_column, 2);
        assert_eq!(config.initial_sort_order, SortOrder::Descending);
        assert!(!config.empty_last);
    }

    #[test]
    fn test_row_classes() {
        let classes = SortClasses {
            odd_rows: Some("odd".into()),
            even_rows: Some("even".into()),
            ..SortClasses::default()
        };
        assert_eq!(classes.row(0), Some("odd"));
        assert_eq!(classes.row(1), Some("even"));
        assert_eq!(classes.row(2), Some("odd"));
        assert_eq!(SortClasses::default().row(0), None);
    }
}
