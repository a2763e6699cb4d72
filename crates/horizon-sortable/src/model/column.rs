//! Per-column sort metadata.

/// How the values of a column are interpreted when sorting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnKind {
    /// Plain text, compared case-insensitively.
    #[default]
    Text,
    /// Dates, parsed with the given format template.
    ///
    /// `None` falls back to ISO-8601 and other common layouts.
    Date { format: Option<String> },
}

/// Sort metadata attached to a column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Whether activating this column sorts the table.
    pub sortable: bool,
    /// How values in this column are compared.
    pub kind: ColumnKind,
}

impl Default for ColumnMeta {
    fn default() -> Self {
        Self {
            sortable: true,
            kind: ColumnKind::Text,
        }
    }
}

impl ColumnMeta {
    /// A sortable text column.
    pub fn text() -> Self {
        Self::default()
    }

    /// A sortable date column parsed with `format`.
    pub fn date_format(format: impl Into<String>) -> Self {
        Self {
            sortable: true,
            kind: ColumnKind::Date {
                format: Some(format.into()),
            },
        }
    }

    /// A sortable date column using ISO-8601 / free-form parsing.
    pub fn iso_date() -> Self {
        Self {
            sortable: true,
            kind: ColumnKind::Date { format: None },
        }
    }

    /// A column that ignores sort activation.
    pub fn disabled() -> Self {
        Self {
            sortable: false,
            kind: ColumnKind::Text,
        }
    }

    /// Sets the sortable flag.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_meta_constructors() {
        assert!(ColumnMeta::default().sortable);
        assert_eq!(ColumnMeta::text().kind, ColumnKind::Text);
        assert!(!ColumnMeta::disabled().sortable);
        assert_eq!(
            ColumnMeta::date_format("dd-MM-yyyy").kind,
            ColumnKind::Date {
                format: Some("dd-MM-yyyy".into())
            }
        );
        assert!(!ColumnMeta::iso_date().with_sortable(false).sortable);
    }
}
