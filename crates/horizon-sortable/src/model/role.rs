//! Item roles and data containers.

use std::fmt;

/// The role of a piece of data requested from a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemRole {
    /// The text shown in the cell. Sorting reads this role.
    #[default]
    Display,
}

/// A value stored in a model cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ItemData {
    /// No data.
    #[default]
    None,
    /// String data.
    String(String),
    /// Integer data.
    Int(i64),
    /// Floating point data.
    Float(f64),
    /// Boolean data.
    Bool(bool),
}

impl ItemData {
    /// Renders the value the way a cell would display it.
    ///
    /// Returns `None` for `ItemData::None`.
    pub fn display_text(&self) -> Option<String> {
        match self {
            ItemData::None => None,
            ItemData::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for ItemData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemData::None => Ok(()),
            ItemData::String(s) => f.write_str(s),
            ItemData::Int(n) => write!(f, "{n}"),
            ItemData::Float(n) => write!(f, "{n}"),
            ItemData::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        ItemData::String(s.to_string())
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        ItemData::String(s)
    }
}

impl From<&String> for ItemData {
    fn from(s: &String) -> Self {
        ItemData::String(s.clone())
    }
}

impl From<i64> for ItemData {
    fn from(n: i64) -> Self {
        ItemData::Int(n)
    }
}

impl From<f64> for ItemData {
    fn from(n: f64) -> Self {
        ItemData::Float(n)
    }
}

impl From<bool> for ItemData {
    fn from(b: bool) -> Self {
        ItemData::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        assert_eq!(ItemData::from("alpha").display_text().as_deref(), Some("alpha"));
        assert_eq!(ItemData::from(42i64).display_text().as_deref(), Some("42"));
        assert_eq!(ItemData::from(1.5f64).display_text().as_deref(), Some("1.5"));
        assert_eq!(ItemData::from(true).display_text().as_deref(), Some("true"));
        assert_eq!(ItemData::None.display_text(), None);
    }
}
