//! Three-way comparison of extracted sort keys.

use std::cmp::Ordering;
use std::sync::OnceLock;

use chrono::NaiveDateTime;
use horizon_sortable_core::logging::targets;
use icu::collator::options::{CollatorOptions, Strength};
use icu::collator::{Collator, CollatorBorrowed};

use super::SortOrder;
use super::date_format::{DateFormatParser, ParsedInstant};
use crate::model::ColumnKind;

/// How a column's text is turned into something comparable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Locale-aware, case-insensitive text comparison.
    #[default]
    Lexicographic,
    /// Values are parsed as dates and compared as instants.
    Date(DateFormatParser),
}

impl SortMode {
    /// Builds a key for one cell.
    pub fn key(&self, text: &str, reference: NaiveDateTime) -> SortKey {
        match self {
            SortMode::Lexicographic => SortKey::Text(text.to_string()),
            SortMode::Date(parser) => SortKey::Date(parser.parse(text, reference)),
        }
    }

    /// Returns `true` for date columns.
    pub fn is_date(&self) -> bool {
        matches!(self, SortMode::Date(_))
    }
}

impl From<&ColumnKind> for SortMode {
    fn from(kind: &ColumnKind) -> Self {
        match kind {
            ColumnKind::Text => SortMode::Lexicographic,
            ColumnKind::Date { format } => {
                SortMode::Date(DateFormatParser::from_template(format.as_deref()))
            }
        }
    }
}

/// A value extracted from a cell, ready to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// Trimmed cell text.
    Text(String),
    /// A parsed date.
    Date(ParsedInstant),
}

impl SortKey {
    /// Empty text and empty or unparseable dates are "missing" values.
    pub fn is_missing(&self) -> bool {
        match self {
            SortKey::Text(text) => text.is_empty(),
            SortKey::Date(instant) => instant.is_missing(),
        }
    }

    /// Ascending comparison of two present keys.
    fn cmp_present(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => collate(a, b),
            (SortKey::Date(a), SortKey::Date(b)) => a.timestamp_millis().cmp(&b.timestamp_millis()),
            (SortKey::Text(_), SortKey::Date(_)) => Ordering::Less,
            (SortKey::Date(_), SortKey::Text(_)) => Ordering::Greater,
        }
    }
}

/// Root-locale collator compared at secondary strength: base letters and
/// accents count, case does not.
fn collator() -> Option<&'static CollatorBorrowed<'static>> {
    static COLLATOR: OnceLock<Option<CollatorBorrowed<'static>>> = OnceLock::new();
    COLLATOR
        .get_or_init(|| {
            let mut options = CollatorOptions::default();
            options.strength = Some(Strength::Secondary);
            match Collator::try_new(Default::default(), options) {
                Ok(collator) => Some(collator),
                Err(error) => {
                    tracing::warn!(
                        target: targets::SORT,
                        %error,
                        "collation data unavailable, comparing case-folded text"
                    );
                    None
                }
            }
        })
        .as_ref()
}

/// Locale-aware, case-insensitive string ordering.
///
/// Strings are compared with the Unicode root collation, ignoring case, so
/// accented letters sort beside their base letters. When they differ only by
/// case, the one with a lowercase letter at the first differing position
/// sorts first, and exact code points decide what is left.
///
/// ```
/// use std::cmp::Ordering;
/// use horizon_sortable::sort::collate;
///
/// assert_eq!(collate("bravo", "Foxtrot"), Ordering::Less);
/// assert_eq!(collate("Émile", "foxtrot"), Ordering::Less);
/// assert_eq!(collate("alpha", "Alpha"), Ordering::Less);
/// assert_eq!(collate("same", "same"), Ordering::Equal);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = match collator() {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    };

    primary
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map_or(Ordering::Equal, |(x, y)| {
                    match (x.is_lowercase(), y.is_lowercase()) {
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        _ => Ordering::Equal,
                    }
                })
        })
        .then_with(|| a.cmp(b))
}

/// Orders sort keys under a direction and an empty-value policy.
///
/// With `empty_last` set, missing keys go after every present key whichever
/// way the table is sorted. Without it they count as the smallest value and
/// follow the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortComparator {
    order: SortOrder,
    empty_last: bool,
}

impl Default for SortComparator {
    fn default() -> Self {
        Self::new(SortOrder::Ascending, true)
    }
}

impl SortComparator {
    /// Creates a comparator.
    pub fn new(order: SortOrder, empty_last: bool) -> Self {
        Self { order, empty_last }
    }

    /// The direction applied to present keys.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Whether missing keys are pinned to the end.
    pub fn empty_last(&self) -> bool {
        self.empty_last
    }

    /// Compares two keys.
    pub fn compare(&self, a: &SortKey, b: &SortKey) -> Ordering {
        match (a.is_missing(), b.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) if self.empty_last => Ordering::Greater,
            (false, true) if self.empty_last => Ordering::Less,
            (true, false) => self.order.apply(Ordering::Less),
            (false, true) => self.order.apply(Ordering::Greater),
            (false, false) => self.order.apply(a.cmp_present(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SortKey {
        SortKey::Text(s.to_string())
    }

    fn date(millis: i64) -> SortKey {
        SortKey::Date(ParsedInstant::Instant(millis))
    }

    fn sorted(comparator: SortComparator, mut keys: Vec<SortKey>) -> Vec<SortKey> {
        keys.sort_by(|a, b| comparator.compare(a, b));
        keys
    }

    #[test]
    fn test_collate_is_case_insensitive() {
        let mut words = vec!["uniform", "Foxtrot", "zulu", "bravo"];
        words.sort_by(|a, b| collate(a, b));
        assert_eq!(words, vec!["bravo", "Foxtrot", "uniform", "zulu"]);
    }

    #[test]
    fn test_collate_places_accents_beside_base_letters() {
        let mut words = vec!["zulu", "Émile", "echo", "foxtrot", "ångström", "bravo"];
        words.sort_by(|a, b| collate(a, b));
        assert_eq!(
            words,
            vec!["ångström", "bravo", "echo", "Émile", "foxtrot", "zulu"]
        );
        assert_eq!(collate("été", "zulu"), Ordering::Less);
        assert_eq!(collate("Ärger", "ast"), Ordering::Less);
    }

    #[test]
    fn test_collate_accent_is_not_a_case_tie() {
        assert_eq!(collate("resume", "résumé"), Ordering::Less);
        assert_eq!(collate("résumé", "resume"), Ordering::Greater);
        assert_eq!(collate("Résumé", "résumé"), Ordering::Greater);
    }

    #[test]
    fn test_collate_tie_breaks() {
        assert_eq!(collate("abc", "ABC"), Ordering::Less);
        assert_eq!(collate("ABC", "abc"), Ordering::Greater);
        assert_eq!(collate("aBc", "abC"), Ordering::Greater);
        assert_eq!(collate("ab", "abc"), Ordering::Less);
        assert_eq!(collate("", "a"), Ordering::Less);
    }

    #[test]
    fn test_direction_reverses_present_keys() {
        let asc = SortComparator::new(SortOrder::Ascending, true);
        let desc = SortComparator::new(SortOrder::Descending, true);
        assert_eq!(asc.compare(&text("a"), &text("b")), Ordering::Less);
        assert_eq!(desc.compare(&text("a"), &text("b")), Ordering::Greater);
        assert_eq!(asc.compare(&date(1), &date(2)), Ordering::Less);
        assert_eq!(desc.compare(&date(1), &date(2)), Ordering::Greater);
    }

    #[test]
    fn test_empty_last_in_both_directions() {
        let keys = vec![
            SortKey::Date(ParsedInstant::Invalid),
            date(20),
            SortKey::Date(ParsedInstant::Empty),
            date(10),
        ];

        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let result = sorted(SortComparator::new(order, true), keys.clone());
            assert!(!result[0].is_missing());
            assert!(!result[1].is_missing());
            assert!(result[2].is_missing());
            assert!(result[3].is_missing());
        }

        let asc = sorted(SortComparator::new(SortOrder::Ascending, true), keys.clone());
        assert_eq!(&asc[..2], &[date(10), date(20)]);
        let desc = sorted(SortComparator::new(SortOrder::Descending, true), keys);
        assert_eq!(&desc[..2], &[date(20), date(10)]);
    }

    #[test]
    fn test_empty_text_is_missing() {
        let comparator = SortComparator::new(SortOrder::Descending, true);
        assert_eq!(comparator.compare(&text(""), &text("a")), Ordering::Greater);
        assert_eq!(comparator.compare(&text(""), &text("")), Ordering::Equal);
    }

    #[test]
    fn test_empty_first_follows_direction() {
        let asc = SortComparator::new(SortOrder::Ascending, false);
        let desc = SortComparator::new(SortOrder::Descending, false);
        let empty = SortKey::Date(ParsedInstant::Empty);
        assert_eq!(asc.compare(&empty, &date(0)), Ordering::Less);
        assert_eq!(desc.compare(&empty, &date(0)), Ordering::Greater);
    }

    #[test]
    fn test_epoch_is_a_present_key() {
        let comparator = SortComparator::default();
        assert_eq!(
            comparator.compare(&date(0), &SortKey::Date(ParsedInstant::Invalid)),
            Ordering::Less
        );
        assert_eq!(comparator.compare(&date(-5), &date(0)), Ordering::Less);
    }

    #[test]
    fn test_mode_from_column_kind() {
        assert_eq!(SortMode::from(&ColumnKind::Text), SortMode::Lexicographic);
        let mode = SortMode::from(&ColumnKind::Date {
            format: Some("dd-MM-yyyy".into()),
        });
        assert_eq!(mode, SortMode::Date(DateFormatParser::new("dd-MM-yyyy")));
        assert!(mode.is_date());
        assert!(!SortMode::default().is_date());
    }

    #[test]
    fn test_mode_key() {
        let reference = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(SortMode::Lexicographic.key("x", reference), text("x"));
        let mode = SortMode::Date(DateFormatParser::new("yyyy"));
        assert_eq!(
            mode.key("nope", reference),
            SortKey::Date(ParsedInstant::Invalid)
        );
    }
}
