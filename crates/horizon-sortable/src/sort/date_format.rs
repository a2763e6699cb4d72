//! Date parsing against format templates.
//!
//! A template is a string such as `"dd-MM-yyyy"` or `"MMM d, yyyy hh:mm a"`.
//! It is split into runs of identical characters. Recognised runs are fields:
//!
//! | Run                  | Meaning                         | Digits / range     |
//! |----------------------|---------------------------------|--------------------|
//! | `yyyy` / `yy` / `y`  | year                            | 4 / 2 / 2–4        |
//! | `MM` / `M`           | month                           | 1–12               |
//! | `MMM`                | month name, full or abbreviated |                    |
//! | `NNN`                | month name, abbreviated only    |                    |
//! | `dd` / `d`           | day of month                    | 1–31               |
//! | `EE` / `E`           | weekday name (ignored)          |                    |
//! | `hh` / `h`           | hour                            | 1–12               |
//! | `HH` / `H`           | hour                            | 0–23               |
//! | `KK` / `K`           | hour                            | 0–11               |
//! | `kk` / `k`           | hour                            | 1–24               |
//! | `mm` / `m`           | minute                          | 0–59               |
//! | `ss` / `s`           | second                          | 0–59               |
//! | `a`                  | am / pm                         |                    |
//!
//! Any other run is a literal that must appear verbatim in the value.
//! Two-letter numeric fields take exactly two digits; one-letter fields take
//! one or two. Two-digit years from 70 up land in the 1900s, the rest in the
//! 2000s. Fields missing from the template are taken from a reference
//! instant, normally the current local time.
//!
//! Without a template, values are parsed as RFC 3339, RFC 2822 or a handful
//! of ISO-8601 layouts.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use horizon_sortable::sort::{DateFormatParser, ParsedInstant};
//!
//! let parser = DateFormatParser::new("dd-MM-yyyy");
//! let reference = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//!
//! let expected = NaiveDate::from_ymd_opt(2020, 3, 5)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! assert_eq!(
//!     parser.parse("05-03-2020", reference),
//!     ParsedInstant::Instant(expected.and_utc().timestamp_millis())
//! );
//! assert_eq!(parser.parse("29-02-2021", reference), ParsedInstant::Invalid);
//! assert_eq!(parser.parse("", reference), ParsedInstant::Empty);
//! ```

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use horizon_sortable_core::logging::targets;
use horizon_sortable_core::DateParseError;

/// Full month names followed by their abbreviations.
static MONTH_NAMES: [&str; 24] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug",
    "Sep", "Oct", "Nov", "Dec",
];

/// Full weekday names followed by their abbreviations.
static DAY_NAMES: [&str; 14] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sun", "Mon",
    "Tue", "Wed", "Thu", "Fri", "Sat",
];

/// Layouts tried, in order, when no template is given.
const FREE_FORM_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const FREE_FORM_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// The outcome of parsing a cell as a date.
///
/// `Empty` and `Invalid` never collide with a real instant, including the
/// epoch itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsedInstant {
    /// The cell had no text.
    Empty,
    /// The cell had text that did not match the template.
    Invalid,
    /// Milliseconds since 1970-01-01T00:00:00 of the resolved wall-clock fields.
    Instant(i64),
}

impl ParsedInstant {
    /// Returns the timestamp, if the parse succeeded.
    pub fn timestamp_millis(&self) -> Option<i64> {
        match self {
            ParsedInstant::Instant(millis) => Some(*millis),
            _ => None,
        }
    }

    /// Returns `true` for `Empty` and `Invalid`.
    pub fn is_missing(&self) -> bool {
        !matches!(self, ParsedInstant::Instant(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HourKind {
    /// `h`: 1–12.
    OneToTwelve,
    /// `H`: 0–23.
    ZeroToTwentyThree,
    /// `K`: 0–11.
    ZeroToEleven,
    /// `k`: 1–24, stored shifted down by one.
    OneToTwentyFour,
}

impl HourKind {
    fn range(self) -> (u32, u32) {
        match self {
            HourKind::OneToTwelve => (1, 12),
            HourKind::ZeroToTwentyThree => (0, 23),
            HourKind::ZeroToEleven => (0, 11),
            HourKind::OneToTwentyFour => (1, 24),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Year { min: usize, max: usize },
    Month { min: usize },
    MonthName { abbreviated_only: bool },
    Day { min: usize },
    Weekday,
    Hour { kind: HourKind, min: usize },
    Minute { min: usize },
    Second { min: usize },
    Meridiem,
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    fn from_run(c: char, len: usize, text: String) -> Self {
        let kind = match (c, len) {
            ('y', 4) => TokenKind::Year { min: 4, max: 4 },
            ('y', 2) => TokenKind::Year { min: 2, max: 2 },
            ('y', 1) => TokenKind::Year { min: 2, max: 4 },
            ('M', 1 | 2) => TokenKind::Month { min: len },
            ('M', 3) => TokenKind::MonthName {
                abbreviated_only: false,
            },
            ('N', 3) => TokenKind::MonthName {
                abbreviated_only: true,
            },
            ('d', 1 | 2) => TokenKind::Day { min: len },
            ('E', 1 | 2) => TokenKind::Weekday,
            ('h', 1 | 2) => TokenKind::Hour {
                kind: HourKind::OneToTwelve,
                min: len,
            },
            ('H', 1 | 2) => TokenKind::Hour {
                kind: HourKind::ZeroToTwentyThree,
                min: len,
            },
            ('K', 1 | 2) => TokenKind::Hour {
                kind: HourKind::ZeroToEleven,
                min: len,
            },
            ('k', 1 | 2) => TokenKind::Hour {
                kind: HourKind::OneToTwentyFour,
                min: len,
            },
            ('m', 1 | 2) => TokenKind::Minute { min: len },
            ('s', 1 | 2) => TokenKind::Second { min: len },
            ('a', 1) => TokenKind::Meridiem,
            _ => TokenKind::Literal,
        };
        Self { kind, text }
    }
}

/// Splits a template into runs of identical characters.
fn tokenize(template: &str) -> Vec<Token> {
    let chars: Vec<char> = template.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let start = i;
        while i < chars.len() && chars[i] == c {
            i += 1;
        }
        let text: String = chars[start..i].iter().collect();
        tokens.push(Token::from_run(c, i - start, text));
    }
    tokens
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Fields read from the value; `None` means "take it from the reference".
#[derive(Debug, Default)]
struct Fields {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
    meridiem: Option<Meridiem>,
}

/// Walks the value one token at a time. Positions count characters.
struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(value: &str) -> Self {
        Self {
            chars: value.chars().collect(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn remaining(&self) -> &[char] {
        &self.chars[self.pos..]
    }

    /// Reads the longest all-digit run of `min..=max` characters.
    fn read_number(&mut self, token: &Token, min: usize, max: usize) -> Result<(u32, usize), DateParseError> {
        let remaining = self.remaining();
        for width in (min..=max).rev() {
            let candidate = &remaining[..width.min(remaining.len())];
            if candidate.len() < min {
                break;
            }
            if candidate.iter().all(char::is_ascii_digit) {
                let value = candidate
                    .iter()
                    .filter_map(|c| c.to_digit(10))
                    .fold(0u32, |acc, digit| acc * 10 + digit);
                let consumed = candidate.len();
                self.pos += consumed;
                return Ok((value, consumed));
            }
        }
        Err(DateParseError::ExpectedNumber {
            token: token.text.clone(),
            position: self.pos,
        })
    }

    /// Case-insensitively matches `name` at the cursor, advancing past it.
    fn eat_name(&mut self, name: &str) -> bool {
        let remaining = self.remaining();
        let len = name.chars().count();
        if remaining.len() < len {
            return false;
        }
        let matches = remaining[..len]
            .iter()
            .zip(name.chars())
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()));
        if matches {
            self.pos += len;
        }
        matches
    }

    /// Matches `literal` exactly at the cursor, advancing past it.
    fn eat_literal(&mut self, literal: &str) -> bool {
        let remaining = self.remaining();
        let len = literal.chars().count();
        let matches = remaining.len() >= len && remaining[..len].iter().copied().eq(literal.chars());
        if matches {
            self.pos += len;
        }
        matches
    }
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<u32, DateParseError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(DateParseError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Parses cell values into comparable instants using a format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatParser {
    template: Option<String>,
    tokens: Vec<Token>,
}

impl DateFormatParser {
    /// Creates a parser for the given template.
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        let tokens = tokenize(&template);
        Self {
            template: Some(template),
            tokens,
        }
    }

    /// Creates a parser that accepts ISO-8601 and other common layouts.
    pub fn free_form() -> Self {
        Self {
            template: None,
            tokens: Vec::new(),
        }
    }

    /// Creates a template parser, or a free-form one when `template` is `None`.
    pub fn from_template(template: Option<&str>) -> Self {
        match template {
            Some(template) => Self::new(template),
            None => Self::free_form(),
        }
    }

    /// The template, if any.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Parses `value` into a [`ParsedInstant`].
    ///
    /// Fields the template does not mention are taken from `reference`.
    pub fn parse(&self, value: &str, reference: NaiveDateTime) -> ParsedInstant {
        if value.is_empty() {
            return ParsedInstant::Empty;
        }
        match self.parse_datetime(value, reference) {
            Ok(datetime) => ParsedInstant::Instant(datetime.and_utc().timestamp_millis()),
            Err(err) => {
                tracing::trace!(
                    target: targets::DATE,
                    value,
                    template = self.template(),
                    error = %err,
                    "date value did not parse"
                );
                ParsedInstant::Invalid
            }
        }
    }

    /// Parses `value` into a date-time, reporting why it failed.
    pub fn parse_datetime(&self, value: &str, reference: NaiveDateTime) -> Result<NaiveDateTime, DateParseError> {
        match self.template {
            Some(_) => self.parse_with_template(value, reference),
            None => parse_free_form(value),
        }
    }

    fn parse_with_template(&self, value: &str, reference: NaiveDateTime) -> Result<NaiveDateTime, DateParseError> {
        let mut cursor = Cursor::new(value);
        let mut fields = Fields::default();

        for token in &self.tokens {
            if cursor.at_end() {
                return Err(DateParseError::InputExhausted {
                    token: token.text.clone(),
                    position: cursor.pos,
                });
            }

            match token.kind {
                TokenKind::Year { min, max } => {
                    let (year, digits) = cursor.read_number(token, min, max)?;
                    let year = year as i32;
                    fields.year = Some(if digits == 2 {
                        if year >= 70 { 1900 + year } else { 2000 + year }
                    } else {
                        year
                    });
                }
                TokenKind::Month { min } => {
                    let (month, _) = cursor.read_number(token, min, 2)?;
                    fields.month = Some(check_range("month", month, 1, 12)?);
                }
                TokenKind::MonthName { abbreviated_only } => {
                    let skip = if abbreviated_only { 12 } else { 0 };
                    let position = cursor.pos;
                    let month = MONTH_NAMES
                        .iter()
                        .enumerate()
                        .skip(skip)
                        .find(|(_, name)| cursor.eat_name(name))
                        .map(|(i, _)| (i % 12) as u32 + 1)
                        .ok_or(DateParseError::UnknownName {
                            kind: "month",
                            position,
                        })?;
                    fields.month = Some(month);
                }
                TokenKind::Day { min } => {
                    let (day, _) = cursor.read_number(token, min, 2)?;
                    fields.day = Some(check_range("day", day, 1, 31)?);
                }
                TokenKind::Weekday => {
                    let position = cursor.pos;
                    if !DAY_NAMES.iter().any(|name| cursor.eat_name(name)) {
                        return Err(DateParseError::UnknownName {
                            kind: "weekday",
                            position,
                        });
                    }
                }
                TokenKind::Hour { kind, min } => {
                    let (hour, _) = cursor.read_number(token, min, 2)?;
                    let (low, high) = kind.range();
                    let hour = check_range("hour", hour, low, high)?;
                    fields.hour = Some(if kind == HourKind::OneToTwentyFour {
                        hour - 1
                    } else {
                        hour
                    });
                }
                TokenKind::Minute { min } => {
                    let (minute, _) = cursor.read_number(token, min, 2)?;
                    fields.minute = Some(check_range("minute", minute, 0, 59)?);
                }
                TokenKind::Second { min } => {
                    let (second, _) = cursor.read_number(token, min, 2)?;
                    fields.second = Some(check_range("second", second, 0, 59)?);
                }
                TokenKind::Meridiem => {
                    let position = cursor.pos;
                    fields.meridiem = if cursor.eat_name("am") {
                        Some(Meridiem::Am)
                    } else if cursor.eat_name("pm") {
                        Some(Meridiem::Pm)
                    } else {
                        return Err(DateParseError::InvalidMeridiem { position });
                    };
                }
                TokenKind::Literal => {
                    if !cursor.eat_literal(&token.text) {
                        return Err(DateParseError::LiteralMismatch {
                            expected: token.text.clone(),
                            position: cursor.pos,
                        });
                    }
                }
            }
        }

        if !cursor.at_end() {
            return Err(DateParseError::TrailingInput { position: cursor.pos });
        }

        resolve(fields, reference)
    }
}

/// Combines parsed fields with the reference instant and validates the date.
fn resolve(fields: Fields, reference: NaiveDateTime) -> Result<NaiveDateTime, DateParseError> {
    let year = fields.year.unwrap_or_else(|| reference.year());
    let month = fields.month.unwrap_or_else(|| reference.month());
    let max_day = days_in_month(year, month);

    let day = match fields.day {
        Some(day) if day > max_day => {
            return Err(DateParseError::InvalidDate { year, month, day });
        }
        Some(day) => day,
        None => reference.day().min(max_day),
    };

    let mut hour = fields.hour.unwrap_or_else(|| reference.hour());
    match fields.meridiem {
        Some(Meridiem::Pm) if hour < 12 => hour += 12,
        Some(Meridiem::Am) if hour > 11 => hour -= 12,
        _ => {}
    }
    let minute = fields.minute.unwrap_or_else(|| reference.minute());
    let second = fields.second.unwrap_or_else(|| reference.second());

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateParseError::InvalidDate { year, month, day })?;
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(DateParseError::OutOfRange {
        field: "hour",
        value: hour,
        min: 0,
        max: 23,
    })?;
    Ok(date.and_time(time))
}

/// Parses ISO-8601 and related layouts. Offsets are normalised to UTC.
fn parse_free_form(value: &str) -> Result<NaiveDateTime, DateParseError> {
    let value = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.naive_utc());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc2822(value) {
        return Ok(datetime.naive_utc());
    }
    for format in FREE_FORM_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime);
        }
    }
    for format in FREE_FORM_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }
    Err(DateParseError::Unrecognised(value.to_string()))
}
