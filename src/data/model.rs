use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// YearMonth – the REF_DATE cell
// ---------------------------------------------------------------------------

/// A calendar month as published in `REF_DATE` (`YYYY-MM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseYearMonthError;

impl fmt::Display for ParseYearMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a YYYY-MM date")
    }
}

impl std::error::Error for ParseYearMonthError {}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        // Let chrono reject month 0 / 13 and friends.
        let date = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(YearMonth {
            year: date.year(),
            month: date.month(),
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    /// Strict `YYYY-MM`: four-digit year, a dash, two-digit month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(ParseYearMonthError);
        }
        let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
        if !digits(0..4) || !digits(5..7) {
            return Err(ParseYearMonthError);
        }
        let year: i32 = s[0..4].parse().map_err(|_| ParseYearMonthError)?;
        let month: u32 = s[5..7].parse().map_err(|_| ParseYearMonthError)?;
        YearMonth::new(year, month).ok_or(ParseYearMonthError)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Observation – one CPI reading
// ---------------------------------------------------------------------------

/// One CPI reading, already projected to the four output columns.
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    #[serde(rename = "REF_DATE")]
    pub ref_date: YearMonth,
    #[serde(rename = "GEO")]
    pub geo: String,
    #[serde(rename = "Products and product groups")]
    pub category: String,
    /// `None` when the source cell is blank (suppressed or not yet published).
    #[serde(rename = "VALUE")]
    pub value: Option<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – ordered row sequence
// ---------------------------------------------------------------------------

/// An ordered sequence of observations. Order is input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub rows: Vec<Observation>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Observation>) -> Self {
        Dataset { rows }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
