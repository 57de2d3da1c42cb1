//! Validation helpers for user input
//!
//! This module contains the due date validity predicate and the parsing of
//! positional task numbers typed at the prompt.

use crate::error::{Result, TaskError};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::str::FromStr;

/// Earliest accepted year
pub const MIN_YEAR: i64 = 1900;
/// Latest accepted year
pub const MAX_YEAR: i64 = 2100;

/// Rule used to decide whether a due date string is acceptable
///
/// Both rules require exactly ten bytes with `-` at byte positions 2 and 5.
/// They differ in how the numeric fields are read afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRule {
    /// Fixed-offset extraction: year from bytes 6..10, month from bytes 4..6,
    /// day from bytes 0..2. The month field therefore reads the second month
    /// digit and the trailing separator, so `15-10-2024` is rejected
    /// (month 0) while `15-06-2024` is accepted (month 6). The day bound is
    /// 31 for every month.
    #[default]
    Literal,
    /// Real `DD-MM-YYYY` calendar parse (month lengths and leap years apply)
    Calendar,
}

impl FromStr for DateRule {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "literal" => Ok(DateRule::Literal),
            "calendar" => Ok(DateRule::Calendar),
            _ => Err(format!(
                "Invalid date rule '{}'. Valid options are: literal, calendar",
                s
            )),
        }
    }
}

impl DateRule {
    /// Check a due date string against this rule
    pub fn is_valid(self, date: &str) -> bool {
        let bytes = date.as_bytes();
        if bytes.len() != 10 || bytes[2] != b'-' || bytes[5] != b'-' {
            return false;
        }

        match self {
            DateRule::Literal => {
                let (Some(year), Some(month), Some(day)) = (
                    leading_int(&bytes[6..10]),
                    leading_int(&bytes[4..6]),
                    leading_int(&bytes[0..2]),
                ) else {
                    return false;
                };
                (MIN_YEAR..=MAX_YEAR).contains(&year)
                    && (1..=12).contains(&month)
                    && (1..=31).contains(&day)
            }
            DateRule::Calendar => NaiveDate::parse_from_str(date, "%d-%m-%Y")
                .map(|d| (MIN_YEAR..=MAX_YEAR).contains(&i64::from(d.year())))
                .unwrap_or(false),
        }
    }

    /// Validate a due date, reporting `InvalidDateFormat` on failure
    pub fn check(self, date: &str) -> Result<()> {
        if self.is_valid(date) {
            Ok(())
        } else {
            Err(TaskError::InvalidDateFormat(date.to_string()))
        }
    }
}

/// Check a due date with the default (literal offset) rule
///
/// # Examples
/// ```
/// use tasklist::validation::is_valid_date;
///
/// assert!(is_valid_date("15-06-2024"));
/// assert!(!is_valid_date("2024-06-15"));
/// ```
pub fn is_valid_date(date: &str) -> bool {
    DateRule::Literal.is_valid(date)
}

/// Parse the leading integer of a field
///
/// Skips leading whitespace, accepts one optional sign and then consumes
/// digits up to the first non-digit. Returns `None` when no digit follows.
fn leading_int(field: &[u8]) -> Option<i64> {
    let mut rest = field;
    while let [first, tail @ ..] = rest
        && first.is_ascii_whitespace()
    {
        rest = tail;
    }

    let mut negative = false;
    if let [sign @ (b'+' | b'-'), tail @ ..] = rest {
        negative = *sign == b'-';
        rest = tail;
    }

    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let value = rest[..digits]
        .iter()
        .fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'));
    Some(if negative { -value } else { value })
}

/// Parse a 1-based task number typed at the prompt
///
/// Only the syntax is checked here; range checks against the store happen
/// in [`crate::TaskStore`].
pub fn parse_task_number(input: &str) -> Result<usize> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| TaskError::InvalidTaskIndex(input.trim().to_string()))
}
