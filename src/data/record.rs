//! A single labeled data line.

use crate::error::{PlotError, Result};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// One data line: a point and its class label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Class label. Zero is the first class, anything else the second.
    ///
    /// Integer labels outside the `i64` range saturate to `i64::MIN` or
    /// `i64::MAX`, which keeps them in the second class.
    pub label: i64,
}

impl Record {
    /// Create a record.
    pub fn new(x: f64, y: f64, label: i64) -> Self {
        Self { x, y, label }
    }

    /// Parse a `<x> <y> <label>` line.
    ///
    /// Tokens are separated by single spaces; anything after the third token
    /// is ignored. `line_number` is 1-based and only used for error reporting.
    pub fn parse(line: &str, line_number: usize) -> Result<Self> {
        let mut tokens = line.split(' ');

        let x = parse_field(tokens.next(), line_number, "x")?;
        let y = parse_field(tokens.next(), line_number, "y")?;
        let SaturatingLabel(label) = parse_field(tokens.next(), line_number, "label")?;

        Ok(Self { x, y, label })
    }

    /// Whether this record belongs to the label-0 class.
    pub fn is_class_zero(&self) -> bool {
        self.label == 0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.label)
    }
}

/// An integer label clamped to the `i64` range instead of overflowing.
struct SaturatingLabel(i64);

impl FromStr for SaturatingLabel {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(v) => Ok(Self(v)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Self(i64::MAX)),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(Self(i64::MIN)),
            Err(e) => Err(e),
        }
    }
}

fn parse_field<T: FromStr>(
    token: Option<&str>,
    line_number: usize,
    field: &'static str,
) -> Result<T> {
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or(PlotError::MissingField {
            line: line_number,
            field,
        })?;

    token
        .trim()
        .parse::<T>()
        .map_err(|_| PlotError::parse(line_number, field, token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_fields() {
        let record = Record::parse("1.5 -2.25 1", 2).unwrap();
        assert_eq!(record, Record::new(1.5, -2.25, 1));
        assert!(!record.is_class_zero());
    }

    #[test]
    fn ignores_extra_tokens_and_trailing_carriage_return() {
        let record = Record::parse("3 4 0 extra", 5).unwrap();
        assert_eq!(record, Record::new(3.0, 4.0, 0));

        let record = Record::parse("3 4 0\r", 5).unwrap();
        assert!(record.is_class_zero());
    }

    #[test]
    fn non_numeric_x_is_a_parse_error() {
        let err = Record::parse("abc 2.0 0", 3).unwrap_err();
        match err {
            PlotError::Parse { line, field, token } => {
                assert_eq!(line, 3);
                assert_eq!(field, "x");
                assert_eq!(token, "abc");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fractional_label_is_rejected() {
        let err = Record::parse("1.0 2.0 1.0", 2).unwrap_err();
        assert!(matches!(err, PlotError::Parse { field: "label", .. }));
    }

    #[test]
    fn out_of_range_labels_stay_in_second_class() {
        let record = Record::parse("1 2 99999999999999999999", 2).unwrap();
        assert_eq!(record.label, i64::MAX);
        assert!(!record.is_class_zero());

        let record = Record::parse("1 2 -99999999999999999999", 2).unwrap();
        assert_eq!(record.label, i64::MIN);
        assert!(!record.is_class_zero());

        let record = Record::parse("1 2 -0", 2).unwrap();
        assert!(record.is_class_zero());
    }

    #[test]
    fn short_and_blank_lines_miss_fields() {
        let err = Record::parse("1.0 2.0", 4).unwrap_err();
        assert!(matches!(
            err,
            PlotError::MissingField {
                line: 4,
                field: "label"
            }
        ));

        let err = Record::parse("", 7).unwrap_err();
        assert!(matches!(err, PlotError::MissingField { line: 7, field: "x" }));
    }

    #[test]
    fn double_space_yields_an_empty_field() {
        let err = Record::parse("1.0  2.0 0", 2).unwrap_err();
        assert!(matches!(err, PlotError::MissingField { field: "y", .. }));
    }

    #[test]
    fn display_matches_file_format() {
        assert_eq!(Record::new(1.5, -2.0, 1).to_string(), "1.5 -2 1");
    }
}
