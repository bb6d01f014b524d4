// Error types for the report pipeline.
//
// Row-level errors (`FieldError`, `RowError`) are recoverable: the offending
// line is skipped and reported. `ProcError` covers the conditions that end a
// run early.
use std::fmt;
use thiserror::Error;

/// Input column a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Subdivision,
    Impressions,
    Ctr,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Subdivision => "subdivision",
            Field::Impressions => "impressions",
            Field::Ctr => "ctr",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("invalid date format, expected MM/DD/YYYY")]
    DateFormat,
    #[error("date does not exist in the calendar")]
    DateOutOfRange,
    #[error("value is empty")]
    Empty,
    #[error("value of number of impressions is negative")]
    Negative,
    #[error("value of number of impressions is not an integer")]
    NotAnInteger,
    #[error("value of number of impressions is too large")]
    TooLarge,
    #[error("ctr is missing the trailing '%'")]
    MissingPercent,
    #[error("ctr is not a non-negative decimal number")]
    NotADecimal,
    #[error("ctr percentage is outside [0, 100] interval")]
    CtrOutOfRange,
}

/// A single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field} '{value}': {reason}")]
pub struct FieldError {
    pub field: Field,
    pub value: String,
    pub reason: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: Field, value: &str, reason: FieldErrorKind) -> Self {
        FieldError {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

/// Reason a whole input line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("expected 4 columns, found {found}")]
    MalformedLine { found: usize },
    #[error(transparent)]
    InvalidField(#[from] FieldError),
}

impl RowError {
    /// Column that caused the rejection, if the line had the right shape.
    pub fn field(&self) -> Option<Field> {
        match self {
            RowError::MalformedLine { .. } => None,
            RowError::InvalidField(e) => Some(e.field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("input is neither valid UTF-8 nor UTF-16")]
    Unrecognized,
    #[error("input looks like {encoding} but contains malformed sequences")]
    Malformed { encoding: &'static str },
}

/// Fatal errors: any of these aborts the run.
#[derive(Debug, Error)]
pub enum ProcError {
    #[error("Invalid encoding of the input file: {0}")]
    Encoding(#[from] EncodingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid generator settings: {0}")]
    Settings(String),
}

pub type ProcResult<T> = Result<T, ProcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_message_names_field_and_value() {
        let e = FieldError::new(Field::Ctr, "5", FieldErrorKind::MissingPercent);
        assert_eq!(e.to_string(), "invalid ctr '5': ctr is missing the trailing '%'");
    }

    #[test]
    fn row_error_wraps_field_error_transparently() {
        let e: RowError = FieldError::new(Field::Date, "13/40/2020", FieldErrorKind::DateOutOfRange).into();
        assert_eq!(e.field(), Some(Field::Date));
        assert_eq!(
            e.to_string(),
            "invalid date '13/40/2020': date does not exist in the calendar"
        );
    }

    #[test]
    fn malformed_line_has_no_field() {
        let e = RowError::MalformedLine { found: 3 };
        assert_eq!(e.field(), None);
        assert_eq!(e.to_string(), "expected 4 columns, found 3");
    }
}
