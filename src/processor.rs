// Turns one input line into a validated row.
use crate::error::RowError;
use crate::resolver::SubdivisionTable;
use crate::types::{RawRow, ValidatedRow};
use crate::util::{parse_ctr, parse_date, parse_impressions, parse_subdivision, round_clicks};

/// Split a line into its four columns.
///
/// A trailing `\r` or `\n` is ignored; anything else counts toward the
/// columns, so a blank line is one (empty) column and therefore malformed.
pub fn split_line(line: &str) -> Result<RawRow<'_>, RowError> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let cols: Vec<&str> = line.split(',').collect();
    match cols[..] {
        [date, subdivision, impressions, ctr] => Ok(RawRow {
            date,
            subdivision,
            impressions,
            ctr,
        }),
        _ => Err(RowError::MalformedLine { found: cols.len() }),
    }
}

/// Validate a line and derive its click count.
///
/// Columns are checked left to right and the first failing one is reported.
/// An unknown subdivision is not a failure: it resolves to `"XXX"`.
pub fn process_line(line: &str, table: &SubdivisionTable) -> Result<ValidatedRow, RowError> {
    let raw = split_line(line)?;

    let date = parse_date(raw.date)?;
    let subdivision = parse_subdivision(raw.subdivision)?;
    let impressions = parse_impressions(raw.impressions)?;
    let ctr = parse_ctr(raw.ctr)?;

    Ok(ValidatedRow {
        date,
        country: table.resolve(subdivision),
        impressions,
        clicks: round_clicks(impressions, ctr),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Field, FieldErrorKind};
    use chrono::NaiveDate;

    fn table() -> SubdivisionTable {
        SubdivisionTable::builtin()
    }

    fn reason(err: RowError) -> FieldErrorKind {
        match err {
            RowError::InvalidField(e) => e.reason,
            other => panic!("expected field error, got {other:?}"),
        }
    }

    #[test]
    fn valid_line_is_normalized() {
        let row = process_line("01/02/2020,California,100,5%", &table()).unwrap();
        assert_eq!(
            row,
            ValidatedRow {
                date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
                country: "USA",
                impressions: 100,
                clicks: 5,
            }
        );
    }

    #[test]
    fn line_terminators_are_ignored() {
        let row = process_line("01/02/2020,Nevada,50,10%\r\n", &table()).unwrap();
        assert_eq!(row.clicks, 5);
        assert_eq!(row.country, "USA");
    }

    #[test]
    fn subdivision_whitespace_is_trimmed_before_lookup() {
        let row = process_line("01/02/2020,  Ontario ,10,10%", &table()).unwrap();
        assert_eq!(row.country, "CAN");
    }

    #[test]
    fn unknown_subdivision_goes_to_sentinel() {
        let row = process_line("01/02/2020,Atlantis,10,10%", &table()).unwrap();
        assert_eq!(row.country, "XXX");
        assert_eq!(row.impressions, 10);
        assert_eq!(row.clicks, 1);
    }

    #[test]
    fn wrong_column_count_is_malformed() {
        let t = table();
        assert_eq!(
            process_line("01/02/2020,Texas,10", &t),
            Err(RowError::MalformedLine { found: 3 })
        );
        assert_eq!(
            process_line("01/02/2020,Texas,10,5%,extra", &t),
            Err(RowError::MalformedLine { found: 5 })
        );
        assert_eq!(process_line("", &t), Err(RowError::MalformedLine { found: 1 }));
    }

    #[test]
    fn invalid_date_is_rejected() {
        let err = process_line("13/40/2020,Texas,10,5%", &table()).unwrap_err();
        assert_eq!(err.field(), Some(Field::Date));
        assert_eq!(reason(err), FieldErrorKind::DateOutOfRange);
    }

    #[test]
    fn missing_percent_is_rejected() {
        let err = process_line("01/02/2020,Texas,10,5", &table()).unwrap_err();
        assert_eq!(err.field(), Some(Field::Ctr));
        assert_eq!(reason(err), FieldErrorKind::MissingPercent);
    }

    #[test]
    fn negative_impressions_are_rejected() {
        let err = process_line("01/02/2020,Texas,-10,5%", &table()).unwrap_err();
        assert_eq!(err.field(), Some(Field::Impressions));
        assert_eq!(reason(err), FieldErrorKind::Negative);
    }

    #[test]
    fn first_failing_column_wins() {
        // Both the date and the CTR are bad; the date comes first.
        let err = process_line("2020-01-02,Texas,10,5", &table()).unwrap_err();
        assert_eq!(err.field(), Some(Field::Date));

        let err = process_line("01/02/2020, ,abc,5", &table()).unwrap_err();
        assert_eq!(err.field(), Some(Field::Subdivision));
    }
}
