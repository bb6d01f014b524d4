use chrono::NaiveDate;
use serde::Serialize;
use tabled::Tabled;

/// Country code used when a subdivision name is not in the table.
pub const UNKNOWN_COUNTRY: &str = "XXX";

/// The four columns of one input line, still unparsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRow<'a> {
    pub date: &'a str,
    pub subdivision: &'a str,
    pub impressions: &'a str,
    pub ctr: &'a str,
}

/// Click-through rate as an exact fraction: `digits / 10^(scale + 2)`.
///
/// `"3.5%"` is stored as `digits = 35, scale = 1`, i.e. a ratio of 0.035.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctr {
    pub digits: u64,
    pub scale: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRow {
    pub date: NaiveDate,
    pub country: &'static str,
    pub impressions: u64,
    pub clicks: u64,
}

/// Grouping key of the aggregation store. Field order gives the output order:
/// date first, then country code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AggregationKey {
    pub date: NaiveDate,
    pub country: &'static str,
}

/// One output line: a key plus its summed metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct AggregationEntry {
    #[tabled(rename = "Date")]
    pub date: NaiveDate,
    #[tabled(rename = "Country")]
    pub country: &'static str,
    #[tabled(rename = "Impressions")]
    pub impressions: u64,
    #[tabled(rename = "Clicks")]
    pub clicks: u64,
}

impl AggregationEntry {
    pub fn key(&self) -> AggregationKey {
        AggregationKey {
            date: self.date,
            country: self.country,
        }
    }
}

/// Counters collected over one run, optionally exported as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub encoding: String,
    pub total_lines: usize,
    pub accepted_rows: usize,
    pub rejected_rows: usize,
    pub unknown_country_rows: usize,
    pub output_rows: usize,
}
