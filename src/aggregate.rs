// In-memory aggregation of validated rows by (date, country).
use crate::types::{AggregationEntry, AggregationKey, ValidatedRow};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Totals {
    impressions: u64,
    clicks: u64,
}

/// Running sums keyed by (date, country). One entry per distinct key.
#[derive(Debug, Default)]
pub struct Aggregator {
    map: HashMap<AggregationKey, Totals>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row's impressions and clicks to the entry for its key,
    /// creating the entry on first sight.
    pub fn accumulate(&mut self, row: &ValidatedRow) {
        let key = AggregationKey {
            date: row.date,
            country: row.country,
        };
        let e = self.map.entry(key).or_default();
        if e.impressions.checked_add(row.impressions).is_none()
            || e.clicks.checked_add(row.clicks).is_none()
        {
            warn!(date = %key.date, country = key.country, "metric sum saturated at u64::MAX");
        }
        e.impressions = e.impressions.saturating_add(row.impressions);
        e.clicks = e.clicks.saturating_add(row.clicks);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Consume the store and return its entries ordered by date, then
    /// country code.
    pub fn drain(self) -> Vec<AggregationEntry> {
        let mut entries: Vec<AggregationEntry> = self
            .map
            .into_iter()
            .map(|(key, totals)| AggregationEntry {
                date: key.date,
                country: key.country,
                impressions: totals.impressions,
                clicks: totals.clicks,
            })
            .collect();
        entries.sort_by_key(AggregationEntry::key);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(day: u32, country: &'static str, impressions: u64, clicks: u64) -> ValidatedRow {
        ValidatedRow {
            date: NaiveDate::from_ymd_opt(2020, 1, day).unwrap(),
            country,
            impressions,
            clicks,
        }
    }

    #[test]
    fn same_key_is_summed() {
        let mut agg = Aggregator::new();
        agg.accumulate(&row(2, "USA", 100, 5));
        agg.accumulate(&row(2, "USA", 50, 5));
        assert_eq!(agg.len(), 1);

        let out = agg.drain();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].country, "USA");
        assert_eq!(out[0].impressions, 150);
        assert_eq!(out[0].clicks, 10);
    }

    #[test]
    fn drain_orders_by_date_then_country() {
        let mut agg = Aggregator::new();
        for r in [
            row(3, "CAN", 1, 0),
            row(1, "USA", 1, 0),
            row(1, "XXX", 1, 0),
            row(1, "CAN", 1, 0),
            row(2, "DEU", 1, 0),
        ] {
            agg.accumulate(&r);
        }
        let keys: Vec<_> = agg
            .drain()
            .iter()
            .map(|e| (e.date.format("%d").to_string(), e.country))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("01".to_string(), "CAN"),
                ("01".to_string(), "USA"),
                ("01".to_string(), "XXX"),
                ("02".to_string(), "DEU"),
                ("03".to_string(), "CAN"),
            ]
        );
    }

    #[test]
    fn drained_keys_are_strictly_increasing() {
        let mut agg = Aggregator::new();
        for i in 0..200u64 {
            let day = (i % 28 + 1) as u32;
            let country = ["USA", "CAN", "XXX", "DEU"][(i % 4) as usize];
            agg.accumulate(&row(day, country, i, i / 10));
        }
        let out = agg.drain();
        assert!(out.windows(2).all(|w| w[0].key() < w[1].key()));
        let total: u64 = out.iter().map(|e| e.impressions).sum();
        assert_eq!(total, (0..200u64).sum::<u64>());
    }

    #[test]
    fn empty_store_drains_to_nothing() {
        let agg = Aggregator::new();
        assert!(agg.is_empty());
        assert!(agg.drain().is_empty());
    }

    #[test]
    fn overflow_saturates() {
        let mut agg = Aggregator::new();
        agg.accumulate(&row(1, "USA", u64::MAX, 1));
        agg.accumulate(&row(1, "USA", 1, 1));
        let out = agg.drain();
        assert_eq!(out[0].impressions, u64::MAX);
        assert_eq!(out[0].clicks, 2);
    }
}
