//! Caller-owned operation log.

use chrono::{DateTime, Utc};

use stockledger_core::{ItemName, Quantity};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Ordered text records of ledger additions.
///
/// The ledger never owns one of these; callers pass `Some(&mut log)` to
/// `StockLedger::add_stock` when they want a record kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationLog {
    entries: Vec<String>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `"<timestamp>: Added <amount> of <name>"`.
    pub fn record_added(&mut self, at: DateTime<Utc>, name: &ItemName, amount: Quantity) {
        self.entries.push(format!(
            "{}: Added {amount} of {name}",
            at.format(TIMESTAMP_FORMAT)
        ));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_uses_fixed_layout() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let mut log = OperationLog::new();
        log.record_added(at, &ItemName::parse("apple").unwrap(), Quantity::Int(10));

        assert_eq!(log.entries(), ["2024-03-09 14:05:07.000000: Added 10 of apple"]);
    }

    #[test]
    fn records_keep_insertion_order() {
        let at = Utc::now();
        let mut log = OperationLog::new();
        log.record_added(at, &ItemName::parse("a").unwrap(), Quantity::Int(1));
        log.record_added(at, &ItemName::parse("b").unwrap(), Quantity::Float(-2.5));

        let names: Vec<_> = log.iter().map(|e| e.rsplit(' ').next().unwrap()).collect();
        assert_eq!(names, ["a", "b"]);
        assert!(log.entries()[1].contains("Added -2.5 of b"));
        assert_eq!(log.len(), 2);
    }
}
