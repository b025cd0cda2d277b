//! The stock ledger: quantity mutation, queries and load/save.

use std::path::Path;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, warn};

use stockledger_core::{ItemName, LedgerError, LedgerResult, Quantity};

use crate::oplog::OperationLog;
use crate::persistence::{self, Quantities};

/// File a ledger is persisted to when the caller has no preference.
pub const DEFAULT_LEDGER_PATH: &str = "inventory.json";

/// Threshold used by callers that don't pick their own low-stock cutoff.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = Quantity::Int(5);

/// Result of a successful [`StockLedger::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and replaced the whole mapping.
    Loaded { items: usize },
    /// No file at the path; the mapping was left as it was.
    Missing,
}

/// In-memory `item -> quantity` mapping.
///
/// Invariants:
/// - keys are never empty
/// - removal never leaves an entry at zero or below (it is deleted instead)
/// - additions are plain arithmetic, so a negative amount may leave a stored
///   quantity at or below zero
///
/// Every fallible operation returns `Err` with a displayable diagnostic and
/// also reports it at `warn` level. The mapping is untouched on error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockLedger {
    quantities: Quantities,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `name`, creating the entry at zero first if absent.
    ///
    /// When `log` is supplied, an `"Added <amount> of <name>"` record stamped
    /// with the current time is appended to it.
    pub fn add_stock(
        &mut self,
        name: &str,
        amount: impl Into<Quantity>,
        log: Option<&mut OperationLog>,
    ) -> LedgerResult<()> {
        let amount = amount.into();
        let result = ItemName::parse(name).and_then(|name| self.apply_add(name, amount, log));
        reported("add_stock", result)
    }

    /// [`add_stock`](Self::add_stock) for arguments arriving untyped, e.g.
    /// from a JSON request body. The name must be a non-empty string and the
    /// amount a finite number.
    pub fn add_stock_value(
        &mut self,
        name: &Value,
        amount: &Value,
        log: Option<&mut OperationLog>,
    ) -> LedgerResult<()> {
        let result = ItemName::try_from(name).and_then(|name| {
            let amount = Quantity::try_from(amount)?;
            self.apply_add(name, amount, log)
        });
        reported("add_stock", result)
    }

    fn apply_add(
        &mut self,
        name: ItemName,
        amount: Quantity,
        log: Option<&mut OperationLog>,
    ) -> LedgerResult<()> {
        let amount = amount.ensure_finite()?;
        let updated = self.quantity(name.as_str()).checked_add(amount)?;
        self.quantities.insert(name.as_str().to_owned(), updated);

        if let Some(log) = log {
            log.record_added(Utc::now(), &name, amount);
        }
        debug!(item = %name, %amount, quantity = %updated, "stock added");
        Ok(())
    }

    /// Subtract `amount` from `name`. An entry that ends at zero or below is
    /// deleted; the remaining entries keep their order.
    pub fn remove_stock(&mut self, name: &str, amount: impl Into<Quantity>) -> LedgerResult<()> {
        let amount = amount.into();
        let result = self.apply_remove(name, amount);
        reported("remove_stock", result)
    }

    fn apply_remove(&mut self, name: &str, amount: Quantity) -> LedgerResult<()> {
        let current = self
            .quantities
            .get(name)
            .copied()
            .ok_or_else(|| LedgerError::not_found(name))?;
        let remaining = current.checked_sub(amount.ensure_finite()?)?;

        if remaining.is_positive() {
            self.quantities.insert(name.to_owned(), remaining);
            debug!(item = name, %amount, quantity = %remaining, "stock removed");
        } else {
            self.quantities.shift_remove(name);
            debug!(item = name, %amount, "stock exhausted; entry pruned");
        }
        Ok(())
    }

    /// Stored quantity for `name`, or zero when absent.
    pub fn quantity(&self, name: &str) -> Quantity {
        self.quantities.get(name).copied().unwrap_or(Quantity::ZERO)
    }

    /// Names whose quantity is strictly below `threshold`, in insertion order.
    pub fn list_low_stock(&self, threshold: impl Into<Quantity>) -> Vec<String> {
        let threshold = threshold.into();
        self.quantities
            .iter()
            .filter(|(_, quantity)| **quantity < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Owned snapshot of the whole mapping.
    pub fn all_items(&self) -> Quantities {
        self.quantities.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> {
        self.quantities.iter().map(|(name, q)| (name.as_str(), *q))
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Replace the mapping with the contents of the JSON file at `path`.
    ///
    /// A missing file is first-run behavior, not an error: the mapping is
    /// kept and [`LoadOutcome::Missing`] returned.
    pub fn load(&mut self, path: impl AsRef<Path>) -> LedgerResult<LoadOutcome> {
        let path = path.as_ref();
        match persistence::read_quantities(path) {
            Ok(Some(quantities)) => {
                let items = quantities.len();
                self.quantities = quantities;
                info!(path = %path.display(), items, "inventory loaded");
                Ok(LoadOutcome::Loaded { items })
            }
            Ok(None) => {
                info!(
                    path = %path.display(),
                    "inventory file not found; keeping current inventory"
                );
                Ok(LoadOutcome::Missing)
            }
            Err(e) => reported("load", Err(e)),
        }
    }

    /// Write the whole mapping to `path`, overwriting it.
    pub fn save(&self, path: impl AsRef<Path>) -> LedgerResult<()> {
        let path = path.as_ref();
        reported("save", persistence::write_quantities(path, &self.quantities))?;
        info!(path = %path.display(), items = self.quantities.len(), "inventory saved");
        Ok(())
    }
}

fn reported<T>(operation: &'static str, result: LedgerResult<T>) -> LedgerResult<T> {
    if let Err(e) = &result {
        warn!(operation, error = %e, "ledger operation failed");
    }
    result
}
