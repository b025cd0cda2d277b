//! Inventory stock ledger.
//!
//! A single insertion-ordered mapping from item name to quantity, with
//! whole-file JSON persistence. Single-threaded; one ledger per use-site.

pub mod ledger;
pub mod oplog;
pub mod persistence;

pub use ledger::{DEFAULT_LEDGER_PATH, DEFAULT_LOW_STOCK_THRESHOLD, LoadOutcome, StockLedger};
pub use oplog::OperationLog;
pub use persistence::{Quantities, read_quantities, write_quantities};
pub use stockledger_core::{ItemName, LedgerError, LedgerResult, Quantity};
