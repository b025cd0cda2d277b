//! Console formatting for ledger contents and operation logs.

use stockledger_inventory::{OperationLog, StockLedger};

pub fn items_report(ledger: &StockLedger) -> String {
    let mut out = String::from("Items Report\n");
    if ledger.is_empty() {
        out.push_str("No items in inventory\n");
        return out;
    }
    for (name, quantity) in ledger.iter() {
        out.push_str(&format!("{name} -> {quantity}\n"));
    }
    out
}

pub fn operation_log_report(log: &OperationLog) -> String {
    let mut out = String::from("Operation Logs:\n");
    for entry in log.iter() {
        out.push_str(&format!("  - {entry}\n"));
    }
    out
}
