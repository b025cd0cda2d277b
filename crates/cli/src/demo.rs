//! Scripted walkthrough of the ledger operations.
//!
//! Ledger failures are part of the script (invalid names, unknown items) and
//! are printed as diagnostics; only console write errors abort the run.

use std::io::Write;

use serde_json::json;

use stockledger_core::LedgerResult;
use stockledger_inventory::{LoadOutcome, OperationLog, StockLedger};

use crate::config::DemoConfig;
use crate::report;

pub fn run(config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let mut ledger = StockLedger::new();
    let mut log = OperationLog::new();

    writeln!(out, "=== Testing Inventory System ===")?;

    for (name, amount) in [("apple", 10), ("banana", 5), ("orange", 8)] {
        let result = ledger.add_stock(name, amount, Some(&mut log));
        print_failure(out, result)?;
    }

    // Untyped input: neither argument has the right type.
    let result = ledger.add_stock_value(&json!(123), &json!("ten"), None);
    print_failure(out, result)?;
    let result = ledger.add_stock("", 5, None);
    print_failure(out, result)?;
    // Negative additions are accepted and stored as-is.
    let result = ledger.add_stock("grape", -2, None);
    print_failure(out, result)?;

    let result = ledger.remove_stock("apple", 3);
    print_failure(out, result)?;
    let result = ledger.remove_stock("nonexistent", 1);
    print_failure(out, result)?;

    for name in ["apple", "banana", "orange"] {
        writeln!(out, "{} stock: {}", capitalize(name), ledger.quantity(name))?;
    }
    writeln!(
        out,
        "Low items (threshold={}): {:?}",
        config.low_stock_threshold,
        ledger.list_low_stock(config.low_stock_threshold)
    )?;

    match ledger.save(&config.path) {
        Ok(()) => writeln!(out, "Data saved successfully")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }

    match ledger.load(&config.path) {
        Ok(LoadOutcome::Loaded { .. }) => writeln!(out, "Data loaded successfully")?,
        Ok(LoadOutcome::Missing) => writeln!(
            out,
            "Inventory file {} not found. Starting with empty inventory.",
            config.path.display()
        )?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }

    write!(out, "{}", report::items_report(&ledger))?;
    writeln!(out)?;
    write!(out, "{}", report::operation_log_report(&log))?;
    writeln!(out)?;
    writeln!(out, "=== Inventory System Demo Completed ===")?;
    Ok(())
}

fn print_failure(out: &mut impl Write, result: LedgerResult<()>) -> std::io::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) => writeln!(out, "Error: {e}"),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
