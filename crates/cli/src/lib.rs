//! Demonstration driver for the stock ledger: configuration, console
//! reports and the scripted walkthrough run by the `stockledger` binary.

pub mod config;
pub mod demo;
pub mod report;

pub use config::DemoConfig;
