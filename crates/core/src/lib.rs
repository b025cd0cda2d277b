//! `stockledger-core` — value objects and the error model shared by the ledger.
//!
//! This crate contains **pure domain** primitives (no IO).

pub mod error;
pub mod item_name;
pub mod quantity;
pub mod value_object;

pub use error::{LedgerError, LedgerResult};
pub use item_name::ItemName;
pub use quantity::Quantity;
pub use value_object::ValueObject;
