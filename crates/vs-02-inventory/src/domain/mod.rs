//! Inner domain layer: the dose counter table.

pub mod ledger;

pub use ledger::DoseLedger;
