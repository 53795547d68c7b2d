//! Ports for the Inventory Ledger subsystem.

pub mod inbound;

pub use inbound::InventoryApi;
