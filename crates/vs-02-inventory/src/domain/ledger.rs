//! Dose counter table.
//!
//! Single-owner data structure; thread safety is provided by the service
//! layer, which serializes access through a `RwLock`.

use shared_types::{VaccineName, VaccineStock};
use std::collections::BTreeMap;

/// Named dose counters.
///
/// Counters are created lazily on first add and never removed; a vaccine
/// whose doses are exhausted keeps its row at zero. `BTreeMap` keys give a
/// deterministic, name-ascending iteration order for snapshots.
#[derive(Debug, Default)]
pub struct DoseLedger {
    counters: BTreeMap<VaccineName, u64>,
}

impl DoseLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` doses to `name`, creating the counter if absent.
    ///
    /// Returns the new total. Saturates at `u64::MAX`; there is no upper
    /// bound on restocking.
    pub fn add(&mut self, name: &str, count: u64) -> u64 {
        let total = self
            .counters
            .entry(name.to_owned())
            .and_modify(|doses| *doses = doses.saturating_add(count))
            .or_insert(count);
        *total
    }

    /// Decrements `name` by `units` iff at least `units` doses remain.
    ///
    /// Returns whether the decrement was applied. Unknown names and
    /// insufficient counters leave the ledger untouched.
    pub fn try_consume(&mut self, name: &str, units: u64) -> bool {
        match self.counters.get_mut(name) {
            Some(doses) if *doses >= units => {
                *doses -= units;
                true
            }
            _ => false,
        }
    }

    /// Current dose count for `name` (zero if the counter does not exist).
    pub fn doses(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    /// Name-ascending snapshot of all counters.
    pub fn stock_levels(&self) -> Vec<VaccineStock> {
        self.counters
            .iter()
            .map(|(name, doses)| VaccineStock {
                name: name.clone(),
                doses: *doses,
            })
            .collect()
    }

    /// Number of distinct vaccine counters.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Returns true if no counter exists yet.
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}
