//! # Subsystem Container
//!
//! Builds every service and wires the booking engine's outbound ports to
//! them. This is the only place where concrete subsystem types meet; the
//! engine itself sees nothing but its port traits.

use crate::adapters::{AppointmentGatewayAdapter, DoseGatewayAdapter, SlotGatewayAdapter};
use std::sync::Arc;
use vs_01_identity::{HmacCredentialScheme, IdentityService};
use vs_02_inventory::InventoryService;
use vs_03_availability::AvailabilityService;
use vs_04_appointments::AppointmentLedger;
use vs_05_booking::{BookingConfig, BookingService, SystemTimeSource};

/// Concrete booking engine type assembled by the container.
pub type Engine = BookingService<
    SlotGatewayAdapter,
    DoseGatewayAdapter,
    AppointmentGatewayAdapter,
    SystemTimeSource,
>;

/// Concrete identity service type assembled by the container.
pub type Identity = IdentityService<HmacCredentialScheme>;

/// All live subsystems of one scheduler node.
///
/// The ledger services are exposed alongside the engine so diagnostics and
/// tests can observe store state directly; mutation should go through the
/// engine.
pub struct SchedulerContainer {
    pub identity: Arc<Identity>,
    pub booking: Arc<Engine>,
    pub availability: Arc<AvailabilityService>,
    pub inventory: Arc<InventoryService>,
    pub appointments: Arc<AppointmentLedger>,
}

impl SchedulerContainer {
    /// Builds and wires every subsystem.
    pub fn new(config: BookingConfig) -> Self {
        let availability = Arc::new(AvailabilityService::new());
        let inventory = Arc::new(InventoryService::new());
        let appointments = Arc::new(AppointmentLedger::new());

        let booking = Arc::new(BookingService::new(
            config,
            Arc::new(SlotGatewayAdapter::new(Arc::clone(&availability))),
            Arc::new(DoseGatewayAdapter::new(Arc::clone(&inventory))),
            Arc::new(AppointmentGatewayAdapter::new(Arc::clone(&appointments))),
            Arc::new(SystemTimeSource),
        ));

        Self {
            identity: Arc::new(IdentityService::new(HmacCredentialScheme)),
            booking,
            availability,
            inventory,
            appointments,
        }
    }

    /// Container with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(BookingConfig::default())
    }
}
