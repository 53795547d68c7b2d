//! Inner domain layer: booking value objects.

pub mod value_objects;

pub use value_objects::{Reservation, ScheduleView};
