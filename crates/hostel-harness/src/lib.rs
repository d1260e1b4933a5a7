//! Deterministic test harness for the hostel reservation engine.
//!
//! Provides a simulated [`Environment`](hostel_core::Environment) with a
//! manually-advanced virtual clock and seeded RNG, plus invariant checking
//! over desk snapshots.
//!
//! # Invariant Testing
//!
//! Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Capture a [`DeskSnapshot`] after each operation and
//! run [`InvariantRegistry::standard()`] over it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod sim_env;

pub use invariants::{
    ActiveHoldBedReserved, BedHoldExclusivity, BedSnapshot, BookingSnapshot, DeskSnapshot,
    Invariant, InvariantKind, InvariantRegistry, InvariantResult, OccupiedBedHasBooking,
    OneBookingPerBed, ReservationSnapshot, ReservedBedHasActiveHold, Violation,
};
pub use sim_env::{SimEnv, SimInstant};
