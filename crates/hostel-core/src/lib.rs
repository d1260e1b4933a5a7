//! Reservation engine for a university hostel booking system.
//!
//! In-memory state machine for rooms, bed spaces, bookings, roommate
//! reservations, and payment records. The surrounding mobile UI consumes
//! read-only snapshots and invokes the operations; authentication and
//! payment processing are external collaborators.
//!
//! # Architecture
//!
//! ```text
//! ReservationDesk<E>  (owned store + six operations)
//!   ├─ model       entity types, bed state machine
//!   ├─ catalog     seeded demo inventory
//!   └─ sweep       periodic expiry sweeper
//! Environment        injected clock + RNG (SystemEnv in production,
//!                    SimEnv in tests)
//! ```
//!
//! # Invariants
//!
//! - A bed carries at most one of occupant/reservation reference (encoded
//!   structurally in [`model::BedSpace`]).
//! - A failed operation mutates nothing.
//! - An active reservation past its expiry is expired by the sweep and its
//!   bed released within one sweep cycle.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod desk;
pub mod env;
pub mod error;
pub mod model;
pub mod sweep;

pub use desk::ReservationDesk;
pub use env::{Environment, SystemEnv};
pub use error::{BookError, ConfirmError, ReserveError};
pub use model::{
    BedSpace, BedStatus, Booking, BookingStatus, MAX_HOLD_DAYS, MIN_HOLD_DAYS, PaymentMethod,
    PaymentRecord, PaymentStatus, Reservation, ReservationStatus, Room, RoomDetails,
    StudentIdentity,
};
pub use sweep::{DEFAULT_SWEEP_INTERVAL, ExpirySweeper, SharedDesk, shared};
