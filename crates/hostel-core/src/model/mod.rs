//! Entity model for the reservation engine.
//!
//! Four entity families, all exclusively owned by the
//! [`ReservationDesk`](crate::desk::ReservationDesk):
//!
//! - [`Room`] / [`BedSpace`]: the physical inventory. Bed occupancy is
//!   encoded as an enum so "at most one of occupant/reservation" holds by
//!   construction.
//! - [`Booking`]: a confirmed occupancy of a bed by a student. Immutable
//!   after creation.
//! - [`Reservation`]: a temporary hold on a bed, naming a roommate, with a
//!   3-5 day expiry.
//! - [`PaymentRecord`]: payment intake from the external payment system.
//!
//! Timestamped entities are generic over the environment's instant type so
//! the same model runs against the system clock and the simulated clock.

mod booking;
mod payment;
mod reservation;
mod room;

pub use booking::{Booking, BookingStatus, RoomDetails};
pub use payment::{PaymentMethod, PaymentRecord, PaymentStatus};
pub use reservation::{MAX_HOLD_DAYS, MIN_HOLD_DAYS, Reservation, ReservationStatus};
pub use room::{BedSpace, BedStatus, Room};

/// Caller identity supplied by the authentication collaborator.
///
/// The engine treats the matric number as an opaque, already-validated
/// string. Requiring this struct as a parameter makes the original's
/// "not logged in" failure branch unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentIdentity {
    /// Student matric number, e.g. `CS/2020/001`.
    pub matric_number: String,
    /// Display name.
    pub name: String,
}

impl StudentIdentity {
    /// Convenience constructor.
    pub fn new(matric_number: impl Into<String>, name: impl Into<String>) -> Self {
        Self { matric_number: matric_number.into(), name: name.into() }
    }
}
