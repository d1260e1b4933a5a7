//! Error types for the reservation engine.
//!
//! One enum per operation, mirroring the failure branches the UI has to
//! display. Every variant's `Display` output is the human-readable message
//! shown to the student; callers that only need a boolean use `is_ok()`.
//!
//! All failures are validation failures (missing entity, wrong state,
//! out-of-range input, permission mismatch). Nothing here is transient and
//! nothing warrants a retry.

use thiserror::Error;

use crate::model::{BedStatus, ReservationStatus};

/// Failure branches of booking a bed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No room with the given id.
    #[error("room not found: {0}")]
    RoomNotFound(String),

    /// The room exists but has no such bed.
    #[error("bed space not found: {0}")]
    BedSpaceNotFound(String),

    /// The bed is occupied or reserved.
    #[error("bed space {id} is not available ({status})")]
    BedUnavailable {
        /// The requested bed.
        id: String,
        /// Its current status.
        status: BedStatus,
    },
}

/// Failure branches of reserving a bed for a roommate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReserveError {
    /// The reserver has no booking in the target room. Reservation right is
    /// room-scoped: only an existing occupant may hold beds in their room.
    #[error("you must have a booking in this room first")]
    NoBookingInRoom,

    /// No room with the given id.
    #[error("room not found: {0}")]
    RoomNotFound(String),

    /// The room exists but has no such bed.
    #[error("bed space not found: {0}")]
    BedSpaceNotFound(String),

    /// The bed is occupied or reserved.
    #[error("bed space {id} is not available ({status})")]
    BedUnavailable {
        /// The requested bed.
        id: String,
        /// Its current status.
        status: BedStatus,
    },

    /// Requested hold length is outside the allowed window.
    #[error("reservation duration must be between 3 and 5 days, got {0}")]
    DurationOutOfRange(u8),
}

/// Failure branches of confirming a reservation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfirmError {
    /// No reservation with the given id.
    #[error("reservation not found: {0}")]
    NotFound(String),

    /// The reservation names a different roommate.
    #[error("this reservation is not for your matric number")]
    WrongStudent,

    /// The reservation already left the active state.
    #[error("reservation is {0}")]
    NotActive(ReservationStatus),

    /// The hold lapsed before confirmation; the sweep will release the bed.
    #[error("reservation has expired")]
    Expired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_what_the_ui_displays() {
        assert_eq!(
            ReserveError::NoBookingInRoom.to_string(),
            "you must have a booking in this room first"
        );
        assert_eq!(
            ReserveError::DurationOutOfRange(7).to_string(),
            "reservation duration must be between 3 and 5 days, got 7"
        );
        assert_eq!(ConfirmError::Expired.to_string(), "reservation has expired");
        assert_eq!(
            ConfirmError::NotActive(ReservationStatus::Expired).to_string(),
            "reservation is expired"
        );
        assert_eq!(
            BookError::BedUnavailable { id: "bed-1-1".to_string(), status: BedStatus::Occupied }
                .to_string(),
            "bed space bed-1-1 is not available (occupied)"
        );
    }
}
