//! Desk snapshots for invariant checking.
//!
//! A snapshot flattens the desk's owned collections into plain id/status
//! records, erasing the instant type so checks are time-independent.

use hostel_core::{BedStatus, Environment, ReservationDesk, ReservationStatus};

/// One bed space, with its room context and projected references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedSnapshot {
    /// Owning room id.
    pub room_id: String,
    /// Bed space id.
    pub bed_space_id: String,
    /// Derived status.
    pub status: BedStatus,
    /// Occupant matric number, if occupied.
    pub occupant: Option<String>,
    /// Holding reservation id, if reserved.
    pub reservation_id: Option<String>,
}

/// One reservation, statuses and references only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationSnapshot {
    /// Reservation id.
    pub id: String,
    /// Room of the held bed.
    pub room_id: String,
    /// The held bed.
    pub bed_space_id: String,
    /// Roommate the bed is held for.
    pub reserved_for: String,
    /// Lifecycle status.
    pub status: ReservationStatus,
}

/// One booking, references only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSnapshot {
    /// Booking id.
    pub id: String,
    /// Occupant matric number.
    pub student_id: String,
    /// Room of the booked bed.
    pub room_id: String,
    /// The booked bed.
    pub bed_space_id: String,
}

/// Point-in-time view of the whole desk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeskSnapshot {
    /// Every bed in every room.
    pub beds: Vec<BedSnapshot>,
    /// Every reservation, any status.
    pub reservations: Vec<ReservationSnapshot>,
    /// Every booking.
    pub bookings: Vec<BookingSnapshot>,
}

impl DeskSnapshot {
    /// Capture the current desk state.
    pub fn capture<E: Environment>(desk: &ReservationDesk<E>) -> Self {
        let beds = desk
            .rooms()
            .iter()
            .flat_map(|room| {
                room.bed_spaces.iter().map(|bed| BedSnapshot {
                    room_id: room.id.clone(),
                    bed_space_id: bed.id.clone(),
                    status: bed.status(),
                    occupant: bed.occupant().map(str::to_string),
                    reservation_id: bed.reservation_id().map(str::to_string),
                })
            })
            .collect();

        let reservations = desk
            .reservations()
            .iter()
            .map(|r| ReservationSnapshot {
                id: r.id.clone(),
                room_id: r.room_id.clone(),
                bed_space_id: r.bed_space_id.clone(),
                reserved_for: r.reserved_for.clone(),
                status: r.status,
            })
            .collect();

        let bookings = desk
            .bookings()
            .iter()
            .map(|b| BookingSnapshot {
                id: b.id.clone(),
                student_id: b.student_id.clone(),
                room_id: b.room_id.clone(),
                bed_space_id: b.bed_space_id.clone(),
            })
            .collect();

        Self { beds, reservations, bookings }
    }
}
