//! Bookings: confirmed bed occupancies.

/// Lifecycle status of a booking.
///
/// Only `Active` is produced by the engine; `Cancelled` and `Completed`
/// belong to the wider hostel administration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Occupancy is current.
    Active,
    /// Booking was cancelled by administration.
    Cancelled,
    /// Session ended normally.
    Completed,
}

/// Denormalized room display fields carried on bookings and reservations so
/// the UI can render them without a room lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetails {
    /// Block display name.
    pub block_name: String,
    /// Room number within the block.
    pub room_number: String,
    /// Bed number within the room.
    pub bed_number: u8,
}

/// A confirmed, paid occupancy of a bed space by a student.
///
/// Immutable after creation within the engine's scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking<I> {
    /// Booking id, derived from the environment RNG.
    pub id: String,
    /// Matric number of the occupant.
    pub student_id: String,
    /// Display name of the occupant.
    pub student_name: String,
    /// Room the bed belongs to.
    pub room_id: String,
    /// The booked bed.
    pub bed_space_id: String,
    /// Denormalized display fields.
    pub details: RoomDetails,
    /// When the booking was made.
    pub booked_at: I,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Amount paid, equal to the room's price per bed.
    pub amount_paid: u64,
}
