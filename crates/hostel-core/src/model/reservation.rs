//! Reservations: temporary holds on beds for named roommates.

use super::booking::RoomDetails;

/// Shortest allowed hold, in days.
pub const MIN_HOLD_DAYS: u8 = 3;
/// Longest allowed hold, in days.
pub const MAX_HOLD_DAYS: u8 = 5;

/// Lifecycle status of a reservation.
///
/// State machine: `Active` → `Confirmed` (by the named roommate, before
/// expiry) or `Active` → `Expired` (sweep). `Cancelled` is terminal but no
/// operation currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Hold is live and awaiting confirmation.
    Active,
    /// The named roommate confirmed and now occupies the bed.
    Confirmed,
    /// Expiry passed before confirmation; the bed was released.
    Expired,
    /// Withdrawn. Not reachable through any current operation.
    Cancelled,
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Confirmed => "confirmed",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// A temporary hold on a bed space, made by an existing occupant of the
/// room, naming a specific roommate, expiring after 3-5 days unless
/// confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation<I> {
    /// Reservation id, derived from the environment RNG.
    pub id: String,
    /// Matric number of the student who made the reservation.
    pub reserver_id: String,
    /// Display name of the reserver.
    pub reserver_name: String,
    /// Matric number of the roommate the bed is held for.
    pub reserved_for: String,
    /// Room the held bed belongs to.
    pub room_id: String,
    /// The held bed.
    pub bed_space_id: String,
    /// Denormalized display fields.
    pub details: RoomDetails,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// When the hold was placed.
    pub reserved_at: I,
    /// When the hold lapses: `reserved_at` plus the duration.
    pub expires_at: I,
    /// When the roommate confirmed, if they did.
    pub confirmed_at: Option<I>,
    /// Hold duration in days, within `[MIN_HOLD_DAYS, MAX_HOLD_DAYS]`.
    pub duration_days: u8,
}

impl<I: Copy + Ord> Reservation<I> {
    /// True once the hold has lapsed.
    ///
    /// Strictly after: at exactly `expires_at` the reservation is still
    /// confirmable.
    pub fn is_expired_at(&self, now: I) -> bool {
        now > self.expires_at
    }

    /// Human-readable success message for display after reserving.
    pub fn summary(&self) -> String {
        format!(
            "bed {} in {} room {} held for {} for {} days",
            self.details.bed_number,
            self.details.block_name,
            self.details.room_number,
            self.reserved_for,
            self.duration_days
        )
    }
}
