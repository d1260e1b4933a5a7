//! Standard invariant checks.
//!
//! These capture the engine's behavioral properties: bed hold exclusivity,
//! reservation/bed cross-references, and booking/occupancy agreement.

use std::collections::HashSet;

use hostel_core::{BedStatus, ReservationStatus};

use super::{DeskSnapshot, Invariant, InvariantKind, InvariantResult, Violation};

/// At most one of occupant/reservation reference is set per bed.
///
/// Structural in the current bed representation, but checked anyway so a
/// future representation change cannot silently regress it.
pub struct BedHoldExclusivity;

impl Invariant for BedHoldExclusivity {
    fn kind(&self) -> InvariantKind {
        InvariantKind::BedHoldExclusivity
    }

    fn check(&self, state: &DeskSnapshot) -> InvariantResult {
        for bed in &state.beds {
            if bed.occupant.is_some() && bed.reservation_id.is_some() {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "bed {}: both occupant {:?} and reservation {:?} set",
                        bed.bed_space_id, bed.occupant, bed.reservation_id
                    ),
                });
            }
        }
        Ok(())
    }
}

/// A reserved bed's reservation id refers to an existing active reservation.
///
/// A reserved bed pointing at a confirmed/expired reservation means a
/// transition updated the reservation but forgot the bed.
pub struct ReservedBedHasActiveHold;

impl Invariant for ReservedBedHasActiveHold {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ReservedBedHasActiveHold
    }

    fn check(&self, state: &DeskSnapshot) -> InvariantResult {
        for bed in &state.beds {
            let Some(reservation_id) = &bed.reservation_id else { continue };

            let Some(reservation) =
                state.reservations.iter().find(|r| &r.id == reservation_id)
            else {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "bed {}: held by unknown reservation {}",
                        bed.bed_space_id, reservation_id
                    ),
                });
            };

            if reservation.status != ReservationStatus::Active {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "bed {}: held by {} reservation {}",
                        bed.bed_space_id, reservation.status, reservation.id
                    ),
                });
            }
        }
        Ok(())
    }
}

/// An active reservation's bed is reserved under that reservation's id.
///
/// The mirror image of [`ReservedBedHasActiveHold`]: an active reservation
/// whose bed is available or occupied means the hold leaked.
pub struct ActiveHoldBedReserved;

impl Invariant for ActiveHoldBedReserved {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ActiveHoldBedReserved
    }

    fn check(&self, state: &DeskSnapshot) -> InvariantResult {
        for reservation in &state.reservations {
            if reservation.status != ReservationStatus::Active {
                continue;
            }

            let bed = state
                .beds
                .iter()
                .find(|b| b.bed_space_id == reservation.bed_space_id);

            match bed {
                Some(bed) if bed.reservation_id.as_deref() == Some(reservation.id.as_str()) => {},
                Some(bed) => {
                    return Err(Violation {
                        invariant: self.kind(),
                        message: format!(
                            "active reservation {}: bed {} is {} (held by {:?})",
                            reservation.id, bed.bed_space_id, bed.status, bed.reservation_id
                        ),
                    });
                },
                None => {
                    return Err(Violation {
                        invariant: self.kind(),
                        message: format!(
                            "active reservation {}: bed {} does not exist",
                            reservation.id, reservation.bed_space_id
                        ),
                    });
                },
            }
        }
        Ok(())
    }
}

/// An occupied bed's occupant holds a booking for that room/bed.
pub struct OccupiedBedHasBooking;

impl Invariant for OccupiedBedHasBooking {
    fn kind(&self) -> InvariantKind {
        InvariantKind::OccupiedBedHasBooking
    }

    fn check(&self, state: &DeskSnapshot) -> InvariantResult {
        for bed in &state.beds {
            if bed.status != BedStatus::Occupied {
                continue;
            }
            let Some(occupant) = &bed.occupant else {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!("bed {}: occupied with no occupant", bed.bed_space_id),
                });
            };

            let booked = state.bookings.iter().any(|b| {
                b.room_id == bed.room_id
                    && b.bed_space_id == bed.bed_space_id
                    && &b.student_id == occupant
            });
            if !booked {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "bed {}: occupant {} has no booking for it",
                        bed.bed_space_id, occupant
                    ),
                });
            }
        }
        Ok(())
    }
}

/// No bed space is booked twice.
///
/// Beds never leave occupancy within the engine's scope, so a second booking
/// against the same bed means an availability check was skipped.
pub struct OneBookingPerBed;

impl Invariant for OneBookingPerBed {
    fn kind(&self) -> InvariantKind {
        InvariantKind::OneBookingPerBed
    }

    fn check(&self, state: &DeskSnapshot) -> InvariantResult {
        let mut seen = HashSet::new();
        for booking in &state.bookings {
            let key = (booking.room_id.as_str(), booking.bed_space_id.as_str());
            if !seen.insert(key) {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "bed {} booked more than once (booking {})",
                        booking.bed_space_id, booking.id
                    ),
                });
            }
        }
        Ok(())
    }
}
