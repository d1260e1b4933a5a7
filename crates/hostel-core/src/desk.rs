//! The reservation desk: owned store + booking state machine.
//!
//! `ReservationDesk` exclusively owns the four entity collections and is the
//! only component that mutates them. It is constructed at session start with
//! a room catalog, handed by reference to the UI layer, and dropped at
//! session end. No ambient global state.
//!
//! # Architecture
//!
//! ```text
//! ReservationDesk<E>
//!   ├─ rooms:        Vec<Room>            (inventory, beds inside)
//!   ├─ bookings:     Vec<Booking>         (append-only in this scope)
//!   ├─ reservations: Vec<Reservation>     (active → confirmed | expired)
//!   └─ payments:     Vec<PaymentRecord>   (append-only intake)
//! ```
//!
//! All operations are synchronous in-memory checks with no partial-failure
//! modes: every error is returned before the first mutation. The desk is
//! single-writer; the only shared access is the sweeper's mutex (see
//! [`sweep`](crate::sweep)).

use std::time::Duration;

use crate::{
    env::Environment,
    error::{BookError, ConfirmError, ReserveError},
    model::{
        BedSpace, Booking, BookingStatus, MAX_HOLD_DAYS, MIN_HOLD_DAYS, PaymentRecord,
        PaymentStatus, Reservation, ReservationStatus, Room, RoomDetails, StudentIdentity,
    },
};

const SECONDS_PER_DAY: u64 = 86_400;

/// Owned in-memory store for rooms, bookings, reservations, and payments.
pub struct ReservationDesk<E>
where
    E: Environment,
{
    env: E,
    rooms: Vec<Room>,
    bookings: Vec<Booking<E::Instant>>,
    reservations: Vec<Reservation<E::Instant>>,
    payments: Vec<PaymentRecord<E::Instant>>,
}

impl<E> ReservationDesk<E>
where
    E: Environment,
{
    /// Create a desk over the given room catalog with no bookings,
    /// reservations, or payments.
    pub fn new(env: E, rooms: Vec<Room>) -> Self {
        Self { env, rooms, bookings: Vec::new(), reservations: Vec::new(), payments: Vec::new() }
    }

    /// Seed payment records at construction time.
    #[must_use]
    pub fn with_payments(mut self, payments: Vec<PaymentRecord<E::Instant>>) -> Self {
        self.payments = payments;
        self
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{:016x}", self.env.random_u64())
    }

    /// Book an available bed for the acting student.
    ///
    /// Creates an active [`Booking`] and transitions the bed to occupied.
    /// All preconditions are checked before the first mutation, so a failed
    /// call leaves the desk untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::RoomNotFound`], [`BookError::BedSpaceNotFound`],
    /// or [`BookError::BedUnavailable`].
    pub fn book_bed(
        &mut self,
        room_id: &str,
        bed_space_id: &str,
        student: &StudentIdentity,
    ) -> Result<Booking<E::Instant>, BookError> {
        let (price, details) = {
            let room = self
                .rooms
                .iter()
                .find(|r| r.id == room_id)
                .ok_or_else(|| BookError::RoomNotFound(room_id.to_string()))?;
            let bed = room
                .bed_space(bed_space_id)
                .ok_or_else(|| BookError::BedSpaceNotFound(bed_space_id.to_string()))?;
            if !bed.is_available() {
                return Err(BookError::BedUnavailable {
                    id: bed.id.clone(),
                    status: bed.status(),
                });
            }
            (room.price_per_bed, room_details(room, bed.bed_number))
        };

        let booking = Booking {
            id: self.next_id("booking"),
            student_id: student.matric_number.clone(),
            student_name: student.name.clone(),
            room_id: room_id.to_string(),
            bed_space_id: bed_space_id.to_string(),
            details,
            booked_at: self.env.now(),
            status: BookingStatus::Active,
            amount_paid: price,
        };

        self.occupy_bed(room_id, bed_space_id, &student.matric_number);
        self.bookings.push(booking.clone());

        tracing::info!(
            booking_id = %booking.id,
            student = %booking.student_id,
            bed_space_id = %booking.bed_space_id,
            "bed booked"
        );

        Ok(booking)
    }

    /// Reserve an available bed in the reserver's own room for a named
    /// roommate.
    ///
    /// Reservation right is room-scoped, not bed-scoped: the reserver must
    /// already hold a booking in `room_id`, and may then hold any other
    /// available bed in it. The hold lapses after `duration_days`
    /// (3 to 5 inclusive) unless confirmed.
    ///
    /// # Errors
    ///
    /// Validation runs in the order the UI presents the branches:
    /// [`ReserveError::NoBookingInRoom`], [`ReserveError::RoomNotFound`],
    /// [`ReserveError::BedSpaceNotFound`], [`ReserveError::BedUnavailable`],
    /// [`ReserveError::DurationOutOfRange`].
    pub fn reserve_for_roommate(
        &mut self,
        room_id: &str,
        bed_space_id: &str,
        reserver: &StudentIdentity,
        roommate_matric: &str,
        duration_days: u8,
    ) -> Result<Reservation<E::Instant>, ReserveError> {
        if !self.has_booking_in_room(&reserver.matric_number, room_id) {
            return Err(ReserveError::NoBookingInRoom);
        }

        let details = {
            let room = self
                .rooms
                .iter()
                .find(|r| r.id == room_id)
                .ok_or_else(|| ReserveError::RoomNotFound(room_id.to_string()))?;
            let bed = room
                .bed_space(bed_space_id)
                .ok_or_else(|| ReserveError::BedSpaceNotFound(bed_space_id.to_string()))?;
            if !bed.is_available() {
                return Err(ReserveError::BedUnavailable {
                    id: bed.id.clone(),
                    status: bed.status(),
                });
            }
            room_details(room, bed.bed_number)
        };

        if !(MIN_HOLD_DAYS..=MAX_HOLD_DAYS).contains(&duration_days) {
            return Err(ReserveError::DurationOutOfRange(duration_days));
        }

        let now = self.env.now();
        let reservation = Reservation {
            id: self.next_id("reservation"),
            reserver_id: reserver.matric_number.clone(),
            reserver_name: reserver.name.clone(),
            reserved_for: roommate_matric.to_string(),
            room_id: room_id.to_string(),
            bed_space_id: bed_space_id.to_string(),
            details,
            status: ReservationStatus::Active,
            reserved_at: now,
            expires_at: now + Duration::from_secs(u64::from(duration_days) * SECONDS_PER_DAY),
            confirmed_at: None,
            duration_days,
        };

        if let Some(bed) = self.bed_space_mut(room_id, bed_space_id) {
            bed.hold(reservation.id.clone());
        }
        self.reservations.push(reservation.clone());

        tracing::info!(
            reservation_id = %reservation.id,
            reserver = %reservation.reserver_id,
            reserved_for = %reservation.reserved_for,
            bed_space_id = %reservation.bed_space_id,
            duration_days,
            "bed held for roommate"
        );

        Ok(reservation)
    }

    /// Confirm a reservation as the named roommate.
    ///
    /// Transitions the reservation to confirmed, creates a new active
    /// [`Booking`] for the confirming student against the held bed, and
    /// flips the bed reserved → occupied, clearing the hold. A failed
    /// confirmation creates no booking and mutates nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmError::NotFound`], [`ConfirmError::WrongStudent`],
    /// [`ConfirmError::NotActive`], or [`ConfirmError::Expired`].
    pub fn confirm_reservation(
        &mut self,
        reservation_id: &str,
        student: &StudentIdentity,
    ) -> Result<Booking<E::Instant>, ConfirmError> {
        let now = self.env.now();

        let (room_id, bed_space_id, details) = {
            let reservation = self
                .reservations
                .iter_mut()
                .find(|r| r.id == reservation_id)
                .ok_or_else(|| ConfirmError::NotFound(reservation_id.to_string()))?;

            if reservation.reserved_for != student.matric_number {
                return Err(ConfirmError::WrongStudent);
            }
            if reservation.status != ReservationStatus::Active {
                return Err(ConfirmError::NotActive(reservation.status));
            }
            if reservation.is_expired_at(now) {
                return Err(ConfirmError::Expired);
            }

            reservation.status = ReservationStatus::Confirmed;
            reservation.confirmed_at = Some(now);
            (
                reservation.room_id.clone(),
                reservation.bed_space_id.clone(),
                reservation.details.clone(),
            )
        };

        // Rooms are never removed, so the lookup cannot miss in practice.
        let price =
            self.rooms.iter().find(|r| r.id == room_id).map_or(0, |r| r.price_per_bed);

        let booking = Booking {
            id: self.next_id("booking"),
            student_id: student.matric_number.clone(),
            student_name: student.name.clone(),
            room_id: room_id.clone(),
            bed_space_id: bed_space_id.clone(),
            details,
            booked_at: now,
            status: BookingStatus::Active,
            amount_paid: price,
        };

        self.occupy_bed(&room_id, &bed_space_id, &student.matric_number);
        self.bookings.push(booking.clone());

        tracing::info!(
            reservation_id = %reservation_id,
            booking_id = %booking.id,
            student = %booking.student_id,
            bed_space_id = %booking.bed_space_id,
            "reservation confirmed"
        );

        Ok(booking)
    }

    /// Expire every active reservation whose hold has lapsed and release its
    /// bed back to available.
    ///
    /// Returns the number of reservations expired. Normally driven by
    /// [`ExpirySweeper`](crate::sweep::ExpirySweeper); callers may also
    /// invoke it directly for an on-demand sweep.
    pub fn sweep_expired(&mut self) -> usize {
        let now = self.env.now();

        let mut released = Vec::new();
        for reservation in &mut self.reservations {
            if reservation.status == ReservationStatus::Active
                && reservation.is_expired_at(now)
            {
                reservation.status = ReservationStatus::Expired;
                released.push((
                    reservation.room_id.clone(),
                    reservation.bed_space_id.clone(),
                    reservation.id.clone(),
                    now - reservation.expires_at,
                ));
            }
        }

        for (room_id, bed_space_id, reservation_id, overdue) in &released {
            if let Some(bed) = self.bed_space_mut(room_id, bed_space_id) {
                // Release only if the bed is still held by this reservation.
                if bed.reservation_id() == Some(reservation_id.as_str()) {
                    bed.release_hold();
                }
            }
            tracing::info!(
                reservation_id = %reservation_id,
                bed_space_id = %bed_space_id,
                overdue = ?overdue,
                "reservation expired, bed released"
            );
        }

        released.len()
    }

    /// Append a payment record reported by the payment system.
    ///
    /// The engine does not validate authenticity.
    pub fn record_payment(&mut self, payment: PaymentRecord<E::Instant>) {
        tracing::debug!(
            payment_id = %payment.id,
            student = %payment.student_id,
            status = ?payment.status,
            "payment recorded"
        );
        self.payments.push(payment);
    }

    /// Payment gate: true iff at least one confirmed payment record exists
    /// for the matric number. Unknown students fail the gate.
    pub fn has_valid_payment(&self, matric_number: &str) -> bool {
        self.payments
            .iter()
            .any(|p| p.student_id == matric_number && p.status == PaymentStatus::Confirmed)
    }

    /// All reservations made BY the given student, any status.
    pub fn reservations_by(&self, matric_number: &str) -> Vec<&Reservation<E::Instant>> {
        self.reservations.iter().filter(|r| r.reserver_id == matric_number).collect()
    }

    /// Active reservations made FOR the given student.
    pub fn reservations_for(&self, matric_number: &str) -> Vec<&Reservation<E::Instant>> {
        self.reservations
            .iter()
            .filter(|r| r.reserved_for == matric_number && r.status == ReservationStatus::Active)
            .collect()
    }

    /// Available bed spaces in a room; empty if the room is unknown.
    pub fn available_bed_spaces(&self, room_id: &str) -> Vec<&BedSpace> {
        self.rooms
            .iter()
            .find(|r| r.id == room_id)
            .map(|r| r.available_bed_spaces().collect())
            .unwrap_or_default()
    }

    /// Look up a room by id.
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }

    /// Read-only view of the room inventory.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Read-only view of all bookings.
    pub fn bookings(&self) -> &[Booking<E::Instant>] {
        &self.bookings
    }

    /// Read-only view of all reservations, any status.
    pub fn reservations(&self) -> &[Reservation<E::Instant>] {
        &self.reservations
    }

    /// Read-only view of all payment records.
    pub fn payment_records(&self) -> &[PaymentRecord<E::Instant>] {
        &self.payments
    }

    fn has_booking_in_room(&self, matric_number: &str, room_id: &str) -> bool {
        self.bookings.iter().any(|b| b.room_id == room_id && b.student_id == matric_number)
    }

    fn bed_space_mut(&mut self, room_id: &str, bed_space_id: &str) -> Option<&mut BedSpace> {
        self.rooms.iter_mut().find(|r| r.id == room_id).and_then(|r| r.bed_space_mut(bed_space_id))
    }

    fn occupy_bed(&mut self, room_id: &str, bed_space_id: &str, matric_number: &str) {
        if let Some(bed) = self.bed_space_mut(room_id, bed_space_id) {
            bed.occupy(matric_number.to_string());
        }
    }
}

impl<E> std::fmt::Debug for ReservationDesk<E>
where
    E: Environment,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationDesk")
            .field("room_count", &self.rooms.len())
            .field("booking_count", &self.bookings.len())
            .field("reservation_count", &self.reservations.len())
            .field("payment_count", &self.payments.len())
            .finish()
    }
}

fn room_details(room: &Room, bed_number: u8) -> RoomDetails {
    RoomDetails {
        block_name: room.block_name.clone(),
        room_number: room.room_number.clone(),
        bed_number,
    }
}
