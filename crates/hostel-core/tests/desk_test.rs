//! Reservation desk tests: the six operations and their failure branches.

use std::time::Duration;

use hostel_core::{
    BedStatus, BookError, ConfirmError, Environment, PaymentMethod, PaymentRecord, PaymentStatus,
    ReservationDesk, ReservationStatus, ReserveError, StudentIdentity, catalog,
};
use hostel_harness::{DeskSnapshot, InvariantRegistry, SimEnv};

const DAY: Duration = Duration::from_secs(86_400);

fn ada() -> StudentIdentity {
    StudentIdentity::new("CS/2020/001", "Ada Obi")
}

fn bayo() -> StudentIdentity {
    StudentIdentity::new("CS/2020/002", "Bayo Ade")
}

fn desk() -> (SimEnv, ReservationDesk<SimEnv>) {
    let env = SimEnv::new(7);
    let desk = ReservationDesk::new(env.clone(), catalog::standard_rooms())
        .with_payments(catalog::sample_payments(env.now()));
    (env, desk)
}

fn bed_status(desk: &ReservationDesk<SimEnv>, room_id: &str, bed_space_id: &str) -> BedStatus {
    desk.room(room_id).unwrap().bed_space(bed_space_id).unwrap().status()
}

fn assert_invariants(desk: &ReservationDesk<SimEnv>) {
    InvariantRegistry::standard().assert_all(&DeskSnapshot::capture(desk), "after operation");
}

#[test]
fn booking_occupies_the_bed() {
    let (_env, mut desk) = desk();

    let booking = desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();
    assert_eq!(booking.student_id, "CS/2020/001");
    assert_eq!(booking.amount_paid, 50_000);
    assert_eq!(booking.details.block_name, "Block A");
    assert_eq!(booking.details.room_number, "101");

    assert_eq!(bed_status(&desk, "room-1", "bed-1-1"), BedStatus::Occupied);
    let bed = desk.room("room-1").unwrap().bed_space("bed-1-1").unwrap();
    assert_eq!(bed.occupant(), Some("CS/2020/001"));
    assert_eq!(desk.bookings().len(), 1);
    assert_invariants(&desk);
}

#[test]
fn booking_unknown_room_or_bed_fails() {
    let (_env, mut desk) = desk();

    assert!(matches!(
        desk.book_bed("room-99", "bed-99-1", &ada()),
        Err(BookError::RoomNotFound(_))
    ));
    assert!(matches!(
        desk.book_bed("room-1", "bed-2-1", &ada()),
        Err(BookError::BedSpaceNotFound(_))
    ));
    assert!(desk.bookings().is_empty());
}

#[test]
fn booking_taken_bed_fails_without_mutating() {
    let (_env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();

    let before = DeskSnapshot::capture(&desk);
    let result = desk.book_bed("room-1", "bed-1-1", &bayo());
    assert!(matches!(
        result,
        Err(BookError::BedUnavailable { status: BedStatus::Occupied, .. })
    ));
    assert_eq!(DeskSnapshot::capture(&desk), before);
}

#[test]
fn reserving_requires_a_booking_in_the_room() {
    let (_env, mut desk) = desk();

    // No booking at all.
    let result = desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", 4);
    assert_eq!(result.unwrap_err(), ReserveError::NoBookingInRoom);
    assert_eq!(
        ReserveError::NoBookingInRoom.to_string(),
        "you must have a booking in this room first"
    );

    // Booking in a different room does not grant the right either.
    desk.book_bed("room-2", "bed-2-1", &ada()).unwrap();
    let result = desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", 4);
    assert_eq!(result.unwrap_err(), ReserveError::NoBookingInRoom);
}

#[test]
fn occupant_may_reserve_any_available_bed_in_their_room() {
    let (_env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();

    // Not just the adjacent bed: any available one.
    desk.reserve_for_roommate("room-1", "bed-1-3", &ada(), "CS/2020/002", 3).unwrap();
    assert_eq!(bed_status(&desk, "room-1", "bed-1-3"), BedStatus::Reserved);
    assert_invariants(&desk);
}

#[test]
fn reserving_a_taken_bed_fails() {
    let (_env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();

    let result = desk.reserve_for_roommate("room-1", "bed-1-1", &ada(), "CS/2020/002", 4);
    assert!(matches!(
        result,
        Err(ReserveError::BedUnavailable { status: BedStatus::Occupied, .. })
    ));
}

#[test]
fn hold_duration_boundaries() {
    let (_env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();

    for days in [0, 1, 2, 6, 30] {
        let result = desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", days);
        assert_eq!(result.unwrap_err(), ReserveError::DurationOutOfRange(days));
    }

    // Boundary values succeed.
    desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", 3).unwrap();
    desk.reserve_for_roommate("room-1", "bed-1-3", &ada(), "CS/2020/003", 5).unwrap();
    assert_eq!(desk.reservations().len(), 2);
    assert_invariants(&desk);
}

#[test]
fn reservation_carries_expiry_and_summary() {
    let (env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();

    let before = env.now();
    let reservation =
        desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", 4).unwrap();

    assert_eq!(reservation.status, ReservationStatus::Active);
    assert_eq!(reservation.expires_at, before + 4 * DAY);
    assert_eq!(reservation.duration_days, 4);
    assert_eq!(
        reservation.summary(),
        "bed 2 in Block A room 101 held for CS/2020/002 for 4 days"
    );
}

#[test]
fn confirmation_flips_the_bed_to_occupied() {
    let (env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();
    let reservation =
        desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", 4).unwrap();

    env.advance(DAY);
    let booking = desk.confirm_reservation(&reservation.id, &bayo()).unwrap();

    assert_eq!(booking.student_id, "CS/2020/002");
    assert_eq!(booking.bed_space_id, "bed-1-2");
    assert_eq!(booking.amount_paid, 50_000);

    // Exactly one new booking.
    assert_eq!(desk.bookings().len(), 2);

    let bed = desk.room("room-1").unwrap().bed_space("bed-1-2").unwrap();
    assert_eq!(bed.status(), BedStatus::Occupied);
    assert_eq!(bed.occupant(), Some("CS/2020/002"));
    assert_eq!(bed.reservation_id(), None);

    let confirmed = &desk.reservations()[0];
    assert_eq!(confirmed.status, ReservationStatus::Confirmed);
    assert_eq!(confirmed.confirmed_at, Some(env.now()));
    assert_invariants(&desk);
}

#[test]
fn confirmation_rejects_the_wrong_student() {
    let (_env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();
    let reservation =
        desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", 4).unwrap();

    let intruder = StudentIdentity::new("CS/2020/099", "Zed");
    let result = desk.confirm_reservation(&reservation.id, &intruder);
    assert_eq!(result.unwrap_err(), ConfirmError::WrongStudent);
    assert_eq!(desk.bookings().len(), 1);
}

#[test]
fn confirmation_rejects_unknown_reservations() {
    let (_env, mut desk) = desk();
    let result = desk.confirm_reservation("reservation-nope", &bayo());
    assert!(matches!(result, Err(ConfirmError::NotFound(_))));
}

#[test]
fn expired_reservation_is_not_confirmable() {
    let (env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();
    let reservation =
        desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", 4).unwrap();

    env.advance(4 * DAY + Duration::from_secs(1));
    let result = desk.confirm_reservation(&reservation.id, &bayo());
    assert_eq!(result.unwrap_err(), ConfirmError::Expired);

    // No booking was created and the hold is untouched until the sweep runs.
    assert_eq!(desk.bookings().len(), 1);
    assert_eq!(bed_status(&desk, "room-1", "bed-1-2"), BedStatus::Reserved);
}

#[test]
fn confirmation_at_exact_expiry_still_succeeds() {
    let (env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();
    let reservation =
        desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", 3).unwrap();

    env.advance(3 * DAY);
    assert!(desk.confirm_reservation(&reservation.id, &bayo()).is_ok());
}

#[test]
fn confirmation_after_sweep_reports_the_status() {
    let (env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();
    let reservation =
        desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", 4).unwrap();

    env.advance(5 * DAY);
    desk.sweep_expired();

    let result = desk.confirm_reservation(&reservation.id, &bayo());
    assert_eq!(result.clone().unwrap_err(), ConfirmError::NotActive(ReservationStatus::Expired));
    assert_eq!(result.unwrap_err().to_string(), "reservation is expired");
}

#[test]
fn sweep_expires_holds_and_frees_beds() {
    let (env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();
    desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", 3).unwrap();
    desk.reserve_for_roommate("room-1", "bed-1-3", &ada(), "CS/2020/003", 5).unwrap();

    // Past the short hold, not the long one.
    env.advance(3 * DAY + Duration::from_secs(1));
    assert_eq!(desk.sweep_expired(), 1);

    assert_eq!(bed_status(&desk, "room-1", "bed-1-2"), BedStatus::Available);
    assert_eq!(desk.reservations()[0].status, ReservationStatus::Expired);
    assert_eq!(bed_status(&desk, "room-1", "bed-1-3"), BedStatus::Reserved);
    assert_eq!(desk.reservations()[1].status, ReservationStatus::Active);

    // Nothing left to expire until more time passes.
    assert_eq!(desk.sweep_expired(), 0);
    assert_invariants(&desk);

    env.advance(2 * DAY);
    assert_eq!(desk.sweep_expired(), 1);
    assert_eq!(bed_status(&desk, "room-1", "bed-1-3"), BedStatus::Available);
    assert_invariants(&desk);
}

#[test]
fn sweep_leaves_confirmed_reservations_alone() {
    let (env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();
    let reservation =
        desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", 3).unwrap();
    desk.confirm_reservation(&reservation.id, &bayo()).unwrap();

    env.advance(10 * DAY);
    assert_eq!(desk.sweep_expired(), 0);
    assert_eq!(desk.reservations()[0].status, ReservationStatus::Confirmed);
    assert_eq!(bed_status(&desk, "room-1", "bed-1-2"), BedStatus::Occupied);
}

#[test]
fn payment_gate_requires_a_confirmed_record() {
    let (env, mut desk) = desk();

    // Seeded demo students pass.
    assert!(desk.has_valid_payment("CS/2020/001"));
    assert!(desk.has_valid_payment("CS/2020/002"));

    // Unknown student fails.
    assert!(!desk.has_valid_payment("CS/2020/777"));

    // A pending record does not open the gate.
    desk.record_payment(PaymentRecord {
        id: "PAY100".to_string(),
        student_id: "CS/2020/777".to_string(),
        amount: 50_000,
        method: PaymentMethod::Online,
        status: PaymentStatus::Pending,
        transaction_reference: "TRX000000001".to_string(),
        recorded_at: env.now(),
        description: "Hostel payment".to_string(),
    });
    assert!(!desk.has_valid_payment("CS/2020/777"));

    // A confirmed one does.
    desk.record_payment(PaymentRecord {
        id: "PAY101".to_string(),
        student_id: "CS/2020/777".to_string(),
        amount: 50_000,
        method: PaymentMethod::Online,
        status: PaymentStatus::Confirmed,
        transaction_reference: "TRX000000002".to_string(),
        recorded_at: env.now(),
        description: "Hostel payment".to_string(),
    });
    assert!(desk.has_valid_payment("CS/2020/777"));
    assert_eq!(desk.payment_records().len(), 4);
}

#[test]
fn query_helpers_filter_as_the_ui_expects() {
    let (_env, mut desk) = desk();
    desk.book_bed("room-1", "bed-1-1", &ada()).unwrap();
    let r1 = desk.reserve_for_roommate("room-1", "bed-1-2", &ada(), "CS/2020/002", 3).unwrap();
    desk.reserve_for_roommate("room-1", "bed-1-3", &ada(), "CS/2020/002", 5).unwrap();

    // Made by Ada: both, regardless of status.
    assert_eq!(desk.reservations_by("CS/2020/001").len(), 2);
    assert!(desk.reservations_by("CS/2020/002").is_empty());

    // For Bayo: active only.
    assert_eq!(desk.reservations_for("CS/2020/002").len(), 2);
    desk.confirm_reservation(&r1.id, &bayo()).unwrap();
    assert_eq!(desk.reservations_for("CS/2020/002").len(), 1);

    // Available beds: 4 minus two occupied minus one still held.
    assert_eq!(desk.available_bed_spaces("room-1").len(), 1);
    assert!(desk.available_bed_spaces("room-404").is_empty());

    assert!(desk.room("room-40").is_some());
    assert!(desk.room("room-41").is_none());
}

#[test]
fn roommate_flow_happy_path() {
    // Student A books bed-1-1, reserves bed-1-2 for B with a 4-day hold,
    // and B confirms before expiry.
    let (env, mut desk) = desk();
    let a = ada();
    let b = bayo();

    desk.book_bed("room-1", "bed-1-1", &a).unwrap();
    assert_eq!(bed_status(&desk, "room-1", "bed-1-1"), BedStatus::Occupied);
    assert_invariants(&desk);

    let reservation = desk.reserve_for_roommate("room-1", "bed-1-2", &a, "CS/2020/002", 4).unwrap();
    assert_eq!(reservation.expires_at, env.now() + 4 * DAY);
    assert_eq!(bed_status(&desk, "room-1", "bed-1-2"), BedStatus::Reserved);
    assert_invariants(&desk);

    env.advance(2 * DAY);
    desk.confirm_reservation(&reservation.id, &b).unwrap();
    assert_eq!(bed_status(&desk, "room-1", "bed-1-2"), BedStatus::Occupied);
    assert_eq!(desk.bookings().len(), 2);
    assert_invariants(&desk);
}

#[test]
fn roommate_flow_expiry_path() {
    // Same setup, but B waits past the expiry: the sweep releases the bed
    // before confirmation is possible.
    let (env, mut desk) = desk();
    let a = ada();

    desk.book_bed("room-1", "bed-1-1", &a).unwrap();
    let reservation = desk.reserve_for_roommate("room-1", "bed-1-2", &a, "CS/2020/002", 4).unwrap();

    env.advance(4 * DAY + Duration::from_secs(1));
    assert_eq!(desk.sweep_expired(), 1);
    assert_eq!(bed_status(&desk, "room-1", "bed-1-2"), BedStatus::Available);

    let result = desk.confirm_reservation(&reservation.id, &bayo());
    assert_eq!(result.unwrap_err(), ConfirmError::NotActive(ReservationStatus::Expired));
    assert_eq!(desk.bookings().len(), 1);
    assert_invariants(&desk);
}
