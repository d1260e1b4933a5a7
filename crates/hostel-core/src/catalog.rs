//! Seeded catalog data for demo sessions.
//!
//! The app ships with a fixed inventory (no server to fetch one from):
//! four blocks of ten rooms with four beds each, plus two confirmed payment
//! records so the demo students pass the payment gate.

use crate::model::{BedSpace, PaymentMethod, PaymentRecord, PaymentStatus, Room};

const AMENITIES: [&str; 4] = ["WiFi", "Study Desk", "Wardrobe", "Air Conditioning"];

/// The standard demo inventory: blocks A-D, rooms 101-110 per block, four
/// beds per room. Room ids are `room-{n}` with a global counter, bed ids
/// `bed-{n}-{m}`.
pub fn standard_rooms() -> Vec<Room> {
    let blocks = ["A", "B", "C", "D"];
    let mut rooms = Vec::with_capacity(blocks.len() * 10);
    let mut room_counter = 0u32;

    for (block_index, block) in blocks.iter().enumerate() {
        for room_number in 101u32..=110 {
            room_counter += 1;

            let bed_spaces = (1..=4u8)
                .map(|bed_number| {
                    BedSpace::new(format!("bed-{room_counter}-{bed_number}"), bed_number)
                })
                .collect();

            rooms.push(Room {
                id: format!("room-{room_counter}"),
                block_name: format!("Block {block}"),
                room_number: room_number.to_string(),
                floor: ((room_number - 100) / 10) as u8,
                price_per_bed: 50_000 + block_index as u64 * 10_000,
                amenities: AMENITIES.iter().map(|a| (*a).to_string()).collect(),
                bed_spaces,
            });
        }
    }

    rooms
}

/// Confirmed payment records for the demo students, timestamped `now`.
pub fn sample_payments<I: Copy>(now: I) -> Vec<PaymentRecord<I>> {
    vec![
        PaymentRecord {
            id: "PAY001".to_string(),
            student_id: "CS/2020/001".to_string(),
            amount: 50_000,
            method: PaymentMethod::BankTransfer,
            status: PaymentStatus::Confirmed,
            transaction_reference: "TRX123456789".to_string(),
            recorded_at: now,
            description: "Initial hostel payment - Block A".to_string(),
        },
        PaymentRecord {
            id: "PAY002".to_string(),
            student_id: "CS/2020/002".to_string(),
            amount: 60_000,
            method: PaymentMethod::Card,
            status: PaymentStatus::Confirmed,
            transaction_reference: "TRX987654321".to_string(),
            recorded_at: now,
            description: "Initial hostel payment - Block B".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::BedStatus;

    #[test]
    fn forty_rooms_four_beds_each() {
        let rooms = standard_rooms();
        assert_eq!(rooms.len(), 40);
        assert!(rooms.iter().all(|r| r.total_beds() == 4));
        assert!(
            rooms
                .iter()
                .flat_map(|r| &r.bed_spaces)
                .all(|b| b.status() == BedStatus::Available)
        );
    }

    #[test]
    fn room_and_bed_ids_are_unique() {
        let rooms = standard_rooms();
        let room_ids: HashSet<_> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(room_ids.len(), rooms.len());

        let bed_ids: HashSet<_> =
            rooms.iter().flat_map(|r| &r.bed_spaces).map(|b| b.id.as_str()).collect();
        assert_eq!(bed_ids.len(), 160);
    }

    #[test]
    fn pricing_rises_by_block() {
        let rooms = standard_rooms();
        // room-1 is in Block A, room-11 in Block B, etc.
        assert_eq!(rooms[0].block_name, "Block A");
        assert_eq!(rooms[0].price_per_bed, 50_000);
        assert_eq!(rooms[10].block_name, "Block B");
        assert_eq!(rooms[10].price_per_bed, 60_000);
        assert_eq!(rooms[39].block_name, "Block D");
        assert_eq!(rooms[39].price_per_bed, 80_000);
    }

    #[test]
    fn floor_derived_from_room_number() {
        let rooms = standard_rooms();
        assert_eq!(rooms[0].room_number, "101");
        assert_eq!(rooms[0].floor, 0);
        assert_eq!(rooms[9].room_number, "110");
        assert_eq!(rooms[9].floor, 1);
    }

    #[test]
    fn sample_payments_are_confirmed() {
        let payments = sample_payments(0u64);
        assert_eq!(payments.len(), 2);
        assert!(payments.iter().all(|p| p.status == PaymentStatus::Confirmed));
    }
}
