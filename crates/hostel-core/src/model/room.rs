//! Rooms and bed spaces.

/// Derived status of a bed space, as shown to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedStatus {
    /// Free to book or reserve.
    Available,
    /// A student sleeps here.
    Occupied,
    /// Held by an active reservation.
    Reserved,
}

impl std::fmt::Display for BedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Reserved => "reserved",
        };
        f.write_str(s)
    }
}

/// Internal bed occupancy state.
///
/// An occupied bed carries its occupant, a reserved bed carries its
/// reservation id. The representation cannot hold both, which is exactly
/// the exclusivity invariant the engine must maintain.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BedState {
    Available,
    Occupied { occupant: String },
    Reserved { reservation_id: String },
}

/// One sleeping slot within a room, the unit of booking/reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedSpace {
    /// Bed space id, e.g. `bed-1-2`.
    pub id: String,
    /// 1-based bed number within the room.
    pub bed_number: u8,
    state: BedState,
}

impl BedSpace {
    /// Create an available bed space.
    pub fn new(id: impl Into<String>, bed_number: u8) -> Self {
        Self { id: id.into(), bed_number, state: BedState::Available }
    }

    /// Current status.
    pub fn status(&self) -> BedStatus {
        match self.state {
            BedState::Available => BedStatus::Available,
            BedState::Occupied { .. } => BedStatus::Occupied,
            BedState::Reserved { .. } => BedStatus::Reserved,
        }
    }

    /// True if the bed can be booked or reserved.
    pub fn is_available(&self) -> bool {
        self.state == BedState::Available
    }

    /// Matric number of the occupant, if occupied.
    pub fn occupant(&self) -> Option<&str> {
        match &self.state {
            BedState::Occupied { occupant } => Some(occupant),
            _ => None,
        }
    }

    /// Id of the reservation holding this bed, if reserved.
    pub fn reservation_id(&self) -> Option<&str> {
        match &self.state {
            BedState::Reserved { reservation_id } => Some(reservation_id),
            _ => None,
        }
    }

    /// Transition to occupied.
    ///
    /// Callers validate first: only an available bed (booking) or a reserved
    /// bed (reservation confirmation) may become occupied.
    pub(crate) fn occupy(&mut self, occupant: String) {
        debug_assert!(!matches!(self.state, BedState::Occupied { .. }));
        self.state = BedState::Occupied { occupant };
    }

    /// Transition available → reserved under the given reservation.
    pub(crate) fn hold(&mut self, reservation_id: String) {
        debug_assert!(self.is_available());
        self.state = BedState::Reserved { reservation_id };
    }

    /// Release a reservation hold, making the bed available again.
    ///
    /// No-op unless the bed is currently reserved.
    pub(crate) fn release_hold(&mut self) {
        if matches!(self.state, BedState::Reserved { .. }) {
            self.state = BedState::Available;
        }
    }
}

/// A hostel room owning a fixed set of bed spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Room id, e.g. `room-1`.
    pub id: String,
    /// Display name of the block, e.g. `Block A`.
    pub block_name: String,
    /// Room number within the block, e.g. `101`.
    pub room_number: String,
    /// Floor the room is on.
    pub floor: u8,
    /// Price of one bed for the session, in the smallest currency unit.
    pub price_per_bed: u64,
    /// Amenity list shown to students.
    pub amenities: Vec<String>,
    /// Bed spaces owned by this room.
    pub bed_spaces: Vec<BedSpace>,
}

impl Room {
    /// Number of beds in the room.
    pub fn total_beds(&self) -> usize {
        self.bed_spaces.len()
    }

    /// Look up a bed space by id.
    pub fn bed_space(&self, bed_space_id: &str) -> Option<&BedSpace> {
        self.bed_spaces.iter().find(|b| b.id == bed_space_id)
    }

    pub(crate) fn bed_space_mut(&mut self, bed_space_id: &str) -> Option<&mut BedSpace> {
        self.bed_spaces.iter_mut().find(|b| b.id == bed_space_id)
    }

    /// Bed spaces currently available for booking or reservation.
    pub fn available_bed_spaces(&self) -> impl Iterator<Item = &BedSpace> {
        self.bed_spaces.iter().filter(|b| b.is_available())
    }
}
