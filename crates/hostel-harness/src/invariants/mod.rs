//! Invariant checking over desk snapshots.
//!
//! Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Tests capture a [`DeskSnapshot`] after each operation
//! and run it through an [`InvariantRegistry`].

mod checks;
mod snapshot;

pub use checks::{
    ActiveHoldBedReserved, BedHoldExclusivity, OccupiedBedHasBooking, OneBookingPerBed,
    ReservedBedHasActiveHold,
};
pub use snapshot::{BedSnapshot, BookingSnapshot, DeskSnapshot, ReservationSnapshot};

/// Which invariant was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantKind {
    /// At most one of occupant/reservation reference per bed.
    BedHoldExclusivity,
    /// A reserved bed's reservation exists and is active.
    ReservedBedHasActiveHold,
    /// An active reservation's bed is reserved under its id.
    ActiveHoldBedReserved,
    /// An occupied bed's occupant holds a booking for it.
    OccupiedBedHasBooking,
    /// No bed is booked twice.
    OneBookingPerBed,
}

/// A failed invariant check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Which invariant failed.
    pub invariant: InvariantKind,
    /// Human-readable description of the violation.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.invariant, self.message)
    }
}

/// Result of a single invariant check.
pub type InvariantResult = Result<(), Violation>;

/// A behavioral property that must hold for every snapshot.
pub trait Invariant {
    /// Which invariant this is.
    fn kind(&self) -> InvariantKind;

    /// Check the invariant against a snapshot.
    fn check(&self, state: &DeskSnapshot) -> InvariantResult;
}

/// A set of invariants checked together.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant + Send + Sync>>,
}

impl InvariantRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// All standard desk invariants.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(BedHoldExclusivity);
        registry.register(ReservedBedHasActiveHold);
        registry.register(ActiveHoldBedReserved);
        registry.register(OccupiedBedHasBooking);
        registry.register(OneBookingPerBed);
        registry
    }

    /// Add an invariant.
    pub fn register<I>(&mut self, invariant: I)
    where
        I: Invariant + Send + Sync + 'static,
    {
        self.invariants.push(Box::new(invariant));
    }

    /// Check every registered invariant against the given state.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &DeskSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() {
            Ok(())
        } else {
            for violation in &violations {
                tracing::warn!(invariant = ?violation.invariant, %violation, "invariant violated");
            }
            Err(violations)
        }
    }

    /// Check all invariants, panicking on violation.
    ///
    /// Use this in tests where you want immediate failure with context.
    #[allow(clippy::panic, reason = "Test-facing assertion helper")]
    pub fn assert_all(&self, state: &DeskSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let messages: Vec<_> = violations.iter().map(|v| v.to_string()).collect();
            panic!("invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for InvariantRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<_> = self.invariants.iter().map(|i| i.kind()).collect();
        f.debug_struct("InvariantRegistry").field("invariants", &kinds).finish()
    }
}
