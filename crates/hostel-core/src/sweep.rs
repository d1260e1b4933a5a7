//! Periodic expiry sweeper.
//!
//! Reservations expire by polling, not by per-reservation timers: hold
//! durations are whole days, so staleness of up to one poll interval is
//! tolerable. The sweeper runs one eager sweep on start and then one per
//! interval. Teardown is cancellation: drop the future returned by
//! [`ExpirySweeper::run`] when the session ends.

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use crate::{desk::ReservationDesk, env::Environment};

/// Default time between sweeps.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Desk handle shared between the UI task and the sweeper.
pub type SharedDesk<E> = Arc<Mutex<ReservationDesk<E>>>;

/// Wrap a desk for sharing with a sweeper.
pub fn shared<E: Environment>(desk: ReservationDesk<E>) -> SharedDesk<E> {
    Arc::new(Mutex::new(desk))
}

/// Drives [`ReservationDesk::sweep_expired`] on a fixed interval.
#[derive(Debug, Clone)]
pub struct ExpirySweeper<E>
where
    E: Environment,
{
    env: E,
    interval: Duration,
}

impl<E> ExpirySweeper<E>
where
    E: Environment,
{
    /// Create a sweeper with the default interval.
    pub fn new(env: E) -> Self {
        Self { env, interval: DEFAULT_SWEEP_INTERVAL }
    }

    /// Override the sweep interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Run a single sweep against the shared desk.
    ///
    /// Returns the number of reservations expired.
    pub fn sweep(&self, desk: &SharedDesk<E>) -> usize {
        let expired = lock_desk(desk).sweep_expired();
        if expired > 0 {
            tracing::info!(expired, "expiry sweep released holds");
        }
        expired
    }

    /// Sweep once eagerly, then once per interval, forever.
    ///
    /// Never returns; cancel by dropping the future.
    pub async fn run(self, desk: SharedDesk<E>) {
        self.sweep(&desk);
        loop {
            self.env.sleep(self.interval).await;
            self.sweep(&desk);
        }
    }
}

// Desk operations validate before mutating, so a guard recovered from a
// poisoned lock still sees consistent state.
fn lock_desk<E: Environment>(desk: &SharedDesk<E>) -> MutexGuard<'_, ReservationDesk<E>> {
    match desk.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
