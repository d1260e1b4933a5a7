//! Simulated environment: virtual clock + seeded RNG.
//!
//! Implements [`Environment`] without touching system resources. Tests
//! advance the clock explicitly ([`SimEnv::advance`]) to simulate multi-day
//! expiry windows instantly; `sleep` advances the clock by the slept
//! duration, so the sweeper's interval loop runs in virtual time.

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use hostel_core::Environment;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Virtual instant: offset from the simulation start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimInstant(Duration);

impl SimInstant {
    /// The simulation epoch.
    pub const ZERO: SimInstant = SimInstant(Duration::ZERO);

    /// Offset from the simulation start.
    pub fn elapsed(self) -> Duration {
        self.0
    }
}

impl std::ops::Add<Duration> for SimInstant {
    type Output = SimInstant;

    fn add(self, rhs: Duration) -> SimInstant {
        SimInstant(self.0 + rhs)
    }
}

impl std::ops::Sub<SimInstant> for SimInstant {
    type Output = Duration;

    fn sub(self, rhs: SimInstant) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}

struct SimState {
    clock: Duration,
    rng: ChaCha8Rng,
}

/// Deterministic [`Environment`] for tests.
///
/// Clones share the same clock and RNG, so an environment handed to a desk
/// and one kept by the test stay in sync.
#[derive(Clone)]
pub struct SimEnv {
    state: Arc<Mutex<SimState>>,
}

impl SimEnv {
    /// Create a simulation environment with the given RNG seed, clock at
    /// zero.
    pub fn new(seed: u64) -> Self {
        Self {
            state: Arc::new(Mutex::new(SimState {
                clock: Duration::ZERO,
                rng: ChaCha8Rng::seed_from_u64(seed),
            })),
        }
    }

    /// Advance the virtual clock.
    pub fn advance(&self, duration: Duration) {
        self.lock().clock += duration;
    }

    /// Time elapsed since the simulation start.
    pub fn elapsed(&self) -> Duration {
        self.lock().clock
    }

    fn lock(&self) -> MutexGuard<'_, SimState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl std::fmt::Debug for SimEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimEnv").field("elapsed", &self.elapsed()).finish()
    }
}

impl Environment for SimEnv {
    type Instant = SimInstant;

    fn now(&self) -> SimInstant {
        SimInstant(self.lock().clock)
    }

    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        let env = self.clone();
        async move {
            env.advance(duration);
            yield_once().await;
        }
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        self.lock().rng.fill_bytes(buffer);
    }
}

// Cooperative yield so a looping sweeper on a current-thread runtime gives
// the test body a chance to run. No tokio dependency: hand-rolled pending-
// once future.
async fn yield_once() {
    struct YieldOnce(bool);

    impl std::future::Future for YieldOnce {
        type Output = ();

        fn poll(
            mut self: std::pin::Pin<&mut Self>,
            cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<()> {
            if self.0 {
                std::task::Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                std::task::Poll::Pending
            }
        }
    }

    YieldOnce(false).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero_and_advances() {
        let env = SimEnv::new(0);
        assert_eq!(env.now(), SimInstant::ZERO);

        env.advance(Duration::from_secs(90));
        assert_eq!(env.now().elapsed(), Duration::from_secs(90));
    }

    #[test]
    fn clones_share_the_clock() {
        let env = SimEnv::new(0);
        let clone = env.clone();
        clone.advance(Duration::from_secs(5));
        assert_eq!(env.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn same_seed_same_bytes() {
        let a = SimEnv::new(42);
        let b = SimEnv::new(42);
        let mut buf_a = [0u8; 16];
        let mut buf_b = [0u8; 16];
        a.random_bytes(&mut buf_a);
        b.random_bytes(&mut buf_b);
        assert_eq!(buf_a, buf_b);
    }

    #[test]
    fn instant_arithmetic() {
        let base = SimInstant::ZERO + Duration::from_secs(100);
        let later = base + Duration::from_secs(50);
        assert_eq!(later - base, Duration::from_secs(50));
        // Monotonic subtraction saturates rather than panicking.
        assert_eq!(base - later, Duration::ZERO);
    }

    #[tokio::test]
    async fn sleep_advances_virtual_time() {
        let env = SimEnv::new(0);
        env.sleep(Duration::from_secs(60)).await;
        assert_eq!(env.elapsed(), Duration::from_secs(60));
    }
}
