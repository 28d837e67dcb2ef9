//! Process-wide random source

use std::sync::{Mutex, OnceLock, PoisonError};

use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Isolates the platform random source for testing. Every generator in the crate is built on
/// [Random::draw32] alone.
#[cfg_attr(test, mockall::automock)]
pub trait Random {
    /// One uniformly distributed 32-bit value
    fn draw32(&self) -> u32 {
        source()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_u32()
    }
}

/// Two draws combined, high half first
pub(crate) fn draw64(random: &impl Random) -> u64 {
    let high = random.draw32() as u64;
    let low = random.draw32() as u64;
    (high << 32) | low
}

/// Draws from the generator shared by the whole process
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomImpl;

impl Random for RandomImpl {}

fn source() -> &'static Mutex<StdRng> {
    static SOURCE: OnceLock<Mutex<StdRng>> = OnceLock::new();
    SOURCE.get_or_init(|| {
        log::debug!("Seeding process-wide random source from OS entropy");
        Mutex::new(StdRng::from_os_rng())
    })
}
