//! Random number source shared by the generators.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The generator every fixture is drawn from.
pub type FixtureRng = Pcg64Mcg;

/// Builds the fixture generator, returning it alongside the seed it was built from.
///
/// Without an explicit seed one is drawn from OS entropy; it is returned so the
/// run can be replayed.
#[must_use]
pub fn seeded(seed: Option<u64>) -> (FixtureRng, u64) {
    let seed = seed.unwrap_or_else(|| rand::rngs::OsRng.next_u64());
    log::debug!("seeding fixture rng with {}", seed);
    (FixtureRng::seed_from_u64(seed), seed)
}
