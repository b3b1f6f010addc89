use super::{RollRequest, RollResult};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Rolls `request.count` dice using the given generator.
pub fn roll<R: Rng + ?Sized>(request: &RollRequest, rng: &mut R) -> RollResult {
    let rolls: Vec<u32> = (0..request.count)
        .map(|_| rng.gen_range(1..=request.sides))
        .collect();
    let total = rolls.iter().sum();

    RollResult { rolls, total }
}

/// Rolls with a fresh non-cryptographic generator seeded from the OS.
pub fn roll_dice(request: &RollRequest) -> RollResult {
    let mut rng = SmallRng::from_entropy();
    roll(request, &mut rng)
}
