use randomize::PCG32;

use crate::traits_and_structs::Error;

/// Fraction of cells left dead by [`CoinSource::flip`] on a `PCG32`.
const INITIAL_FILL: f32 = 0.5;

/// Source of independent fair coin flips used to seed a grid.
pub trait CoinSource {
    fn flip(&mut self) -> bool;
}

impl CoinSource for PCG32 {
    fn flip(&mut self) -> bool {
        randomize::f32_half_open_right(self.next_u32()) >= INITIAL_FILL
    }
}

/// Generate a pseudorandom seed for the game's PRNG.
pub fn generate_seed() -> Result<(u64, u64), Error> {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    getrandom(&mut seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}

/// A PCG32 from `seed`, or from OS entropy when there is none.
pub fn seeded_rng(seed: Option<(u64, u64)>) -> Result<(PCG32, (u64, u64)), Error> {
    let seed = match seed {
        Some(seed) => seed,
        None => generate_seed()?,
    };
    Ok((seed.into(), seed))
}
