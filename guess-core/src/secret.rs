//! Secret number generation.
//!
//! The controller draws a new secret at construction and on every reset.
//! [`RandomSecret`] is the production source; [`FixedSecret`] pins the value
//! so scenarios can be replayed exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::state::{MAX_SECRET, MIN_SECRET};

/// Something that can produce secret numbers in `MIN_SECRET..=MAX_SECRET`.
pub trait SecretSource {
    /// Draw the secret for the next round.
    fn draw(&mut self) -> u8;
}

/// Uniform draw over the secret range.
#[derive(Debug, Clone)]
pub struct RandomSecret {
    rng: StdRng,
}

impl RandomSecret {
    /// Seed from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence of secrets for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw with a caller-supplied RNG.
    pub fn draw_with_rng<R: Rng>(rng: &mut R) -> u8 {
        rng.gen_range(MIN_SECRET..=MAX_SECRET)
    }
}

impl Default for RandomSecret {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretSource for RandomSecret {
    fn draw(&mut self) -> u8 {
        Self::draw_with_rng(&mut self.rng)
    }
}

/// Hands out a fixed list of secrets, repeating the last one forever.
///
/// Values outside the secret range are clamped into it.
#[derive(Debug, Clone)]
pub struct FixedSecret {
    values: Vec<u8>,
    next: usize,
}

impl FixedSecret {
    /// Always the same secret.
    pub fn new(value: u8) -> Self {
        Self::sequence([value])
    }

    /// Secrets in order, one per round; the last value repeats.
    pub fn sequence(values: impl IntoIterator<Item = u8>) -> Self {
        let mut values: Vec<u8> = values
            .into_iter()
            .map(|v| v.clamp(MIN_SECRET, MAX_SECRET))
            .collect();
        if values.is_empty() {
            values.push(MIN_SECRET);
        }
        Self { values, next: 0 }
    }
}

impl SecretSource for FixedSecret {
    fn draw(&mut self) -> u8 {
        let index = self.next.min(self.values.len() - 1);
        self.next = self.next.saturating_add(1);
        self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_in_range() {
        let mut source = RandomSecret::seeded(42);
        for _ in 0..1000 {
            let secret = source.draw();
            assert!((MIN_SECRET..=MAX_SECRET).contains(&secret));
        }
    }

    #[test]
    fn test_random_secret_covers_range() {
        let mut source = RandomSecret::seeded(7);
        let mut seen = [false; MAX_SECRET as usize + 1];
        for _ in 0..2000 {
            seen[source.draw() as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[MIN_SECRET as usize..].iter().all(|&s| s));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomSecret::seeded(1234);
        let mut b = RandomSecret::seeded(1234);
        let first: Vec<u8> = (0..20).map(|_| a.draw()).collect();
        let second: Vec<u8> = (0..20).map(|_| b.draw()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_secret_sequence() {
        let mut source = FixedSecret::sequence([14, 3]);
        assert_eq!(source.draw(), 14);
        assert_eq!(source.draw(), 3);
        assert_eq!(source.draw(), 3);
    }

    #[test]
    fn test_fixed_secret_clamps() {
        assert_eq!(FixedSecret::new(0).draw(), MIN_SECRET);
        assert_eq!(FixedSecret::new(99).draw(), MAX_SECRET);
        assert_eq!(FixedSecret::sequence([]).draw(), MIN_SECRET);
    }
}
