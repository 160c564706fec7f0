// ABOUTME: Mock price generator for the estimate endpoint

use rand::Rng;
use std::ops::Range;

/// Quotes are drawn uniformly from this half-open range
pub const PRICE_RANGE: Range<u32> = 10_000..60_000;

/// A random quote; deliberately unrelated to the phone being quoted
pub fn random_price<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(PRICE_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_price_always_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let price = random_price(&mut rng);
            assert!(PRICE_RANGE.contains(&price), "price {price} out of range");
        }
    }
}
