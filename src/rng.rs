// The "minimal standard" multiplicative LCG from
//
// Park, S. K. and Miller, K. W., "Random Number Generators: Good Ones Are
// Hard To Find", Communications of the ACM 31(10), Oct 1988.

use core::fmt;

pub const MULTIPLIER: u64 = 16807;
pub const MODULUS: u64 = 2147483647; // 2^31 - 1

/// A Park–Miller (Lehmer) random number generator.
///
/// The state is a single integer in `[1, 2^31 - 2]`. Each draw multiplies it
/// by 16807 modulo `2^31 - 1` and maps the new state onto `[0, 1)`.
///
/// Two generators built from the same seed yield the same sequence, so one
/// instance should be advanced from one place at a time. Draws made in a
/// fixed order are reproducible; draws interleaved nondeterministically are
/// not.
#[derive(Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64
}

impl SeededRandom {
    /// Builds a generator from any integer seed.
    ///
    /// The seed is reduced modulo `2^31 - 1`. The one value that reduction
    /// leaves degenerate, zero, is replaced by 1. Every seed outside that
    /// class keeps the exact sequence it would have had unreduced.
    pub fn new(seed: i64) -> Self {
        let reduced = seed.rem_euclid(MODULUS as i64) as u64;
        SeededRandom {
            state: if reduced == 0 { 1 } else { reduced }
        }
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    /// Jump ahead `delta` draws in O(log delta) time.
    ///
    /// Equivalent to calling `next()` `delta` times and discarding the
    /// results. Since the generator has no increment, this is plain modular
    /// exponentiation of the multiplier.
    #[inline]
    pub fn advance(&mut self, delta: u64) {
        let mut acc_mult: u64 = 1;
        let mut cur_mult = MULTIPLIER;
        let mut mdelta = delta;

        while mdelta > 0 {
            if (mdelta & 1) != 0 {
                acc_mult = acc_mult * cur_mult % MODULUS;
            }
            cur_mult = cur_mult * cur_mult % MODULUS;
            mdelta /= 2;
        }
        self.state = self.state * acc_mult % MODULUS;
    }

    #[inline]
    fn step(&mut self) {
        // both factors are below 2^31, so the product fits in 62 bits
        self.state = self.state * MULTIPLIER % MODULUS;
    }

    /// Uniform double in `[0, 1)`.
    #[inline]
    pub fn next(&mut self) -> f64 {
        self.step();
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        (self.next() * (max - min + 1) as f64).floor() as i64 + min
    }

    /// Uniform double in `[min, max)`.
    pub fn next_float(&mut self, min: f64, max: f64) -> f64 {
        self.next() * (max - min) + min
    }

    /// Picks one element of `items`.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty. Candidate tables are static and never
    /// empty, so an empty slice here is a programming error.
    pub fn next_element<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "cannot draw an element from an empty slice");
        let index = self.next_int(0, items.len() as i64 - 1);
        &items[index as usize]
    }
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SeededRandom {{}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_minimal_standard_check_value() {
        // Park & Miller's published check: seed 1, 10000 draws.
        let mut rng = SeededRandom::new(1);
        for _ in 0..10000 {
            rng.next();
        }
        assert_eq!(rng.state(), 1043618065);
    }

    #[test]
    fn test_pinned_draws() {
        let mut rng = SeededRandom::new(42);
        assert!((rng.next() - 0.00032870704338765428).abs() < 1e-15);
        assert!((rng.next() - 0.52458710179160084).abs() < 1e-15);
        assert!((rng.next() - 0.73542353206819255).abs() < 1e-15);
        assert_eq!(rng.state(), 1579310009);
    }

    #[test]
    fn test_seed_normalization() {
        assert_eq!(SeededRandom::new(0).state(), 1);
        assert_eq!(SeededRandom::new(MODULUS as i64).state(), 1);
        assert_eq!(SeededRandom::new(MODULUS as i64 + 5).state(), 5);
        assert_eq!(SeededRandom::new(-1).state(), MODULUS - 1);
        assert_eq!(SeededRandom::new(2147483648).state(), 1);
        assert_eq!(SeededRandom::new(12345).state(), 12345);
    }

    #[test]
    fn test_next_is_unit_interval() {
        let mut rng = SeededRandom::new(7);
        for _ in 0..100_000 {
            let x = rng.next();
            assert!(x >= 0.0 && x < 1.0);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRandom::new(987654321);
        let mut b = SeededRandom::new(987654321);
        for _ in 0..1000 {
            assert_eq!(a.next().to_bits(), b.next().to_bits());
        }
    }

    #[test]
    fn test_advance_matches_stepping() {
        for &delta in [0u64, 1, 2, 17, 1000, 65537].iter() {
            let mut jumped = SeededRandom::new(12345);
            jumped.advance(delta);
            let mut stepped = SeededRandom::new(12345);
            for _ in 0..delta {
                stepped.next();
            }
            assert_eq!(jumped, stepped, "delta {}", delta);
        }
    }

    #[test]
    fn test_advance_full_period_is_identity() {
        let mut rng = SeededRandom::new(31337);
        rng.advance(MODULUS - 1);
        assert_eq!(rng.state(), 31337);
    }

    #[test]
    fn test_next_int_stays_in_bounds() {
        let mut sampler = rand::thread_rng();
        let mut rng = SeededRandom::new(2024);
        for _ in 0..200 {
            let min = sampler.gen_range(-1000i64..1000);
            let max = min + sampler.gen_range(0i64..50);
            let mut seen_min = false;
            let mut seen_max = false;
            for _ in 0..5000 {
                let v = rng.next_int(min, max);
                assert!(v >= min && v <= max, "{} not in [{}, {}]", v, min, max);
                seen_min |= v == min;
                seen_max |= v == max;
            }
            assert!(seen_min && seen_max, "[{}, {}] endpoints not reached", min, max);
        }
    }

    #[test]
    fn test_next_int_degenerate_range() {
        let mut rng = SeededRandom::new(99);
        for _ in 0..100 {
            assert_eq!(rng.next_int(4, 4), 4);
        }
    }

    #[test]
    fn test_next_float_bounds() {
        let mut rng = SeededRandom::new(5);
        for _ in 0..10000 {
            let v = rng.next_float(0.77, 0.95);
            assert!(v >= 0.77 && v < 0.95);
        }
    }

    #[test]
    fn test_next_element_consumes_one_draw() {
        let items = ["a", "b", "c"];
        let mut rng = SeededRandom::new(77);
        let mut reference = rng.clone();
        let picked = rng.next_element(&items);
        assert_eq!(*picked, items[reference.next_int(0, 2) as usize]);
        assert_eq!(rng, reference);
    }

    #[test]
    #[should_panic(expected = "empty slice")]
    fn test_next_element_empty_panics() {
        let items: [u8; 0] = [];
        SeededRandom::new(1).next_element(&items);
    }

    #[test]
    fn test_debug_hides_state() {
        assert_eq!(format!("{:?}", SeededRandom::new(3)), "SeededRandom {}");
    }
}
