//! Seeded pseudo-random stream used by every dashboard pipeline.
//!
//! The recurrence is `s = sin(s) * 10000; s - floor(s)`. Not suitable for
//! anything but mock data; the only guarantee is that a seed always yields the
//! same stream.

/// Offset added to every company seed so that company `0` does not start the
/// stream on the `sin(0) == 0` fixed point.
const COMPANY_SEED_OFFSET: f64 = 7.0;

#[derive(Debug, Clone)]
pub struct SeededGenerator {
    state: f64,
}

impl SeededGenerator {
    pub fn new(seed: f64) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.sin() * 10_000.0;
        let frac = self.state - self.state.floor();
        // A tiny negative state can round `frac` up to exactly 1.0.
        if frac >= 1.0 {
            0.0
        } else {
            frac
        }
    }

    /// Uniform value in `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform value in `[min, max)` rounded to whole units.
    pub fn amount(&mut self, min: f64, max: f64) -> f64 {
        self.range(min, max).round()
    }

    /// Integer in `[min, max)`. Returns `min` when the range is empty.
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = (max - min) as f64;
        let offset = (self.next_f64() * span).floor() as i64;
        min + offset.min(max - min - 1)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.int_range(0, items.len() as i64) as usize;
        items.get(idx)
    }
}

/// Seed composed from stable inputs (company id, discriminants, indices).
///
/// Every mixing step is a pure function of its inputs, so two seeds built from
/// the same sequence of calls are equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed(f64);

impl Seed {
    pub fn company(company_id: u32) -> Self {
        Self(company_id as f64 * 1_000.0 + COMPANY_SEED_OFFSET)
    }

    /// Mixes a string discriminant such as `"receivable"` or `"sales"`.
    pub fn domain(self, tag: &str) -> Self {
        let code: u32 = tag
            .chars()
            .enumerate()
            .map(|(i, c)| (c as u32).wrapping_mul(i as u32 + 1))
            .fold(0u32, |acc, v| acc.wrapping_add(v));
        Self(self.0 + (code % 10_000) as f64 * 0.37)
    }

    /// Mixes the character code at `idx` of `text`; a missing character
    /// contributes nothing.
    pub fn char_code(self, text: &str, idx: usize) -> Self {
        match text.chars().nth(idx) {
            Some(c) => Self(self.0 + (c as u32 % 10_000) as f64 * 1.3),
            None => self,
        }
    }

    pub fn index(self, i: i64) -> Self {
        Self(self.0 + i as f64 * 13.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn generator(self) -> SeededGenerator {
        SeededGenerator::new(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_sine_recurrence() {
        let mut g = SeededGenerator::new(1.0);
        let first = g.next_f64();
        assert!((first - 0.709_848_078_964_569).abs() < 1e-9, "got {first}");
        let second = g.next_f64();
        assert!((second - 0.387_551_605_690_532).abs() < 1e-9, "got {second}");
    }

    #[test]
    fn zero_seed_is_a_fixed_point() {
        let mut g = SeededGenerator::new(0.0);
        for _ in 0..5 {
            assert_eq!(g.next_f64(), 0.0);
        }
    }

    #[test]
    fn company_zero_avoids_fixed_point() {
        let mut g = Seed::company(0).generator();
        let values: Vec<f64> = (0..10).map(|_| g.next_f64()).collect();
        assert!(values.iter().any(|v| *v > 0.0));
    }

    #[test]
    fn outputs_stay_in_unit_interval() {
        for seed in [1.0, 7.0, 1007.0, -42.5, 123_456.789] {
            let mut g = SeededGenerator::new(seed);
            for _ in 0..2_000 {
                let v = g.next_f64();
                assert!((0.0..1.0).contains(&v), "seed={seed} v={v}");
            }
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let seed = Seed::company(3).domain("payable").char_code("1404/05/01", 3);
        let a: Vec<f64> = {
            let mut g = seed.generator();
            (0..32).map(|_| g.next_f64()).collect()
        };
        let b: Vec<f64> = {
            let mut g = seed.generator();
            (0..32).map(|_| g.next_f64()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn domains_produce_distinct_seeds() {
        let base = Seed::company(1);
        assert_ne!(base.domain("receivable"), base.domain("payable"));
        assert_ne!(base.index(1), base.index(2));
    }

    #[test]
    fn int_range_respects_bounds() {
        let mut g = SeededGenerator::new(11.0);
        for _ in 0..1_000 {
            let v = g.int_range(150, 350);
            assert!((150..350).contains(&v));
        }
        assert_eq!(g.int_range(5, 5), 5);
    }

    #[test]
    fn pick_on_empty_slice_is_none() {
        let mut g = SeededGenerator::new(2.0);
        let empty: [u8; 0] = [];
        assert!(g.pick(&empty).is_none());
        assert!(g.pick(&[1, 2, 3]).is_some());
    }
}
