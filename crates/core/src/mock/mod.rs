//! Deterministic mock-data engine behind every dashboard section.
//!
//! Each pipeline is a pure function of its inputs: a fresh [`rng::SeededGenerator`]
//! is built from a [`rng::Seed`] per call and dropped once the dataset exists.

pub mod balance_sheet;
pub mod cache;
pub mod checks;
pub mod composition;
pub mod dataset;
pub mod period;
pub mod profit_loss;
pub mod ranking;
pub mod rng;
pub mod sales;

use rng::Seed;

/// Size multiplier applied to every monetary range of a company, in `[0.5, 3.0)`.
pub fn company_scale(company_id: u32) -> f64 {
    let mut g = Seed::company(company_id).domain("scale").generator();
    (g.range(0.5, 3.0) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_scale_is_bounded_and_stable() {
        for id in 0..50 {
            let s = company_scale(id);
            assert!((0.5..=3.0).contains(&s), "id={id} scale={s}");
            assert_eq!(s, company_scale(id));
        }
    }
}
