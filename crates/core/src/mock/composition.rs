//! Percentage helpers shared by the pipelines.
//!
//! [`normalize`] produces composition sets that sum to exactly 100 (donut
//! charts, check status buckets). [`share`] rounds each value on its own and
//! lets the total drift (rankings and distributions).

use crate::domain::table::{CompositionEntry, CompositionSet};

/// One raw slice fed to [`normalize`].
#[derive(Debug, Clone, Copy)]
pub struct Slice<'a> {
    pub label: &'a str,
    pub weight: f64,
    pub color: &'a str,
}

/// Converts raw weights into one-decimal percentages summing to 100.
///
/// The largest slice (first one on ties) absorbs the rounding drift. A zero or
/// non-finite total gives the first slice 100 and every other slice 0.
pub fn normalize(slices: &[Slice<'_>]) -> CompositionSet {
    if slices.is_empty() {
        return CompositionSet {
            entries: Vec::new(),
        };
    }

    let weights: Vec<f64> = slices
        .iter()
        .map(|s| if s.weight.is_finite() { s.weight.max(0.0) } else { 0.0 })
        .collect();
    let total: f64 = weights.iter().sum();

    let mut anchor = 0;
    for (i, w) in weights.iter().enumerate() {
        if *w > weights[anchor] {
            anchor = i;
        }
    }

    // Work in tenths of a percent so the correction is exact.
    let mut tenths: Vec<i64> = if total > 0.0 && total.is_finite() {
        weights
            .iter()
            .map(|w| (w / total * 1_000.0).round() as i64)
            .collect()
    } else {
        vec![0; weights.len()]
    };
    let others: i64 = tenths
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != anchor)
        .map(|(_, t)| *t)
        .sum();
    tenths[anchor] = 1_000 - others;

    let entries = slices
        .iter()
        .zip(tenths)
        .map(|(s, t)| CompositionEntry {
            label: s.label.to_string(),
            value: t as f64 / 10.0,
            color: s.color.to_string(),
        })
        .collect();

    CompositionSet { entries }
}

/// `value` as a one-decimal percentage of `total`; `0.0` when the total is
/// zero or not finite.
pub fn share(value: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() || !value.is_finite() {
        return 0.0;
    }
    round1(value / total * 100.0)
}

/// `num / den`, rounded to two decimals; `0.0` for a zero denominator.
pub fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 || !den.is_finite() || !num.is_finite() {
        return 0.0;
    }
    (num / den * 100.0).round() / 100.0
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slices<'a>(weights: &[f64], labels: &'a [&'a str]) -> Vec<Slice<'a>> {
        weights
            .iter()
            .zip(labels)
            .map(|(w, l)| Slice {
                label: l,
                weight: *w,
                color: "#000000",
            })
            .collect()
    }

    #[test]
    fn thirds_are_corrected_on_the_anchor() {
        let set = normalize(&slices(&[1.0, 1.0, 1.0], &["a", "b", "c"]));
        let values: Vec<f64> = set.entries.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![33.4, 33.3, 33.3]);
        assert!((set.sum() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn largest_slice_is_the_anchor() {
        let set = normalize(&slices(&[1.0, 5.0, 1.0], &["a", "b", "c"]));
        assert_eq!(set.entries[0].value, 14.3);
        assert_eq!(set.entries[1].value, 71.4);
        assert_eq!(set.entries[2].value, 14.3);
    }

    #[test]
    fn zero_total_goes_to_first_slice() {
        let set = normalize(&slices(&[0.0, 0.0], &["a", "b"]));
        assert_eq!(set.entries[0].value, 100.0);
        assert_eq!(set.entries[1].value, 0.0);
    }

    #[test]
    fn negative_and_nan_weights_count_as_zero() {
        let set = normalize(&slices(&[f64::NAN, -3.0, 2.0], &["a", "b", "c"]));
        assert_eq!(set.entries[2].value, 100.0);
        assert!((set.sum() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_gives_empty_set() {
        assert!(normalize(&[]).entries.is_empty());
    }

    #[test]
    fn share_and_ratio_guard_zero_denominators() {
        assert_eq!(share(5.0, 0.0), 0.0);
        assert_eq!(share(1.0, 3.0), 33.3);
        assert_eq!(ratio(1.0, 0.0), 0.0);
        assert_eq!(ratio(2.0, 3.0), 0.67);
        assert_eq!(share(f64::INFINITY, 1.0), 0.0);
    }
}
