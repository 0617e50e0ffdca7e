//! Receivable / payable checks section.

use crate::domain::section::CheckKind;
use crate::domain::table::{CompositionSet, Period, RankingEntry};
use crate::mock::company_scale;
use crate::mock::composition::{self, Slice};
use crate::mock::period::DateRange;
use crate::mock::ranking;
use crate::mock::rng::Seed;
use serde::{Deserialize, Serialize};

const COUNTERPARTIES: [&str; 10] = [
    "بازرگانی آریا",
    "صنایع پارس",
    "تجارت نوین البرز",
    "پخش سپهر",
    "گروه صنعتی کاوه",
    "شرکت مهرگان",
    "توزیع آفتاب",
    "بازرگانی دماوند",
    "فرآورده\u{200c}های زاگرس",
    "تدارکات سینا",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Pending,
    Returned,
    Future,
}

impl CheckStatus {
    pub const ALL: [CheckStatus; 4] = [
        CheckStatus::Passed,
        CheckStatus::Pending,
        CheckStatus::Returned,
        CheckStatus::Future,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Passed => "پاس شده",
            CheckStatus::Pending => "در انتظار وصول",
            CheckStatus::Returned => "برگشتی",
            CheckStatus::Future => "سررسید آتی",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CheckStatus::Passed => "#22C55E",
            CheckStatus::Pending => "#F59E0B",
            CheckStatus::Returned => "#EF4444",
            CheckStatus::Future => "#3B82F6",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBucket {
    pub status: CheckStatus,
    pub label: String,
    pub count: u32,
    pub amount: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueBucket {
    pub period: Period,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckSummary {
    pub kind: CheckKind,
    pub total_count: u32,
    pub average_amount: f64,
    pub total_amount: f64,
    /// Always `passed, pending, returned, future`, in that order.
    pub status_distribution: Vec<StatusBucket>,
    pub status_composition: CompositionSet,
    pub top_counterparties: Vec<RankingEntry>,
    /// Open checks (pending and future) spread over the month axis.
    pub due_schedule: Vec<DueBucket>,
}

/// Splits `total` proportionally to `weights`, flooring every slot except
/// `anchor`, which takes whatever remains. The result always sums to `total`.
pub fn split_count(total: u32, weights: &[f64], anchor: usize) -> Vec<u32> {
    if weights.is_empty() {
        return Vec::new();
    }
    let anchor = anchor.min(weights.len() - 1);
    let sum: f64 = weights.iter().filter(|w| w.is_finite() && **w > 0.0).sum();

    let mut counts: Vec<u32> = weights
        .iter()
        .map(|w| {
            if sum > 0.0 && w.is_finite() && *w > 0.0 {
                (total as f64 * w / sum).floor() as u32
            } else {
                0
            }
        })
        .collect();

    let others: u32 = counts
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != anchor)
        .map(|(_, c)| *c)
        .sum();
    counts[anchor] = total.saturating_sub(others);
    counts
}

/// Splits `total` proportionally to `weights`, handing the flooring remainder
/// out one unit at a time to the slots with the largest fractional parts
/// (earliest slot on ties). No slot ends up a whole unit away from its exact share.
pub fn spread_count(total: u32, weights: &[f64]) -> Vec<u32> {
    let sum: f64 = weights.iter().filter(|w| w.is_finite() && **w > 0.0).sum();
    if weights.is_empty() || sum <= 0.0 {
        return split_count(total, weights, 0);
    }

    let exact: Vec<f64> = weights
        .iter()
        .map(|w| {
            if w.is_finite() && *w > 0.0 {
                total as f64 * w / sum
            } else {
                0.0
            }
        })
        .collect();
    let mut counts: Vec<u32> = exact.iter().map(|e| e.floor() as u32).collect();

    let assigned: u32 = counts.iter().sum();
    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = exact[a] - exact[a].floor();
        let fb = exact[b] - exact[b].floor();
        fb.partial_cmp(&fa).unwrap_or(std::cmp::Ordering::Equal)
    });
    for &i in order.iter().cycle().take(total.saturating_sub(assigned) as usize) {
        counts[i] += 1;
    }
    counts
}

pub fn generate(company_id: u32, kind: CheckKind, range: &DateRange) -> CheckSummary {
    let scale = company_scale(company_id);
    let mut g = Seed::company(company_id)
        .domain(kind.as_str())
        .char_code(&range.normalized_from(), 3)
        .generator();

    let total_count = g.int_range(150, 350) as u32;
    let average_amount = g.amount(50.0 * scale, 500.0 * scale).max(1.0);

    let fractions = [
        g.range(0.40, 0.60),
        g.range(0.15, 0.25),
        g.range(0.05, 0.12),
        g.range(0.10, 0.20),
    ];
    let counts = split_count(total_count, &fractions, 0);

    let status_distribution: Vec<StatusBucket> = CheckStatus::ALL
        .iter()
        .zip(&counts)
        .map(|(status, count)| StatusBucket {
            status: *status,
            label: status.label().to_string(),
            count: *count,
            amount: *count as f64 * average_amount,
            color: status.color().to_string(),
        })
        .collect();
    let total_amount: f64 = status_distribution.iter().map(|b| b.amount).sum();

    let slices: Vec<Slice<'_>> = status_distribution
        .iter()
        .map(|b| Slice {
            label: &b.label,
            weight: b.count as f64,
            color: &b.color,
        })
        .collect();
    let status_composition = composition::normalize(&slices);

    let counterparties: Vec<(u32, String, f64)> = COUNTERPARTIES
        .iter()
        .take(5)
        .enumerate()
        .map(|(i, name)| {
            let value = g.amount(1_000.0 * scale, 20_000.0 * scale);
            (i as u32 + 1, name.to_string(), value)
        })
        .collect();
    let top_counterparties = ranking::rank(counterparties);

    let months = range.months();
    let open = counts[1] + counts[3];
    let weights: Vec<f64> = months.iter().map(|_| g.range(0.5, 1.5)).collect();
    let due_counts = spread_count(open, &weights);
    let due_schedule = months
        .into_iter()
        .zip(due_counts)
        .map(|(period, count)| DueBucket { period, count })
        .collect();

    tracing::debug!(company_id, kind = kind.as_str(), total_count, "checks dataset generated");

    CheckSummary {
        kind,
        total_count,
        average_amount,
        total_amount,
        status_distribution,
        status_composition,
        top_counterparties,
        due_schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> DateRange {
        DateRange::new("1404/01/01", "1404/12/29")
    }

    #[test]
    fn receivable_buckets_sum_to_total() {
        let s = generate(1, CheckKind::Receivable, &range());
        assert_eq!(s.status_distribution.len(), 4);
        let sum: u32 = s.status_distribution.iter().map(|b| b.count).sum();
        assert_eq!(sum, s.total_count);
        assert!((150..350).contains(&s.total_count));
    }

    #[test]
    fn bucket_order_is_fixed() {
        let s = generate(4, CheckKind::Payable, &range());
        let statuses: Vec<CheckStatus> = s.status_distribution.iter().map(|b| b.status).collect();
        assert_eq!(statuses, CheckStatus::ALL.to_vec());
    }

    #[test]
    fn amounts_reconcile() {
        let s = generate(2, CheckKind::Payable, &range());
        let sum: f64 = s.status_distribution.iter().map(|b| b.amount).sum();
        assert_eq!(sum, s.total_amount);
        assert_eq!(s.total_amount, s.total_count as f64 * s.average_amount);
    }

    #[test]
    fn receivable_and_payable_differ() {
        let r = generate(1, CheckKind::Receivable, &range());
        let p = generate(1, CheckKind::Payable, &range());
        assert_ne!(r, p);
    }

    #[test]
    fn due_schedule_covers_open_checks() {
        let s = generate(3, CheckKind::Receivable, &range());
        assert_eq!(s.due_schedule.len(), 12);
        let due: u32 = s.due_schedule.iter().map(|d| d.count).sum();
        let open = s.status_distribution[1].count + s.status_distribution[3].count;
        assert_eq!(due, open);
    }

    #[test]
    fn status_composition_sums_to_100() {
        let s = generate(8, CheckKind::Receivable, &range());
        assert!((s.status_composition.sum() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn split_count_assigns_remainder_to_anchor() {
        assert_eq!(split_count(10, &[1.0, 1.0, 1.0], 0), vec![4, 3, 3]);
        assert_eq!(split_count(10, &[1.0, 1.0, 1.0], 2), vec![3, 3, 4]);
        assert_eq!(split_count(7, &[0.0, 0.0], 1), vec![0, 7]);
        assert!(split_count(5, &[], 0).is_empty());
    }

    #[test]
    fn spread_count_stays_within_one_of_exact_share() {
        assert_eq!(spread_count(10, &[1.0, 1.0, 1.0]), vec![4, 3, 3]);
        assert_eq!(spread_count(11, &[1.0, 1.0, 1.0]), vec![4, 4, 3]);
        assert_eq!(spread_count(7, &[0.0, 0.0]), vec![7, 0]);
        assert!(spread_count(5, &[]).is_empty());

        let weights = [1.4, 0.6, 1.1, 0.9, 1.3, 0.7, 1.0, 1.2, 0.8, 1.0, 1.1, 0.9];
        let counts = spread_count(97, &weights);
        assert_eq!(counts.iter().sum::<u32>(), 97);
        let sum: f64 = weights.iter().sum();
        for (c, w) in counts.iter().zip(weights) {
            assert!((*c as f64 - 97.0 * w / sum).abs() < 1.0);
        }
    }

    #[test]
    fn due_schedule_does_not_pile_onto_the_first_month() {
        for company_id in 1..20 {
            let s = generate(company_id, CheckKind::Receivable, &range());
            let open = s.status_distribution[1].count + s.status_distribution[3].count;
            let scheduled: u32 = s.due_schedule.iter().map(|b| b.count).sum();
            assert_eq!(scheduled, open);
            let months = s.due_schedule.len() as f64;
            // weights are drawn from [0.5, 1.5), so no month's share exceeds 3x the mean
            let cap = (3.0 * open as f64 / months).floor() as u32 + 1;
            assert!(s.due_schedule[0].count <= cap, "company {company_id}");
        }
    }

    #[test]
    fn malformed_range_still_yields_a_dataset() {
        let s = generate(1, CheckKind::Receivable, &DateRange::new("", ""));
        assert_eq!(s.due_schedule.len(), 1);
        let sum: u32 = s.status_distribution.iter().map(|b| b.count).sum();
        assert_eq!(sum, s.total_count);
    }
}
