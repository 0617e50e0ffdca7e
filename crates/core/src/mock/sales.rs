//! Monthly sales and returns.
//!
//! Every month is drawn from its own seed, so the figures for a month are the
//! same whatever range it is viewed in and whatever mode is requested. The
//! mode only selects which series is emitted.

use crate::domain::section::Mode;
use crate::domain::table::{CompositionSet, Period};
use crate::mock::checks::split_count;
use crate::mock::company_scale;
use crate::mock::composition::{self, Slice};
use crate::mock::period::{month_name, DateRange};
use crate::mock::ranking::PRODUCTS;
use crate::mock::rng::Seed;
use serde::{Deserialize, Serialize};

const BREAKDOWN_SIZE: usize = 6;

const CHANNELS: [(&str, &str); 4] = [
    ("فروش حضوری", "#6366F1"),
    ("فروش آنلاین", "#14B8A6"),
    ("عمده\u{200c}فروشی", "#F97316"),
    ("صادرات", "#A855F7"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub period: Period,
    pub month_name: String,
    pub sales: f64,
    pub returns: f64,
    /// Returns as a percentage of sales, one decimal.
    pub return_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTotals {
    pub sales: f64,
    pub returns: f64,
    pub return_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub id: u32,
    pub name: String,
    pub amount: f64,
    pub quantity: f64,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub mode: Mode,
    pub periods: Vec<Period>,
    /// Monetary figures for `amount` and `details`, units for `quantity`.
    pub series: Vec<SalesPoint>,
    pub totals: SalesTotals,
    pub channel_mix: CompositionSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_series: Option<Vec<SalesPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<ProductSales>>,
}

/// Both views of one month.
#[derive(Debug, Clone, Copy)]
struct MonthDraw {
    period: Period,
    sales: f64,
    returns: f64,
    sales_qty: f64,
    returns_qty: f64,
}

fn draw_month(company_id: u32, scale: f64, period: Period) -> MonthDraw {
    let month = period.month.unwrap_or(1);
    let mut g = Seed::company(company_id)
        .domain("sales")
        .index(period.year as i64 * 12 + month as i64)
        .generator();

    let base = 10_000.0 * scale;
    let sales = g.amount(base * 0.6, base * 1.4);
    let returns = (sales * g.range(0.05, 0.20)).round();
    let avg_price = g.range(2.0, 6.0) * scale;

    MonthDraw {
        period,
        sales,
        returns,
        sales_qty: quantity(sales, avg_price),
        returns_qty: quantity(returns, avg_price),
    }
}

fn quantity(amount: f64, avg_price: f64) -> f64 {
    if avg_price <= 0.0 || !avg_price.is_finite() {
        return 0.0;
    }
    (amount / avg_price).round()
}

fn point(period: Period, sales: f64, returns: f64) -> SalesPoint {
    SalesPoint {
        period,
        month_name: month_name(period.month.unwrap_or(1)).to_string(),
        sales,
        returns,
        return_ratio: composition::share(returns, sales),
    }
}

fn totals(series: &[SalesPoint]) -> SalesTotals {
    let sales: f64 = series.iter().map(|p| p.sales).sum();
    let returns: f64 = series.iter().map(|p| p.returns).sum();
    SalesTotals {
        sales,
        returns,
        return_ratio: composition::share(returns, sales),
    }
}

pub fn generate(company_id: u32, mode: Mode, range: &DateRange) -> SalesReport {
    let scale = company_scale(company_id);
    let periods = range.months();
    let draws: Vec<MonthDraw> = periods
        .iter()
        .map(|p| draw_month(company_id, scale, *p))
        .collect();

    let amount_series: Vec<SalesPoint> =
        draws.iter().map(|d| point(d.period, d.sales, d.returns)).collect();
    let quantity_series: Vec<SalesPoint> = draws
        .iter()
        .map(|d| point(d.period, d.sales_qty, d.returns_qty))
        .collect();

    let amount_totals = totals(&amount_series);

    let mut g = Seed::company(company_id)
        .domain("sales_mix")
        .char_code(&range.normalized_from(), 3)
        .generator();

    let channel_weights: Vec<f64> = CHANNELS.iter().map(|_| g.range(0.1, 1.0)).collect();
    let slices: Vec<Slice<'_>> = CHANNELS
        .iter()
        .zip(&channel_weights)
        .map(|((label, color), weight)| Slice {
            label,
            weight: *weight,
            color,
        })
        .collect();
    let channel_mix = composition::normalize(&slices);

    let product_weights: Vec<f64> = (0..BREAKDOWN_SIZE).map(|_| g.range(0.2, 1.0)).collect();
    let product_prices: Vec<f64> = (0..BREAKDOWN_SIZE)
        .map(|_| g.range(1.5, 8.0) * scale)
        .collect();

    let (series, quantity_series, breakdown) = match mode {
        Mode::Amount => (amount_series, None, None),
        Mode::Quantity => (quantity_series, None, None),
        Mode::Details => {
            let breakdown = product_breakdown(
                amount_totals.sales,
                &product_weights,
                &product_prices,
            );
            (amount_series, Some(quantity_series), Some(breakdown))
        }
    };

    SalesReport {
        mode,
        periods,
        totals: totals(&series),
        series,
        channel_mix,
        quantity_series,
        breakdown,
    }
}

fn product_breakdown(total_sales: f64, weights: &[f64], prices: &[f64]) -> Vec<ProductSales> {
    // Whole-unit amounts, so split them like a count.
    let amounts = split_count(total_sales.max(0.0) as u32, weights, 0);
    let mut out: Vec<ProductSales> = PRODUCTS
        .iter()
        .zip(amounts)
        .zip(prices)
        .enumerate()
        .map(|(i, ((name, amount), price))| {
            let amount = amount as f64;
            ProductSales {
                id: i as u32 + 1,
                name: name.to_string(),
                amount,
                quantity: quantity(amount, *price),
                share: composition::share(amount, total_sales),
            }
        })
        .collect();
    out.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> DateRange {
        DateRange::new("1404/01/01", "1404/12/29")
    }

    #[test]
    fn twelve_months_for_a_full_year() {
        let r = generate(1, Mode::Amount, &range());
        assert_eq!(r.periods.len(), 12);
        assert_eq!(r.series.len(), 12);
        assert_eq!(r.series[0].month_name, "فروردین");
        assert!(r.quantity_series.is_none());
        assert!(r.breakdown.is_none());
    }

    #[test]
    fn returns_are_five_to_twenty_percent_of_sales() {
        let r = generate(7, Mode::Amount, &range());
        for p in &r.series {
            let ratio = p.returns / p.sales;
            assert!((0.049..=0.201).contains(&ratio), "ratio={ratio}");
        }
    }

    #[test]
    fn totals_reconcile_with_series() {
        let r = generate(2, Mode::Quantity, &range());
        let sales: f64 = r.series.iter().map(|p| p.sales).sum();
        let returns: f64 = r.series.iter().map(|p| p.returns).sum();
        assert_eq!(r.totals.sales, sales);
        assert_eq!(r.totals.returns, returns);
    }

    #[test]
    fn mode_does_not_change_the_underlying_draws() {
        let amount = generate(3, Mode::Amount, &range());
        let quantity = generate(3, Mode::Quantity, &range());
        let details = generate(3, Mode::Details, &range());
        assert_eq!(amount.series, details.series);
        assert_eq!(Some(quantity.series), details.quantity_series);
        assert_eq!(amount.channel_mix, details.channel_mix);
    }

    #[test]
    fn details_breakdown_sums_to_total_sales() {
        let r = generate(4, Mode::Details, &range());
        let breakdown = r.breakdown.unwrap();
        assert_eq!(breakdown.len(), BREAKDOWN_SIZE);
        let sum: f64 = breakdown.iter().map(|p| p.amount).sum();
        assert_eq!(sum, r.totals.sales);
        assert!(breakdown.windows(2).all(|w| w[0].amount >= w[1].amount));
    }

    #[test]
    fn a_month_is_stable_across_ranges() {
        let full = generate(5, Mode::Amount, &range());
        let spring = generate(5, Mode::Amount, &DateRange::new("1404/01/01", "1404/03/31"));
        assert_eq!(spring.series.len(), 3);
        assert_eq!(&full.series[..3], &spring.series[..]);
    }

    #[test]
    fn channel_mix_sums_to_100() {
        let r = generate(1, Mode::Amount, &range());
        assert_eq!(r.channel_mix.entries.len(), CHANNELS.len());
        assert!((r.channel_mix.sum() - 100.0).abs() < 1e-9);
    }
}
