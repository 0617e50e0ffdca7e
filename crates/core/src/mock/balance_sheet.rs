//! Balance-sheet section.
//!
//! Assets and equity are drawn from the generator; liabilities are not. Their
//! total is fixed at `assets + equity` and the "other liabilities" row is the
//! residual that makes the listed liabilities add up to it.

use crate::domain::table::{CompositionSet, LineItem, Period, Table};
use crate::mock::company_scale;
use crate::mock::composition::{self, Slice};
use crate::mock::period::DateRange;
use crate::mock::rng::{Seed, SeededGenerator};
use serde::{Deserialize, Serialize};

pub const CASH: &str = "موجودی نقد";
pub const RECEIVABLES: &str = "حساب\u{200c}های دریافتنی";
pub const INVENTORY: &str = "موجودی کالا";
pub const TOTAL_CURRENT_ASSETS: &str = "جمع دارایی\u{200c}های جاری";
pub const FIXED_ASSETS: &str = "دارایی\u{200c}های ثابت مشهود";
pub const INTANGIBLE_ASSETS: &str = "دارایی\u{200c}های نامشهود";
pub const TOTAL_NON_CURRENT_ASSETS: &str = "جمع دارایی\u{200c}های غیرجاری";
pub const TOTAL_ASSETS: &str = "جمع کل دارایی\u{200c}ها";

pub const CAPITAL: &str = "سرمایه";
pub const RETAINED_EARNINGS: &str = "سود انباشته";
pub const LEGAL_RESERVE: &str = "اندوخته قانونی";
pub const TOTAL_EQUITY: &str = "جمع حقوق صاحبان سهام";

pub const PAYABLES: &str = "حساب\u{200c}های پرداختنی";
pub const SHORT_TERM_FACILITIES: &str = "تسهیلات مالی کوتاه\u{200c}مدت";
pub const TAX_PAYABLE: &str = "مالیات پرداختنی";
pub const LONG_TERM_FACILITIES: &str = "تسهیلات مالی بلندمدت";
pub const OTHER_LIABILITIES: &str = "سایر بدهی\u{200c}ها";
pub const TOTAL_LIABILITIES: &str = "جمع کل بدهی\u{200c}ها";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Years, most recent first.
    pub periods: Vec<Period>,
    pub assets: Table,
    pub equity: Table,
    pub liabilities: Table,
    /// Asset mix of the most recent year.
    pub asset_composition: CompositionSet,
    pub ratios: Vec<BalanceRatios>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRatios {
    pub period: Period,
    /// Current assets over current liabilities.
    pub current_ratio: f64,
    /// Total liabilities over total assets.
    pub debt_ratio: f64,
}

/// One year's raw draws, before they are laid out as rows.
#[derive(Debug, Clone, Copy)]
struct YearColumn {
    cash: f64,
    receivables: f64,
    inventory: f64,
    fixed: f64,
    intangible: f64,
    capital: f64,
    retained: f64,
    reserve: f64,
    payables: f64,
    short_term: f64,
    tax: f64,
    long_term: f64,
    other: f64,
}

impl YearColumn {
    fn draw(g: &mut SeededGenerator, scale: f64) -> Self {
        let cash = g.amount(2_000.0 * scale, 8_000.0 * scale);
        let receivables = g.amount(5_000.0 * scale, 15_000.0 * scale);
        let inventory = g.amount(4_000.0 * scale, 12_000.0 * scale);
        let fixed = g.amount(15_000.0 * scale, 40_000.0 * scale);
        let intangible = g.amount(1_000.0 * scale, 5_000.0 * scale);

        let capital = g.amount(10_000.0 * scale, 25_000.0 * scale);
        let retained = g.amount(3_000.0 * scale, 12_000.0 * scale);
        let reserve = g.amount(500.0 * scale, 2_000.0 * scale);

        let total_assets = cash + receivables + inventory + fixed + intangible;
        let total_equity = capital + retained + reserve;
        let total_liabilities = total_assets + total_equity;

        let payables = (total_liabilities * g.range(0.15, 0.25)).round();
        let short_term = (total_liabilities * g.range(0.10, 0.20)).round();
        let tax = (total_liabilities * g.range(0.03, 0.08)).round();
        let long_term = (total_liabilities * g.range(0.10, 0.25)).round();
        let other = (total_liabilities - (payables + short_term + tax + long_term)).max(0.0);

        Self {
            cash,
            receivables,
            inventory,
            fixed,
            intangible,
            capital,
            retained,
            reserve,
            payables,
            short_term,
            tax,
            long_term,
            other,
        }
    }
}

pub fn generate(company_id: u32, range: &DateRange) -> BalanceSheet {
    let scale = company_scale(company_id);
    let mut years = range.years();
    years.reverse();

    let columns: Vec<YearColumn> = years
        .iter()
        .map(|year| {
            let mut g = Seed::company(company_id)
                .domain("balance_sheet")
                .index(*year as i64)
                .generator();
            YearColumn::draw(&mut g, scale)
        })
        .collect();
    let periods: Vec<Period> = years.iter().map(|y| Period::year(*y)).collect();

    let row = |label: &str, f: fn(&YearColumn) -> f64| {
        LineItem::new(label, columns.iter().map(f).collect())
    };

    let cash = row(CASH, |c| c.cash);
    let receivables = row(RECEIVABLES, |c| c.receivables);
    let inventory = row(INVENTORY, |c| c.inventory);
    let total_current = LineItem::total(TOTAL_CURRENT_ASSETS, &[&cash, &receivables, &inventory]);
    let fixed = row(FIXED_ASSETS, |c| c.fixed);
    let intangible = row(INTANGIBLE_ASSETS, |c| c.intangible);
    let total_non_current = LineItem::total(TOTAL_NON_CURRENT_ASSETS, &[&fixed, &intangible]);
    let total_assets = LineItem::total(TOTAL_ASSETS, &[&total_current, &total_non_current]);

    let capital = row(CAPITAL, |c| c.capital);
    let retained = row(RETAINED_EARNINGS, |c| c.retained);
    let reserve = row(LEGAL_RESERVE, |c| c.reserve);
    let total_equity = LineItem::total(TOTAL_EQUITY, &[&capital, &retained, &reserve]);

    let payables = row(PAYABLES, |c| c.payables);
    let short_term = row(SHORT_TERM_FACILITIES, |c| c.short_term);
    let tax = row(TAX_PAYABLE, |c| c.tax);
    let long_term = row(LONG_TERM_FACILITIES, |c| c.long_term);
    let other = row(OTHER_LIABILITIES, |c| c.other);
    let total_liabilities =
        LineItem::total(TOTAL_LIABILITIES, &[&payables, &short_term, &tax, &long_term, &other]);

    let ratios = periods
        .iter()
        .enumerate()
        .map(|(i, period)| {
            let current_liabilities = payables.values[i] + short_term.values[i] + tax.values[i];
            BalanceRatios {
                period: *period,
                current_ratio: composition::ratio(total_current.values[i], current_liabilities),
                debt_ratio: composition::ratio(total_liabilities.values[i], total_assets.values[i]),
            }
        })
        .collect();

    let asset_composition = match columns.first() {
        Some(latest) => composition::normalize(&[
            Slice { label: CASH, weight: latest.cash, color: "#4F46E5" },
            Slice { label: RECEIVABLES, weight: latest.receivables, color: "#0EA5E9" },
            Slice { label: INVENTORY, weight: latest.inventory, color: "#10B981" },
            Slice { label: FIXED_ASSETS, weight: latest.fixed, color: "#F59E0B" },
            Slice { label: INTANGIBLE_ASSETS, weight: latest.intangible, color: "#EF4444" },
        ]),
        None => CompositionSet { entries: Vec::new() },
    };

    BalanceSheet {
        assets: Table {
            periods: periods.clone(),
            rows: vec![
                cash,
                receivables,
                inventory,
                total_current,
                fixed,
                intangible,
                total_non_current,
                total_assets,
            ],
        },
        equity: Table {
            periods: periods.clone(),
            rows: vec![capital, retained, reserve, total_equity],
        },
        liabilities: Table {
            periods: periods.clone(),
            rows: vec![payables, short_term, tax, long_term, other, total_liabilities],
        },
        periods,
        asset_composition,
        ratios,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_1404() -> DateRange {
        DateRange::new("1404/01/01", "1404/12/29")
    }

    #[test]
    fn single_year_has_eight_asset_rows() {
        let bs = generate(1, &year_1404());
        assert_eq!(bs.periods, vec![Period::year(1404)]);
        assert_eq!(bs.assets.rows.len(), 8);
        let last = bs.assets.last_row().unwrap();
        assert_eq!(last.label, TOTAL_ASSETS);
        assert_eq!(last.label, "جمع کل دارایی‌ها");

        let current = bs.assets.value(TOTAL_CURRENT_ASSETS, 0).unwrap();
        let non_current = bs.assets.value(TOTAL_NON_CURRENT_ASSETS, 0).unwrap();
        assert_eq!(last.values[0], current + non_current);
    }

    #[test]
    fn years_are_most_recent_first() {
        let bs = generate(2, &DateRange::new("1401/01/01", "1404/12/29"));
        let years: Vec<i32> = bs.periods.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![1404, 1403, 1402, 1401]);
        assert_eq!(bs.ratios.len(), 4);
    }

    #[test]
    fn liabilities_equal_assets_plus_equity() {
        let bs = generate(5, &DateRange::new("1398/01/01", "1404/12/29"));
        for i in 0..bs.periods.len() {
            let assets = bs.assets.value(TOTAL_ASSETS, i).unwrap();
            let equity = bs.equity.value(TOTAL_EQUITY, i).unwrap();
            let liabilities = bs.liabilities.value(TOTAL_LIABILITIES, i).unwrap();
            assert_eq!(assets + equity, liabilities);
            assert!(bs.liabilities.value(OTHER_LIABILITIES, i).unwrap() >= 0.0);
        }
    }

    #[test]
    fn a_year_does_not_depend_on_the_surrounding_range() {
        let narrow = generate(3, &year_1404());
        let wide = generate(3, &DateRange::new("1400/01/01", "1404/12/29"));
        assert_eq!(narrow.assets.rows[0].values[0], wide.assets.rows[0].values[0]);
        assert_eq!(
            narrow.liabilities.value(TOTAL_LIABILITIES, 0),
            wide.liabilities.value(TOTAL_LIABILITIES, 0)
        );
    }

    #[test]
    fn asset_composition_sums_to_100() {
        let bs = generate(9, &year_1404());
        assert_eq!(bs.asset_composition.entries.len(), 5);
        assert!((bs.asset_composition.sum() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn different_companies_differ() {
        assert_ne!(generate(1, &year_1404()), generate(2, &year_1404()));
    }
}
