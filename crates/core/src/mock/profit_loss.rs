//! Profit & loss waterfall.
//!
//! Only revenue and the three ratios are random; every profit line is derived:
//!
//! ```text
//! gross       = revenue - cost_of_goods
//! operating   = gross - operating_expenses
//! before_tax  = operating + non_operating   (non_operating may be negative)
//! ```

use crate::domain::table::{LineItem, Period, Table};
use crate::mock::company_scale;
use crate::mock::composition::{self, round1};
use crate::mock::period::DateRange;
use crate::mock::rng::Seed;
use serde::{Deserialize, Serialize};

pub const REVENUE: &str = "درآمدهای عملیاتی";
pub const COST_OF_GOODS: &str = "بهای تمام\u{200c}شده درآمدهای عملیاتی";
pub const GROSS_PROFIT: &str = "سود ناخالص";
pub const OPERATING_EXPENSES: &str = "هزینه\u{200c}های فروش، اداری و عمومی";
pub const OPERATING_PROFIT: &str = "سود عملیاتی";
pub const NON_OPERATING: &str = "خالص سایر درآمدها و هزینه\u{200c}های غیرعملیاتی";
pub const NET_PROFIT_BEFORE_TAX: &str = "سود قبل از مالیات";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowChanges {
    pub label: String,
    /// Year-over-year change in percent; `None` for the first year.
    pub changes: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub period: Period,
    pub gross: f64,
    pub operating: f64,
    pub net_before_tax: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLoss {
    /// Years, oldest first.
    pub periods: Vec<Period>,
    pub statement: Table,
    pub changes: Vec<RowChanges>,
    pub margins: Vec<Margins>,
}

#[derive(Debug, Clone, Copy)]
struct Waterfall {
    revenue: f64,
    cost_of_goods: f64,
    gross: f64,
    operating_expenses: f64,
    operating: f64,
    non_operating: f64,
    before_tax: f64,
}

fn draw_year(company_id: u32, scale: f64, year: i32) -> Waterfall {
    let mut g = Seed::company(company_id)
        .domain("profit_loss")
        .index(year as i64)
        .generator();

    let revenue = g.amount(30_000.0 * scale, 80_000.0 * scale);
    let cost_of_goods = (revenue * g.range(0.55, 0.75)).round();
    let gross = revenue - cost_of_goods;
    let operating_expenses = (revenue * g.range(0.08, 0.18)).round();
    let operating = gross - operating_expenses;
    let non_operating = (revenue * g.range(-0.03, 0.04)).round();
    let before_tax = operating + non_operating;

    Waterfall {
        revenue,
        cost_of_goods,
        gross,
        operating_expenses,
        operating,
        non_operating,
        before_tax,
    }
}

/// Percentage change from `prev` to `cur`, relative to `|prev|`. A zero
/// previous value yields `0.0`.
pub fn year_over_year(cur: f64, prev: f64) -> f64 {
    if prev == 0.0 || !prev.is_finite() || !cur.is_finite() {
        return 0.0;
    }
    round1((cur - prev) / prev.abs() * 100.0)
}

fn changes(row: &LineItem) -> RowChanges {
    let changes = row
        .values
        .iter()
        .enumerate()
        .map(|(i, cur)| match i {
            0 => None,
            _ => Some(year_over_year(*cur, row.values[i - 1])),
        })
        .collect();
    RowChanges {
        label: row.label.clone(),
        changes,
    }
}

pub fn generate(company_id: u32, range: &DateRange) -> ProfitLoss {
    let scale = company_scale(company_id);
    let years = range.years();
    let columns: Vec<Waterfall> = years
        .iter()
        .map(|y| draw_year(company_id, scale, *y))
        .collect();
    let periods: Vec<Period> = years.iter().map(|y| Period::year(*y)).collect();

    let row = |label: &str, f: fn(&Waterfall) -> f64| {
        LineItem::new(label, columns.iter().map(f).collect())
    };
    let rows = vec![
        row(REVENUE, |w| w.revenue),
        row(COST_OF_GOODS, |w| w.cost_of_goods),
        row(GROSS_PROFIT, |w| w.gross),
        row(OPERATING_EXPENSES, |w| w.operating_expenses),
        row(OPERATING_PROFIT, |w| w.operating),
        row(NON_OPERATING, |w| w.non_operating),
        row(NET_PROFIT_BEFORE_TAX, |w| w.before_tax),
    ];

    let margins = periods
        .iter()
        .zip(&columns)
        .map(|(period, w)| Margins {
            period: *period,
            gross: composition::share(w.gross, w.revenue),
            operating: composition::share(w.operating, w.revenue),
            net_before_tax: composition::share(w.before_tax, w.revenue),
        })
        .collect();

    ProfitLoss {
        changes: rows.iter().map(changes).collect(),
        statement: Table {
            periods: periods.clone(),
            rows,
        },
        periods,
        margins,
    }
}
