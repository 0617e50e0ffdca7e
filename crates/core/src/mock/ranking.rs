//! Rankings (top sellers, customers, products) and distributions (by province,
//! by product group). Shares are rounded per entry and are not corrected to
//! sum to 100.

use crate::domain::section::{DistributionKind, RankingCategory};
use crate::domain::table::RankingEntry;
use crate::mock::company_scale;
use crate::mock::composition;
use crate::mock::period::DateRange;
use crate::mock::rng::Seed;
use serde::{Deserialize, Serialize};

/// Entities per ranking.
pub const RANKING_SIZE: usize = 10;

const SELLERS: [&str; 12] = [
    "علی رضایی",
    "مریم احمدی",
    "حسین کریمی",
    "زهرا محمدی",
    "رضا حسینی",
    "فاطمه موسوی",
    "محمد جعفری",
    "سارا قاسمی",
    "امیر نوری",
    "نرگس صادقی",
    "مهدی رحیمی",
    "لیلا کاظمی",
];

const CUSTOMERS: [&str; 12] = [
    "فروشگاه زنجیره\u{200c}ای آفتاب",
    "هایپرمارکت ستاره",
    "پخش البرز",
    "بازرگانی کیان",
    "فروشگاه شهروند",
    "تعاونی مصرف فرهنگیان",
    "سوپرمارکت نگین",
    "شرکت پخش آرمان",
    "بازرگانی سپید",
    "فروشگاه رفاه",
    "پخش مهتاب",
    "تجارت گستر امید",
];

pub(crate) const PRODUCTS: [&str; 12] = [
    "خرس عروسکی کلاسیک",
    "خرس قطبی بزرگ",
    "پاندای مخملی",
    "خرس قهوه\u{200c}ای کوچک",
    "خرس عسلی",
    "ست هدیه خرس",
    "خرس موزیکال",
    "خرس نوزادی",
    "خرس کوهستان",
    "خرس شکلاتی",
    "خرس رنگین\u{200c}کمان",
    "خرس مسافر",
];

const PROVINCES: [&str; 8] = [
    "تهران",
    "اصفهان",
    "خراسان رضوی",
    "فارس",
    "آذربایجان شرقی",
    "خوزستان",
    "مازندران",
    "کرمان",
];

const PRODUCT_GROUPS: [&str; 5] = [
    "عروسک\u{200c}های پولیشی",
    "اسباب\u{200c}بازی آموزشی",
    "لوازم هدیه",
    "محصولات نوزاد",
    "اکسسوری",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub category: RankingCategory,
    pub total: f64,
    /// Sorted by value, highest first.
    pub entries: Vec<RankingEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub kind: DistributionKind,
    pub total: f64,
    pub entries: Vec<RankingEntry>,
}

/// Sorts `(id, name, value)` triples by value descending, keeping generation
/// order among equal values, and attaches each entry's share of the total.
pub fn rank(items: Vec<(u32, String, f64)>) -> Vec<RankingEntry> {
    let total: f64 = items.iter().map(|(_, _, v)| *v).sum();
    let mut out: Vec<RankingEntry> = items
        .into_iter()
        .map(|(id, name, value)| RankingEntry {
            id,
            name,
            value,
            share: composition::share(value, total),
        })
        .collect();

    // `sort_by` is stable, so ties keep their generation order.
    out.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}

fn pool(category: RankingCategory) -> &'static [&'static str] {
    match category {
        RankingCategory::Sellers => &SELLERS,
        RankingCategory::Customers => &CUSTOMERS,
        RankingCategory::Products => &PRODUCTS,
    }
}

pub fn generate_ranking(
    company_id: u32,
    category: RankingCategory,
    range: &DateRange,
) -> Ranking {
    let scale = company_scale(company_id);
    let mut g = Seed::company(company_id)
        .domain(category.as_str())
        .char_code(&range.normalized_from(), 3)
        .generator();

    let names = pool(category);
    let items: Vec<(u32, String, f64)> = names
        .iter()
        .take(RANKING_SIZE)
        .enumerate()
        .map(|(i, name)| {
            let value = g.amount(500.0 * scale, 10_000.0 * scale);
            (i as u32 + 1, name.to_string(), value)
        })
        .collect();

    let total: f64 = items.iter().map(|(_, _, v)| *v).sum();
    Ranking {
        category,
        total,
        entries: rank(items),
    }
}

pub fn generate_distribution(
    company_id: u32,
    kind: DistributionKind,
    range: &DateRange,
) -> Distribution {
    let scale = company_scale(company_id);
    let mut g = Seed::company(company_id)
        .domain(kind.as_str())
        .char_code(&range.normalized_from(), 3)
        .generator();

    let names: &[&str] = match kind {
        DistributionKind::Provinces => &PROVINCES,
        DistributionKind::ProductGroups => &PRODUCT_GROUPS,
    };
    let items: Vec<(u32, String, f64)> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let value = g.amount(1_000.0 * scale, 30_000.0 * scale);
            (i as u32 + 1, name.to_string(), value)
        })
        .collect();

    let total: f64 = items.iter().map(|(_, _, v)| *v).sum();
    Distribution {
        kind,
        total,
        entries: rank(items),
    }
}
