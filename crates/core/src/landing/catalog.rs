//! Content served by this repo's own API for the landing and products routes.

use crate::i18n::{translate, Language};
use crate::landing::types::{LandingContent, Product};

pub fn landing_content() -> LandingContent {
    LandingContent {
        title: translate("landing.title", Language::Fa).to_string(),
        title_en: translate("landing.title", Language::En).to_string(),
        subtitle: translate("landing.subtitle", Language::Fa).to_string(),
        subtitle_en: translate("landing.subtitle", Language::En).to_string(),
    }
}

const PRODUCTS: [(u64, &str, &str, &str, f64); 4] = [
    (
        1,
        "داشبورد مالی",
        "Financial dashboard",
        "Balance sheet, profit & loss and checks in one view.",
        4_900_000.0,
    ),
    (
        2,
        "داشبورد فروش",
        "Sales dashboard",
        "Monthly sales, returns and channel mix.",
        3_900_000.0,
    ),
    (
        3,
        "گزارش رتبه\u{200c}بندی",
        "Ranking reports",
        "Top sellers, customers and products.",
        2_500_000.0,
    ),
    (
        4,
        "بسته سازمانی",
        "Enterprise bundle",
        "Every dashboard for all of your companies.",
        9_900_000.0,
    ),
];

pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|(id, name, name_en, description, price)| Product {
            id: *id,
            name: name.to_string(),
            name_en: Some(name_en.to_string()),
            description: Some(description.to_string()),
            price: Some(*price),
        })
        .collect()
}

pub fn product(id: u64) -> Option<Product> {
    products().into_iter().find(|p| p.id == id)
}
