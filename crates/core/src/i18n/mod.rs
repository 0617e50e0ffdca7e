//! UI language and the static string table used when the landing API is
//! unreachable.

pub mod store;

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fa,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Fa => "fa",
            Language::En => "en",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::Fa => Language::En,
            Language::En => Language::Fa,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Fa)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fa" => Ok(Language::Fa),
            "en" => Ok(Language::En),
            other => bail!("unsupported language: {other}"),
        }
    }
}

// (key, fa, en)
const STRINGS: &[(&str, &str, &str)] = &[
    (
        "landing.title",
        "تری\u{200c}بر؛ داشبورد هوشمند کسب\u{200c}وکار شما",
        "TryBear: the smart dashboard for your business",
    ),
    (
        "landing.subtitle",
        "گزارش\u{200c}های مالی و فروش، یکجا و لحظه\u{200c}ای",
        "Financial and sales reports, in one place and in real time",
    ),
    ("dashboard.balance_sheet", "ترازنامه", "Balance sheet"),
    ("dashboard.profit_loss", "صورت سود و زیان", "Profit & loss"),
    ("dashboard.sales", "فروش و برگشت از فروش", "Sales & returns"),
    ("dashboard.checks", "چک\u{200c}ها", "Checks"),
    ("dashboard.ranking", "رتبه\u{200c}بندی", "Rankings"),
    ("dashboard.distribution", "توزیع", "Distribution"),
    ("auth.login", "ورود", "Log in"),
    ("auth.register", "ثبت\u{200c}نام", "Sign up"),
];

/// Looks up `key`; unknown keys are echoed back unchanged.
pub fn translate<'a>(key: &'a str, lang: Language) -> &'a str {
    match STRINGS.iter().find(|(k, _, _)| *k == key) {
        Some((_, fa, en)) => match lang {
            Language::Fa => *fa,
            Language::En => *en,
        },
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_toggles() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::Fa.toggle(), Language::En);
        assert_eq!(Language::En.toggle().toggle(), Language::En);
        assert_eq!(Language::default(), Language::Fa);
    }

    #[test]
    fn translates_known_keys() {
        assert_eq!(translate("dashboard.checks", Language::En), "Checks");
        assert_eq!(translate("auth.login", Language::Fa), "ورود");
    }

    #[test]
    fn unknown_keys_echo() {
        assert_eq!(translate("nope.missing", Language::En), "nope.missing");
    }

    #[test]
    fn every_key_has_both_languages() {
        for (key, fa, en) in STRINGS {
            assert!(!fa.is_empty() && !en.is_empty(), "{key}");
        }
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_value(Language::En).unwrap(), "en");
    }
}
