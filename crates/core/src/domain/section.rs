use crate::mock::period::DateRange;
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the sales section reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Amount,
    Quantity,
    Details,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Receivable,
    Payable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingCategory {
    Sellers,
    Customers,
    Products,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    Provinces,
    ProductGroups,
}

/// One dashboard section. Each variant maps to exactly one pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "section", content = "variant", rename_all = "snake_case")]
pub enum Section {
    BalanceSheet,
    ProfitLoss,
    Sales(Mode),
    Checks(CheckKind),
    Ranking(RankingCategory),
    Distribution(DistributionKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetParams {
    pub company_id: u32,
    pub range: DateRange,
}

impl DatasetParams {
    pub fn new(company_id: u32, range: DateRange) -> Self {
        Self { company_id, range }
    }
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Amount => "amount",
            Mode::Quantity => "quantity",
            Mode::Details => "details",
        }
    }
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Receivable => "receivable",
            CheckKind::Payable => "payable",
        }
    }
}

impl RankingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingCategory::Sellers => "sellers",
            RankingCategory::Customers => "customers",
            RankingCategory::Products => "products",
        }
    }
}

impl DistributionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionKind::Provinces => "provinces",
            DistributionKind::ProductGroups => "product_groups",
        }
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amount" => Ok(Mode::Amount),
            "quantity" => Ok(Mode::Quantity),
            "details" => Ok(Mode::Details),
            other => bail!("unknown mode: {other}"),
        }
    }
}

impl FromStr for CheckKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "receivable" => Ok(CheckKind::Receivable),
            "payable" => Ok(CheckKind::Payable),
            other => bail!("unknown check kind: {other}"),
        }
    }
}

impl FromStr for RankingCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sellers" => Ok(RankingCategory::Sellers),
            "customers" => Ok(RankingCategory::Customers),
            "products" => Ok(RankingCategory::Products),
            other => bail!("unknown ranking category: {other}"),
        }
    }
}

impl FromStr for DistributionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "provinces" => Ok(DistributionKind::Provinces),
            "product_groups" => Ok(DistributionKind::ProductGroups),
            other => bail!("unknown distribution kind: {other}"),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::BalanceSheet => write!(f, "balance_sheet"),
            Section::ProfitLoss => write!(f, "profit_loss"),
            Section::Sales(mode) => write!(f, "sales:{}", mode.as_str()),
            Section::Checks(kind) => write!(f, "checks:{}", kind.as_str()),
            Section::Ranking(cat) => write!(f, "ranking:{}", cat.as_str()),
            Section::Distribution(kind) => write!(f, "distribution:{}", kind.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_discriminants_case_insensitively() {
        assert_eq!("Quantity".parse::<Mode>().unwrap(), Mode::Quantity);
        assert_eq!(" payable ".parse::<CheckKind>().unwrap(), CheckKind::Payable);
        assert_eq!(
            "customers".parse::<RankingCategory>().unwrap(),
            RankingCategory::Customers
        );
        assert_eq!(
            "product-groups".parse::<DistributionKind>().unwrap(),
            DistributionKind::ProductGroups
        );
    }

    #[test]
    fn rejects_unknown_discriminants() {
        let err = "volume".parse::<Mode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown mode: volume");
        assert!("cash".parse::<CheckKind>().is_err());
    }

    #[test]
    fn section_display_is_stable() {
        assert_eq!(Section::Sales(Mode::Details).to_string(), "sales:details");
        assert_eq!(
            Section::Checks(CheckKind::Receivable).to_string(),
            "checks:receivable"
        );
    }

    #[test]
    fn section_serializes_tagged() {
        let v = serde_json::to_value(Section::Ranking(RankingCategory::Sellers)).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"section": "ranking", "variant": "sellers"})
        );
        let v = serde_json::to_value(Section::BalanceSheet).unwrap();
        assert_eq!(v, serde_json::json!({"section": "balance_sheet"}));
    }
}
