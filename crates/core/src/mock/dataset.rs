use crate::domain::section::{DatasetParams, Section};
use crate::mock::balance_sheet::{self, BalanceSheet};
use crate::mock::checks::{self, CheckSummary};
use crate::mock::profit_loss::{self, ProfitLoss};
use crate::mock::ranking::{self, Distribution, Ranking};
use crate::mock::sales::{self, SalesReport};
use serde::{Deserialize, Serialize};

/// Output of one dashboard section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum Dataset {
    BalanceSheet(BalanceSheet),
    ProfitLoss(ProfitLoss),
    Sales(SalesReport),
    Checks(CheckSummary),
    Ranking(Ranking),
    Distribution(Distribution),
}

/// Runs the pipeline for `section`. Infallible: malformed date ranges degrade
/// to a single default period inside the pipelines.
pub fn generate(section: Section, params: &DatasetParams) -> Dataset {
    let company_id = params.company_id;
    let range = &params.range;
    match section {
        Section::BalanceSheet => Dataset::BalanceSheet(balance_sheet::generate(company_id, range)),
        Section::ProfitLoss => Dataset::ProfitLoss(profit_loss::generate(company_id, range)),
        Section::Sales(mode) => Dataset::Sales(sales::generate(company_id, mode, range)),
        Section::Checks(kind) => Dataset::Checks(checks::generate(company_id, kind, range)),
        Section::Ranking(category) => {
            Dataset::Ranking(ranking::generate_ranking(company_id, category, range))
        }
        Section::Distribution(kind) => {
            Dataset::Distribution(ranking::generate_distribution(company_id, kind, range))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::{CheckKind, DistributionKind, Mode, RankingCategory};
    use crate::mock::period::DateRange;

    fn all_sections() -> Vec<Section> {
        vec![
            Section::BalanceSheet,
            Section::ProfitLoss,
            Section::Sales(Mode::Amount),
            Section::Sales(Mode::Quantity),
            Section::Sales(Mode::Details),
            Section::Checks(CheckKind::Receivable),
            Section::Checks(CheckKind::Payable),
            Section::Ranking(RankingCategory::Sellers),
            Section::Ranking(RankingCategory::Customers),
            Section::Ranking(RankingCategory::Products),
            Section::Distribution(DistributionKind::Provinces),
            Section::Distribution(DistributionKind::ProductGroups),
        ]
    }

    #[test]
    fn every_section_is_deterministic() {
        let params = DatasetParams::new(1, DateRange::new("1403/01/01", "1404/12/29"));
        for section in all_sections() {
            assert_eq!(generate(section, &params), generate(section, &params), "{section}");
        }
    }

    #[test]
    fn dispatch_matches_section() {
        let params = DatasetParams::new(1, DateRange::year(1404));
        assert!(matches!(generate(Section::BalanceSheet, &params), Dataset::BalanceSheet(_)));
        assert!(matches!(
            generate(Section::Checks(CheckKind::Payable), &params),
            Dataset::Checks(c) if c.kind == CheckKind::Payable
        ));
    }

    #[test]
    fn serializes_with_section_tag() {
        let params = DatasetParams::new(1, DateRange::year(1404));
        let v = serde_json::to_value(generate(Section::ProfitLoss, &params)).unwrap();
        assert_eq!(v["section"], "profit_loss");
        assert!(v["statement"]["rows"].is_array());
    }

    #[test]
    fn json_round_trip_preserves_balance_sheet() {
        let params = DatasetParams::new(3, DateRange::year(1404));
        let ds = generate(Section::BalanceSheet, &params);
        let json = serde_json::to_string(&ds).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(ds, back);
    }
}
