use serde::{Deserialize, Serialize};

/// One bucket of a period axis: a Jalali year, or a month within one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
}

impl Period {
    pub fn year(year: i32) -> Self {
        Self { year, month: None }
    }

    pub fn month(year: i32, month: u8) -> Self {
        Self {
            year,
            month: Some(month),
        }
    }

    pub fn label(&self) -> String {
        match self.month {
            Some(m) => format!("{}/{:02}", self.year, m),
            None => self.year.to_string(),
        }
    }
}

/// One labelled row of a table. `values[i]` belongs to `periods[i]` of the
/// owning [`Table`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub values: Vec<f64>,
}

impl LineItem {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Element-wise sum of `parts`. Every part must be aligned to the same axis.
    pub fn total(label: impl Into<String>, parts: &[&LineItem]) -> Self {
        let len = parts.first().map(|p| p.values.len()).unwrap_or(0);
        let values = (0..len)
            .map(|i| parts.iter().map(|p| p.values[i]).sum())
            .collect();
        Self::new(label, values)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub periods: Vec<Period>,
    pub rows: Vec<LineItem>,
}

impl Table {
    pub fn row(&self, label: &str) -> Option<&LineItem> {
        self.rows.iter().find(|r| r.label == label)
    }

    pub fn value(&self, label: &str, period_idx: usize) -> Option<f64> {
        self.row(label)?.values.get(period_idx).copied()
    }

    pub fn last_row(&self) -> Option<&LineItem> {
        self.rows.last()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionEntry {
    pub label: String,
    /// Percentage share, one decimal.
    pub value: f64,
    pub color: String,
}

/// Percentage shares of a whole. Entries always sum to 100 (see
/// `mock::composition::normalize`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionSet {
    pub entries: Vec<CompositionEntry>,
}

impl CompositionSet {
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub id: u32,
    pub name: String,
    pub value: f64,
    /// Share of the ranking total, one decimal, not corrected to sum to 100.
    pub share: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_labels() {
        assert_eq!(Period::year(1404).label(), "1404");
        assert_eq!(Period::month(1404, 3).label(), "1404/03");
    }

    #[test]
    fn total_sums_each_period() {
        let a = LineItem::new("a", vec![1.0, 2.0]);
        let b = LineItem::new("b", vec![10.0, 20.0]);
        let t = LineItem::total("t", &[&a, &b]);
        assert_eq!(t.values, vec![11.0, 22.0]);
    }

    #[test]
    fn total_of_nothing_is_empty() {
        let t = LineItem::total("t", &[]);
        assert!(t.values.is_empty());
    }

    #[test]
    fn month_period_serializes_month_only_when_present() {
        let y = serde_json::to_value(Period::year(1404)).unwrap();
        assert_eq!(y, serde_json::json!({"year": 1404}));
        let m = serde_json::to_value(Period::month(1404, 2)).unwrap();
        assert_eq!(m, serde_json::json!({"year": 1404, "month": 2}));
    }
}
