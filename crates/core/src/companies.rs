use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: u32,
    pub name: String,
    pub name_en: String,
}

const COMPANIES: [(u32, &str, &str); 5] = [
    (1, "تری\u{200c}بر مرکزی", "TryBear Holding"),
    (2, "تری\u{200c}بر پخش", "TryBear Distribution"),
    (3, "تری\u{200c}بر تولید", "TryBear Manufacturing"),
    (4, "تری\u{200c}بر آنلاین", "TryBear Online"),
    (5, "تری\u{200c}بر صادرات", "TryBear Export"),
];

/// Companies offered in the dashboard selector. Pipelines accept any id; this
/// list only names the ones the UI shows.
pub fn all() -> Vec<Company> {
    COMPANIES
        .iter()
        .map(|(id, name, name_en)| Company {
            id: *id,
            name: name.to_string(),
            name_en: name_en.to_string(),
        })
        .collect()
}

pub fn find(id: u32) -> Option<Company> {
    all().into_iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = all().iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), COMPANIES.len());
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find(1).map(|c| c.name_en), Some("TryBear Holding".to_string()));
        assert!(find(99).is_none());
    }
}
