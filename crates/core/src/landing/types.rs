use serde::{Deserialize, Serialize};

/// Body of `GET /api/v1/landing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingContent {
    pub title: String,
    pub title_en: String,
    pub subtitle: String,
    pub subtitle_en: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Remote,
    Fallback,
}

/// Landing copy resolved for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedLanding {
    pub title: String,
    pub subtitle: String,
    pub source: ContentSource,
}
