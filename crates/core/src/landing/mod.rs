//! Landing-page content and product catalogue, fetched from the marketing API.
//!
//! Nothing here feeds the dashboard pipelines. Failures are logged and the UI
//! falls back to the static translation table.

pub mod catalog;
pub mod http;
pub mod types;

use crate::i18n::{translate, Language};
use anyhow::Result;
use types::{ContentSource, LandingContent, LocalizedLanding, Product};

#[async_trait::async_trait]
pub trait LandingSource: Send + Sync {
    fn source_name(&self) -> &'static str;

    async fn fetch_landing(&self) -> Result<LandingContent>;

    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// `Ok(None)` when the product does not exist.
    async fn fetch_product(&self, id: u64) -> Result<Option<Product>>;
}

/// Static landing copy from the translation table.
pub fn fallback_landing(lang: Language) -> LocalizedLanding {
    LocalizedLanding {
        title: translate("landing.title", lang).to_string(),
        subtitle: translate("landing.subtitle", lang).to_string(),
        source: ContentSource::Fallback,
    }
}

/// Landing copy for `lang`, falling back to static strings if the source
/// fails or returns an empty field.
pub async fn resolve_landing(source: &dyn LandingSource, lang: Language) -> LocalizedLanding {
    let fallback = || fallback_landing(lang);

    let content = match source.fetch_landing().await {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(source = source.source_name(), error = %err, "landing fetch failed; using static text");
            return fallback();
        }
    };

    let (title, subtitle) = match lang {
        Language::Fa => (content.title, content.subtitle),
        Language::En => (content.title_en, content.subtitle_en),
    };
    let title = title.trim().to_string();
    let subtitle = subtitle.trim().to_string();
    if title.is_empty() || subtitle.is_empty() {
        tracing::warn!(source = source.source_name(), %lang, "landing content incomplete; using static text");
        return fallback();
    }

    LocalizedLanding {
        title,
        subtitle,
        source: ContentSource::Remote,
    }
}
