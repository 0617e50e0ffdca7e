pub mod companies;
pub mod domain;
pub mod i18n;
pub mod landing;
pub mod mock;
pub mod time;

pub mod config {
    use anyhow::Context;

    const DEFAULT_STATE_PATH: &str = ".trybear/preferences.json";
    const DEFAULT_COMPANY_ID: u32 = 1;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub landing_api_base_url: Option<String>,
        pub sentry_dsn: Option<String>,
        pub state_path: Option<String>,
        pub default_company_id: Option<u32>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let default_company_id = match std::env::var("DEFAULT_COMPANY_ID") {
                Ok(s) => Some(
                    s.trim()
                        .parse::<u32>()
                        .with_context(|| format!("DEFAULT_COMPANY_ID is not a valid id: {s}"))?,
                ),
                Err(_) => None,
            };

            Ok(Self {
                landing_api_base_url: std::env::var("LANDING_API_BASE_URL").ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
                state_path: std::env::var("TRYBEAR_STATE_PATH").ok(),
                default_company_id,
            })
        }

        pub fn require_landing_api_base_url(&self) -> anyhow::Result<&str> {
            self.landing_api_base_url
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .context("LANDING_API_BASE_URL is required")
        }

        pub fn state_path(&self) -> &str {
            self.state_path.as_deref().unwrap_or(DEFAULT_STATE_PATH)
        }

        pub fn company_id(&self) -> u32 {
            self.default_company_id.unwrap_or(DEFAULT_COMPANY_ID)
        }
    }
}
