use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trybear_core::domain::section::{DatasetParams, Mode, Section};
use trybear_core::i18n::store::LanguageStore;
use trybear_core::i18n::Language;
use trybear_core::landing::http::HttpLandingClient;
use trybear_core::mock::period::DateRange;

#[derive(Debug, Parser)]
#[command(name = "trybear_cli")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print one dashboard dataset as JSON.
    Dataset(DatasetArgs),

    /// Print the landing title and subtitle, falling back to built-in text.
    Landing {
        /// fa or en. Defaults to the stored preference.
        #[arg(long)]
        lang: Option<String>,
    },

    /// Read or change the stored UI language.
    Lang {
        #[command(subcommand)]
        action: LangAction,
    },
}

#[derive(Debug, Subcommand)]
enum LangAction {
    Get,
    Set { lang: String },
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SectionArg {
    BalanceSheet,
    ProfitLoss,
    Sales,
    Checks,
    Rankings,
    Distribution,
}

#[derive(Debug, clap::Args)]
struct DatasetArgs {
    section: SectionArg,

    /// Check kind, ranking category or distribution kind, depending on the section.
    #[arg(long)]
    kind: Option<String>,

    /// Sales mode: amount, quantity or details.
    #[arg(long)]
    mode: Option<String>,

    /// Defaults to DEFAULT_COMPANY_ID (or 1).
    #[arg(long)]
    company_id: Option<u32>,

    /// Jalali date (YYYY/MM/DD). Defaults to the start of the current Jalali year.
    #[arg(long)]
    from: Option<String>,

    /// Jalali date (YYYY/MM/DD). Defaults to the end of the current Jalali year.
    #[arg(long)]
    to: Option<String>,

    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = trybear_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    let store = LanguageStore::new(settings.state_path());

    match args.command {
        Command::Dataset(dataset_args) => {
            let section = resolve_section(
                dataset_args.section,
                dataset_args.kind.as_deref(),
                dataset_args.mode.as_deref(),
            )?;
            let range = resolve_range(
                dataset_args.from.as_deref(),
                dataset_args.to.as_deref(),
                chrono::Utc::now(),
            )?;
            let params =
                DatasetParams::new(dataset_args.company_id.unwrap_or(settings.company_id()), range);

            let dataset = trybear_core::mock::dataset::generate(section, &params);
            tracing::info!(%section, company_id = params.company_id, "dataset generated");

            let out = if dataset_args.pretty {
                serde_json::to_string_pretty(&dataset)?
            } else {
                serde_json::to_string(&dataset)?
            };
            println!("{out}");
        }
        Command::Landing { lang } => {
            let lang = match lang {
                Some(s) => s.parse::<Language>()?,
                None => store.load(),
            };

            let landing = match HttpLandingClient::from_settings(&settings) {
                Ok(client) => trybear_core::landing::resolve_landing(&client, lang).await,
                Err(err) => {
                    tracing::warn!(error = %err, "landing api not configured; using static text");
                    trybear_core::landing::fallback_landing(lang)
                }
            };
            println!("{}", serde_json::to_string_pretty(&landing)?);
        }
        Command::Lang { action } => match action {
            LangAction::Get => println!("{}", store.load()),
            LangAction::Set { lang } => {
                let lang = lang.parse::<Language>()?;
                store
                    .save(lang)
                    .with_context(|| format!("failed to persist language {lang}"))?;
                println!("{lang}");
            }
            LangAction::Toggle => println!("{}", store.toggle()?),
        },
    }

    Ok(())
}

fn resolve_section(
    section: SectionArg,
    kind: Option<&str>,
    mode: Option<&str>,
) -> anyhow::Result<Section> {
    if mode.is_some() && section != SectionArg::Sales {
        anyhow::bail!("--mode only applies to the sales section");
    }
    if kind.is_some()
        && !matches!(
            section,
            SectionArg::Checks | SectionArg::Rankings | SectionArg::Distribution
        )
    {
        anyhow::bail!("--kind only applies to the checks, rankings and distribution sections");
    }

    Ok(match section {
        SectionArg::BalanceSheet => Section::BalanceSheet,
        SectionArg::ProfitLoss => Section::ProfitLoss,
        SectionArg::Sales => Section::Sales(match mode {
            Some(m) => m.parse()?,
            None => Mode::default(),
        }),
        SectionArg::Checks => Section::Checks(kind.unwrap_or("receivable").parse()?),
        SectionArg::Rankings => Section::Ranking(kind.unwrap_or("sellers").parse()?),
        SectionArg::Distribution => Section::Distribution(kind.unwrap_or("provinces").parse()?),
    })
}

fn resolve_range(
    from: Option<&str>,
    to: Option<&str>,
    now_utc: chrono::DateTime<chrono::Utc>,
) -> anyhow::Result<DateRange> {
    let current = trybear_core::time::jalali::current_year_range(now_utc)?;
    Ok(DateRange::new(
        from.map(str::to_string).unwrap_or(current.from),
        to.map(str::to_string).unwrap_or(current.to),
    ))
}

fn init_sentry(settings: &trybear_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
