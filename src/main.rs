// SPDX-License-Identifier: PMPL-1.0-or-later

//! i18n-codes: look up ISO country, currency, language, script and locale codes

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use i18n_codes::config::AssignmentProfile;
use i18n_codes::report::{Report, ReportOutputFormat, Row};
use i18n_codes::{Catalog, CodeRecord, CodeRegistry, NamePattern};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "i18n-codes")]
#[command(version)]
#[command(about = "ISO 3166-1, ISO 4217, ISO 639 and ISO 15924 code lookup")]
#[command(long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: ReportOutputFormat,

    /// Assignment profile (JSON or YAML) registering user-assigned countries
    #[arg(short, long, global = true, value_name = "FILE")]
    assignments: Option<PathBuf>,

    /// Match codes case-sensitively
    #[arg(short, long, global = true)]
    exact: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a country by alpha-2, alpha-3 or numeric code
    Country {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Look up a currency by alpha or numeric code
    Currency {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Currencies used in a country
    Currencies {
        #[arg(value_name = "COUNTRY")]
        country: String,
    },

    /// Countries using a currency
    Countries {
        #[arg(value_name = "CURRENCY")]
        currency: String,
    },

    /// Look up a language by ISO 639-1 or ISO 639-2 code
    Language {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Look up a script by ISO 15924 code or number
    Script {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Look up a locale by tag or POSIX name (default: the host locale)
    Locale {
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },

    /// Search display names with a full-match regular expression
    Search {
        #[arg(value_enum)]
        table: TableArg,

        #[arg(value_name = "PATTERN")]
        pattern: String,
    },

    /// List every entry of a table
    List {
        #[arg(value_enum)]
        table: TableArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TableArg {
    Countries,
    Currencies,
    Languages,
    LanguagesAlpha3,
    Scripts,
    Locales,
}

impl TableArg {
    fn title(self) -> &'static str {
        match self {
            TableArg::Countries => "ISO 3166-1 countries",
            TableArg::Currencies => "ISO 4217 currencies",
            TableArg::Languages => "ISO 639-1 languages",
            TableArg::LanguagesAlpha3 => "ISO 639-2 languages",
            TableArg::Scripts => "ISO 15924 scripts",
            TableArg::Locales => "locales",
        }
    }

    fn rows(self, catalog: &Catalog, pattern: Option<&NamePattern>) -> Vec<Row> {
        match self {
            TableArg::Countries => registry_rows(catalog.countries(), pattern),
            TableArg::Currencies => registry_rows(catalog.currencies(), pattern),
            TableArg::Languages => registry_rows(catalog.languages(), pattern),
            TableArg::LanguagesAlpha3 => registry_rows(catalog.language_alpha3(), pattern),
            TableArg::Scripts => registry_rows(catalog.scripts(), pattern),
            TableArg::Locales => catalog
                .locales()
                .all()
                .iter()
                .filter(|locale| pattern.is_none_or(|p| p.is_match(&locale.name())))
                .map(Row::from)
                .collect(),
        }
    }
}

fn registry_rows<R>(registry: &CodeRegistry<R>, pattern: Option<&NamePattern>) -> Vec<Row>
where
    R: CodeRecord,
    for<'a> &'a R: Into<Row>,
{
    let records = match pattern {
        Some(pattern) => registry.find_by_name(pattern),
        None => registry.iter().filter(|r| !r.is_undefined()).collect(),
    };
    records.into_iter().map(Into::into).collect()
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = Catalog::standard();
    if let Some(path) = &cli.assignments {
        AssignmentProfile::load(path)?.apply(catalog)?;
    }
    let case_sensitive = cli.exact;

    let report = match cli.command {
        Commands::Country { code } => {
            let mut rows = Vec::new();
            if let Some(country) = catalog.resolve_country(&code, case_sensitive) {
                rows.push(Row::from(&country));
                if let Some(standard) = country.standard() {
                    rows.extend(catalog.currencies_of(standard).into_iter().map(Row::from));
                }
            }
            Report::new(format!("country {code}"), rows)
        }

        Commands::Currency { code } => {
            let currency = match code.parse::<i32>() {
                Ok(numeric) => catalog.currencies().lookup_numeric(numeric),
                Err(_) => catalog.currencies().lookup(&code, case_sensitive),
            };
            let rows = currency
                .map(|currency| {
                    let users: Vec<_> = catalog
                        .countries_of(currency)
                        .iter()
                        .map(|c| c.alpha2())
                        .collect();
                    vec![Row::from(currency).field("countries", users.join(", "))]
                })
                .unwrap_or_default();
            Report::new(format!("currency {code}"), rows)
        }

        Commands::Currencies { country } => {
            let rows = catalog
                .country_by_code(&country, case_sensitive)
                .map(|country| catalog.currencies_of(country))
                .unwrap_or_default()
                .into_iter()
                .map(Row::from)
                .collect();
            Report::new(format!("currencies used in {country}"), rows)
        }

        Commands::Countries { currency } => {
            let rows = catalog
                .currencies()
                .lookup(&currency, case_sensitive)
                .map(|currency| catalog.countries_of(currency))
                .unwrap_or_default()
                .into_iter()
                .map(Row::from)
                .collect();
            Report::new(format!("countries using {currency}"), rows)
        }

        Commands::Language { code } => {
            let mut rows = Vec::new();
            if let Some(language) = catalog.language_by_code(&code, case_sensitive) {
                rows.push(Row::from(language));
                if let Some(alpha3) = catalog.language_alpha3_of(language) {
                    rows.push(Row::from(alpha3));
                    rows.extend(catalog.synonym_of(alpha3).map(Row::from));
                }
            } else if let Some(alpha3) = catalog.language_alpha3_by_code(&code, case_sensitive) {
                rows.push(Row::from(alpha3));
            }
            Report::new(format!("language {code}"), rows)
        }

        Commands::Script { code } => {
            let script = match code.parse::<i32>() {
                Ok(numeric) => catalog.scripts().lookup_numeric(numeric),
                Err(_) => catalog.scripts().lookup(&code, case_sensitive),
            };
            Report::new(format!("script {code}"), script.map(Row::from).into_iter().collect())
        }

        Commands::Locale { name } => {
            let locale = match &name {
                Some(name) => catalog.locale_by_name(name, case_sensitive),
                None => catalog.host_locale(),
            };
            let title = format!("locale {}", name.as_deref().unwrap_or("(host)"));
            Report::new(title, locale.map(Row::from).into_iter().collect())
        }

        Commands::Search { table, pattern } => {
            let pattern = NamePattern::new(&pattern)?;
            Report::new(
                format!("{} matching {pattern}", table.title()),
                table.rows(catalog, Some(&pattern)),
            )
        }

        Commands::List { table } => Report::new(table.title(), table.rows(catalog, None)),
    };

    println!("{}", cli.format.render(&report)?);

    Ok(if report.rows.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
