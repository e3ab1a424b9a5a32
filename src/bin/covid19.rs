use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use covid19_rs::render::{self, render_directory};
use covid19_rs::{Client, Config, Console, CountryDirectory, CovidError, Record};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "covid19",
    version,
    about = "COVID-19 case statistics in your terminal"
)]
struct Cli {
    /// Base URL of the COVID-19 API (default: $COVID19_API_URL or https://api.covid19api.com).
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Directory holding countries.json (default: $COVID19_DATA_DIR or the platform data dir).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Delay between two steps of the day-one animation, in milliseconds.
    #[arg(long, global = true)]
    delay_ms: Option<u64>,
    /// Disable coloured output.
    #[arg(long, global = true, default_value_t = false)]
    no_color: bool,
    /// Log debug details to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// A summary of new and total cases, globally or for one country.
    ///
    /// To see the summary for a country, pass its name or ISO2 code as COUNTRY.
    Summary {
        country: Option<String>,
    },
    /// Look up a country in the directory and print it as JSON.
    #[command(name = "getcountry")]
    GetCountry(CountryQuery),
    /// Animate a country's cumulative counts since its first confirmed case.
    #[command(name = "dayone")]
    DayOne(DayOneTarget),
    /// List every country in the directory.
    Countries,
    /// Render a saved API response (summary, country summary or day-one array).
    Render {
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct CountryQuery {
    /// Country name (case-insensitive), e.g. "South Africa"
    #[arg(long)]
    name: Option<String>,
    /// ISO2 country code (case-insensitive), e.g. ZA
    #[arg(long)]
    code: Option<String>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct DayOneTarget {
    /// Country name (case-insensitive)
    country: Option<String>,
    /// ISO2 country code (case-insensitive)
    #[arg(long)]
    code: Option<String>,
}

impl Cli {
    fn config(&self) -> Config {
        let mut cfg = Config::from_env();
        if let Some(url) = &self.api_url {
            cfg.base_url = url.clone();
        }
        if let Some(dir) = &self.data_dir {
            cfg.data_dir = dir.clone();
        }
        if let Some(ms) = self.delay_ms {
            cfg.step_delay = Duration::from_millis(ms);
        }
        cfg.color = !self.no_color;
        cfg
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let cfg = cli.config();
    if !cfg.color {
        colored::control::set_override(false);
    }
    log::debug!("{cfg:?}");

    match cli.cmd {
        Command::Summary { country } => cmd_summary(&cfg, country),
        Command::GetCountry(q) => cmd_getcountry(&cfg, q),
        Command::DayOne(t) => cmd_dayone(&cfg, t),
        Command::Countries => cmd_countries(&cfg),
        Command::Render { file } => cmd_render(&cfg, file),
    }
}

fn load_directory(cfg: &Config) -> Result<CountryDirectory> {
    let path = cfg.directory_path();
    CountryDirectory::load_or_bundled(&path)
        .with_context(|| format!("load country directory {}", path.display()))
}

fn show(cfg: &Config, record: &Record) -> Result<()> {
    let mut console = Console::stdout(cfg);
    console.print_all(&render::render(record))?;
    Ok(())
}

fn cmd_summary(cfg: &Config, country: Option<String>) -> Result<()> {
    let client = Client::new(cfg.base_url.as_str())?;
    let record = match country {
        None => Record::Global(client.fetch_global_summary()?),
        Some(query) => {
            let dir = load_directory(cfg)?;
            let name = dir
                .find(&query)
                .map(|e| e.country.clone())
                .unwrap_or(query);
            Record::Country(client.fetch_country_summary(&name)?)
        }
    };
    show(cfg, &record)
}

fn cmd_getcountry(cfg: &Config, q: CountryQuery) -> Result<()> {
    let dir = load_directory(cfg)?;
    let entry = match (&q.name, &q.code) {
        (Some(name), _) => dir
            .find_by_name(name)
            .ok_or_else(|| CovidError::NotFound(format!("no country named '{name}'")))?,
        (None, Some(code)) => dir
            .find_by_code(code)
            .ok_or_else(|| CovidError::NotFound(format!("no country with code '{code}'")))?,
        (None, None) => anyhow::bail!("pass --name or --code"),
    };
    println!("{}", serde_json::to_string_pretty(entry)?);
    Ok(())
}

fn cmd_dayone(cfg: &Config, t: DayOneTarget) -> Result<()> {
    let dir = load_directory(cfg)?;
    let entry = match (&t.country, &t.code) {
        (Some(country), _) => dir
            .find(country)
            .ok_or_else(|| CovidError::NotFound(format!("no country named '{country}'")))?,
        (None, Some(code)) => dir
            .find_by_code(code)
            .ok_or_else(|| CovidError::NotFound(format!("no country with code '{code}'")))?,
        (None, None) => anyhow::bail!("pass COUNTRY or --code"),
    };

    let client = Client::new(cfg.base_url.as_str())?;
    let series = client.fetch_day_one_series(&entry.slug)?;
    log::info!("{} day-one rows for {}", series.len(), entry.slug);
    show(cfg, &Record::DayOne(series))
}

fn cmd_countries(cfg: &Config) -> Result<()> {
    let dir = load_directory(cfg)?;
    let mut console = Console::stdout(cfg);
    console.print_all(&render_directory(dir.entries()))?;
    Ok(())
}

fn cmd_render(cfg: &Config, file: PathBuf) -> Result<()> {
    let raw = std::fs::read_to_string(&file)
        .with_context(|| format!("read {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .map_err(CovidError::from)
        .with_context(|| format!("parse {}", file.display()))?;
    let record = Record::from_value(value)?;
    show(cfg, &record)
}
