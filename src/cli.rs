// src/cli.rs
use std::{env, path::{Path, PathBuf}};

use chrono::{Local, NaiveDate};
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::config::{self, consts::{MissingTierPolicy, CONFIG_FILE}, options::{AppOptions, ExportFormat}};
use crate::file;
use crate::query::{run_query, Query};
use crate::ratings::MissingRating;
use crate::report::{self, Detail};
use crate::schedule::{parse_date, schedule_bounds, DateRange};
use crate::store::Sources;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutFormat {
    Text,
    Export(ExportFormat),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub log: Option<PathBuf>,
    pub schedule: Option<PathBuf>,
    pub ratings: Option<PathBuf>,
    pub no_ratings: bool,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub today: bool,
    pub b2b: bool,
    pub date: Option<NaiveDate>,
    pub missing: Option<MissingTierPolicy>,
    pub format: OutFormat,
    pub out: Option<PathBuf>,
    pub no_headers: bool,
    pub list_ratings: bool,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config: None,
            log: None,
            schedule: None,
            ratings: None,
            no_ratings: false,
            start: None,
            end: None,
            today: false,
            b2b: false,
            date: None,
            missing: None,
            format: OutFormat::Text,
            out: None,
            no_headers: false,
            list_ratings: false,
            help: false,
        }
    }
}

pub fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    if let Some(path) = &args.log {
        crate::log::set_log_file(path.clone());
    }
    if args.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }

    let opts = resolve_options(&args);
    logf!("CLI: {:?}", args);

    let data = Sources::new(&opts.sources)
        .load()
        .wrap_err("Data loading failed")?;

    if args.list_ratings {
        for team in data.ratings.teams() {
            if let Some(e) = data.ratings.get(team) {
                println!("{},{},{}", e.team, e.tier, e.glyph);
            }
        }
        return Ok(());
    }

    let today = Local::now().date_naive();
    let Some(query) = build_query(&args, &opts, schedule_bounds(&data.schedule), today)? else {
        println!("{}", report::NO_GAMES);
        return Ok(());
    };

    let missing = MissingRating::from_policy(opts.query.missing_tier);
    let outcome = run_query(&data.schedule, &data.ratings, &query, &missing);

    match args.format {
        OutFormat::Text => {
            let detail = if data.ratings.is_empty() { Detail::Counts } else { Detail::Matchups };
            print!("{}", report::render(&outcome, detail));
        }
        OutFormat::Export(_) if args.out.is_some() => {
            let path = file::write_export(&opts.export, &outcome.groups)
                .map_err(|e| eyre!("Export failed: {e}"))?;
            eprintln!("Wrote {}", path.display());
        }
        OutFormat::Export(fmt) => {
            print!("{}", file::to_export_string(&outcome.groups, opts.export.include_headers, fmt.delim()));
        }
    }
    Ok(())
}

/// Config file first, then command-line overrides.
pub fn resolve_options(args: &CliArgs) -> AppOptions {
    let mut opts = match &args.config {
        Some(p) => config::file::load(p),
        None => config::file::load(Path::new(CONFIG_FILE)),
    };
    if let Some(p) = &args.schedule { opts.sources.schedule = p.clone(); }
    if let Some(p) = &args.ratings { opts.sources.ratings = Some(p.clone()); }
    if args.no_ratings { opts.sources.ratings = None; }
    if let Some(m) = args.missing { opts.query.missing_tier = m; }
    opts.query.start_from_today = args.today;
    opts.query.back_to_back = args.b2b;
    if let OutFormat::Export(fmt) = args.format { opts.export.format = fmt; }
    if let Some(p) = &args.out { opts.export.set_path(&p.to_string_lossy()); }
    if args.no_headers { opts.export.include_headers = false; }
    opts
}

/// None when the schedule is empty and no window was given.
pub fn build_query(
    args: &CliArgs,
    opts: &AppOptions,
    bounds: Option<DateRange>,
    today: NaiveDate,
) -> Result<Option<Query>> {
    if opts.query.back_to_back {
        return Ok(Some(Query::BackToBack { base: args.date.unwrap_or(today) }));
    }
    let (start, end) = match (args.start, args.end, bounds) {
        (Some(s), Some(e), _) => (s, e),
        (s, e, Some(b)) => (s.unwrap_or(b.start()), e.unwrap_or(b.end())),
        (Some(s), None, None) => (s, s),
        (None, Some(e), None) => (e, e),
        (None, None, None) => return Ok(None),
    };
    let window = DateRange::new(start, end)?;
    // "--today" past the last day of the window: nothing left to show.
    Ok(Query::from_options(&opts.query, window, today).ok())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
        args.next().ok_or_else(|| eyre!("Missing value for {flag}"))
    }
    fn date(v: &str) -> Result<NaiveDate> {
        parse_date(v).ok_or_else(|| eyre!("Unparseable date '{v}'"))
    }

    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--schedule" => cli.schedule = Some(PathBuf::from(value(&mut args, &a)?)),
            "-r" | "--ratings" => cli.ratings = Some(PathBuf::from(value(&mut args, &a)?)),
            "--no-ratings" => cli.no_ratings = true,
            "--config" => cli.config = Some(PathBuf::from(value(&mut args, &a)?)),
            "--log" => cli.log = Some(PathBuf::from(value(&mut args, &a)?)),
            "--start" => cli.start = Some(date(&value(&mut args, &a)?)?),
            "--end" => cli.end = Some(date(&value(&mut args, &a)?)?),
            "--today" => cli.today = true,
            "--b2b" => cli.b2b = true,
            "--date" => cli.date = Some(date(&value(&mut args, &a)?)?),
            "--missing" => {
                let v = value(&mut args, &a)?;
                cli.missing = Some(MissingTierPolicy::parse(&v).ok_or_else(|| eyre!("Unknown policy: {v}"))?);
            }
            "--format" => {
                let v = value(&mut args, &a)?;
                cli.format = match v.to_ascii_lowercase().as_str() {
                    "text" => OutFormat::Text,
                    other => OutFormat::Export(
                        ExportFormat::parse(other).ok_or_else(|| eyre!("Unknown format: {other}"))?,
                    ),
                };
            }
            "-o" | "--out" => cli.out = Some(PathBuf::from(value(&mut args, &a)?)),
            "--no-headers" => cli.no_headers = true,
            "--list-ratings" => cli.list_ratings = true,
            "-h" | "--help" => cli.help = true,
            _ => return Err(eyre!("Unknown arg: {a}")),
        }
    }

    if cli.date.is_some() && !cli.b2b {
        return Err(eyre!("--date only applies with --b2b"));
    }
    if cli.b2b && (cli.start.is_some() || cli.end.is_some() || cli.today) {
        return Err(eyre!("--b2b picks its own window; drop --start/--end/--today"));
    }
    if cli.out.is_some() && cli.format == OutFormat::Text {
        return Err(eyre!("--out needs --format csv or --format tsv"));
    }
    Ok(cli)
}
