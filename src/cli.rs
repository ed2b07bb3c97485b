// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::consts::{BASE_URL, DEFAULT_LOG_FILE, ENV_BASE_URL, ENV_NOT_FOUND_URL, NOT_FOUND_REDIRECT};
use crate::config::{HeraldConfig, Query};
use crate::endpoint::Endpoint;
use crate::error::{QueryError, RequestFailure};
use crate::log::{self, LogOptions};
use crate::record::{Grouping, Metric, Realm, RecordKind, SubjectKind};
use crate::scrape::{Herald, QueryOutput};
use crate::transform::Transform;

/// Character and guild statistics from the Phoenix herald.
#[derive(Debug, Parser)]
#[command(name = "herald", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, env = ENV_BASE_URL, default_value = BASE_URL)]
    pub base_url: String,

    #[arg(long, global = true, env = ENV_NOT_FOUND_URL, default_value = NOT_FOUND_REDIRECT)]
    pub not_found_url: String,

    /// Give up on the herald after this many seconds (default: wait).
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Also append logs to this file.
    #[arg(long, global = true, num_args = 0..=1, default_missing_value = DEFAULT_LOG_FILE)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Stats for one or more characters.
    Character(Lookup),
    /// Stats for one or more guilds.
    Guild(Lookup),
}

#[derive(Debug, Args)]
pub struct Lookup {
    #[arg(required = true)]
    pub names: Vec<String>,

    #[arg(short, long, value_enum)]
    pub table: Table,

    /// Project realm kills onto one realm.
    #[arg(long, value_enum)]
    pub realm: Option<RealmArg>,

    /// Show a metric table as a rank within this grouping.
    #[arg(long, value_enum)]
    pub rank: Option<GroupingArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Table {
    Rps,
    Deathblows,
    Deaths,
    Kills,
    Solos,
    /// Realm points per death.
    Irs,
    RealmKills,
    /// Full rank table.
    Rank,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RealmArg { Albion, Midgard, Hibernia }

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GroupingArg { Server, Realm }

impl From<RealmArg> for Realm {
    fn from(r: RealmArg) -> Self {
        match r { RealmArg::Albion => Realm::Albion, RealmArg::Midgard => Realm::Midgard, RealmArg::Hibernia => Realm::Hibernia }
    }
}

impl From<GroupingArg> for Grouping {
    fn from(g: GroupingArg) -> Self {
        match g { GroupingArg::Server => Grouping::Server, GroupingArg::Realm => Grouping::Realm }
    }
}

impl Table {
    fn metric(self) -> Option<Metric> {
        match self {
            Table::Rps => Some(Metric::RealmPoints),
            Table::Deathblows => Some(Metric::Deathblows),
            Table::Deaths => Some(Metric::Deaths),
            Table::Kills => Some(Metric::Kills),
            Table::Solos => Some(Metric::SoloKills),
            Table::Irs | Table::RealmKills | Table::Rank => None,
        }
    }
}

/// Map command-line table + options onto a query.
pub fn resolve_query(l: &Lookup) -> Result<Query, String> {
    let query = match (l.table, l.realm, l.rank) {
        (Table::RealmKills, Some(realm), None) => Query::transformed(Transform::RealmKills(realm.into())),
        (Table::RealmKills, None, None) => Query::raw(RecordKind::RealmKills),
        (Table::Rank, None, None) => Query::raw(RecordKind::Ranks),
        (Table::Irs, None, None) => Query::transformed(Transform::RealmPointsPerDeath),
        (t, None, grouping) => match (t.metric(), grouping) {
            (Some(m), Some(g)) => Query::transformed(Transform::Rank(m, g.into())),
            (Some(m), None) => Query::transformed(Transform::Amount(m)),
            (None, _) => return Err(format!("--rank does not apply to {t:?}")),
        },
        (t, Some(_), _) => return Err(format!("--realm only applies to realm-kills without --rank (got {t:?})")),
    };
    Ok(query)
}

/// What a chat user would be told.
pub fn describe_failure(name: &str, e: &QueryError) -> String {
    match e {
        QueryError::Request(RequestFailure::NotFound) => format!("No such subject on the herald: {name}."),
        QueryError::Request(RequestFailure::UpstreamError(code)) => format!("There is an issue with the herald ({code})."),
        QueryError::Request(RequestFailure::Transport(err)) => format!("Could not reach the herald: {err}."),
        QueryError::InvalidEndpoint(_) => format!("Not a valid herald subject: {name}."),
        QueryError::MalformedCell(_) | QueryError::TransformMismatch(_) => {
            format!("Could not read the herald page for {name} ({e}).")
        }
    }
}

pub fn run() -> color_eyre::Result<()> {
    let cli = Cli::parse();
    log::init(&LogOptions { verbose: cli.verbose, file: cli.log_file.clone() })?;

    let config = HeraldConfig {
        base_url: cli.base_url.clone(),
        not_found_url: cli.not_found_url.clone(),
        timeout: cli.timeout_secs.map(Duration::from_secs),
        ..HeraldConfig::default()
    };
    let (subject, lookup) = match &cli.command {
        Command::Character(l) => (SubjectKind::Character, l),
        Command::Guild(l) => (SubjectKind::Guild, l),
    };
    let query = resolve_query(lookup).map_err(|e| color_eyre::eyre::eyre!(e))?;

    let herald = Herald::connect(config)?;
    let mut jobs = Vec::with_capacity(lookup.names.len());
    for name in &lookup.names {
        jobs.push((Endpoint::build(&herald.config().base_url, subject, name)?, query));
    }

    let results = herald.query_batch(&jobs);
    let mut failed = 0usize;
    for ((endpoint, _), result) in jobs.iter().zip(results) {
        match result {
            Ok(output) => println!("{}", render(&output)?),
            Err(e) => {
                failed += 1;
                eprintln!("{}", describe_failure(endpoint.name(), &e));
            }
        }
    }

    if failed > 0 {
        color_eyre::eyre::bail!("{failed} of {} lookups failed", jobs.len());
    }
    Ok(())
}

fn render(output: &QueryOutput) -> serde_json::Result<String> {
    serde_json::to_string_pretty(output)
}
