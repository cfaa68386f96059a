use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use meet_scorer::config::Config;
use meet_scorer::leaderboard::{build_leaderboard, distinct_seasons, SortKey};
use meet_scorer::meet::{expand_relay_places, score_event, score_sheet, Entry, RELAY_LEGS};
use meet_scorer::model::EventRecord;
use meet_scorer::records::personal_records;
use meet_scorer::scoring::{validate_scoring, RelayPreset, ScoringError};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Format {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a config file with the default tables and a relay preset
    Init {
        #[arg(long, value_enum)]
        relay_preset: RelayPreset,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    #[command(flatten)]
    Report(ReportCommand),
}

/// Commands that run against a loaded, validated config
#[derive(Subcommand, Debug)]
enum ReportCommand {
    /// Score placements for one event
    Score {
        /// Event name, e.g. "100m Dash" or "4x400 Relay"
        #[arg(long)]
        event: String,

        /// Number of competing teams at the meet
        #[arg(long)]
        teams: u32,

        /// Relay table to use instead of the configured one
        #[arg(long, value_enum)]
        relay_preset: Option<RelayPreset>,

        /// Places are per relay team; each is shared by four legs
        #[arg(long)]
        relay_teams: bool,

        /// Placements in entry order (1 = first; 0 or below = did not place)
        #[arg(allow_negative_numbers = true)]
        places: Vec<i64>,
    },
    /// Rank athletes by aggregated points
    Leaderboard {
        /// JSON file with an array of event records
        #[arg(long)]
        events: PathBuf,

        /// Only count events from this season
        #[arg(long)]
        season: Option<String>,

        #[arg(long, value_enum, default_value_t = SortKey::TotalPoints)]
        sort: SortKey,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Show an athlete's personal records
    Prs {
        #[arg(long)]
        events: PathBuf,

        #[arg(long)]
        athlete: String,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Print a meet's results grouped by event
    Sheet {
        #[arg(long)]
        events: PathBuf,

        #[arg(long)]
        meet: String,
    },
    /// List the seasons present in an events file
    Seasons {
        #[arg(long)]
        events: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "meet-scorer")]
#[command(about = "Track meet scoring, personal records and leaderboards", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/meet-scorer/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "meet_scorer=debug" } else { "meet_scorer=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);

    let command = match cli.command {
        Commands::Init { relay_preset, force } => {
            let code = match run_init(config_path, relay_preset, force) {
                Ok(path) => {
                    println!("Wrote config to {}", path.display());
                    EXIT_SUCCESS
                }
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    EXIT_CONFIG
                }
            };
            std::process::exit(code);
        }
        Commands::Report(command) => command,
    };

    // Load config
    let config = match meet_scorer::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    if let Err(errors) = validate_scoring(&config.scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let code = match run(command, &config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) if e.downcast_ref::<ScoringError>().is_some() => {
            eprintln!("Scoring error: {:#}", e);
            EXIT_CONFIG
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_INPUT
        }
    };
    std::process::exit(code);
}

fn run_init(path: Option<PathBuf>, preset: RelayPreset, force: bool) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p,
        None => meet_scorer::config::get_config_path()?,
    };
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let config = Config {
        scoring: meet_scorer::scoring::ScoringConfig::default().with_relay_preset(preset),
        event_types: Vec::new(),
    };
    meet_scorer::config::save_config(&path, &config)?;
    Ok(path)
}

fn read_events(path: &Path) -> Result<Vec<EventRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file at {}", path.display()))?;
    let events: Vec<EventRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse events: invalid JSON in {}", path.display()))?;
    debug!(count = events.len(), path = %path.display(), "loaded events");
    Ok(events)
}

fn run(command: ReportCommand, config: &Config) -> Result<()> {
    let use_colors = meet_scorer::output::should_use_colors();
    let catalog = config.catalog();

    match command {
        ReportCommand::Score {
            event,
            teams,
            relay_preset,
            relay_teams,
            places,
        } => {
            let scoring = match relay_preset {
                Some(preset) => config.scoring.clone().with_relay_preset(preset),
                None => config.scoring.clone(),
            };
            let places = if relay_teams {
                expand_relay_places(&places, RELAY_LEGS)
            } else {
                places
            };
            let entries: Vec<Entry> = places
                .iter()
                .enumerate()
                .map(|(i, &place)| Entry::new(&format!("#{}", i + 1), place))
                .collect();

            let scored = score_event(&scoring, &catalog, &event, teams, &entries)?;
            println!("{}", meet_scorer::output::format_scored_entries(&scored));
        }
        ReportCommand::Leaderboard {
            events,
            season,
            sort,
            format,
        } => {
            let events = read_events(&events)?;
            let board = build_leaderboard(&events, season.as_deref(), sort);
            match format {
                Format::Table => {
                    println!("{}", meet_scorer::output::format_leaderboard(&board, use_colors))
                }
                Format::Tsv => println!("{}", meet_scorer::output::format_leaderboard_tsv(&board)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&board)?),
            }
        }
        ReportCommand::Prs {
            events,
            athlete,
            format,
        } => {
            let events = read_events(&events)?;
            let history = events.iter().filter(|ev| ev.athlete_id == athlete);
            let records = personal_records(history, &catalog);
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&records)?),
                Format::Table | Format::Tsv => {
                    println!("{}", meet_scorer::output::format_prs(&records, use_colors))
                }
            }
        }
        ReportCommand::Sheet { events, meet } => {
            let events = read_events(&events)?;
            let sheet = score_sheet(&events, &meet);
            println!("{}", meet_scorer::output::format_score_sheet(&sheet, use_colors));
        }
        ReportCommand::Seasons { events } => {
            let events = read_events(&events)?;
            for season in distinct_seasons(&events) {
                println!("{}", season);
            }
        }
    }

    Ok(())
}
