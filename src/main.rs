use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use tifoso_stats::export;
use tifoso_stats::source;
use tifoso_stats::stats::{self, Comparison, StatsAggregator};
use tifoso_stats::table::{self, CsvTable};
use tifoso_stats::validate;
use tifoso_stats::{Columns, PersonReport, StatsConfig};

#[derive(Parser)]
#[command(name = "tifoso-stats")]
#[command(about = "Match statistics for supporters of a football club", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Input and column options shared by every command
#[derive(Args)]
struct DataArgs {
    /// Match file (path or http/https URL)
    input: String,

    /// Field delimiter (detected from the header line when omitted)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Club whose home/away status normalizes results and goals
    #[arg(long, env = "TIFOSO_REFERENCE_TEAM", default_value = "Como")]
    reference_team: String,

    /// Tracked supporters (repeat or comma-separate)
    #[arg(
        short,
        long = "person",
        env = "TIFOSO_PERSONS",
        value_delimiter = ',',
        default_value = "Steppo,Guzzo"
    )]
    persons: Vec<String>,

    /// Column naming the supporter who attended
    #[arg(long, default_value = "Tifoso")]
    person_column: String,

    /// Column naming the home team
    #[arg(long, default_value = "HomeTeam")]
    home_team_column: String,
}

impl DataArgs {
    fn config(&self) -> StatsConfig {
        StatsConfig::default()
            .with_reference_team(&self.reference_team)
            .with_tracked(self.persons.iter().cloned())
            .with_columns(
                Columns::default()
                    .with_person(&self.person_column)
                    .with_home_team(&self.home_team_column),
            )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print each supporter's record
    Stats {
        #[command(flatten)]
        data: DataArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compare the first two tracked supporters
    Compare {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Display information about a match file
    Info {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Check a match file for missing or malformed cells
    Validate {
        #[command(flatten)]
        data: DataArgs,
    },

    /// List attended matches in date order
    Timeline {
        #[command(flatten)]
        data: DataArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write supporter summaries to CSV or Excel
    Export {
        #[command(flatten)]
        data: DataArgs,

        /// Output file (.csv or .xlsx)
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { data, json } => {
            print_stats(&data, json)?;
        }
        Commands::Compare { data } => {
            compare(&data)?;
        }
        Commands::Info { data } => {
            info(&data)?;
        }
        Commands::Validate { data } => {
            run_validate(&data)?;
        }
        Commands::Timeline { data, json } => {
            print_timeline(&data, json)?;
        }
        Commands::Export { data, output } => {
            export_reports(&data, &output)?;
        }
    }

    Ok(())
}

/// Load and parse the input, rejecting files without match rows
fn load_table(data: &DataArgs) -> Result<CsvTable> {
    let text = source::load(&data.input)
        .with_context(|| format!("Failed to load {}", data.input))?;
    let table = table::parse(&text, data.delimiter).context("Failed to parse match file")?;
    log::info!("Loaded {} matches from {}", table.len(), data.input);

    if table.is_empty() {
        bail!("{} contains no match rows", data.input);
    }
    Ok(table)
}

fn print_stats(data: &DataArgs, json: bool) -> Result<()> {
    let table = load_table(data)?;
    let aggregator = StatsAggregator::new(data.config());
    let reports = aggregator.reports(table.rows());

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("Reference team: {}", aggregator.config().reference_team);
    println!("Matches in file: {}", table.len());
    println!();
    for report in &reports {
        print_report(report);
    }
    Ok(())
}

fn print_report(report: &PersonReport) {
    let s = &report.summary;
    let x = &report.extended;

    println!("{}", report.person);
    println!("  Matches: {}", s.total_matches);
    println!("  W/D/L: {}/{}/{}", s.wins, s.draws, s.losses);
    println!("  Goals: {} for, {} against", s.goals_for, s.goals_against);
    println!("  Points: {} ({} per game)", s.points, s.points_per_game);
    println!("  Win rate: {}%", s.win_rate_percent);

    if let Some(avg) = x.avg_shots_for {
        println!("  Shots per game: {}", avg);
    }
    if let Some(avg) = x.avg_shots_on_target_for {
        println!("  Shots on target per game: {}", avg);
    }
    if let Some(avg) = x.avg_corners_for {
        println!("  Corners per game: {}", avg);
    }
    if x.yellow_cards > 0 || x.red_cards > 0 {
        println!("  Cards: {} yellow, {} red", x.yellow_cards, x.red_cards);
    }
    println!();
}

fn compare(data: &DataArgs) -> Result<()> {
    let config = data.config();
    let [left, right, ..] = config.tracked.as_slice() else {
        bail!("compare needs two tracked supporters, got {}", config.tracked.len());
    };

    let table = load_table(data)?;
    let aggregator = StatsAggregator::new(config.clone());
    let left = aggregator.report(table.rows(), left);
    let right = aggregator.report(table.rows(), right);
    let comparison = Comparison::between(&left, &right);

    println!(
        "{}: {}W {}D {}L, {} ppg",
        left.person,
        left.summary.wins,
        left.summary.draws,
        left.summary.losses,
        left.summary.points_per_game
    );
    println!(
        "{}: {}W {}D {}L, {} ppg",
        right.person,
        right.summary.wins,
        right.summary.draws,
        right.summary.losses,
        right.summary.points_per_game
    );
    println!();

    if !comparison.both_have_matches {
        println!("Not enough matches to compare");
        return Ok(());
    }

    match comparison.leader_name() {
        Some(name) => println!(
            "{} has {} more win(s)",
            name,
            comparison.wins_diff.unsigned_abs()
        ),
        None => println!("{} and {} have the same number of wins", left.person, right.person),
    }
    if comparison.points_gap_is_notable() {
        println!("Points per game difference: {}", comparison.points_per_game_diff);
    }

    Ok(())
}

fn info(data: &DataArgs) -> Result<()> {
    let text = source::load(&data.input)
        .with_context(|| format!("Failed to load {}", data.input))?;
    let table = table::parse(&text, data.delimiter).context("Failed to parse match file")?;

    println!("File: {}", data.input);
    println!("Delimiter: {:?}", table.delimiter());
    println!("Columns: {}", table.headers().join(", "));
    println!("Rows: {}", table.len());
    println!();

    let counts = stats::attendee_counts(table.rows(), &data.person_column);
    println!("Attendee values ({}):", counts.len());
    for (name, count) in &counts {
        let marker = if data.persons.contains(name) { " (tracked)" } else { "" };
        println!("  {} - {} match(es){}", name, count, marker);
    }

    Ok(())
}

fn run_validate(data: &DataArgs) -> Result<()> {
    let table = load_table(data)?;
    let issues = validate::check(&table, &data.config().columns);

    println!("{} rows checked", table.len());
    if issues.is_empty() {
        println!("  No issues found");
        return Ok(());
    }

    println!("  Issues found:");
    for issue in &issues {
        println!("    - {}", issue);
    }
    bail!("{} issue(s) found in {}", issues.len(), data.input);
}

fn print_timeline(data: &DataArgs, json: bool) -> Result<()> {
    let table = load_table(data)?;
    let config = data.config();
    let entries = stats::timeline(table.rows(), &config);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        let venue = match entry.venue {
            tifoso_stats::Venue::Home => "vs",
            tifoso_stats::Venue::Away => "at",
        };
        println!(
            "{:<10}  {:<8}  {} {} {}  {}",
            entry.date,
            entry.attendee,
            venue,
            entry.opponent,
            entry.score(),
            entry.outcome
        );
    }
    println!();
    println!("{} attended matches", entries.len());
    Ok(())
}

fn export_reports(data: &DataArgs, output: &Path) -> Result<()> {
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let table = load_table(data)?;
    let config = data.config();
    let reports = StatsAggregator::new(config.clone()).reports(table.rows());

    match ext.as_str() {
        "csv" => {
            println!("Writing CSV file: {}", output.display());
            export::write_reports_csv_to_path(&reports, output)
                .context("Failed to write CSV file")?;
        }
        "xlsx" => {
            let entries = stats::timeline(table.rows(), &config);
            println!("Writing Excel file: {}", output.display());
            export::write_reports_xlsx(&reports, &entries, output)
                .context("Failed to write Excel file")?;
        }
        _ => {
            bail!("Unsupported output format: {}", ext);
        }
    }

    println!("Done!");
    Ok(())
}
