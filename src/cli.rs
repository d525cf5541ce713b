use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cyclecast_calendar::{CalendarDate, YearMonth};

/// Cyclecast period tracker.
#[derive(Parser)]
#[command(
    name = "cyclecast",
    version,
    about = "Period, ovulation and fertile-window calendar with next-period prediction"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: cyclecast.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the entry store path from config.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify every day of a month as period, ovulation, fertile or none.
    Month(MonthArgs),
    /// Predict the next period start date.
    Predict(PredictArgs),
    /// Show the cycle window for one period start date.
    Window(WindowArgs),
    /// Record a period start.
    Add(AddArgs),
    /// List recorded entries, newest first.
    List(ListArgs),
    /// Delete a recorded entry.
    Delete(DeleteArgs),
}

/// Arguments shared by commands that run the cycle math.
#[derive(clap::Args)]
pub struct CycleArgs {
    /// Override the profile cycle length (days).
    #[arg(long = "cycle-length", allow_negative_numbers = true)]
    pub cycle_length: Option<i32>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Month to classify as YYYY-MM [default: month of the latest entry, else the current month].
    pub month: Option<YearMonth>,

    /// Step back one month from the selected month.
    #[arg(long, conflicts_with = "next")]
    pub prev: bool,

    /// Step forward one month from the selected month.
    #[arg(long)]
    pub next: bool,

    #[command(flatten)]
    pub cycle: CycleArgs,
}

/// Arguments for the `predict` subcommand.
#[derive(clap::Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub cycle: CycleArgs,
}

/// Arguments for the `window` subcommand.
#[derive(clap::Args)]
pub struct WindowArgs {
    /// Period start date (YYYY-MM-DD).
    #[arg(short, long)]
    pub start: CalendarDate,

    #[command(flatten)]
    pub cycle: CycleArgs,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Period start date (YYYY-MM-DD).
    #[arg(short, long)]
    pub start: CalendarDate,

    /// Period end date (YYYY-MM-DD).
    #[arg(short, long)]
    pub end: Option<CalendarDate>,

    /// Free-text notes.
    #[arg(short, long)]
    pub notes: Option<String>,
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
pub struct ListArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` subcommand.
#[derive(clap::Args)]
pub struct DeleteArgs {
    /// Id of the entry to delete.
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_month_and_flags() {
        let cli = Cli::try_parse_from([
            "cyclecast",
            "-vv",
            "month",
            "2024-02",
            "--cycle-length",
            "30",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Month(args) = cli.command else {
            panic!("expected month command");
        };
        assert_eq!(args.month, Some(YearMonth::new(2024, 2).unwrap()));
        assert_eq!(args.cycle.cycle_length, Some(30));
        assert!(args.cycle.json);
    }

    #[test]
    fn negative_cycle_length_reaches_engine() {
        let cli = Cli::try_parse_from(["cyclecast", "predict", "--cycle-length", "-3"]).unwrap();
        let Command::Predict(args) = cli.command else {
            panic!("expected predict command");
        };
        assert_eq!(args.cycle.cycle_length, Some(-3));
    }

    #[test]
    fn rejects_non_iso_dates() {
        assert!(Cli::try_parse_from(["cyclecast", "add", "--start", "01-02-2024"]).is_err());
        assert!(Cli::try_parse_from(["cyclecast", "window", "--start", "2024-02-30"]).is_err());
    }

    #[test]
    fn parses_add() {
        let cli = Cli::try_parse_from([
            "cyclecast",
            "--store",
            "x.json",
            "add",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-05",
            "--notes",
            "ok",
        ])
        .unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("x.json")));
        let Command::Add(args) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(args.start, CalendarDate::new(2024, 1, 1).unwrap());
        assert_eq!(args.end, Some(CalendarDate::new(2024, 1, 5).unwrap()));
        assert_eq!(args.notes.as_deref(), Some("ok"));
    }

    #[test]
    fn month_navigation_flags() {
        let cli = Cli::try_parse_from(["cyclecast", "month", "2024-01", "--prev"]).unwrap();
        let Command::Month(args) = cli.command else {
            panic!("expected month command");
        };
        assert!(args.prev);
        assert!(!args.next);
        assert!(Cli::try_parse_from(["cyclecast", "month", "--prev", "--next"]).is_err());
    }

    #[test]
    fn delete_takes_positional_id() {
        let cli = Cli::try_parse_from(["cyclecast", "delete", "7"]).unwrap();
        let Command::Delete(args) = cli.command else {
            panic!("expected delete command");
        };
        assert_eq!(args.id, 7);
    }
}
