//! Month command: classify every day of one calendar month.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use cyclecast_calendar::{CalendarDate, YearMonth};
use cyclecast_cycle::{
    CycleEntry, CycleError, DayClass, MonthSummary, classify, cycle_day, default_display_month,
    predict_next,
};
use cyclecast_store::{EntryStore, JsonFileStore};

use crate::cli::MonthArgs;
use crate::clock;
use crate::config::CyclecastConfig;
use crate::convert;
use crate::output;

/// JSON shape of the month command's result.
#[derive(Debug, Serialize)]
struct MonthReport<'a> {
    month: YearMonth,
    cycle_length: i32,
    days: &'a BTreeMap<CalendarDate, DayClass>,
    summary: MonthSummary,
    next_period: Option<CalendarDate>,
    cycle_day: Option<u32>,
}

/// Run the month classification.
pub fn run(args: MonthArgs, config: &CyclecastConfig, store_path: &Path) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let profile = convert::build_profile(&config.profile, args.cycle.cycle_length)?;
    let format = convert::build_output_format(&config.output, args.cycle.json)?;

    let store = JsonFileStore::open(store_path)
        .with_context(|| format!("failed to open entry store: {}", store_path.display()))?;
    let entries = store.list().context("failed to list entries")?;

    let today = clock::today_utc()?;
    let selected = args
        .month
        .unwrap_or_else(|| default_display_month(&entries, today));
    let month = step_month(selected, args.prev, args.next)?;
    let cycle_length = profile.cycle_length();
    if !profile.is_physiologically_plausible() {
        warn!(
            cycle_length,
            "cycle length below 14 days; ovulation and fertile days fall before the period start"
        );
    }
    info!(%month, n_entries = entries.len(), cycle_length, "classifying month");

    let classification = classify(month, &entries, cycle_length)
        .with_context(|| format!("failed to classify {month}"))?;

    let report = MonthReport {
        month,
        cycle_length,
        days: classification.as_map(),
        summary: classification.summary(),
        next_period: next_period_or_warn(&entries, cycle_length)?,
        cycle_day: cycle_day(&entries, today),
    };
    output::emit(format, &report, render_text)
}

/// Applies `--prev` / `--next` to the selected month.
fn step_month(month: YearMonth, prev: bool, next: bool) -> Result<YearMonth> {
    if prev {
        month.prev().with_context(|| format!("no month before {month}"))
    } else if next {
        month.next().with_context(|| format!("no month after {month}"))
    } else {
        Ok(month)
    }
}

/// The month view still renders when the prediction itself cannot be
/// represented; only an invalid cycle length is fatal.
fn next_period_or_warn(
    entries: &[CycleEntry],
    cycle_length: i32,
) -> Result<Option<CalendarDate>> {
    match predict_next(entries, cycle_length) {
        Ok(next) => Ok(next),
        Err(CycleError::Calendar(e)) => {
            warn!(error = %e, "next period falls outside the supported calendar");
            Ok(None)
        }
        Err(e) => Err(e).context("failed to predict next period"),
    }
}

fn render_text(report: &MonthReport<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.days.len() + 4);
    lines.push(format!(
        "{} (cycle length {})",
        report.month, report.cycle_length
    ));
    for (date, class) in report.days {
        lines.push(format!("{date}  {class}"));
    }
    let counts: Vec<String> = DayClass::BY_PRECEDENCE
        .iter()
        .map(|&class| format!("{class}: {}", report.summary.count(class)))
        .collect();
    lines.push(counts.join("  "));
    match report.next_period {
        Some(date) => lines.push(format!("next period: {date}")),
        None => lines.push("next period: -".to_string()),
    }
    match report.cycle_day {
        Some(day) => lines.push(format!("cycle day today: {day}")),
        None => lines.push("cycle day today: -".to_string()),
    }
    lines
}
