//! Predict command: next expected period start.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use cyclecast_calendar::CalendarDate;
use cyclecast_cycle::{cycle_day, latest_entry, predict_next};
use cyclecast_store::{EntryStore, JsonFileStore};

use crate::cli::PredictArgs;
use crate::clock;
use crate::config::CyclecastConfig;
use crate::convert;
use crate::output;

#[derive(Debug, Serialize)]
struct PredictReport {
    cycle_length: i32,
    latest_start: Option<CalendarDate>,
    next_period: Option<CalendarDate>,
    cycle_day: Option<u32>,
}

/// Run the next-period prediction.
pub fn run(args: PredictArgs, config: &CyclecastConfig, store_path: &Path) -> Result<()> {
    let _cmd = info_span!("predict").entered();
    let profile = convert::build_profile(&config.profile, args.cycle.cycle_length)?;
    let format = convert::build_output_format(&config.output, args.cycle.json)?;

    let store = JsonFileStore::open(store_path)
        .with_context(|| format!("failed to open entry store: {}", store_path.display()))?;
    let entries = store.list().context("failed to list entries")?;

    let next_period = predict_next(&entries, profile.cycle_length())
        .context("failed to predict next period")?;
    info!(n_entries = entries.len(), next = ?next_period, "prediction complete");

    let report = PredictReport {
        cycle_length: profile.cycle_length(),
        latest_start: latest_entry(&entries).map(|e| e.start_date()),
        next_period,
        cycle_day: cycle_day(&entries, clock::today_utc()?),
    };
    output::emit(format, &report, render_text)
}

fn render_text(report: &PredictReport) -> Vec<String> {
    let (Some(next), Some(latest)) = (report.next_period, report.latest_start) else {
        return vec!["no entries recorded; nothing to predict".to_string()];
    };
    let day = report
        .cycle_day
        .map_or_else(|| "-".to_string(), |d| d.to_string());
    vec![
        format!(
            "next period: {next} (latest start {latest}, cycle length {})",
            report.cycle_length
        ),
        format!("cycle day today: {day}"),
    ]
}
