//! Window command: period, ovulation and fertile dates for one start date.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info_span;

use cyclecast_cycle::{CycleWindow, compute_window};

use crate::cli::WindowArgs;
use crate::config::CyclecastConfig;
use crate::convert;
use crate::output;

#[derive(Debug, Serialize)]
struct WindowReport {
    cycle_length: i32,
    #[serde(flatten)]
    window: CycleWindow,
}

/// Run the single-window computation. Does not touch the entry store.
pub fn run(args: WindowArgs, config: &CyclecastConfig) -> Result<()> {
    let _cmd = info_span!("window", start = %args.start).entered();
    let profile = convert::build_profile(&config.profile, args.cycle.cycle_length)?;
    let format = convert::build_output_format(&config.output, args.cycle.json)?;

    let window = compute_window(args.start, profile.cycle_length())
        .with_context(|| format!("failed to compute window for {}", args.start))?;
    let report = WindowReport {
        cycle_length: profile.cycle_length(),
        window,
    };
    output::emit(format, &report, render_text)
}

fn render_text(report: &WindowReport) -> Vec<String> {
    let w = &report.window;
    vec![
        format!("period:    {} .. {}", w.period_start, w.period_end),
        format!("fertile:   {} .. {}", w.fertile_start, w.fertile_end),
        format!("ovulation: {}", w.ovulation_day),
    ]
}
