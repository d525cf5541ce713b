//! Pure conversion functions: TOML config structs + CLI overrides -> crate API types.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use cyclecast_cycle::CycleProfile;

use crate::config::{OutputToml, ProfileToml, StoreToml};
use crate::output::OutputFormat;

/// Parses an output format name into the corresponding enum variant.
pub fn parse_output_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Builds the output format; `--json` wins over the config file.
pub fn build_output_format(output: &OutputToml, json_flag: bool) -> Result<OutputFormat> {
    if json_flag {
        return Ok(OutputFormat::Json);
    }
    parse_output_format(&output.format)
}

/// Builds a [`CycleProfile`]; a CLI cycle length overrides the config file.
pub fn build_profile(profile: &ProfileToml, cycle_length: Option<i32>) -> Result<CycleProfile> {
    let setting = cycle_length.or(profile.cycle_length);
    CycleProfile::from_setting(setting).context("invalid cycle length in profile")
}

/// Resolves the entry store path; `--store` wins over the config file.
pub fn resolve_store_path(store: &StoreToml, override_path: Option<&Path>) -> PathBuf {
    override_path.map_or_else(|| store.path.clone(), Path::to_path_buf)
}
