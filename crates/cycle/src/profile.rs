//! Cycle length settings and validation.

use crate::error::CycleError;
use crate::window::LUTEAL_PHASE_DAYS;

/// Cycle length assumed when the user has not set one.
pub const DEFAULT_CYCLE_LENGTH: i32 = 28;

/// Shortest cycle whose ovulation day does not precede the period start.
pub const MIN_PLAUSIBLE_CYCLE_LENGTH: i32 = LUTEAL_PHASE_DAYS;

/// Checks that a cycle length is at least one day.
///
/// Lengths 1..=13 pass: they place ovulation and the fertile window before
/// the period start, and it is up to the caller to reject them if wanted.
///
/// # Errors
///
/// Returns [`CycleError::InvalidCycleLength`] if `cycle_length < 1`.
pub fn validate_cycle_length(cycle_length: i32) -> Result<(), CycleError> {
    if cycle_length < 1 {
        return Err(CycleError::InvalidCycleLength { cycle_length });
    }
    Ok(())
}

/// Per-user cycle settings supplied by the profile collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleProfile {
    cycle_length: i32,
}

impl CycleProfile {
    /// Creates a profile with the given cycle length.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidCycleLength`] if `cycle_length < 1`.
    pub fn new(cycle_length: i32) -> Result<Self, CycleError> {
        validate_cycle_length(cycle_length)?;
        Ok(Self { cycle_length })
    }

    /// Creates a profile from an optional stored setting, defaulting to
    /// [`DEFAULT_CYCLE_LENGTH`] when unset.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidCycleLength`] if a stored value is below 1.
    pub fn from_setting(cycle_length: Option<i32>) -> Result<Self, CycleError> {
        Self::new(cycle_length.unwrap_or(DEFAULT_CYCLE_LENGTH))
    }

    /// Returns the cycle length in days.
    pub fn cycle_length(&self) -> i32 {
        self.cycle_length
    }

    /// Returns `true` if ovulation falls on or after the period start.
    pub fn is_physiologically_plausible(&self) -> bool {
        self.cycle_length >= MIN_PLAUSIBLE_CYCLE_LENGTH
    }
}

impl Default for CycleProfile {
    fn default() -> Self {
        Self {
            cycle_length: DEFAULT_CYCLE_LENGTH,
        }
    }
}
