//! Process-wide settings.
//!
//! Settings are read from the environment on first use:
//!
//! - `GUARDRAIL_DIAGNOSTICS`: soft reports write to their trace sink (default on)
//! - `GUARDRAIL_DEBUG_SIGNAL`: invariant failures notify the developer signal
//!   handler (default on)
//!
//! Flags accept `1/0`, `true/false`, `on/off` and `yes/no`, case-insensitively.

use crate::scoped::{overridden, with_override};
use parking_lot::RwLock;
use std::cell::RefCell;

pub const DIAGNOSTICS_VAR: &str = "GUARDRAIL_DIAGNOSTICS";
pub const DEBUG_SIGNAL_VAR: &str = "GUARDRAIL_DEBUG_SIGNAL";

/// Runtime switches for the diagnostic side channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Soft reports are written to the trace sink.
    pub diagnostics: bool,
    /// Invariant failures notify the developer signal handler.
    pub debug_signal: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            diagnostics: true,
            debug_signal: true,
        }
    }
}

/// A setting could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{var} has unrecognised value {value:?} (expected 1/0, true/false, on/off or yes/no)")]
    InvalidFlag { var: &'static str, value: String },
}

impl Settings {
    /// Read settings from the environment, rejecting unrecognised values.
    pub fn try_from_env() -> Result<Self, SettingsError> {
        Self::try_from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings from the environment. Unrecognised values keep the
    /// default and are logged.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let defaults = Settings::default();
        Ok(Settings {
            diagnostics: read_flag(&lookup, DIAGNOSTICS_VAR)?.unwrap_or(defaults.diagnostics),
            debug_signal: read_flag(&lookup, DEBUG_SIGNAL_VAR)?.unwrap_or(defaults.debug_signal),
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Settings::default();
        let flag = |var: &'static str, default: bool| match read_flag(&lookup, var) {
            Ok(value) => value.unwrap_or(default),
            Err(err) => {
                tracing::warn!(%err, "ignoring invalid setting");
                default
            }
        };
        Settings {
            diagnostics: flag(DIAGNOSTICS_VAR, defaults.diagnostics),
            debug_signal: flag(DEBUG_SIGNAL_VAR, defaults.debug_signal),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn read_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<bool>, SettingsError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) => match parse_flag(&value) {
            Some(flag) => Ok(Some(flag)),
            None => Err(SettingsError::InvalidFlag { var, value }),
        },
    }
}

static SETTINGS: RwLock<Option<Settings>> = parking_lot::const_rwlock(None);

thread_local! {
    static OVERRIDE: RefCell<Option<Settings>> = const { RefCell::new(None) };
}

/// The active settings: a thread-scoped override if one is in effect,
/// otherwise the process-wide settings (read from the environment on first use).
pub fn current() -> Settings {
    overridden(&OVERRIDE).unwrap_or_else(process_wide)
}

/// The process-wide settings, ignoring thread-scoped overrides.
pub(crate) fn process_wide() -> Settings {
    if let Some(settings) = *SETTINGS.read() {
        return settings;
    }
    *SETTINGS.write().get_or_insert_with(Settings::from_env)
}

/// Replace the process-wide settings.
///
/// The process-wide reporter is rebuilt from the new settings on next use.
pub fn install(settings: Settings) {
    *SETTINGS.write() = Some(settings);
    crate::report::reset_global();
}

/// Run `f` with `settings` active on the current thread only.
pub fn with_settings<R>(settings: Settings, f: impl FnOnce() -> R) -> R {
    with_override(&OVERRIDE, settings, f)
}
