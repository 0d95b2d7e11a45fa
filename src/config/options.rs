// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// What to do when one entry on the page cannot be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Fail the whole run; nothing is emitted.
    #[default]
    Abort,
    /// Drop the bad entry, keep going, and report it in `Extraction::skipped`.
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub selector: String,
    pub anchor_marker: String,
    pub state_marker: String,
    pub policy: FailurePolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            selector: LOCATIONS_SELECTOR.to_string(),
            anchor_marker: ANCHOR_MARKER.to_string(),
            state_marker: STATE_MARKER.to_string(),
            policy: FailurePolicy::Abort,
        }
    }
}

impl ExtractOptions {
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub path: PathBuf,
    pub pretty: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MAP_FILE),
            pretty: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkOptions {
    /// Must end with '/', otherwise the last path segment gets replaced on join.
    pub base_url: String,
    pub appointment_type: u32,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            base_url: MVC_BASE_URL.to_string(),
            appointment_type: APPOINTMENT_TYPE_ID,
        }
    }
}
