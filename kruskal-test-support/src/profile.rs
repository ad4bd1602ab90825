//! Property-test run profile read from the environment.
//!
//! `KRUSKAL_PBT_CASES` overrides the number of generated cases and
//! `KRUSKAL_PBT_FORK` toggles forked execution. Invalid overrides are logged
//! and ignored.

use std::env;

/// Environment variable controlling property-test case counts.
pub const CASES_ENV_KEY: &str = "KRUSKAL_PBT_CASES";
/// Environment variable controlling forked property-test execution.
pub const FORK_ENV_KEY: &str = "KRUSKAL_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyProfile {
    cases: u32,
    fork: bool,
}

impl PropertyProfile {
    /// Loads a profile, falling back to `default_cases` and no forking.
    ///
    /// # Examples
    /// ```
    /// use kruskal_test_support::profile::PropertyProfile;
    ///
    /// let profile = PropertyProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        Self {
            cases: read_override(CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: read_override(FORK_ENV_KEY, parse_bool).unwrap_or(false),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn read_override<T>(key: &'static str, parser: fn(&str) -> Result<T, String>) -> Option<T> {
    let raw = env::var(key).ok()?;
    parser(&raw)
        .map_err(|reason| {
            tracing::warn!(env = key, raw = %raw, reason = %reason, "ignoring invalid property-test override");
        })
        .ok()
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected true/false/1/0/yes/no/on/off".to_owned()),
    }
}
