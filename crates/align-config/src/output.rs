//! Audit and log output locations.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Path prefixes for the files a run produces. Each prefix is a directory
/// (with trailing separator) or a file name stem; the run timestamp and a
/// fixed suffix are appended.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub json_prefix: String,
    #[serde(default)]
    pub csv_prefix: String,
    #[serde(default)]
    pub log_prefix: String,
}

/// Concrete file paths for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
    pub log: PathBuf,
}

impl OutputConfig {
    /// Resolve file paths stamped with `now` as `yyyy-MM-dd_hhmm`
    /// (12-hour clock, matching the files older runs produced).
    #[must_use]
    pub fn paths_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> OutputPaths
    where
        Tz::Offset: std::fmt::Display,
    {
        let stamp = now.format("%Y-%m-%d_%I%M").to_string();
        OutputPaths {
            json: PathBuf::from(format!("{}{stamp}_PlansAndCases.json", self.json_prefix)),
            csv: PathBuf::from(format!("{}{stamp}_PlansAndCases.csv", self.csv_prefix)),
            log: PathBuf::from(format!("{}{stamp}_ExLog.txt", self.log_prefix)),
        }
    }

    /// Resolve file paths stamped with the current local time.
    #[must_use]
    pub fn paths_now(&self) -> OutputPaths {
        self.paths_at(&chrono::Local::now())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn paths_carry_stamp_and_suffix() {
        let config = OutputConfig {
            json_prefix: "out/".into(),
            csv_prefix: "out/".into(),
            log_prefix: "logs/run_".into(),
        };
        let now = Utc.with_ymd_and_hms(2026, 3, 9, 14, 5, 0).unwrap();

        assert_eq!(
            config.paths_at(&now),
            OutputPaths {
                json: PathBuf::from("out/2026-03-09_0205_PlansAndCases.json"),
                csv: PathBuf::from("out/2026-03-09_0205_PlansAndCases.csv"),
                log: PathBuf::from("logs/run_2026-03-09_0205_ExLog.txt"),
            }
        );
    }
}
