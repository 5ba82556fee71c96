use std::path::PathBuf;

use align_config::{AlignConfig, OutputPaths, ScanConfig};
use serde::Serialize;

use crate::cli::OverrideArgs;

/// Effective settings for one run: configuration plus operator overrides.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub collection_url: String,
    pub destination_project: String,
    pub snapshot: String,
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
    pub log_path: PathBuf,
    pub marker: String,
    pub area_delimiter: char,
}

impl Settings {
    #[must_use]
    pub fn resolve(config: &AlignConfig, overrides: &OverrideArgs, paths: OutputPaths) -> Self {
        let pick = |value: &Option<String>, fallback: &str| {
            value.clone().unwrap_or_else(|| fallback.to_string())
        };
        let pick_path = |value: &Option<String>, fallback: PathBuf| {
            value.as_ref().map_or(fallback, PathBuf::from)
        };

        Self {
            collection_url: config.collection.url.clone(),
            destination_project: pick(&overrides.project_name, &config.collection.destination_project),
            snapshot: pick(&overrides.snapshot, &config.collection.snapshot),
            json_path: pick_path(&overrides.json, paths.json),
            csv_path: pick_path(&overrides.csv, paths.csv),
            log_path: pick_path(&overrides.log, paths.log),
            marker: config.scan.marker.clone(),
            area_delimiter: config.scan.area_delimiter,
        }
    }

    #[must_use]
    pub fn scan(&self) -> ScanConfig {
        ScanConfig {
            marker: self.marker.clone(),
            area_delimiter: self.area_delimiter,
        }
    }

    /// Fail unless a project and a snapshot are known.
    ///
    /// # Errors
    ///
    /// Names the missing setting and how to provide it.
    pub fn require_collection(&self) -> anyhow::Result<()> {
        if self.destination_project.is_empty() {
            anyhow::bail!(
                "no destination project: set collection.destination_project, ALIGN_COLLECTION__DESTINATION_PROJECT, or --project-name"
            );
        }
        if self.snapshot.is_empty() {
            anyhow::bail!(
                "no collection snapshot: set collection.snapshot, ALIGN_COLLECTION__SNAPSHOT, or --snapshot"
            );
        }
        Ok(())
    }
}

/// Load layered configuration, including `.env`.
pub fn load_config() -> anyhow::Result<AlignConfig> {
    AlignConfig::load_with_dotenv().map_err(anyhow::Error::from)
}

#[cfg(test)]
mod tests {
    use align_config::OutputConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> AlignConfig {
        let mut config = AlignConfig::default();
        config.collection.destination_project = "ProjB".into();
        config.collection.snapshot = "collection.json".into();
        config.output = OutputConfig {
            json_prefix: "out/".into(),
            csv_prefix: "out/".into(),
            log_prefix: "log/".into(),
        };
        config
    }

    fn paths() -> OutputPaths {
        OutputPaths {
            json: PathBuf::from("out/stamp_PlansAndCases.json"),
            csv: PathBuf::from("out/stamp_PlansAndCases.csv"),
            log: PathBuf::from("log/stamp_ExLog.txt"),
        }
    }

    #[test]
    fn config_values_are_used_without_overrides() {
        let settings = Settings::resolve(&config(), &OverrideArgs::default(), paths());
        assert_eq!(settings.destination_project, "ProjB");
        assert_eq!(settings.json_path, PathBuf::from("out/stamp_PlansAndCases.json"));
        assert_eq!(settings.marker, "TF237027");
        assert!(settings.require_collection().is_ok());
    }

    #[test]
    fn overrides_win() {
        let overrides = OverrideArgs {
            snapshot: Some("other.json".into()),
            project_name: Some("ProjC".into()),
            json: Some("a.json".into()),
            csv: None,
            log: Some("run.log".into()),
        };
        let settings = Settings::resolve(&config(), &overrides, paths());
        assert_eq!(settings.snapshot, "other.json");
        assert_eq!(settings.destination_project, "ProjC");
        assert_eq!(settings.json_path, PathBuf::from("a.json"));
        assert_eq!(settings.csv_path, PathBuf::from("out/stamp_PlansAndCases.csv"));
        assert_eq!(settings.log_path, PathBuf::from("run.log"));
    }

    #[test]
    fn missing_project_is_reported() {
        let settings = Settings::resolve(&AlignConfig::default(), &OverrideArgs::default(), paths());
        let err = settings.require_collection().unwrap_err();
        assert!(err.to_string().contains("destination project"));
    }
}
