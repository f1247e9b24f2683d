//! Test helpers for laying out POI files and configuration on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Granada document in the on-disk configuration format.
pub(super) const GRANADA_CONFIG: &str = r#"{
    "Granada": {
        "Alhambra Complex": {
            "included_attractions": ["Alhambra", "Generalife", "Palace of Charles V"],
            "core_attraction": "Alhambra",
            "excluded_attractions": ["Alhambra Palace Hotel"],
            "must_visit_together": true,
            "visit_duration_hours": 4.0,
            "neighborhood": "Alhambra Hill"
        },
        "Cathedral Quarter": {
            "included_attractions": ["Granada Cathedral", "Royal Chapel"]
        }
    },
    "neighborhoods": {
        "Granada": {
            "Albaicin": ["Mirador de San Nicolas", "Banuelo"],
            "Centro": ["Granada Cathedral", "Royal Chapel", "Corral del Carbon"]
        }
    }
}"#;

/// Temporary directory holding a scenario's input files.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write the Granada configuration and return its path.
    pub(super) fn granada_config(&self) -> Utf8PathBuf {
        let path = self.path("compound_attractions.json");
        write_utf8(&path, GRANADA_CONFIG.as_bytes());
        path
    }

    /// Write a POI array for Granada with the given names and return its path.
    pub(super) fn granada_pois(&self, names: &[&str]) -> Utf8PathBuf {
        let records: Vec<serde_json::Value> = names
            .iter()
            .map(|name| serde_json::json!({ "name": name, "city": "Granada" }))
            .collect();
        let payload = serde_json::to_vec_pretty(&records).expect("serialize POIs");
        let path = self.path("pois.json");
        write_utf8(&path, &payload);
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Names per day from a plan document.
pub(super) fn day_names(report: &serde_json::Value) -> Vec<Vec<String>> {
    report["days"]
        .as_array()
        .expect("days array")
        .iter()
        .map(|day| {
            day.as_array()
                .expect("day array")
                .iter()
                .map(|poi| poi["name"].as_str().expect("POI name").to_owned())
                .collect()
        })
        .collect()
}
