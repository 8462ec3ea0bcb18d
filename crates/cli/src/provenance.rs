use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run parameters and results recorded next to a written polygon.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub input: String,
    pub points: usize,
    pub objective: &'static str,
    pub max_insertions: Option<usize>,
    pub hull_area: i64,
    pub area: i64,
    pub valid: bool,
    pub inserted: usize,
    pub stop: String,
}

/// Write `<artifact stem>.provenance.json` with the git commit, callsite,
/// run summary and the artifact path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, summary: &RunSummary) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": polyarea::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "run": summary,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance written");
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("polygon"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then the runtime variable, then `git rev-parse`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|r| !r.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn summary() -> RunSummary {
        RunSummary {
            input: "square-instance.txt".into(),
            points: 5,
            objective: "min",
            max_insertions: None,
            hull_area: 4,
            area: 3,
            valid: true,
            inserted: 1,
            stop: "Complete".into(),
        }
    }

    #[test]
    fn provenance_path_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/out/square-min.txt"));
        assert_eq!(derived, Path::new("/tmp/out/square-min.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_run_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("square-min.txt");
        fs::write(&artifact, "3\n4\n0\n1\n2\n").unwrap();
        let prov_path = write_sidecar(&artifact, &summary()).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["run"]["area"], 3);
        assert_eq!(parsed["run"]["objective"], "min");
        assert!(parsed["run"]["max_insertions"].is_null());
    }
}
