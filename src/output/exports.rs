use anyhow::{Context, Result};
use std::path::Path;

use bddgen::generator::GenerationReport;
use bddgen::scenarios::FeatureFile;

pub fn export_json(report: &GenerationReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// Writes the feature file, creating missing parent directories.
pub fn write_feature_file(artifact: &FeatureFile, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, &artifact.content)
        .with_context(|| format!("Failed to write feature file: {}", path.display()))?;

    log::info!(
        "Feature file ({}) written to: {}",
        artifact.mime_type,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bddgen::generator::{analyze, GenerationSettings};

    #[test]
    fn test_export_json_contains_summary_and_artifact() {
        let report = analyze(
            "Scenario: Happy path login\nGiven a user\nWhen they login\nThen done",
            &GenerationSettings::default(),
        );

        let json: serde_json::Value =
            serde_json::from_str(&export_json(&report, false).unwrap()).unwrap();

        assert_eq!(json["summary"]["total"], 1);
        assert_eq!(json["summary"]["valid"], 1);
        assert_eq!(json["summary"]["happy"], 1);
        assert_eq!(json["summary"]["has_required_actions"], true);
        assert_eq!(json["happy"][0], "Scenario: Happy path login\nGiven a user\nWhen they login\nThen done");
        assert_eq!(json["artifact"]["file_name"], "login_happy.feature");
        assert_eq!(json["artifact"]["mime_type"], "text/plain");
        assert!(json.get("requirements").is_none());
    }

    #[test]
    fn test_export_json_pretty() {
        let report = analyze("", &GenerationSettings::default());
        let json = export_json(&report, true).unwrap();
        assert!(json.contains("\n  \"summary\": {"));
    }

    #[test]
    fn test_write_feature_file_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("features").join("login_happy.feature");
        let artifact = FeatureFile::render(&[]);

        write_feature_file(&artifact, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, artifact.content);
    }
}
