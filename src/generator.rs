use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::prompt::{build_prompt, RequirementsText};
use crate::providers::CompletionBackend;
use crate::scenarios::{
    process_with, FeatureFile, FeatureHeader, HappyPathRules, PipelineResult, ScenarioBlock,
    ScenarioSummary, FEATURE_FILE_NAME,
};

/// Settings that shape the pipeline and the rendered feature file.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub rules: HappyPathRules,
    pub header: FeatureHeader,
    pub feature_file_name: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            rules: HappyPathRules::default(),
            header: FeatureHeader::default(),
            feature_file_name: FEATURE_FILE_NAME.to_string(),
        }
    }
}

/// Everything produced by one generation cycle, ready for display or export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub raw: String,
    pub summary: ScenarioSummary,
    pub all: Vec<ScenarioBlock>,
    pub valid: Vec<ScenarioBlock>,
    pub happy: Vec<ScenarioBlock>,
    pub artifact: FeatureFile,
}

/// Stages of a generation run, reported to a progress observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    BuildPrompt,
    Complete,
    Process,
}

/// Runs prompt build → completion → pipeline → render for one request.
///
/// Only the backend call can fail; the returned text is trimmed before it
/// reaches the pipeline.
pub async fn generate<B: CompletionBackend>(
    backend: &B,
    requirements: &RequirementsText,
    settings: &GenerationSettings,
    mut on_stage: impl FnMut(Stage),
) -> Result<GenerationReport> {
    on_stage(Stage::BuildPrompt);
    let prompt = build_prompt(requirements);

    on_stage(Stage::Complete);
    let raw = backend.complete(&prompt).await?.trim().to_string();
    info!("{} returned {} bytes of Gherkin", backend.name(), raw.len());

    on_stage(Stage::Process);
    let mut report = analyze(raw, settings);
    report.requirements = Some(requirements.as_str().to_string());
    report.backend = Some(backend.name().to_string());
    Ok(report)
}

/// Runs the pipeline over already generated text, without any backend.
pub fn analyze(raw: impl Into<String>, settings: &GenerationSettings) -> GenerationReport {
    let raw = raw.into().trim().to_string();
    let PipelineResult {
        all,
        valid,
        happy,
        summary,
    } = process_with(&raw, &settings.rules);

    let artifact = FeatureFile::render_with(&happy, &settings.header, &settings.feature_file_name);

    info!(
        "Selected {} happy-path scenarios out of {} ({} valid)",
        summary.happy, summary.total, summary.valid
    );

    GenerationReport {
        requirements: None,
        backend: None,
        generated_at: Utc::now(),
        raw,
        summary,
        all,
        valid,
        happy,
        artifact,
    }
}
