use log::debug;
use serde::{Deserialize, Serialize};

use super::classifier::HappyPathRules;
use super::splitter::split_scenarios;
use super::validator::is_valid;
use super::ScenarioBlock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub total: usize,
    pub valid: usize,
    pub happy: usize,
    /// Every happy scenario names a known action. Holds by construction.
    pub has_required_actions: bool,
}

/// Outcome of one pass over a generated completion.
///
/// `valid` is a subsequence of `all` and `happy` a subsequence of `valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub all: Vec<ScenarioBlock>,
    pub valid: Vec<ScenarioBlock>,
    pub happy: Vec<ScenarioBlock>,
    pub summary: ScenarioSummary,
}

/// Splits, validates and classifies a raw completion with the default rules.
pub fn process(raw_completion: &str) -> PipelineResult {
    process_with(raw_completion, &HappyPathRules::default())
}

pub fn process_with(raw_completion: &str, rules: &HappyPathRules) -> PipelineResult {
    let all = split_scenarios(raw_completion.trim());

    let valid: Vec<ScenarioBlock> = all.iter().filter(|b| is_valid(b)).cloned().collect();

    let happy: Vec<ScenarioBlock> = valid
        .iter()
        .filter(|b| rules.is_happy(b))
        .cloned()
        .collect();

    let summary = ScenarioSummary {
        total: all.len(),
        valid: valid.len(),
        happy: happy.len(),
        has_required_actions: happy.iter().all(|b| rules.contains_known_action(b)),
    };

    debug!(
        "Processed completion: {} blocks, {} valid, {} happy",
        summary.total, summary.valid, summary.happy
    );

    PipelineResult {
        all,
        valid,
        happy,
        summary,
    }
}
