mod classifier;
mod feature;
mod pipeline;
mod splitter;
mod validator;

use serde::{Deserialize, Serialize};

pub use classifier::HappyPathRules;
pub use feature::{FeatureFile, FeatureHeader, FEATURE_FILE_MIME, FEATURE_FILE_NAME};
pub use pipeline::{process, process_with, PipelineResult, ScenarioSummary};

/// One "Scenario:" unit cut out of generated Gherkin text.
///
/// Holds the block text with surrounding whitespace trimmed; interior lines
/// are kept verbatim and in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioBlock(String);

impl ScenarioBlock {
    pub(crate) fn from_lines(lines: &[&str]) -> Option<Self> {
        let text = lines.join("\n");
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }

    /// The `Scenario:` line, or the first line of a preamble block.
    pub fn title(&self) -> &str {
        self.lines().next().map_or("", str::trim)
    }
}

impl std::fmt::Display for ScenarioBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_produce_no_block() {
        assert!(ScenarioBlock::from_lines(&["", "   ", ""]).is_none());
    }

    #[test]
    fn block_is_trimmed_but_interior_kept() {
        let block =
            ScenarioBlock::from_lines(&["", "Scenario: A", "", "  Given x", "  "]).unwrap();
        assert_eq!(block.as_str(), "Scenario: A\n\n  Given x");
        assert_eq!(block.title(), "Scenario: A");
    }

    #[test]
    fn block_serializes_as_plain_string() {
        let block = ScenarioBlock::from_lines(&["Scenario: A"]).unwrap();
        assert_eq!(serde_json::to_string(&block).unwrap(), "\"Scenario: A\"");
    }
}
