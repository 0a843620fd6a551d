use super::ScenarioBlock;

const REQUIRED_STEP_KEYWORDS: [&str; 3] = ["Given", "When", "Then"];

/// Coarse structural check: the block mentions `Given`, `When` and `Then`
/// somewhere, case-sensitively. Step order and Gherkin syntax are not checked.
pub fn is_valid(block: &ScenarioBlock) -> bool {
    let text = block.as_str();
    REQUIRED_STEP_KEYWORDS.iter().all(|k| text.contains(k))
}
