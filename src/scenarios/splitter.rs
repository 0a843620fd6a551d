use super::ScenarioBlock;

pub const SCENARIO_MARKER: &str = "Scenario:";

fn is_scenario_start(line: &str) -> bool {
    line.trim().starts_with(SCENARIO_MARKER)
}

/// Splits into lines, also breaking on a lone `\r`, with `\r\n` as one break.
/// A trailing terminator does not produce an empty final line.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Partitions generated Gherkin text into scenario blocks.
///
/// A new block starts at every line whose trimmed content begins with
/// `Scenario:`. Lines before the first marker (`Feature:`, `Background:`...)
/// form a leading preamble block. Blocks that are blank after trimming are
/// not emitted, so empty input yields no blocks.
pub fn split_scenarios(text: &str) -> Vec<ScenarioBlock> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in split_lines(text) {
        if is_scenario_start(line) && !current.is_empty() {
            blocks.extend(ScenarioBlock::from_lines(&current));
            current.clear();
        }
        current.push(line);
    }

    blocks.extend(ScenarioBlock::from_lines(&current));
    blocks
}
