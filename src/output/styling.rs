use console::{style, StyledObject};
use std::fmt::Display;

/// Section heading: emoji plus underlined title, both bright.
pub fn section_heading(emoji: &str, title: &str) -> String {
    format!("{} {}", style(emoji).bright(), style(title).bright().underlined())
}

pub fn tool_name(text: impl Display) -> StyledObject<String> {
    style(text.to_string()).magenta().bold()
}

/// Secondary detail: versions, timestamps, the raw completion echo.
pub fn muted(text: impl Display) -> StyledObject<String> {
    style(text.to_string()).dim()
}

pub fn scenario_label(text: impl Display) -> StyledObject<String> {
    style(text.to_string()).cyan()
}

/// In-flight phases and "nothing selected" notices.
pub fn pending(text: impl Display) -> StyledObject<String> {
    style(text.to_string()).bright().yellow()
}

pub fn succeeded(text: impl Display) -> StyledObject<String> {
    style(text.to_string()).bright().green()
}

pub fn failed(text: impl Display) -> StyledObject<String> {
    style(text.to_string()).bright().red()
}
