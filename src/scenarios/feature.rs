use serde::{Deserialize, Serialize};

use super::ScenarioBlock;

pub const FEATURE_FILE_NAME: &str = "login_happy.feature";
pub const FEATURE_FILE_MIME: &str = "text/plain";

const INDENT: &str = "  ";

/// Narrative written at the top of the generated feature file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeatureHeader {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_as_a")]
    pub as_a: String,

    #[serde(default = "default_i_want_to")]
    pub i_want_to: String,

    #[serde(default = "default_so_that")]
    pub so_that: String,
}

impl Default for FeatureHeader {
    fn default() -> Self {
        Self {
            title: default_title(),
            as_a: default_as_a(),
            i_want_to: default_i_want_to(),
            so_that: default_so_that(),
        }
    }
}

fn default_title() -> String {
    "LLM generated login flows".to_string()
}

fn default_as_a() -> String {
    "user of the sample web app".to_string()
}

fn default_i_want_to() -> String {
    "login and access the dashboard".to_string()
}

fn default_so_that() -> String {
    "I can use the application features".to_string()
}

impl FeatureHeader {
    fn render(&self) -> String {
        format!(
            "Feature: {}\n{INDENT}As a {}\n{INDENT}I want to {}\n{INDENT}So that {}\n\n",
            self.title, self.as_a, self.i_want_to, self.so_that
        )
    }
}

/// Feature file content assembled from the selected happy-path scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFile {
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
}

impl FeatureFile {
    /// Renders with the default header and file name.
    pub fn render(happy: &[ScenarioBlock]) -> Self {
        Self::render_with(happy, &FeatureHeader::default(), FEATURE_FILE_NAME)
    }

    pub fn render_with(happy: &[ScenarioBlock], header: &FeatureHeader, file_name: &str) -> Self {
        let mut content = header.render();
        for block in happy {
            content.push_str(&indent_block(block));
            content.push_str("\n\n");
        }

        Self {
            file_name: file_name.to_string(),
            mime_type: FEATURE_FILE_MIME.to_string(),
            content,
        }
    }
}

// Blank lines stay empty rather than becoming indentation-only lines.
fn indent_block(block: &ScenarioBlock) -> String {
    block
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
