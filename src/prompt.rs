use crate::error::{BddGenError, Result};

/// Instruction block placed ahead of the user's requirements.
pub const SYSTEM_PROMPT: &str = "You generate BDD test scenarios in Gherkin.
- Use: Feature / Scenario / Given-When-Then
- Include at least one positive and one negative scenario.
- Domain: generic sample web app with login and dashboard.
Return ONLY valid Gherkin text, no explanations.";

/// Requirements used when the user supplies none.
pub const SAMPLE_REQUIREMENTS: &str = "The system must allow a registered user to log in with a valid email and password
and redirect to a dashboard on success. If credentials are invalid, an error message
must be displayed and the user must remain on the login page.
";

/// Free-text business requirements that are known not to be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementsText(String);

impl RequirementsText {
    /// Rejects text that is empty or whitespace only.
    ///
    /// The original text is kept as typed; only the blank check trims.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(BddGenError::EmptyRequirements);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Composes the single completion request sent to the backend.
pub fn build_prompt(requirements: &RequirementsText) -> String {
    compose(requirements.as_str())
}

fn compose(requirements: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\nUser requirements:\n{requirements}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_requirements_are_rejected() {
        for text in ["", "   ", "\n\t \n"] {
            let err = RequirementsText::new(text).unwrap_err();
            assert!(matches!(err, BddGenError::EmptyRequirements));
        }
    }

    #[test]
    fn requirements_keep_original_text() {
        let reqs = RequirementsText::new("  users can approve orders \n").unwrap();
        assert_eq!(reqs.as_str(), "  users can approve orders \n");
    }

    #[test]
    fn prompt_places_requirements_after_instructions() {
        let reqs = RequirementsText::new("Users can reset their password").unwrap();
        let prompt = build_prompt(&reqs);

        assert!(prompt.starts_with("You generate BDD test scenarios in Gherkin."));
        assert!(prompt.contains("at least one positive and one negative scenario"));
        assert!(prompt.contains("Return ONLY valid Gherkin text"));
        assert!(prompt.ends_with("\n\nUser requirements:\nUsers can reset their password"));
    }

    #[test]
    fn empty_text_still_yields_a_prompt() {
        let prompt = compose("");
        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert!(prompt.ends_with("User requirements:\n"));
    }

    #[test]
    fn sample_requirements_are_usable() {
        assert!(RequirementsText::new(SAMPLE_REQUIREMENTS).is_ok());
    }
}
