use serde::{Deserialize, Deserializer, Serialize};

use super::ScenarioBlock;

pub const DEFAULT_ACTIONS: [&str; 3] = ["login", "submit", "approve"];

/// Lexical rules that decide whether a valid scenario is a happy path.
///
/// Both predicates are plain case-insensitive substring checks. They stand in
/// for real intent detection and accept the false positives and negatives
/// that come with that (e.g. "succeeds" does not count as "success").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HappyPathRules {
    /// Domain action keywords, matched anywhere in the block
    #[serde(default = "default_actions", deserialize_with = "deserialize_actions")]
    pub actions: Vec<String>,
}

impl Default for HappyPathRules {
    fn default() -> Self {
        Self {
            actions: default_actions(),
        }
    }
}

fn default_actions() -> Vec<String> {
    DEFAULT_ACTIONS.iter().map(|a| (*a).to_string()).collect()
}

// Keywords are trimmed and lower-cased; blank entries would match every block.
fn normalize_actions<I, S>(actions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    actions
        .into_iter()
        .map(|a| a.as_ref().trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect()
}

fn deserialize_actions<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(normalize_actions(raw))
}

impl HappyPathRules {
    pub fn new<I, S>(actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            actions: normalize_actions(actions),
        }
    }

    pub fn contains_known_action(&self, block: &ScenarioBlock) -> bool {
        let lower = block.as_str().to_lowercase();
        self.actions.iter().any(|action| lower.contains(action.as_str()))
    }

    pub fn is_happy(&self, block: &ScenarioBlock) -> bool {
        self.contains_known_action(block) && signals_success(block)
    }
}

/// "happy path" anywhere, or both "success" and "valid" anywhere.
pub fn signals_success(block: &ScenarioBlock) -> bool {
    let lower = block.as_str().to_lowercase();
    lower.contains("happy path") || (lower.contains("success") && lower.contains("valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str) -> ScenarioBlock {
        ScenarioBlock::from_lines(&text.lines().collect::<Vec<_>>()).unwrap()
    }

    mod contains_known_action {
        use super::*;

        #[test]
        fn matches_any_default_action_case_insensitively() {
            let rules = HappyPathRules::default();
            assert!(rules.contains_known_action(&block("User LOGS IN via Login form")));
            assert!(rules.contains_known_action(&block("When they Submit the form")));
            assert!(rules.contains_known_action(&block("Manager approves: APPROVE")));
        }

        #[test]
        fn matches_inside_longer_words() {
            let rules = HappyPathRules::default();
            assert!(rules.contains_known_action(&block("the submitted order")));
        }

        #[test]
        fn rejects_text_without_actions() {
            let rules = HappyPathRules::default();
            assert!(!rules.contains_known_action(&block("Given a cart\nThen it is empty")));
        }

        #[test]
        fn custom_actions_replace_defaults() {
            let rules = HappyPathRules::new(["Checkout", "  ", "refund"]);
            assert_eq!(rules.actions, vec!["checkout", "refund"]);
            assert!(rules.contains_known_action(&block("When they CHECKOUT")));
            assert!(!rules.contains_known_action(&block("When they login")));
        }
    }

    mod signals_success {
        use super::*;

        #[test]
        fn happy_path_phrase_is_enough() {
            assert!(signals_success(&block("Scenario: Happy Path login")));
        }

        #[test]
        fn needs_both_success_and_valid() {
            assert!(signals_success(&block("valid credentials ... SUCCESS message")));
            assert!(!signals_success(&block("a success message")));
            assert!(!signals_success(&block("valid credentials")));
        }

        #[test]
        fn invalid_contains_valid() {
            assert!(signals_success(&block("invalid password shows no success")));
        }

        #[test]
        fn succeeds_is_not_success() {
            assert!(!signals_success(&block("login succeeds with valid user")));
        }
    }

    #[test]
    fn happy_requires_both_predicates() {
        let rules = HappyPathRules::default();
        assert!(rules.is_happy(&block(
            "Scenario: Successful login\nGiven a valid user\nWhen they submit\nThen success"
        )));
        assert!(!rules.is_happy(&block("Scenario: Happy path checkout")));
        assert!(!rules.is_happy(&block("Scenario: login\nThen an error is shown")));
    }

    #[test]
    fn rules_deserialize_with_defaults() {
        let rules: HappyPathRules = toml::from_str("").unwrap();
        assert_eq!(rules, HappyPathRules::default());
    }

    mod deserialized_actions {
        use super::*;

        #[test]
        fn blank_keywords_are_dropped() {
            let rules: HappyPathRules = toml::from_str(r#"actions = ["", "  "]"#).unwrap();
            assert!(rules.actions.is_empty());

            let pay = block("Scenario: Pay\nGiven a valid cart\nWhen paid\nThen success");
            assert!(!rules.contains_known_action(&pay));
            assert!(!rules.is_happy(&pay));
        }

        #[test]
        fn padded_and_mixed_case_keywords_match() {
            let rules: HappyPathRules =
                toml::from_str(r#"actions = ["", " Checkout "]"#).unwrap();
            assert_eq!(rules.actions, vec!["checkout"]);
            assert!(rules.contains_known_action(&block("When they checkout the cart")));
        }

        #[test]
        fn same_result_as_constructor() {
            let loaded: HappyPathRules =
                serde_json::from_str(r#"{ "actions": [" Approve", "REJECT "] }"#).unwrap();
            assert_eq!(loaded, HappyPathRules::new(["Approve", "REJECT"]));
        }
    }
}
