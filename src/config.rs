//! Simulator configuration
//!
//! Everything here has a sensible default, so an empty JSON object (or no
//! config at all) gives the stock classroom setup. The browser reads an
//! optional `<script type="application/json" id="gitlearn-config">`; the
//! CLI takes `--config <path>`.

use serde::{Deserialize, Serialize};

use crate::error::GitLearnResult;

/// Maximum lines kept in the transcript. Oldest lines are dropped first.
pub const DEFAULT_TRANSCRIPT_LINES: usize = 1000;

/// Maximum command history entries.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Tunables for a simulator session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Prompt echoed before each submitted line
    pub prompt: String,
    /// Branch that exists when the session starts
    pub default_branch: String,
    /// Author shown by `log`/`show` when `user.name` is not configured
    pub author_name: String,
    /// Author email shown when `user.email` is not configured
    pub author_email: String,
    pub history_limit: usize,
    pub transcript_limit: usize,
    /// Lines printed when the terminal boots
    pub welcome: Vec<String>,
    pub dom: DomConfig,
}

/// Element ids and selectors the web adapter binds to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    pub input_id: String,
    pub output_id: String,
    /// Section revealed when a mission button is clicked
    pub section_id: String,
    pub mission_button_selector: String,
    /// Class applied to each transcript line element
    pub line_class: String,
}

impl SimConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> GitLearnResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Author line used by `log` and `show`
    pub fn author(&self) -> String {
        format!("{} <{}>", self.author_name, self.author_email)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            prompt: "$ ".to_string(),
            default_branch: "main".to_string(),
            author_name: "GitLearn User".to_string(),
            author_email: "user@gitlearn.com".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            transcript_limit: DEFAULT_TRANSCRIPT_LINES,
            welcome: vec![
                "Welcome to the Git Master terminal!".to_string(),
                "Type 'help' for available commands, or 'mission 1' to begin.".to_string(),
                String::new(),
            ],
            dom: DomConfig::default(),
        }
    }
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            input_id: "terminal-input".to_string(),
            output_id: "terminal-output".to_string(),
            section_id: "terminal".to_string(),
            mission_button_selector: ".mission-btn".to_string(),
            line_class: "mb-1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = SimConfig::from_json("{}").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            SimConfig::from_json(r#"{"default_branch": "trunk", "dom": {"input_id": "cmd"}}"#)
                .unwrap();
        assert_eq!(config.default_branch, "trunk");
        assert_eq!(config.dom.input_id, "cmd");
        assert_eq!(config.dom.output_id, "terminal-output");
        assert_eq!(config.prompt, "$ ");
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(SimConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_author() {
        assert_eq!(SimConfig::default().author(), "GitLearn User <user@gitlearn.com>");
    }
}
