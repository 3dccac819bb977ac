use crate::catalog::builtin::BUILTIN_PROFILES;

/// Runtime settings for the interactive shell.
///
/// Nothing is read from files or the environment; callers start from
/// [`Config::default`] and override what they need.
///
/// # Example
///
/// ```
/// use paradigm_db::Config;
///
/// let config = Config::default()
///     .with_default_profile("Couchbase")
///     .with_log_level("debug");
///
/// assert_eq!(config.default_profile, "Couchbase");
/// assert_eq!(config.prompt, "DB> ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Profile selected at startup.
    pub default_profile: String,

    /// Prompt printed before each command.
    pub prompt: String,

    /// `tracing` filter directive, e.g. `warn` or `paradigm_db=debug`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: BUILTIN_PROFILES[0].name.to_string(),
            prompt: "DB> ".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn with_default_profile(mut self, name: impl Into<String>) -> Self {
        self.default_profile = name.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}
