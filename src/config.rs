//! Configuration types for the command router.
//!
//! Every table the router consults (trigger patterns, the site table, fixed
//! delays, canned phrases) lives here. A config value is built once at startup
//! and handed to the registry and dispatcher; nothing mutates it afterwards.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AriaError, Result};

/// Top-level configuration for the assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Canned phrases spoken by the assistant.
    pub speech: SpeechMessages,
    /// Trigger patterns per intent.
    pub commands: CommandPatterns,
    /// Site-name to URL table for the open-website intent, in match order.
    pub sites: Vec<SiteEntry>,
    /// Fixed URLs used by actions.
    pub urls: UrlConfig,
    /// Fixed delays.
    pub delays: DelayConfig,
    /// Joke pool for the joke intent.
    pub jokes: JokeConfig,
    /// Persistence settings.
    pub storage: StorageConfig,
}

/// Phrases spoken at fixed points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechMessages {
    /// Printed when the host starts.
    pub init_message: String,
    /// Printed when the host is ready for input.
    pub listening_message: String,
    /// Prefix spoken before a search query.
    pub search_message: String,
    /// Spoken by the greeting intent.
    pub greeting: String,
}

impl Default for SpeechMessages {
    fn default() -> Self {
        Self {
            init_message: "Initializing Virtual Assistant...".to_owned(),
            listening_message: "Listening...".to_owned(),
            search_message: "Searching for information about".to_owned(),
            greeting: "Hello Sir, How May I Help You?".to_owned(),
        }
    }
}

/// Trigger pattern lists, one per intent.
///
/// Patterns are lowercase substrings of the normalized utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandPatterns {
    pub greeting: Vec<String>,
    pub open_website: Vec<String>,
    pub search: Vec<String>,
    pub wikipedia: Vec<String>,
    pub time: Vec<String>,
    pub date: Vec<String>,
    pub weather: Vec<String>,
    pub calculator: Vec<String>,
    pub reminder: Vec<String>,
    pub joke: Vec<String>,
    pub news: Vec<String>,
}

fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| (*p).to_owned()).collect()
}

impl Default for CommandPatterns {
    fn default() -> Self {
        Self {
            greeting: owned(&["hey", "hello", "hi"]),
            open_website: owned(&["open"]),
            search: owned(&["what is", "who is", "what are", "how to", "where is"]),
            wikipedia: owned(&["wikipedia"]),
            time: owned(&["what time", "current time", "time now"]),
            date: owned(&["what date", "current date", "date today"]),
            weather: owned(&["weather", "temperature", "forecast"]),
            calculator: owned(&["calculator", "compute", "calculate"]),
            reminder: owned(&["remind me", "set reminder", "reminder"]),
            joke: owned(&["tell joke", "tell me a joke", "joke"]),
            news: owned(&["news", "latest news", "headlines"]),
        }
    }
}

/// One row of the site table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEntry {
    /// Lowercase site name matched as a substring of the utterance.
    pub name: String,
    /// URL opened when the name matches.
    pub url: String,
}

impl SiteEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Default site table, in match order.
pub fn default_sites() -> Vec<SiteEntry> {
    vec![
        SiteEntry::new("google", "https://google.com"),
        SiteEntry::new("youtube", "https://youtube.com"),
        SiteEntry::new("facebook", "https://facebook.com"),
        SiteEntry::new("twitter", "https://twitter.com"),
        SiteEntry::new("instagram", "https://instagram.com"),
        SiteEntry::new("linkedin", "https://linkedin.com"),
        SiteEntry::new("github", "https://github.com"),
    ]
}

/// Fixed URLs consulted by actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Wikipedia article base; the encoded search term is appended.
    pub wikipedia: String,
    /// Web search base; the encoded query is appended.
    pub search: String,
    /// Local calculator view opened when no expression is given.
    pub calculator_view: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            wikipedia: "https://en.wikipedia.org/wiki/".to_owned(),
            search: "https://www.google.com/search?q=".to_owned(),
            calculator_view: "calculator.html".to_owned(),
        }
    }
}

/// Fixed delays, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    /// Simulated latency of the news provider.
    pub news_fetch_ms: u64,
    /// Simulated latency of the weather provider.
    pub weather_fetch_ms: u64,
    /// Delay before a reminder alert fires.
    pub reminder_alert_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            news_fetch_ms: 1000,
            weather_fetch_ms: 500,
            reminder_alert_ms: 5000,
        }
    }
}

impl DelayConfig {
    pub fn news_fetch(&self) -> Duration {
        Duration::from_millis(self.news_fetch_ms)
    }

    pub fn weather_fetch(&self) -> Duration {
        Duration::from_millis(self.weather_fetch_ms)
    }

    pub fn reminder_alert(&self) -> Duration {
        Duration::from_millis(self.reminder_alert_ms)
    }
}

/// Joke pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JokeConfig {
    pub pool: Vec<String>,
}

impl Default for JokeConfig {
    fn default() -> Self {
        Self {
            pool: owned(&[
                "Why don't programmers like nature? It has too many bugs.",
                "Why did the computer go to the doctor? Because it had a virus!",
                "What's a computer's favorite beat? An algorithm!",
                "Why do programmers always mix up Halloween and Christmas? Because Oct 31 equals Dec 25!",
            ]),
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key holding the JSON array of reminders.
    pub reminders_key: String,
    /// Store file (None = `aria_dirs::store_file()`).
    pub store_path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            reminders_key: "reminders".to_owned(),
            store_path: None,
        }
    }
}

impl StorageConfig {
    /// Resolved store file path.
    pub fn resolved_store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(crate::aria_dirs::store_file)
    }
}

impl AssistantConfig {
    /// Default configuration with the built-in site table.
    ///
    /// `Default` leaves `sites` empty so that a TOML file listing its own
    /// sites does not get the built-in rows merged in.
    pub fn builtin() -> Self {
        Self {
            sites: default_sites(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// A file without a `[[sites]]` table gets the built-in site table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self =
            toml::from_str(&content).map_err(|e| AriaError::Config(e.to_string()))?;
        if config.sites.is_empty() {
            config.sites = default_sites();
        }
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AriaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `aria_dirs::config_dir()/config.toml`.
    pub fn default_config_path() -> PathBuf {
        crate::aria_dirs::config_dir().join("config.toml")
    }

    /// Check the tables the router relies on.
    ///
    /// # Errors
    ///
    /// Returns [`AriaError::Config`] naming the first offending table.
    pub fn validate(&self) -> Result<()> {
        let c = &self.commands;
        let lists: [(&str, &[String]); 11] = [
            ("greeting", &c.greeting),
            ("open_website", &c.open_website),
            ("search", &c.search),
            ("wikipedia", &c.wikipedia),
            ("time", &c.time),
            ("date", &c.date),
            ("weather", &c.weather),
            ("calculator", &c.calculator),
            ("reminder", &c.reminder),
            ("joke", &c.joke),
            ("news", &c.news),
        ];
        for (name, patterns) in lists {
            if patterns.is_empty() {
                return Err(AriaError::Config(format!("commands.{name} has no patterns")));
            }
            if let Some(bad) = patterns
                .iter()
                .find(|p| p.trim().is_empty() || p.to_lowercase() != **p)
            {
                return Err(AriaError::Config(format!(
                    "commands.{name}: pattern {bad:?} must be non-empty lowercase"
                )));
            }
        }
        if let Some(site) = self
            .sites
            .iter()
            .find(|s| s.name.is_empty() || s.name.to_lowercase() != s.name)
        {
            return Err(AriaError::Config(format!(
                "site name {:?} must be non-empty lowercase",
                site.name
            )));
        }
        if self.jokes.pool.is_empty() {
            return Err(AriaError::Config("jokes.pool is empty".to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_is_valid() {
        let config = AssistantConfig::builtin();
        assert!(config.validate().is_ok());
        assert_eq!(config.sites.len(), 7);
        assert_eq!(config.sites[0].name, "google");
        assert_eq!(config.delays.reminder_alert_ms, 5000);
        assert_eq!(config.storage.reminders_key, "reminders");
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AssistantConfig::builtin();
        config.speech.greeting = "Good day".to_owned();
        config.delays.news_fetch_ms = 10;
        config.sites.push(SiteEntry::new("reddit", "https://reddit.com"));

        config.save_to_file(&path).expect("save");
        let loaded = AssistantConfig::from_file(&path).expect("load");

        assert_eq!(loaded.speech.greeting, "Good day");
        assert_eq!(loaded.delays.news_fetch_ms, 10);
        assert_eq!(loaded.sites.last().map(|s| s.name.as_str()), Some("reddit"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[speech]\ngreeting = \"Yo\"\n").expect("write");

        let loaded = AssistantConfig::from_file(&path).expect("load");
        assert_eq!(loaded.speech.greeting, "Yo");
        assert_eq!(loaded.commands.greeting, vec!["hey", "hello", "hi"]);
        assert_eq!(loaded.sites, default_sites());
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = AssistantConfig::from_file(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").expect("write");

        assert!(matches!(
            AssistantConfig::from_file(&path),
            Err(AriaError::Config(_))
        ));
    }

    #[test]
    fn validate_rejects_uppercase_pattern() {
        let mut config = AssistantConfig::builtin();
        config.commands.news = vec!["News".to_owned()];
        assert!(matches!(config.validate(), Err(AriaError::Config(_))));
    }

    #[test]
    fn validate_rejects_empty_pattern_list() {
        let mut config = AssistantConfig::builtin();
        config.commands.search.clear();
        assert!(matches!(config.validate(), Err(AriaError::Config(_))));
    }

    #[test]
    fn validate_rejects_empty_joke_pool() {
        let mut config = AssistantConfig::builtin();
        config.jokes.pool.clear();
        assert!(matches!(config.validate(), Err(AriaError::Config(_))));
    }

    #[test]
    fn delay_accessors_convert_millis() {
        let delays = DelayConfig::default();
        assert_eq!(delays.reminder_alert(), Duration::from_secs(5));
        assert_eq!(delays.news_fetch(), Duration::from_secs(1));
    }
}
