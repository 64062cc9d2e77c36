//! Ordered intent registry.
//!
//! Iteration order is match priority: the first registered intent whose
//! patterns match wins. The registry is filled once at startup and only read
//! afterwards.

use std::sync::Arc;

use crate::config::{AssistantConfig, CommandPatterns};

use super::{Intent, IntentAction, IntentKind};

/// An intent name was registered twice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("intent {name:?} is already registered")]
pub struct DuplicateIntentError {
    pub name: String,
}

/// Intents in registration (= priority) order.
#[derive(Debug, Clone, Default)]
pub struct IntentRegistry {
    intents: Vec<Intent>,
}

impl IntentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in intents in default order with patterns from `config`.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, DuplicateIntentError> {
        let mut registry = Self::new();
        for kind in IntentKind::ALL {
            registry.register(
                kind.name(),
                patterns_for(kind, &config.commands),
                Arc::new(kind),
            )?;
        }
        Ok(registry)
    }

    /// Append an intent at the lowest priority.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateIntentError`] if `name` is already registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        patterns: impl IntoIterator<Item = impl AsRef<str>>,
        action: Arc<dyn IntentAction>,
    ) -> Result<(), DuplicateIntentError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(DuplicateIntentError { name });
        }
        self.intents.push(Intent::new(name, patterns, action));
        Ok(())
    }

    /// All intents in registration order.
    pub fn all(&self) -> &[Intent] {
        &self.intents
    }

    pub fn get(&self, name: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.name() == name)
    }

    /// First intent with a pattern contained in `normalized`.
    pub fn find_match(&self, normalized: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.matches(normalized))
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

fn patterns_for(kind: IntentKind, c: &CommandPatterns) -> &[String] {
    match kind {
        IntentKind::Greeting => &c.greeting,
        IntentKind::OpenWebsite => &c.open_website,
        IntentKind::Search => &c.search,
        IntentKind::Wikipedia => &c.wikipedia,
        IntentKind::Time => &c.time,
        IntentKind::Date => &c.date,
        IntentKind::Weather => &c.weather,
        IntentKind::Calculator => &c.calculator,
        IntentKind::Reminder => &c.reminder,
        IntentKind::Joke => &c.joke,
        IntentKind::News => &c.news,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> IntentRegistry {
        IntentRegistry::from_config(&AssistantConfig::builtin()).expect("registry")
    }

    #[test]
    fn default_order_is_preserved() {
        let registry = builtin();
        let names: Vec<&str> = registry.all().iter().map(Intent::name).collect();
        assert_eq!(
            names,
            vec![
                "greeting",
                "openWebsite",
                "search",
                "wikipedia",
                "time",
                "date",
                "weather",
                "calculator",
                "reminder",
                "jokes",
                "news",
            ]
        );
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = builtin();
        let err = registry
            .register("news", ["headline"], Arc::new(IntentKind::News))
            .expect_err("duplicate");
        assert_eq!(err.name, "news");
        assert_eq!(registry.len(), IntentKind::ALL.len());
    }

    #[test]
    fn earlier_registration_wins() {
        let registry = builtin();
        // "open" (openWebsite) is registered before "what is" (search).
        let hit = registry.find_match("what is open source").expect("match");
        assert_eq!(hit.name(), "openWebsite");
    }

    #[test]
    fn reordering_changes_routing() {
        let mut registry = IntentRegistry::new();
        registry
            .register("search", ["what is"], Arc::new(IntentKind::Search))
            .expect("register");
        registry
            .register("openWebsite", ["open"], Arc::new(IntentKind::OpenWebsite))
            .expect("register");
        let hit = registry.find_match("what is open source").expect("match");
        assert_eq!(hit.name(), "search");
    }

    #[test]
    fn greeting_substring_shadows_later_intents() {
        // "this" contains "hi", so the greeting intent wins.
        let registry = builtin();
        let hit = registry.find_match("what is this").expect("match");
        assert_eq!(hit.name(), "greeting");
    }

    #[test]
    fn unmatched_utterance_finds_nothing() {
        assert!(builtin().find_match("asdkjasd").is_none());
    }
}
