//! Action handlers, one per built-in intent.
//!
//! Every handler receives the normalized (trimmed, lowercased) utterance and
//! does its own sub-parsing. Handlers that own a recoverable failure
//! (calculator, news) turn it into a spoken apology and return `Ok`; anything
//! else propagates to the dispatcher boundary.

pub mod calculator;
pub mod clock;
pub mod greeting;
pub mod jokes;
pub mod news;
pub mod reminder;
pub mod search;
pub mod weather;
pub mod website;
pub mod wikipedia;

use std::sync::Arc;

use crate::config::AssistantConfig;
use crate::services::{
    KeyValueStore, Navigator, NewsProvider, Notifier, ReminderStore, ResultDisplay, Speaker,
    WeatherProvider,
};

/// Shared configuration and collaborators handed to every action.
#[derive(Clone)]
pub struct ActionContext {
    pub config: Arc<AssistantConfig>,
    pub speaker: Arc<dyn Speaker>,
    pub display: Arc<dyn ResultDisplay>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
    pub reminders: ReminderStore,
    pub news: Arc<dyn NewsProvider>,
    pub weather: Arc<dyn WeatherProvider>,
}

impl ActionContext {
    /// Build a context; the reminder sequence lives under
    /// `config.storage.reminders_key` in `store`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Arc<AssistantConfig>,
        speaker: Arc<dyn Speaker>,
        display: Arc<dyn ResultDisplay>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        store: Arc<dyn KeyValueStore>,
        news: Arc<dyn NewsProvider>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        let reminders = ReminderStore::new(store, config.storage.reminders_key.clone());
        Self {
            config,
            speaker,
            display,
            navigator,
            notifier,
            reminders,
            news,
            weather,
        }
    }
}

impl std::fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionContext")
            .field("reminders", &self.reminders)
            .finish_non_exhaustive()
    }
}

/// Remove the earliest occurrence of any trigger from `text` and trim.
///
/// When two triggers start at the same position the longer one is removed.
/// Matching is ASCII case-insensitive.
pub fn strip_trigger(text: &str, triggers: &[String]) -> String {
    let lowered = text.to_ascii_lowercase();
    let earliest = triggers
        .iter()
        .filter(|t| !t.is_empty())
        .filter_map(|t| lowered.find(t.as_str()).map(|pos| (pos, t.len())))
        .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    match earliest {
        Some((pos, len)) => {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..pos]);
            out.push_str(&text[pos + len..]);
            out.trim().to_owned()
        }
        None => text.trim().to_owned(),
    }
}
