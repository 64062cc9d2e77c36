//! Intents: named, pattern-triggered actions matched in priority order.
//!
//! An [`Intent`] pairs lowercase trigger patterns with an [`IntentAction`].
//! Built-in behaviour is the closed [`IntentKind`] enumeration; hosts and
//! tests may register any other `IntentAction` implementation.

pub mod registry;

use std::sync::Arc;

use async_trait::async_trait;

use crate::actions::{self, ActionContext};
use crate::error::Result;

pub use registry::{DuplicateIntentError, IntentRegistry};

/// Something an intent does once it wins the match.
#[async_trait]
pub trait IntentAction: Send + Sync {
    /// Run against the normalized utterance.
    async fn execute(&self, ctx: &ActionContext, utterance: &str) -> Result<()>;
}

/// The built-in intents, in default priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    Greeting,
    OpenWebsite,
    Search,
    Wikipedia,
    Time,
    Date,
    Weather,
    Calculator,
    Reminder,
    Joke,
    News,
}

impl IntentKind {
    /// Every built-in intent, in default priority order.
    pub const ALL: [IntentKind; 11] = [
        Self::Greeting,
        Self::OpenWebsite,
        Self::Search,
        Self::Wikipedia,
        Self::Time,
        Self::Date,
        Self::Weather,
        Self::Calculator,
        Self::Reminder,
        Self::Joke,
        Self::News,
    ];

    /// Registry name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::OpenWebsite => "openWebsite",
            Self::Search => "search",
            Self::Wikipedia => "wikipedia",
            Self::Time => "time",
            Self::Date => "date",
            Self::Weather => "weather",
            Self::Calculator => "calculator",
            Self::Reminder => "reminder",
            Self::Joke => "jokes",
            Self::News => "news",
        }
    }
}

#[async_trait]
impl IntentAction for IntentKind {
    async fn execute(&self, ctx: &ActionContext, utterance: &str) -> Result<()> {
        match self {
            Self::Greeting => actions::greeting::run(ctx).await,
            Self::OpenWebsite => actions::website::run(ctx, utterance).await.map(|_| ()),
            Self::Search => actions::search::run(ctx, utterance).await,
            Self::Wikipedia => actions::wikipedia::run(ctx, utterance).await,
            Self::Time => actions::clock::run_time(ctx).await,
            Self::Date => actions::clock::run_date(ctx).await,
            Self::Weather => actions::weather::run(ctx, utterance).await,
            Self::Calculator => actions::calculator::run(ctx, utterance).await,
            Self::Reminder => actions::reminder::run(ctx, utterance).await.map(|_| ()),
            Self::Joke => actions::jokes::run(ctx).await,
            Self::News => actions::news::run(ctx, utterance).await,
        }
    }
}

/// A registered intent.
#[derive(Clone)]
pub struct Intent {
    name: String,
    patterns: Vec<String>,
    action: Arc<dyn IntentAction>,
}

impl Intent {
    /// Patterns are lowercased so matching against a lowercased utterance is
    /// case-insensitive.
    pub fn new(
        name: impl Into<String>,
        patterns: impl IntoIterator<Item = impl AsRef<str>>,
        action: Arc<dyn IntentAction>,
    ) -> Self {
        Self {
            name: name.into(),
            patterns: patterns
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
            action,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn action(&self) -> &Arc<dyn IntentAction> {
        &self.action
    }

    /// First pattern contained in `normalized`, if any.
    pub fn matching_pattern(&self, normalized: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| normalized.contains(p.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.matching_pattern(normalized).is_some()
    }
}

impl std::fmt::Debug for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Intent")
            .field("name", &self.name)
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}
