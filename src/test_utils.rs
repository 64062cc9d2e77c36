//! Shared test utilities used by unit and integration tests.
//!
//! Recording fakes for every collaborator plus a [`TestHarness`] that wires
//! them into a [`Dispatcher`]. Compiled for unit tests and, behind the
//! `test-utils` feature, for the integration tests under `tests/`.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::actions::ActionContext;
use crate::config::AssistantConfig;
use crate::dispatcher::Dispatcher;
use crate::error::{AriaError, Result};
use crate::intent::{IntentAction, IntentRegistry};
use crate::services::{
    MemoryStore, Navigator, NewsCategory, NewsItem, NewsProvider, Notifier, Permission,
    ResultDisplay, Speaker, WeatherProvider, WeatherReport,
};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Records spoken text; optionally fails every call.
#[derive(Debug, Default)]
pub struct RecordingSpeaker {
    spoken: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingSpeaker {
    pub fn failing() -> Self {
        Self {
            spoken: Mutex::default(),
            fail: true,
        }
    }

    pub fn spoken(&self) -> Vec<String> {
        lock(&self.spoken).clone()
    }
}

#[async_trait]
impl Speaker for RecordingSpeaker {
    async fn speak(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(AriaError::Speech("speaker unavailable".to_owned()));
        }
        lock(&self.spoken).push(text.to_owned());
        Ok(())
    }
}

/// Records rendered blocks and error reports.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    rendered: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingDisplay {
    pub fn rendered(&self) -> Vec<String> {
        lock(&self.rendered).clone()
    }

    pub fn errors(&self) -> Vec<String> {
        lock(&self.errors).clone()
    }
}

#[async_trait]
impl ResultDisplay for RecordingDisplay {
    async fn render(&self, html: &str) -> Result<()> {
        lock(&self.rendered).push(html.to_owned());
        Ok(())
    }

    async fn show_error(&self, message: &str) -> Result<()> {
        lock(&self.errors).push(message.to_owned());
        Ok(())
    }
}

/// Records opened and navigated URLs.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
    navigated: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn opened(&self) -> Vec<String> {
        lock(&self.opened).clone()
    }

    pub fn navigated(&self) -> Vec<String> {
        lock(&self.navigated).clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn open_external(&self, url: &str) -> Result<()> {
        lock(&self.opened).push(url.to_owned());
        Ok(())
    }

    async fn navigate_current(&self, url: &str) -> Result<()> {
        lock(&self.navigated).push(url.to_owned());
        Ok(())
    }
}

/// A scheduled alert as seen by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledAlert {
    pub title: String,
    pub body: String,
    pub delay: Duration,
}

/// Answers permission requests with a fixed value and records schedules.
#[derive(Debug)]
pub struct RecordingNotifier {
    permission: Permission,
    scheduled: Mutex<Vec<ScheduledAlert>>,
}

impl RecordingNotifier {
    pub fn new(permission: Permission) -> Self {
        Self {
            permission,
            scheduled: Mutex::default(),
        }
    }

    pub fn scheduled(&self) -> Vec<ScheduledAlert> {
        lock(&self.scheduled).clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn request_permission(&self) -> Permission {
        self.permission
    }

    fn schedule_alert(&self, title: &str, body: &str, delay: Duration) -> Result<()> {
        lock(&self.scheduled).push(ScheduledAlert {
            title: title.to_owned(),
            body: body.to_owned(),
            delay,
        });
        Ok(())
    }
}

/// News provider that answers immediately, or always fails.
#[derive(Debug, Default)]
pub struct ScriptedNews {
    fail: bool,
    requested: Mutex<Vec<NewsCategory>>,
}

impl ScriptedNews {
    pub fn failing() -> Self {
        Self {
            fail: true,
            requested: Mutex::default(),
        }
    }

    pub fn requested(&self) -> Vec<NewsCategory> {
        lock(&self.requested).clone()
    }
}

#[async_trait]
impl NewsProvider for ScriptedNews {
    async fn fetch(&self, category: NewsCategory) -> Result<Vec<NewsItem>> {
        lock(&self.requested).push(category);
        if self.fail {
            return Err(AriaError::Provider("news service unreachable".to_owned()));
        }
        Ok(vec![NewsItem {
            title: format!("{category} headline"),
            description: "details".to_owned(),
        }])
    }
}

/// Weather provider that answers immediately, or always fails.
#[derive(Debug, Default)]
pub struct ScriptedWeather {
    fail: bool,
}

impl ScriptedWeather {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl WeatherProvider for ScriptedWeather {
    async fn current(&self, location: &str) -> Result<WeatherReport> {
        if self.fail {
            return Err(AriaError::Provider("weather service unreachable".to_owned()));
        }
        Ok(WeatherReport {
            location: location.to_owned(),
            temperature_c: 21.0,
            conditions: "clear".to_owned(),
        })
    }
}

/// Intent action that always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingAction;

#[async_trait]
impl IntentAction for FailingAction {
    async fn execute(&self, _ctx: &ActionContext, utterance: &str) -> Result<()> {
        Err(AriaError::Config(format!("instrumented failure for {utterance:?}")))
    }
}

/// Intent action that records the utterances it receives.
#[derive(Debug, Default)]
pub struct RecordingAction {
    calls: Mutex<Vec<String>>,
}

impl RecordingAction {
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl IntentAction for RecordingAction {
    async fn execute(&self, _ctx: &ActionContext, utterance: &str) -> Result<()> {
        lock(&self.calls).push(utterance.to_owned());
        Ok(())
    }
}

/// Knobs for [`TestHarness::with_options`].
#[derive(Debug, Clone, Copy)]
pub struct HarnessOptions {
    pub speaker_fails: bool,
    pub news_fails: bool,
    pub weather_fails: bool,
    pub permission: Permission,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            speaker_fails: false,
            news_fails: false,
            weather_fails: false,
            permission: Permission::Granted,
        }
    }
}

/// A dispatcher wired to recording fakes.
pub struct TestHarness {
    pub dispatcher: Dispatcher,
    pub speaker: Arc<RecordingSpeaker>,
    pub display: Arc<RecordingDisplay>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
    pub store: Arc<MemoryStore>,
    pub news: Arc<ScriptedNews>,
}

impl TestHarness {
    /// Built-in registry from `config`, all fakes succeeding.
    pub fn new(config: AssistantConfig) -> Result<Self> {
        Self::with_options(config, HarnessOptions::default())
    }

    /// # Errors
    ///
    /// Fails when `config` does not yield a valid built-in registry.
    pub fn with_options(config: AssistantConfig, options: HarnessOptions) -> Result<Self> {
        let registry = IntentRegistry::from_config(&config)?;
        Ok(Self::build(config, registry, options))
    }

    pub fn with_registry(config: AssistantConfig, registry: IntentRegistry) -> Result<Self> {
        Ok(Self::build(config, registry, HarnessOptions::default()))
    }

    fn build(config: AssistantConfig, registry: IntentRegistry, options: HarnessOptions) -> Self {
        let speaker = Arc::new(if options.speaker_fails {
            RecordingSpeaker::failing()
        } else {
            RecordingSpeaker::default()
        });
        let display = Arc::new(RecordingDisplay::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let notifier = Arc::new(RecordingNotifier::new(options.permission));
        let store = Arc::new(MemoryStore::new());
        let news = Arc::new(if options.news_fails {
            ScriptedNews::failing()
        } else {
            ScriptedNews::default()
        });
        let weather: Arc<dyn WeatherProvider> = Arc::new(if options.weather_fails {
            ScriptedWeather::failing()
        } else {
            ScriptedWeather::default()
        });

        let ctx = ActionContext::new(
            Arc::new(config),
            speaker.clone(),
            display.clone(),
            navigator.clone(),
            notifier.clone(),
            store.clone(),
            news.clone(),
            weather,
        );

        Self {
            dispatcher: Dispatcher::new(registry, ctx),
            speaker,
            display,
            navigator,
            notifier,
            store,
            news,
        }
    }

    /// Reminders persisted so far.
    pub async fn reminders(&self) -> Result<Vec<crate::services::Reminder>> {
        self.dispatcher.context().reminders.all().await
    }
}
