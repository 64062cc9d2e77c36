//! External collaborators the actions talk to.
//!
//! Each collaborator is a narrow async trait so the router core never depends
//! on a concrete speech engine, display surface, storage backend, or timer
//! API. Console and in-process implementations are provided for the bundled
//! host; tests use the recording fakes in [`crate::test_utils`].

pub mod display;
pub mod navigation;
pub mod notifier;
pub mod providers;
pub mod speech;
pub mod store;

pub use display::{ConsoleDisplay, NewsItem, ResultDisplay, render_news_html};
pub use navigation::{ConsoleNavigator, Navigator};
pub use notifier::{Alert, DeniedNotifier, Notifier, Permission, TokioNotifier};
pub use providers::{
    NewsCategory, NewsProvider, SimulatedNewsProvider, SimulatedWeatherProvider, WeatherProvider,
    WeatherReport,
};
pub use speech::{ConsoleSpeaker, Speaker};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, Reminder, ReminderStore};
