//! Aria: voice/text command router for an assistant-style application.
//!
//! Given an utterance, the router selects and runs exactly one registered
//! action (open a site, report the time, do arithmetic, set a reminder, fetch
//! news, ...), falling back to a web search when nothing matches.
//!
//! # Architecture
//!
//! - **Intent registry**: ordered pattern → action bindings; registration
//!   order is match priority
//! - **Safe expression evaluator**: closed-grammar arithmetic for the calculator
//! - **Actions**: one async handler per intent, each owning its side effects
//! - **Dispatcher**: first-match routing behind a failure boundary
//!
//! Speech, display, storage, notifications, navigation and data providers are
//! collaborators behind the traits in [`services`].

pub mod actions;
pub mod aria_dirs;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod expr;
pub mod intent;
pub mod services;
#[cfg(any(test, feature = "test-utils"))]
#[doc(hidden)]
pub mod test_utils;

pub use actions::ActionContext;
pub use config::AssistantConfig;
pub use dispatcher::{CommandOutcome, Dispatcher};
pub use error::{AriaError, Result};
pub use expr::{EvaluationError, evaluate};
pub use intent::{DuplicateIntentError, Intent, IntentAction, IntentKind, IntentRegistry};
