//! Utterance dispatch.
//!
//! The [`Dispatcher`] normalizes an utterance, picks the first registered
//! intent with a matching pattern (or the `search` fallback), and runs it
//! behind a failure boundary. It never returns an error: a failing action is
//! logged and reported to the user once, and the dispatcher stays ready for
//! the next command.
//!
//! Dispatch takes `&self`, so a host can share one dispatcher across tasks.
//! Concurrent commands run independently with no ordering between their side
//! effects; the reminder store serializes its own appends.

use std::sync::Arc;

use crate::actions::ActionContext;
use crate::error::{AriaError, Result};
use crate::intent::{Intent, IntentRegistry};

/// Name of the intent that handles unmatched utterances.
pub const FALLBACK_INTENT: &str = "search";

/// User-facing report for a failed command.
pub const FAILURE_MESSAGE: &str = "Failed to process command. Please try again.";

/// How a command was routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A registered intent matched and completed.
    Handled { intent: String },
    /// Nothing matched (including blank input); the fallback completed.
    Fallback,
    /// The selected action failed and an error report was shown.
    Failed { intent: String },
}

/// Routes utterances to intents.
pub struct Dispatcher {
    registry: Arc<IntentRegistry>,
    ctx: ActionContext,
}

impl Dispatcher {
    pub fn new(registry: IntentRegistry, ctx: ActionContext) -> Self {
        Self {
            registry: Arc::new(registry),
            ctx,
        }
    }

    pub fn registry(&self) -> &IntentRegistry {
        &self.registry
    }

    pub fn context(&self) -> &ActionContext {
        &self.ctx
    }

    /// Lowercase and trim; no other normalization.
    pub fn normalize(utterance: &str) -> String {
        utterance.trim().to_lowercase()
    }

    /// Intent that would handle `utterance`, without running it.
    pub fn route(&self, utterance: &str) -> Option<&Intent> {
        self.registry.find_match(&Self::normalize(utterance))
    }

    /// Route and execute one utterance.
    pub async fn handle_command(&self, utterance: &str) -> CommandOutcome {
        let normalized = Self::normalize(utterance);
        let (intent_name, fallback, result) = match self.registry.find_match(&normalized) {
            Some(intent) => {
                tracing::debug!(
                    intent = intent.name(),
                    pattern = intent.matching_pattern(&normalized).unwrap_or_default(),
                    "intent matched"
                );
                let result = intent.action().execute(&self.ctx, &normalized).await;
                (intent.name().to_owned(), false, result)
            }
            None => {
                tracing::debug!(utterance = %normalized, "no intent matched, using fallback");
                let result = self.run_fallback(&normalized).await;
                (FALLBACK_INTENT.to_owned(), true, result)
            }
        };

        match result {
            Ok(()) => {
                tracing::info!(intent = %intent_name, fallback, "command handled");
                if fallback {
                    CommandOutcome::Fallback
                } else {
                    CommandOutcome::Handled {
                        intent: intent_name,
                    }
                }
            }
            Err(e) => {
                tracing::error!(intent = %intent_name, error = %e, "error in command handling");
                self.report_failure().await;
                CommandOutcome::Failed {
                    intent: intent_name,
                }
            }
        }
    }

    async fn run_fallback(&self, normalized: &str) -> Result<()> {
        let intent = self.registry.get(FALLBACK_INTENT).ok_or_else(|| {
            AriaError::Config(format!("fallback intent {FALLBACK_INTENT:?} is not registered"))
        })?;
        intent.action().execute(&self.ctx, normalized).await
    }

    async fn report_failure(&self) {
        if let Err(e) = self.ctx.display.show_error(FAILURE_MESSAGE).await {
            tracing::warn!(error = %e, "cannot display error report");
        }
        if let Err(e) = self.ctx.speaker.speak(FAILURE_MESSAGE).await {
            tracing::warn!(error = %e, "cannot speak error report");
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
