//! Persisted reminders with a deferred alert.

use super::{ActionContext, strip_trigger};
use crate::error::Result;
use crate::services::{Permission, Reminder};

const ALERT_TITLE: &str = "Reminder";

/// Store the reminder text, confirm it, and schedule an alert.
///
/// Returns the stored reminder, or `None` when nothing is left after the
/// trigger words (nothing is stored or spoken).
pub async fn run(ctx: &ActionContext, utterance: &str) -> Result<Option<Reminder>> {
    let text = strip_trigger(utterance, &ctx.config.commands.reminder);
    if text.is_empty() {
        tracing::debug!(utterance, "reminder without text ignored");
        return Ok(None);
    }

    let reminder = Reminder::new(text);
    let count = ctx.reminders.append(reminder.clone()).await?;
    tracing::info!(text = %reminder.text, count, "reminder stored");

    ctx.speaker
        .speak(&format!("I'll remind you to {}", reminder.text))
        .await?;

    match ctx.notifier.request_permission().await {
        Permission::Granted => ctx.notifier.schedule_alert(
            ALERT_TITLE,
            &reminder.text,
            ctx.config.delays.reminder_alert(),
        )?,
        Permission::Denied => tracing::warn!("notification permission denied; no alert scheduled"),
    }

    Ok(Some(reminder))
}
