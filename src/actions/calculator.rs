//! Arithmetic via the safe expression evaluator.

use super::{ActionContext, strip_trigger};
use crate::error::Result;
use crate::expr;

const APOLOGY: &str = "I couldn't process that calculation. Please try again.";

/// Evaluate the expression after the trigger, or open the calculator view
/// when there is none.
///
/// Evaluation errors are answered with an apology here and never reach the
/// dispatcher.
pub async fn run(ctx: &ActionContext, utterance: &str) -> Result<()> {
    let expression = strip_trigger(utterance, &ctx.config.commands.calculator);
    if expression.is_empty() {
        ctx.navigator
            .navigate_current(&ctx.config.urls.calculator_view)
            .await?;
        return ctx.speaker.speak("Opening Calculator").await;
    }

    match expr::evaluate(&expression) {
        Ok(value) => {
            let answer = format!(
                "The result of {expression} is {}",
                expr::format_number(value)
            );
            ctx.speaker.speak(&answer).await
        }
        Err(e) => {
            tracing::warn!(expression = %expression, error = %e, "calculation failed");
            ctx.speaker.speak(APOLOGY).await
        }
    }
}
