use super::ActionContext;
use crate::error::Result;

/// Speak the configured greeting.
pub async fn run(ctx: &ActionContext) -> Result<()> {
    ctx.speaker.speak(&ctx.config.speech.greeting).await
}
