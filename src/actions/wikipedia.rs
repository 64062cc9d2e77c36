//! Wikipedia lookup.

use super::{ActionContext, strip_trigger};
use crate::error::Result;

/// Search term left after removing the first configured wikipedia trigger.
pub fn search_term(utterance: &str, triggers: &[String]) -> String {
    strip_trigger(utterance, triggers)
}

pub async fn run(ctx: &ActionContext, utterance: &str) -> Result<()> {
    let term = search_term(utterance, &ctx.config.commands.wikipedia);
    let url = format!("{}{}", ctx.config.urls.wikipedia, urlencoding::encode(&term));
    ctx.navigator.open_external(&url).await?;
    ctx.speaker
        .speak(&format!(
            "This is what I found on Wikipedia regarding {term}"
        ))
        .await
}
