//! Web search, also the fallback for unmatched utterances.

use super::ActionContext;
use crate::error::Result;

/// Announce the query and open the configured search URL for it.
pub async fn run(ctx: &ActionContext, utterance: &str) -> Result<()> {
    let query = utterance.trim();
    let url = format!("{}{}", ctx.config.urls.search, urlencoding::encode(query));
    ctx.speaker
        .speak(&format!("{} {query}", ctx.config.speech.search_message))
        .await?;
    ctx.navigator.open_external(&url).await
}
