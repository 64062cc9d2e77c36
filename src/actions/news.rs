//! Headlines by category.

use super::ActionContext;
use crate::error::Result;
use crate::services::{NewsCategory, render_news_html};

const APOLOGY: &str = "Sorry, I couldn't fetch the latest news.";

/// Fetch headlines for the category named in `utterance`, announce them and
/// render them on the display.
///
/// Provider failures are answered with an apology here and never reach the
/// dispatcher.
pub async fn run(ctx: &ActionContext, utterance: &str) -> Result<()> {
    let category = NewsCategory::classify(utterance);
    let items = match ctx.news.fetch(category).await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(%category, error = %e, "news fetch failed");
            return ctx.speaker.speak(APOLOGY).await;
        }
    };

    ctx.speaker
        .speak(&format!("Here are the latest {category} headlines"))
        .await?;
    ctx.display.render(&render_news_html(&items)).await
}
