//! Current weather via the weather provider.

use super::ActionContext;
use crate::error::Result;

const DEFAULT_LOCATION: &str = "your area";

/// Location named after the last ` in `, e.g. `weather in paris`.
pub fn location(utterance: &str) -> &str {
    utterance
        .rsplit_once(" in ")
        .map(|(_, place)| place.trim())
        .filter(|place| !place.is_empty())
        .unwrap_or(DEFAULT_LOCATION)
}

/// Provider failures propagate to the dispatcher boundary.
pub async fn run(ctx: &ActionContext, utterance: &str) -> Result<()> {
    let report = ctx.weather.current(location(utterance)).await?;
    ctx.speaker.speak(&report.summary()).await
}
