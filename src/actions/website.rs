//! Open a known site by name.

use super::ActionContext;
use crate::config::SiteEntry;
use crate::error::Result;

/// First site whose name appears in `utterance`, in table order.
pub fn find_site<'a>(sites: &'a [SiteEntry], utterance: &str) -> Option<&'a SiteEntry> {
    sites.iter().find(|s| utterance.contains(s.name.as_str()))
}

/// Open the first matching site and confirm.
///
/// Returns `false` when no site name matches. That path is a deliberate
/// no-op: nothing is opened or spoken and the command does not fall through
/// to search.
pub async fn run(ctx: &ActionContext, utterance: &str) -> Result<bool> {
    let Some(site) = find_site(&ctx.config.sites, utterance) else {
        tracing::debug!(utterance, "no known site in open command");
        return Ok(false);
    };
    ctx.navigator.open_external(&site.url).await?;
    ctx.speaker.speak(&format!("Opening {}...", site.name)).await?;
    Ok(true)
}
