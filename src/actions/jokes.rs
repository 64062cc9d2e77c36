use rand::seq::SliceRandom;

use super::ActionContext;
use crate::error::{AriaError, Result};

/// Speak a joke chosen uniformly from the configured pool.
pub async fn run(ctx: &ActionContext) -> Result<()> {
    let joke = {
        let mut rng = rand::thread_rng();
        ctx.config.jokes.pool.choose(&mut rng).cloned()
    };
    let joke = joke.ok_or_else(|| AriaError::Config("jokes.pool is empty".to_owned()))?;
    ctx.speaker.speak(&joke).await
}
