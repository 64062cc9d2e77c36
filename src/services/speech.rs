//! Speech output.

use async_trait::async_trait;

use crate::error::Result;

/// Text-to-speech sink. `speak` resolves once the utterance has been played.
#[async_trait]
pub trait Speaker: Send + Sync {
    async fn speak(&self, text: &str) -> Result<()>;
}

/// Writes spoken text to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSpeaker;

#[async_trait]
impl Speaker for ConsoleSpeaker {
    async fn speak(&self, text: &str) -> Result<()> {
        tracing::debug!(text, "speak");
        println!("aria> {text}");
        Ok(())
    }
}
