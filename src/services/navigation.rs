//! URL navigation.

use async_trait::async_trait;

use crate::error::Result;

/// Opens URLs on behalf of actions.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Open `url` in a new browsing context.
    async fn open_external(&self, url: &str) -> Result<()>;

    /// Replace the current view with `url`.
    async fn navigate_current(&self, url: &str) -> Result<()>;
}

/// Prints the target URL instead of opening it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNavigator;

#[async_trait]
impl Navigator for ConsoleNavigator {
    async fn open_external(&self, url: &str) -> Result<()> {
        tracing::info!(url, "open external");
        println!("[open] {url}");
        Ok(())
    }

    async fn navigate_current(&self, url: &str) -> Result<()> {
        tracing::info!(url, "navigate current view");
        println!("[navigate] {url}");
        Ok(())
    }
}
