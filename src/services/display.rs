//! Result display surface.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One headline returned by a news provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
}

/// Visible surface for rendered result blocks and error reports.
#[async_trait]
pub trait ResultDisplay: Send + Sync {
    /// Replace the visible results with an HTML fragment.
    async fn render(&self, html: &str) -> Result<()>;

    /// Show a user-facing error report.
    async fn show_error(&self, message: &str) -> Result<()>;
}

/// Render headlines as `news-item` blocks.
pub fn render_news_html(items: &[NewsItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "<div class=\"news-item\"><h3>{}</h3><p>{}</p></div>",
                escape_html(&item.title),
                escape_html(&item.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Prints rendered blocks and errors to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDisplay;

#[async_trait]
impl ResultDisplay for ConsoleDisplay {
    async fn render(&self, html: &str) -> Result<()> {
        println!("{html}");
        Ok(())
    }

    async fn show_error(&self, message: &str) -> Result<()> {
        println!("[error] {message}");
        Ok(())
    }
}
