//! External data providers (news, weather).
//!
//! Both providers are simulated: they wait for a configured latency and then
//! return canned records. Real network clients plug in behind the same traits.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::services::display::NewsItem;

/// News category derived from the request text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Technology,
    Sports,
    Business,
    General,
}

impl NewsCategory {
    /// Classify by substring precedence: technology, sports, business, then general.
    pub fn classify(text: &str) -> Self {
        if text.contains("tech") {
            Self::Technology
        } else if text.contains("sport") {
            Self::Sports
        } else if text.contains("business") {
            Self::Business
        } else {
            Self::General
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Sports => "sports",
            Self::Business => "business",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn fetch(&self, category: NewsCategory) -> Result<Vec<NewsItem>>;
}

/// Returns three placeholder headlines after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedNewsProvider {
    latency: Duration,
}

impl SimulatedNewsProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl NewsProvider for SimulatedNewsProvider {
    async fn fetch(&self, category: NewsCategory) -> Result<Vec<NewsItem>> {
        tokio::time::sleep(self.latency).await;
        Ok((1..=3)
            .map(|n| NewsItem {
                title: format!("Latest {category} news {n}"),
                description: format!("News description {n}"),
            })
            .collect())
    }
}

/// Current conditions for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: f64,
    pub conditions: String,
}

impl WeatherReport {
    /// Sentence spoken to the user.
    pub fn summary(&self) -> String {
        format!(
            "It is currently {:.0} degrees Celsius and {} in {}",
            self.temperature_c, self.conditions, self.location
        )
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, location: &str) -> Result<WeatherReport>;
}

/// Deterministic weather derived from the location name.
#[derive(Debug, Clone)]
pub struct SimulatedWeatherProvider {
    latency: Duration,
}

impl SimulatedWeatherProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

const CONDITIONS: [&str; 4] = ["clear", "cloudy", "raining", "windy"];

#[async_trait]
impl WeatherProvider for SimulatedWeatherProvider {
    async fn current(&self, location: &str) -> Result<WeatherReport> {
        tokio::time::sleep(self.latency).await;
        let seed: u32 = location.bytes().map(u32::from).sum();
        Ok(WeatherReport {
            location: location.to_owned(),
            temperature_c: f64::from(seed % 30),
            conditions: CONDITIONS[(seed as usize) % CONDITIONS.len()].to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_precedence() {
        assert_eq!(
            NewsCategory::classify("tech and sport news"),
            NewsCategory::Technology
        );
        assert_eq!(
            NewsCategory::classify("sports and business news"),
            NewsCategory::Sports
        );
        assert_eq!(NewsCategory::classify("business news"), NewsCategory::Business);
        assert_eq!(NewsCategory::classify("latest news"), NewsCategory::General);
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_news_returns_three_items() {
        let provider = SimulatedNewsProvider::new(Duration::from_secs(1));
        let items = provider
            .fetch(NewsCategory::Sports)
            .await
            .expect("fetch");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Latest sports news 1");
        assert_eq!(items[2].description, "News description 3");
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_weather_is_deterministic() {
        let provider = SimulatedWeatherProvider::new(Duration::from_millis(500));
        let a = provider.current("london").await.expect("weather");
        let b = provider.current("london").await.expect("weather");
        assert_eq!(a, b);
        assert!(a.summary().ends_with("in london"));
    }
}
