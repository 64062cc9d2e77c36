//! Current time and date.

use chrono::{DateTime, Local, TimeZone};

use super::ActionContext;
use crate::error::Result;

/// `The current time is 3:04:05 PM`.
pub fn time_sentence<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("The current time is {}", now.format("%-I:%M:%S %p"))
}

/// `Today's date is Friday, October 16, 2026`.
pub fn date_sentence<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Today's date is {}", now.format("%A, %B %-d, %Y"))
}

pub async fn run_time(ctx: &ActionContext) -> Result<()> {
    ctx.speaker.speak(&time_sentence(&Local::now())).await
}

pub async fn run_date(ctx: &ActionContext) -> Result<()> {
    ctx.speaker.speak(&date_sentence(&Local::now())).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn formats_twelve_hour_time() {
        let t = Utc.with_ymd_and_hms(2026, 10, 16, 15, 4, 5).unwrap();
        assert_eq!(time_sentence(&t), "The current time is 3:04:05 PM");
        let t = Utc.with_ymd_and_hms(2026, 10, 16, 0, 30, 0).unwrap();
        assert_eq!(time_sentence(&t), "The current time is 12:30:00 AM");
    }

    #[test]
    fn formats_long_date() {
        let t = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();
        assert_eq!(date_sentence(&t), "Today's date is Friday, October 16, 2026");
    }
}
