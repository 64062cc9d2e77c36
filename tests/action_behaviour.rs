//! End-to-end behaviour of each built-in action through the dispatcher.

use std::time::Duration;

use aria::services::{NewsCategory, Permission};
use aria::test_utils::{HarnessOptions, ScheduledAlert, TestHarness};
use aria::{AssistantConfig, CommandOutcome};

fn harness() -> TestHarness {
    TestHarness::new(AssistantConfig::builtin()).expect("harness")
}

#[tokio::test]
async fn open_website_opens_known_site() {
    let h = harness();
    h.dispatcher.handle_command("open youtube").await;

    assert_eq!(h.navigator.opened(), vec!["https://youtube.com".to_owned()]);
    assert_eq!(h.speaker.spoken(), vec!["Opening youtube...".to_owned()]);
}

#[tokio::test]
async fn open_unknown_site_is_a_silent_no_op() {
    let h = harness();
    let outcome = h.dispatcher.handle_command("open the pod bay doors").await;

    assert_eq!(
        outcome,
        CommandOutcome::Handled {
            intent: "openWebsite".to_owned()
        }
    );
    assert!(h.navigator.opened().is_empty());
    assert!(h.speaker.spoken().is_empty());
}

#[tokio::test]
async fn wikipedia_opens_encoded_article() {
    let h = harness();
    h.dispatcher.handle_command("Wikipedia alan turing").await;

    assert_eq!(
        h.navigator.opened(),
        vec!["https://en.wikipedia.org/wiki/alan%20turing".to_owned()]
    );
    assert_eq!(
        h.speaker.spoken(),
        vec!["This is what I found on Wikipedia regarding alan turing".to_owned()]
    );
}

#[tokio::test]
async fn wikipedia_strips_configured_trigger() {
    let mut config = AssistantConfig::builtin();
    config.commands.wikipedia = vec!["wiki".to_owned()];
    let h = TestHarness::new(config).expect("harness");
    h.dispatcher.handle_command("wiki rust").await;

    assert_eq!(
        h.navigator.opened(),
        vec!["https://en.wikipedia.org/wiki/rust".to_owned()]
    );
    assert_eq!(
        h.speaker.spoken(),
        vec!["This is what I found on Wikipedia regarding rust".to_owned()]
    );
}

#[tokio::test]
async fn time_and_date_are_spoken() {
    let h = harness();
    h.dispatcher.handle_command("what time is it").await;
    h.dispatcher.handle_command("what date is it").await;

    let spoken = h.speaker.spoken();
    assert_eq!(spoken.len(), 2);
    assert!(spoken[0].starts_with("The current time is "));
    assert!(spoken[0].ends_with("AM") || spoken[0].ends_with("PM"));
    assert!(spoken[1].starts_with("Today's date is "));
}

#[tokio::test]
async fn weather_speaks_provider_report() {
    let h = harness();
    h.dispatcher.handle_command("weather in paris").await;

    assert_eq!(
        h.speaker.spoken(),
        vec!["It is currently 21 degrees Celsius and clear in paris".to_owned()]
    );
}

#[tokio::test]
async fn calculator_evaluates_expression() {
    let h = harness();
    h.dispatcher.handle_command("calculate 2+3*4").await;
    h.dispatcher.handle_command("compute (2+3)*4").await;

    assert_eq!(
        h.speaker.spoken(),
        vec![
            "The result of 2+3*4 is 14".to_owned(),
            "The result of (2+3)*4 is 20".to_owned(),
        ]
    );
}

#[tokio::test]
async fn calculator_never_speaks_negative_zero() {
    let h = harness();
    h.dispatcher.handle_command("calculate 0-0.00000000001").await;

    assert_eq!(
        h.speaker.spoken(),
        vec!["The result of 0-0.00000000001 is 0".to_owned()]
    );
}

#[tokio::test]
async fn calculator_error_is_handled_locally() {
    let h = harness();
    let outcome = h.dispatcher.handle_command("calculate 2/0").await;

    assert_eq!(
        outcome,
        CommandOutcome::Handled {
            intent: "calculator".to_owned()
        }
    );
    assert_eq!(
        h.speaker.spoken(),
        vec!["I couldn't process that calculation. Please try again.".to_owned()]
    );
    assert!(h.display.errors().is_empty());
}

#[tokio::test]
async fn calculator_without_expression_opens_view() {
    let h = harness();
    h.dispatcher.handle_command("calculator").await;

    assert_eq!(h.navigator.navigated(), vec!["calculator.html".to_owned()]);
    assert_eq!(h.speaker.spoken(), vec!["Opening Calculator".to_owned()]);
}

#[tokio::test]
async fn reminder_appends_one_record_and_schedules_alert() {
    let h = harness();
    h.dispatcher.handle_command("set reminder buy milk").await;

    let reminders = h.reminders().await.expect("reminders");
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].text, "buy milk");
    assert_eq!(
        h.speaker.spoken(),
        vec!["I'll remind you to buy milk".to_owned()]
    );
    assert_eq!(
        h.notifier.scheduled(),
        vec![ScheduledAlert {
            title: "Reminder".to_owned(),
            body: "buy milk".to_owned(),
            delay: Duration::from_secs(5),
        }]
    );
}

#[tokio::test]
async fn empty_reminder_creates_nothing() {
    let h = harness();
    let outcome = h.dispatcher.handle_command("reminder").await;

    assert_eq!(
        outcome,
        CommandOutcome::Handled {
            intent: "reminder".to_owned()
        }
    );
    assert!(h.reminders().await.expect("reminders").is_empty());
    assert!(h.speaker.spoken().is_empty());
    assert!(h.notifier.scheduled().is_empty());
}

#[tokio::test]
async fn reminder_without_permission_skips_alert() {
    let h = TestHarness::with_options(
        AssistantConfig::builtin(),
        HarnessOptions {
            permission: Permission::Denied,
            ..HarnessOptions::default()
        },
    )
    .expect("harness");
    h.dispatcher.handle_command("remind me to call mom").await;

    assert_eq!(h.reminders().await.expect("reminders").len(), 1);
    assert!(h.notifier.scheduled().is_empty());
}

#[tokio::test]
async fn joke_comes_from_the_pool() {
    let h = harness();
    h.dispatcher.handle_command("tell me a joke").await;

    let spoken = h.speaker.spoken();
    assert_eq!(spoken.len(), 1);
    assert!(AssistantConfig::builtin().jokes.pool.contains(&spoken[0]));
}

#[tokio::test]
async fn news_prefers_technology_category() {
    let h = harness();
    h.dispatcher.handle_command("news about tech and sports").await;

    assert_eq!(h.news.requested(), vec![NewsCategory::Technology]);
    assert_eq!(
        h.speaker.spoken(),
        vec!["Here are the latest technology headlines".to_owned()]
    );
    let rendered = h.display.rendered();
    assert_eq!(rendered.len(), 1);
    assert!(rendered[0].contains("<h3>technology headline</h3>"));
}

#[tokio::test]
async fn news_defaults_to_general() {
    let h = harness();
    h.dispatcher.handle_command("latest headlines").await;
    assert_eq!(h.news.requested(), vec![NewsCategory::General]);
}

#[tokio::test]
async fn news_failure_is_handled_locally() {
    let h = TestHarness::with_options(
        AssistantConfig::builtin(),
        HarnessOptions {
            news_fails: true,
            ..HarnessOptions::default()
        },
    )
    .expect("harness");
    let outcome = h.dispatcher.handle_command("sports news").await;

    assert_eq!(
        outcome,
        CommandOutcome::Handled {
            intent: "news".to_owned()
        }
    );
    assert_eq!(
        h.speaker.spoken(),
        vec!["Sorry, I couldn't fetch the latest news.".to_owned()]
    );
    assert!(h.display.rendered().is_empty());
    assert!(h.display.errors().is_empty());
}
