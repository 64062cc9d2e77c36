//! Deferred one-shot alerts.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::{AriaError, Result};

/// Outcome of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// A fired alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub body: String,
}

/// Schedules alerts that fire after a delay.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn request_permission(&self) -> Permission;

    /// Arrange for an alert to fire after `delay`. Returns without waiting.
    fn schedule_alert(&self, title: &str, body: &str, delay: Duration) -> Result<()>;
}

/// Fires alerts from detached tokio tasks onto a channel.
#[derive(Debug, Clone)]
pub struct TokioNotifier {
    alert_tx: mpsc::UnboundedSender<Alert>,
}

impl TokioNotifier {
    /// Create a notifier and the receiver that alerts are delivered to.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Alert>) {
        let (alert_tx, alert_rx) = mpsc::unbounded_channel();
        (Self { alert_tx }, alert_rx)
    }
}

#[async_trait]
impl Notifier for TokioNotifier {
    async fn request_permission(&self) -> Permission {
        if self.alert_tx.is_closed() {
            Permission::Denied
        } else {
            Permission::Granted
        }
    }

    fn schedule_alert(&self, title: &str, body: &str, delay: Duration) -> Result<()> {
        if self.alert_tx.is_closed() {
            return Err(AriaError::Notifier("alert receiver dropped".to_owned()));
        }
        let tx = self.alert_tx.clone();
        let alert = Alert {
            title: title.to_owned(),
            body: body.to_owned(),
        };
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(title = %alert.title, body = %alert.body, "alert fired");
            if tx.send(alert).is_err() {
                tracing::warn!("alert receiver dropped before delivery");
            }
        });
        Ok(())
    }
}

/// Notifier for hosts without an alert surface. Every request is denied.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeniedNotifier;

#[async_trait]
impl Notifier for DeniedNotifier {
    async fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    fn schedule_alert(&self, _title: &str, _body: &str, _delay: Duration) -> Result<()> {
        Err(AriaError::Notifier("notifications unavailable".to_owned()))
    }
}
