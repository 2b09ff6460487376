//! Enrollment notification mail.
//!
//! Messages are posted as JSON to an HTTP mail relay. Sending is fire-and-forget:
//! `notify_enrollment` spawns the request and returns immediately, and a failed
//! delivery is only logged. Without a configured relay the message is logged
//! instead of sent.

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::server::{
    error::AppError,
    model::{enrollment::Enrollment, schedule::TimeInterval},
    util::parse::format_time,
};

/// Where and as whom notification mail is sent.
#[derive(Debug, Clone)]
pub struct MailRelay {
    /// Endpoint accepting `{from, to, subject, html}` JSON bodies.
    pub url: String,
    /// Bearer token sent with every request.
    pub token: Option<String>,
    pub from: String,
}

/// A rendered message ready for the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone)]
pub struct MailService {
    http_client: reqwest::Client,
    relay: Option<MailRelay>,
}

impl MailService {
    pub fn new(http_client: reqwest::Client, relay: Option<MailRelay>) -> Self {
        Self { http_client, relay }
    }

    /// Sends the enrollment confirmation in a background task.
    ///
    /// Never fails and never waits on the relay; the HTTP response to the student
    /// does not depend on mail delivery.
    ///
    /// # Returns
    /// - `Some(JoinHandle)` - The delivery task; callers may drop it
    /// - `None` - No relay is configured and the notice was only logged
    pub fn notify_enrollment(&self, enrollment: &Enrollment) -> Option<JoinHandle<()>> {
        let Some(relay) = self.relay.clone() else {
            tracing::info!(
                "Mail relay not configured; skipping enrollment notice to {} for {}",
                enrollment.student.email,
                enrollment.classroom.subject
            );
            return None;
        };

        let message = MailMessage {
            from: relay.from.clone(),
            to: enrollment.student.email.clone(),
            subject: enrollment.classroom.subject.clone(),
            html: render_enrollment_html(enrollment),
        };
        let http_client = self.http_client.clone();

        Some(tokio::spawn(async move {
            if let Err(e) = send(&http_client, &relay, &message).await {
                tracing::warn!("Failed to send enrollment notice to {}: {}", message.to, e);
            }
        }))
    }
}

async fn send(
    http_client: &reqwest::Client,
    relay: &MailRelay,
    message: &MailMessage,
) -> Result<(), AppError> {
    let mut request = http_client.post(&relay.url).json(message);
    if let Some(token) = &relay.token {
        request = request.bearer_auth(token);
    }

    request.send().await?.error_for_status()?;

    tracing::debug!("Enrollment notice sent to {}", message.to);

    Ok(())
}

/// Renders the confirmation body listing every weekly slot of the classroom.
pub fn render_enrollment_html(enrollment: &Enrollment) -> String {
    let slots: String = enrollment
        .classroom
        .schedule
        .iter()
        .map(|slot| format!("<li>{}</li>", describe_slot(slot)))
        .collect();

    format!(
        "<!DOCTYPE html>\
<html><head><meta charset=\"UTF-8\"><title>Registration Confirmation</title></head><body>\
<p>Congratulations {student},</p>\
<p>You have been successfully registered in the {subject} class with instructor {instructor}!</p>\
<p>Schedule:</p><ul>{slots}</ul>\
<p>Follow this link to access the <a href=\"{link}\">classroom</a>.</p>\
<p>Best regards,</p><p>Atlas School</p>\
</body></html>",
        student = escape(&enrollment.student.name),
        subject = escape(&enrollment.classroom.subject),
        instructor = escape(&enrollment.instructor_name),
        slots = slots,
        link = escape(&enrollment.classroom.link),
    )
}

fn describe_slot(slot: &TimeInterval) -> String {
    format!(
        "{}, from {} to {}",
        escape(&slot.day),
        format_time(slot.start_time),
        format_time(slot.end_time)
    )
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
