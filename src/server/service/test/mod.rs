use crate::server::service::mail::MailService;

mod auth;
mod classroom;
mod enrollment;
mod registration;

/// Mail service without a relay; notifications are only logged.
fn mail_stub() -> MailService {
    MailService::new(reqwest::Client::new(), None)
}
