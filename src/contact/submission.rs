use std::fmt;
use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;

use crate::config::HONEYPOT_DELAY_MS;

pub const SUBJECTS: &[&str] = &[
    "Discovery Flight",
    "Private Pilot Training",
    "Instrument Rating",
    "Commercial License",
    "CFI Training",
    "General Inquiry",
    "Other",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub consent: bool,
    /// Hidden checkbox; only bots tick it.
    pub honeypot: bool,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub consent: bool,
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
}

impl ContactForm {
    pub fn payload(&self, submitted_at: DateTime<Utc>) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            consent: self.consent,
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitError {
    Build(String),
    Network(String),
    Status(u16),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Build(e) => write!(f, "could not build request: {}", e),
            SubmitError::Network(e) => write!(f, "request failed: {}", e),
            SubmitError::Status(status) => write!(f, "webhook answered {}", status),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Sends a JSON payload somewhere and reports the HTTP status.
#[allow(async_fn_in_trait)]
pub trait WebhookTransport {
    async fn post_json(&self, url: &str, payload: &ContactPayload) -> Result<u16, SubmitError>;
}

pub struct BrowserTransport;

impl WebhookTransport for BrowserTransport {
    async fn post_json(&self, url: &str, payload: &ContactPayload) -> Result<u16, SubmitError> {
        let request = Request::post(url)
            .json(payload)
            .map_err(|e| SubmitError::Build(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        Ok(response.status())
    }
}

/// Submits the form once. A ticked honeypot skips the network entirely and
/// resolves as a success after [`HONEYPOT_DELAY_MS`].
pub async fn submit_contact<T, D, F>(
    form: &ContactForm,
    transport: &T,
    url: &str,
    submitted_at: DateTime<Utc>,
    delay: D,
) -> Result<(), SubmitError>
where
    T: WebhookTransport,
    D: FnOnce(u32) -> F,
    F: Future<Output = ()>,
{
    if form.honeypot {
        info!("Honeypot ticked, discarding contact submission");
        delay(HONEYPOT_DELAY_MS).await;
        return Ok(());
    }

    let status = transport.post_json(url, &form.payload(submitted_at)).await?;
    if (200..300).contains(&status) {
        info!("Contact form delivered");
        Ok(())
    } else {
        error!("Contact webhook returned status {}", status);
        Err(SubmitError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct FakeWebhook {
        status: Result<u16, SubmitError>,
        calls: Cell<u32>,
        last_body: RefCell<Option<serde_json::Value>>,
    }

    impl FakeWebhook {
        fn answering(status: Result<u16, SubmitError>) -> Self {
            Self {
                status,
                calls: Cell::new(0),
                last_body: RefCell::new(None),
            }
        }
    }

    impl WebhookTransport for FakeWebhook {
        async fn post_json(&self, _url: &str, payload: &ContactPayload) -> Result<u16, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_body.borrow_mut() = serde_json::to_value(payload).ok();
            self.status.clone()
        }
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            phone: "(801) 477-0418".into(),
            subject: "Discovery Flight".into(),
            message: "I need a lesson".into(),
            consent: true,
            honeypot: false,
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn genuine_submission_posts_payload() {
        let webhook = FakeWebhook::answering(Ok(200));
        let slept = Cell::new(None);
        let result = block_on(submit_contact(&filled_form(), &webhook, "https://hook", noon(), |ms| {
            slept.set(Some(ms));
            std::future::ready(())
        }));

        assert_eq!(result, Ok(()));
        assert_eq!(webhook.calls.get(), 1);
        assert_eq!(slept.get(), None);

        let body = webhook.last_body.borrow().clone().unwrap();
        assert_eq!(body["name"], "Jane Smith");
        assert_eq!(body["consent"], true);
        assert_eq!(body["submittedAt"], "2025-03-14T12:00:00.000Z");
        assert!(body.get("honeypot").is_none());
    }

    #[test]
    fn honeypot_never_calls_webhook_but_succeeds_after_delay() {
        let webhook = FakeWebhook::answering(Ok(200));
        let slept = Cell::new(None);
        let mut form = filled_form();
        form.honeypot = true;

        let result = block_on(submit_contact(&form, &webhook, "https://hook", noon(), |ms| {
            slept.set(Some(ms));
            std::future::ready(())
        }));

        assert_eq!(result, Ok(()));
        assert_eq!(webhook.calls.get(), 0);
        assert_eq!(slept.get(), Some(HONEYPOT_DELAY_MS));
    }

    #[test]
    fn non_success_status_is_an_error() {
        let webhook = FakeWebhook::answering(Ok(502));
        let result = block_on(submit_contact(&filled_form(), &webhook, "https://hook", noon(), |_| {
            std::future::ready(())
        }));
        assert_eq!(result, Err(SubmitError::Status(502)));
    }

    #[test]
    fn network_failure_is_reported_once() {
        let webhook = FakeWebhook::answering(Err(SubmitError::Network("offline".into())));
        let result = block_on(submit_contact(&filled_form(), &webhook, "https://hook", noon(), |_| {
            std::future::ready(())
        }));
        assert!(matches!(result, Err(SubmitError::Network(_))));
        assert_eq!(webhook.calls.get(), 1);
    }
}
