use super::INotifier;
use crate::config::EmailConfig;
use event_reminder_domain::{DeliveryReceipt, ReminderMessage};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::error;

// https://postmarkapp.com/developer/api/email-api#send-a-single-email

const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailResponse {
    #[serde(rename = "MessageID")]
    message_id: String,
}

/// Sends reminders as emails through a Postmark compatible transactional email api
pub struct EmailApiNotifier {
    client: Client,
    base_url: String,
    sender: String,
    token: String,
}

impl EmailApiNotifier {
    pub fn new(config: &EmailConfig, token: String) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_millis))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            sender: config.sender.clone(),
            token,
        })
    }
}

#[async_trait::async_trait]
impl INotifier for EmailApiNotifier {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<DeliveryReceipt> {
        let body = SendEmailRequest {
            from: &self.sender,
            to: &message.recipient,
            subject: &message.subject,
            html_body: &message.html_body,
            text_body: &message.text_body,
        };

        let res = match self
            .client
            .post(&format!("{}/email", self.base_url))
            .header(SERVER_TOKEN_HEADER, &self.token)
            .json(&body)
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => {
                error!(
                    "[Network Error] Email API POST error. Error message: {:?}",
                    e
                );
                return Err(anyhow::Error::new(e));
            }
        };

        let status = res.status();
        if !status.is_success() {
            let reason = res.text().await.unwrap_or_default();
            error!(
                "[Unexpected Response] Email API responded with status {}. Body: {}",
                status, reason
            );
            return Err(anyhow::anyhow!(
                "Email API responded with status {}",
                status
            ));
        }

        res.json::<SendEmailResponse>()
            .await
            .map(|res| DeliveryReceipt {
                message_id: res.message_id,
            })
            .map_err(|e| {
                error!(
                    "[Unexpected Response] Email API POST error. Error message: {:?}",
                    e
                );
                anyhow::Error::new(e)
            })
    }
}
