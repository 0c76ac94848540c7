use crate::model::config::EmailConfig;
use crate::notify::{Mailer, NotifyError, OutgoingMail};

const MAIL_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// SendGrid v3 mail-send client.
pub struct SendGrid {
    api_key: String,
    from_email: String,
    from_name: String,
}

impl SendGrid {
    /// Build a client from the stored config. Fails if the config is missing
    /// the API key or sender address. (The recipient is resolved per send,
    /// so a config without a default recipient can still be used with an
    /// explicit one.)
    pub fn from_config(cfg: &EmailConfig) -> Result<Self, NotifyError> {
        if cfg.api_key.trim().is_empty() || cfg.from_email.trim().is_empty() {
            return Err(NotifyError::NotConfigured);
        }
        Ok(SendGrid {
            api_key: cfg.api_key.clone(),
            from_email: cfg.from_email.clone(),
            from_name: cfg.from_name.clone(),
        })
    }
}

impl Mailer for SendGrid {
    fn send(&self, mail: &OutgoingMail) -> Result<(), NotifyError> {
        let body = serde_json::json!({
            "personalizations": [
                { "to": [{ "email": mail.to_email, "name": mail.to_name }] }
            ],
            "from": { "email": self.from_email, "name": self.from_name },
            "subject": mail.subject,
            "content": [
                { "type": "text/plain", "value": mail.text_body },
                { "type": "text/html", "value": mail.html_body }
            ]
        });

        let client = reqwest::blocking::Client::new();
        let resp = client
            .post(MAIL_SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| NotifyError::Request(e.to_string()))?;

        // SendGrid answers 202 Accepted on success
        if resp.status().as_u16() == 202 {
            return Ok(());
        }
        let status = resp.status().as_u16();
        let text = resp.text().unwrap_or_default();
        Err(NotifyError::Rejected { status, body: text })
    }
}
