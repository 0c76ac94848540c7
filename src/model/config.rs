use serde::{Deserialize, Serialize};

/// Email provider configuration from email.toml.
///
/// All fields default to empty so a partially-written config still parses;
/// `is_configured` gates actual sending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    /// SendGrid API key.
    #[serde(default)]
    pub api_key: String,
    /// Sender address (must be a verified sender for the provider).
    #[serde(default)]
    pub from_email: String,
    #[serde(default)]
    pub from_name: String,
    /// Default recipient when a command doesn't pass `--to`.
    #[serde(default)]
    pub to_email: String,
    #[serde(default)]
    pub to_name: String,
}

impl EmailConfig {
    /// Whether enough is configured to attempt a send.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
            && !self.from_email.trim().is_empty()
            && !self.to_email.trim().is_empty()
    }
}
