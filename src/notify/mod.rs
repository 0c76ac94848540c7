pub mod sendgrid;
pub mod templates;

/// Error type for notification sends
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("email is not configured (run `tally config` first)")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(String),
    #[error("provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// A fully-rendered outbound message.
#[derive(Debug, Clone)]
pub struct OutgoingMail {
    pub to_email: String,
    pub to_name: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// The narrow send capability the rest of the tool depends on.
///
/// Implementations must not panic on failure; every outcome comes back as a
/// `Result` so callers can report and move on.
pub trait Mailer {
    fn send(&self, mail: &OutgoingMail) -> Result<(), NotifyError>;
}
