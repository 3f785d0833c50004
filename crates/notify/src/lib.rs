//! Email notification for new blueprint submissions.
//!
//! [`BlueprintMailer`] wraps the `lettre` async SMTP transport to send a
//! plain-text summary of each submitted blueprint to the studio inbox.
//! Configuration is loaded from environment variables; if `SMTP_HOST` or
//! `NOTIFICATION_EMAIL` is not set, [`EmailConfig::from_env`] returns
//! `None` and notifications are skipped entirely.
//!
//! Delivery is best-effort by contract: the submission is already
//! durable before the mailer runs, so callers log failures and move on.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use webform_core::blueprint::BlueprintDocument;
use webform_core::types::DbId;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@webform.site";

/// Configuration for the SMTP notification mailer.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Studio inbox that receives submission notifications.
    pub to_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` or `NOTIFICATION_EMAIL` is not set,
    /// signalling that notifications are not configured and should be
    /// skipped. There is deliberately no fallback destination address.
    ///
    /// | Variable             | Required | Default                |
    /// |----------------------|----------|------------------------|
    /// | `SMTP_HOST`          | yes      | --                     |
    /// | `NOTIFICATION_EMAIL` | yes      | --                     |
    /// | `SMTP_PORT`          | no       | `587`                  |
    /// | `SMTP_FROM`          | no       | `noreply@webform.site` |
    /// | `SMTP_USER`          | no       | --                     |
    /// | `SMTP_PASSWORD`      | no       | --                     |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        let to_address = std::env::var("NOTIFICATION_EMAIL").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            to_address,
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// BlueprintMailer
// ---------------------------------------------------------------------------

/// Sends the new-submission notification email via SMTP.
#[derive(Debug, Clone)]
pub struct BlueprintMailer {
    config: EmailConfig,
}

impl BlueprintMailer {
    /// Create a new mailer with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send the notification email for a freshly persisted submission.
    pub async fn deliver(&self, blueprint_id: DbId, doc: &BlueprintDocument) -> Result<(), EmailError> {
        let subject = format!(
            "[WebForm] New blueprint from {}",
            doc.identity.business_name
        );
        let body = render_summary(blueprint_id, doc);

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.config.to_address.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(password)) =
            (&self.config.smtp_user, &self.config.smtp_password)
        {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        let mailer = builder.build();
        mailer.send(email).await?;

        tracing::info!(blueprint_id, to = %self.config.to_address, "Submission notification sent");
        Ok(())
    }
}

/// Render the plain-text per-section summary of a submission.
fn render_summary(blueprint_id: DbId, doc: &BlueprintDocument) -> String {
    let mut out = String::new();

    out.push_str(&format!("New blueprint submission (id {blueprint_id})\n\n"));

    out.push_str("== Identity ==\n");
    out.push_str(&format!("Business name: {}\n", doc.identity.business_name));
    if let Some(one_liner) = doc.identity.one_liner.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(&format!("One-liner: {one_liner}\n"));
    }
    out.push_str(&format!("What they sell: {}\n", doc.identity.what_you_sell));
    out.push_str(&format!(
        "Brand personality: {}\n",
        doc.identity.brand_personality.join(", ")
    ));

    out.push_str("\n== Vision ==\n");
    out.push_str(&format!("Main goal: {}\n", doc.vision.main_goal.as_str()));
    if let Some(custom) = doc.vision.custom_main_goal.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(&format!("Custom goal: {custom}\n"));
    }

    out.push_str("\n== Look & Feel ==\n");
    for site in &doc.look.references {
        match site.notes.as_deref().filter(|n| !n.is_empty()) {
            Some(notes) => out.push_str(&format!("Reference: {} ({notes})\n", site.url)),
            None => out.push_str(&format!("Reference: {}\n", site.url)),
        }
    }
    if !doc.look.color_preference.is_empty() {
        out.push_str(&format!("Colors: {}\n", doc.look.color_preference.join(", ")));
    }
    if !doc.look.imagery_vibe.is_empty() {
        out.push_str(&format!("Imagery: {}\n", doc.look.imagery_vibe.join(", ")));
    }
    if !doc.look.assets_note.is_empty() {
        out.push_str(&format!("Assets note: {}\n", doc.look.assets_note));
    }
    for url in &doc.look.asset_uploads {
        out.push_str(&format!("Uploaded asset: {url}\n"));
    }

    out.push_str("\n== Content & Structure ==\n");
    out.push_str(&format!("Pages: {}\n", doc.content.pages.join(", ")));
    out.push_str(&format!("CTA destination: {}\n", doc.content.cta_destination));

    out.push_str("\n== Technical ==\n");
    out.push_str(&format!(
        "Domain: {}\n",
        doc.technical.domain_status.as_str()
    ));
    if let Some(site) = doc.technical.current_site.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(&format!("Current site: {site}\n"));
    }
    if !doc.technical.integrations.is_empty() {
        out.push_str(&format!(
            "Integrations: {}\n",
            doc.technical.integrations.join(", ")
        ));
    }

    out.push_str("\n== Confirmations ==\n");
    out.push_str(&format!(
        "Terms accepted: {}\n",
        doc.confirmations.terms_accepted
    ));

    out
}
