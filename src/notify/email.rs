// src/notify/email.rs
use anyhow::{ensure, Context, Result};
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::SmtpConfig;
use crate::report::NotificationBody;

/// SMTP password, injected at construction time so tests never touch the
/// process environment. Debug output stays redacted.
pub struct SmtpSecret(String);

impl SmtpSecret {
    pub const ENV_VAR: &'static str = "PW_CARBURANTE";

    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn from_env() -> Result<Self> {
        std::env::var(Self::ENV_VAR)
            .map(Self)
            .with_context(|| format!("missing {} env var", Self::ENV_VAR))
    }
}

impl std::fmt::Debug for SmtpSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SmtpSecret(***)")
    }
}

/// Delivery seam. Tests count sends through it and simulate transport
/// failures (a refused STARTTLS upgrade included) without a live relay.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: Message) -> Result<()>;
}

/// lettre SMTP transport over STARTTLS. The upgrade is REQUIRED: if the
/// relay cannot negotiate TLS the session is aborted before credentials or
/// message content are transmitted.
pub struct SmtpMailer {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig, password: SmtpSecret) -> Result<Self> {
        let sender: Mailbox = config
            .sender
            .parse()
            .with_context(|| format!("invalid sender mailbox {:?}", config.sender))?;
        let credentials = Credentials::new(sender.email.to_string(), password.0);
        let inner = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .with_context(|| format!("invalid SMTP host {:?}", config.host))?
            .port(config.port)
            .credentials(credentials)
            .build();
        Ok(Self { inner })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, message: Message) -> Result<()> {
        self.inner.send(message).await.context("SMTP delivery")?;
        Ok(())
    }
}

/// Builds the multipart notification (plain fallback + HTML) and performs
/// the single delivery attempt of the run. No retries.
pub struct EmailNotifier<T> {
    transport: T,
    from: Mailbox,
    recipients: Vec<Mailbox>,
}

impl EmailNotifier<SmtpMailer> {
    pub fn from_config(config: &SmtpConfig, password: SmtpSecret) -> Result<Self> {
        let transport = SmtpMailer::new(config, password)?;
        Self::new(transport, config)
    }
}

impl<T: MailTransport> EmailNotifier<T> {
    pub fn new(transport: T, config: &SmtpConfig) -> Result<Self> {
        let from: Mailbox = config
            .sender
            .parse()
            .with_context(|| format!("invalid sender mailbox {:?}", config.sender))?;
        let recipients = config
            .recipients
            .iter()
            .map(|r| {
                r.parse()
                    .with_context(|| format!("invalid recipient mailbox {r:?}"))
            })
            .collect::<Result<Vec<Mailbox>>>()?;
        ensure!(!recipients.is_empty(), "no recipients configured");
        Ok(Self {
            transport,
            from,
            recipients,
        })
    }

    pub async fn send_report(&self, subject: &str, body: &NotificationBody) -> Result<()> {
        let mut builder = Message::builder().from(self.from.clone()).subject(subject);
        for recipient in &self.recipients {
            builder = builder.to(recipient.clone());
        }
        let message = builder
            .multipart(MultiPart::alternative_plain_html(
                body.plain.clone(),
                body.html.clone(),
            ))
            .context("building notification message")?;

        info!(recipients = self.recipients.len(), subject, "sending price report");
        self.transport.send(message).await
    }
}
