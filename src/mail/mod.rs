//! Message composition and SMTP delivery.
//!
//! Composition and transport are split so dry runs and tests exercise the
//! full message build without touching the network: [`compose`] always runs,
//! the [`Mailer`] is only consulted when the message is actually to be sent.
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Body, Mailbox, MultiPart, SinglePart};
use lettre::{SmtpTransport, Transport};

pub use lettre::Message;

use crate::core::config::Config;
use crate::error::{Error, Result};
use crate::types::Student;

/// Fixed plain-text notice accompanying the attachment.
pub const BODY_TEXT: &str = "Dear Student\nPlease find enclosed your guide sheet template for the exam. Read the following email carefully.\n";

/// Filename the PDF is attached under.
pub const ATTACHMENT_NAME: &str = "open-book.pdf";

/// Build the outgoing message for one student: subject and sender from the
/// configuration, recipient from the row, fixed body, PDF attached as
/// `application/pdf`.
pub fn compose(config: &Config, student: &Student, pdf: Vec<u8>) -> Result<Message> {
    let from: Mailbox = config.email_sender.parse()?;
    let to: Mailbox = student.email.parse()?;

    let pdf_type = ContentType::parse("application/pdf")
        .map_err(|e| Error::Processing(format!("attachment content type: {e}")))?;
    let attachment = Attachment::new(ATTACHMENT_NAME.to_string()).body(Body::new(pdf), pdf_type);

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(config.email_subject.clone())
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(BODY_TEXT.to_string()))
                .singlepart(attachment),
        )?;
    Ok(message)
}

/// Delivery capability. The orchestrator holds one mailer for the whole
/// batch and decides per student whether to consult it.
pub trait Mailer {
    fn deliver(&self, message: &Message) -> Result<()>;
}

/// SMTP submission over a plain (unencrypted) connection, matching the
/// relay-on-localhost deployment this tool is built for. The connection is
/// opened lazily on the first delivery, so constructing the mailer during a
/// dry run touches no network.
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    /// Build a mailer for `server`, given as `host` or `host:port`.
    pub fn new(server: &str) -> Self {
        let (host, port) = split_server(server);
        let mut builder = SmtpTransport::builder_dangerous(host);
        if let Some(port) = port {
            builder = builder.port(port);
        }
        Self {
            transport: builder.build(),
        }
    }
}

impl Mailer for SmtpMailer {
    fn deliver(&self, message: &Message) -> Result<()> {
        self.transport.send(message)?;
        Ok(())
    }
}

fn split_server(server: &str) -> (&str, Option<u16>) {
    match server.rsplit_once(':') {
        // A host with more than one ':' is a bare IPv6 literal, not host:port.
        Some((host, port)) if !host.contains(':') => match port.parse() {
            Ok(port) => (host, Some(port)),
            Err(_) => (server, None),
        },
        _ => (server, None),
    }
}
