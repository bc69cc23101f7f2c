/**
 * Remisión Email Notifier
 *
 * Sends a rendered remisión to the client's email address as a PDF
 * attachment over SMTP. The notifier is optional: when the SMTP
 * environment variables are not configured the server runs without it
 * and dispatch is skipped.
 *
 * # Delivery semantics
 *
 * Delivery happens after the remisión has been committed. A transport
 * failure is reported to the caller but never rolls back the stored
 * remisión.
 */

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::ApiError;
use crate::server::config::SmtpConfig;

fn nombre_adjunto(identificador: &str) -> String {
    format!("remision_{identificador}.pdf")
}

/// SMTP client for remisión dispatch.
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl Mailer {
    /// Build a mailer from the SMTP configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Email` when the sender address is invalid or
    /// the relay cannot be set up.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, ApiError> {
        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|e| ApiError::email(format!("invalid SMTP_FROM address: {e}")))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| ApiError::email(e.to_string()))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }

    /// Email a rendered remisión to the given address.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Email` when the recipient address is invalid,
    /// the message cannot be assembled or the SMTP transport rejects it.
    pub async fn send_remision(
        &self,
        destinatario: &str,
        identificador: &str,
        pdf: Vec<u8>,
    ) -> Result<(), ApiError> {
        let to = destinatario
            .parse::<Mailbox>()
            .map_err(|e| ApiError::email(format!("invalid recipient address: {e}")))?;

        let content_type: ContentType = "application/pdf"
            .parse()
            .map_err(|e| ApiError::email(format!("invalid attachment content type: {e}")))?;

        let adjunto = Attachment::new(nombre_adjunto(identificador)).body(pdf, content_type);

        let cuerpo = format!(
            "Se adjunta la remisión {identificador}.\n\n\
             Este correo fue generado automáticamente, por favor no responda a este mensaje."
        );

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(format!("Remisión {identificador}"))
            .multipart(
                MultiPart::mixed()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(cuerpo),
                    )
                    .singlepart(adjunto),
            )
            .map_err(|e| ApiError::email(e.to_string()))?;

        tracing::info!("Sending remisión {} to {}", identificador, destinatario);

        self.transport
            .send(message)
            .await
            .map_err(|e| ApiError::email(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            username: "remisiones@example.com".to_string(),
            password: "secret".to_string(),
            from: "Remisiones <remisiones@example.com>".to_string(),
        }
    }

    #[test]
    fn test_nombre_adjunto() {
        assert_eq!(nombre_adjunto("RM-A1B2C3D4E"), "remision_RM-A1B2C3D4E.pdf");
    }

    // Building the transport spawns lettre's pool task, so this needs
    // a running Tokio runtime.
    #[tokio::test]
    async fn test_from_config() {
        assert!(Mailer::from_config(&smtp_config()).is_ok());
    }

    #[test]
    fn test_from_config_rejects_bad_sender() {
        let mut config = smtp_config();
        config.from = "not an address".to_string();

        assert!(Mailer::from_config(&config).is_err());
    }
}
