//! Email dispatch with base64-encoded attachments.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::client::ApiClient;
use crate::envelope::Acknowledgement;
use crate::error::Result;

/// Outgoing email.
#[derive(Debug, Clone, Serialize)]
pub struct EmailRequest {
    #[serde(rename = "destinatarios")]
    pub recipients: Vec<String>,
    #[serde(rename = "asunto")]
    pub subject: String,
    #[serde(rename = "cuerpo")]
    pub body: String,
    #[serde(rename = "adjuntos", skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<EmailAttachment>,
}

/// A file attached to an outgoing email, carried base64-encoded in the
/// JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct EmailAttachment {
    #[serde(rename = "nombre")]
    pub filename: String,
    #[serde(rename = "tipo")]
    pub mime_type: String,
    #[serde(rename = "contenido")]
    pub content: String,
}

impl EmailAttachment {
    /// Encode raw file bytes for the wire.
    pub fn from_bytes(
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            content: STANDARD.encode(bytes),
        }
    }
}

/// Send an email through the server.
pub async fn send_email(client: &ApiClient, request: &EmailRequest) -> Result<Acknowledgement> {
    client.post("/emails", request).await
}
