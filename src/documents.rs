//! Building-document library: CRUD plus multipart file upload.

use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::envelope::{Acknowledgement, ApiResponse};
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    #[serde(rename = "edificio_id")]
    pub building_id: u64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(default, rename = "categoria")]
    pub category: Option<String>,
    #[serde(default, rename = "descripcion")]
    pub description: Option<String>,
    /// Download address of the attached file, once one has been uploaded.
    #[serde(default, rename = "fichero_url")]
    pub file_url: Option<String>,
    #[serde(default, rename = "creado_en")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create/update body for a document record.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentPayload {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Documents in a building's library.
pub async fn list_documents(
    client: &ApiClient,
    building_id: u64,
) -> Result<ApiResponse<Vec<Document>>> {
    client
        .get(&format!("/edificios/{building_id}/documentos"), &[])
        .await
}

/// Create a document record in a building's library.
pub async fn create_document(
    client: &ApiClient,
    building_id: u64,
    payload: &DocumentPayload,
) -> Result<ApiResponse<Document>> {
    client
        .post(&format!("/edificios/{building_id}/documentos"), payload)
        .await
}

/// Update a document record.
pub async fn update_document(
    client: &ApiClient,
    document_id: u64,
    payload: &DocumentPayload,
) -> Result<ApiResponse<Document>> {
    client
        .put(&format!("/documentos/{document_id}"), payload)
        .await
}

/// Delete a document record and its attached file, if any.
pub async fn delete_document(client: &ApiClient, document_id: u64) -> Result<Acknowledgement> {
    client.delete(&format!("/documentos/{document_id}")).await
}

/// Attach a file to a document (multipart upload).
pub async fn upload_document_file(
    client: &ApiClient,
    document_id: u64,
    filename: &str,
    mime_type: &str,
    bytes: Vec<u8>,
) -> Result<ApiResponse<Document>> {
    let part = Part::bytes(bytes)
        .file_name(filename.to_string())
        .mime_str(mime_type)?;
    let form = Form::new().part("fichero", part);

    client
        .post_multipart(&format!("/documentos/{document_id}/fichero"), form)
        .await
}
