//! Paginated communications and notifications, plus push-token registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::ApiClient;
use crate::envelope::{Acknowledgement, ApiResponse};
use crate::error::Result;
use crate::storage::keys;

/// One page of a listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "pagina")]
    pub page: u32,
    #[serde(rename = "por_pagina")]
    pub per_page: u32,
    pub total: u64,
    #[serde(rename = "elementos")]
    pub items: Vec<T>,
}

/// A communication sent to the residents of a building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Communication {
    pub id: u64,
    #[serde(rename = "edificio_id")]
    pub building_id: u64,
    #[serde(rename = "asunto")]
    pub subject: String,
    #[serde(default, rename = "cuerpo")]
    pub body: Option<String>,
    #[serde(default, rename = "enviado_en")]
    pub sent_at: Option<DateTime<Utc>>,
}

/// A push notification delivered to this user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(default, rename = "mensaje")]
    pub message: Option<String>,
    #[serde(default, rename = "leida")]
    pub read: bool,
    #[serde(default, rename = "creada_en")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct PushTokenRequest<'a> {
    token: &'a str,
}

/// One page of a building's communications.
pub async fn list_communications(
    client: &ApiClient,
    building_id: u64,
    page: u32,
) -> Result<ApiResponse<Page<Communication>>> {
    let page = page.to_string();
    client
        .get(
            &format!("/edificios/{building_id}/comunicaciones"),
            &[("pagina", page.as_str())],
        )
        .await
}

/// One page of this user's notifications.
pub async fn list_notifications(
    client: &ApiClient,
    page: u32,
) -> Result<ApiResponse<Page<Notification>>> {
    let page = page.to_string();
    client
        .get("/notificaciones", &[("pagina", page.as_str())])
        .await
}

/// Register the device push token with the server and remember it locally.
///
/// The token is persisted only after the server accepted it, so a failed
/// registration is retried naturally on the next app start.
pub async fn register_push_token(client: &ApiClient, token: &str) -> Result<Acknowledgement> {
    let response: Acknowledgement = client
        .post("/notificaciones/token", &PushTokenRequest { token })
        .await?;

    if response.status {
        client.storage().set(keys::NOTIFICATION_TOKEN, token).await;
        info!("Push token registered");
    }

    Ok(response)
}
