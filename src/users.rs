//! Building-user management.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::envelope::{Acknowledgement, ApiResponse};
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingUser {
    pub id: u64,
    pub nif: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "rol")]
    pub role: Option<String>,
}

/// Create/update body for a building user.
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub nif: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "rol", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Users with access to a building.
pub async fn list_building_users(
    client: &ApiClient,
    building_id: u64,
) -> Result<ApiResponse<Vec<BuildingUser>>> {
    client
        .get(&format!("/edificios/{building_id}/usuarios"), &[])
        .await
}

/// Grant a user access to a building.
pub async fn create_user(
    client: &ApiClient,
    building_id: u64,
    payload: &UserPayload,
) -> Result<ApiResponse<BuildingUser>> {
    client
        .post(&format!("/edificios/{building_id}/usuarios"), payload)
        .await
}

/// Update a building user.
pub async fn update_user(
    client: &ApiClient,
    user_id: u64,
    payload: &UserPayload,
) -> Result<ApiResponse<BuildingUser>> {
    client.put(&format!("/usuarios/{user_id}"), payload).await
}

/// Revoke a user's access.
pub async fn delete_user(client: &ApiClient, user_id: u64) -> Result<Acknowledgement> {
    client.delete(&format!("/usuarios/{user_id}")).await
}
