//! Building listing and detail.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::envelope::ApiResponse;
use crate::error::Result;
use crate::storage::keys;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(default, rename = "municipio")]
    pub municipality: Option<String>,
    #[serde(default, rename = "referencia_catastral")]
    pub cadastral_reference: Option<String>,
    #[serde(default, rename = "ano_construccion")]
    pub construction_year: Option<u16>,
}

/// Buildings visible to the logged-in user.
pub async fn list_buildings(client: &ApiClient) -> Result<ApiResponse<Vec<Building>>> {
    client.get("/edificios", &[]).await
}

/// Full record for one building.
pub async fn building_detail(client: &ApiClient, building_id: u64) -> Result<ApiResponse<Building>> {
    client.get(&format!("/edificios/{building_id}"), &[]).await
}

/// Persist the building the user is working on.
pub async fn select_building(client: &ApiClient, building: &Building) {
    client.storage().set_json(keys::BUILDING_DATA, building).await;
}

/// The building chosen in a previous session, if any.
pub async fn selected_building(client: &ApiClient) -> Option<Building> {
    client.storage().get_json(keys::BUILDING_DATA).await
}
