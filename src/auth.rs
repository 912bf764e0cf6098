//! Authentication and session lifecycle.
//!
//! Two login flows (NIF + password, building access code), public recovery
//! and registration endpoints, and the local session bookkeeping: on a
//! successful login the bearer token and user record land in device storage,
//! and logout clears them again. The remembered NIF and the language
//! preference survive logout.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::info;

use crate::buildings::Building;
use crate::client::ApiClient;
use crate::envelope::{Acknowledgement, ApiResponse};
use crate::error::Result;
use crate::storage::keys;

// ==================== Wire Types ====================

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    nif: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct BuildingCodeLoginRequest<'a> {
    codigo: &'a str,
}

#[derive(Debug, Serialize)]
struct RecoveryRequest<'a> {
    email: &'a str,
}

/// Session payload returned by both login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// Opaque bearer token for subsequent private requests.
    pub token: String,

    #[serde(default)]
    pub user: Option<UserData>,

    #[serde(default)]
    pub roles: Vec<String>,

    /// Present on building-code logins.
    #[serde(default, rename = "edificio")]
    pub building: Option<Building>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub id: u64,
    pub nif: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "telefono")]
    pub phone: Option<String>,
}

// ==================== Registration Form ====================

/// Registration form with a closed field set.
///
/// Updates go through [`RegistrationForm::set_field`], which matches
/// exhaustively over [`RegistrationField`]: adding a field forces every
/// call site to handle it.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RegistrationForm {
    pub nif: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellidos")]
    pub surname: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub password: String,
    #[serde(rename = "municipio")]
    pub municipality: String,
}

/// The fields of [`RegistrationForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Nif,
    Name,
    Surname,
    Email,
    Phone,
    Password,
    Municipality,
}

impl RegistrationForm {
    /// Overwrite a single named field.
    pub fn set_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RegistrationField::Nif => self.nif = value,
            RegistrationField::Name => self.name = value,
            RegistrationField::Surname => self.surname = value,
            RegistrationField::Email => self.email = value,
            RegistrationField::Phone => self.phone = value,
            RegistrationField::Password => self.password = value,
            RegistrationField::Municipality => self.municipality = value,
        }
    }
}

// ==================== Login / Logout ====================

/// Log in with NIF and password.
///
/// On success the bearer token, user record and roles are persisted for
/// subsequent private requests. The NIF is remembered only when `remember`
/// is set; otherwise any previously remembered NIF is cleared.
pub async fn login(
    client: &ApiClient,
    nif: &str,
    password: &str,
    remember: bool,
) -> Result<ApiResponse<SessionData>> {
    let request = LoginRequest { nif, password };
    let response: ApiResponse<SessionData> = client.post("/auth/login", &request).await?;

    if response.status {
        if let Some(session) = response.data.as_ref() {
            store_session(client, session).await;
            if remember {
                client.storage().set(keys::REMEMBERED_NIF, nif).await;
            } else {
                client.storage().remove(keys::REMEMBERED_NIF).await;
            }
            info!("Login succeeded");
        }
    }

    Ok(response)
}

/// Log in with a building access code.
///
/// On success the token and the building record are persisted; this flow
/// carries no personal user record.
pub async fn login_with_building_code(
    client: &ApiClient,
    code: &str,
) -> Result<ApiResponse<SessionData>> {
    let request = BuildingCodeLoginRequest { codigo: code };
    let response: ApiResponse<SessionData> =
        client.post("/auth/login-edificio", &request).await?;

    if response.status {
        if let Some(session) = response.data.as_ref() {
            store_session(client, session).await;
            info!("Building-code login succeeded");
        }
    }

    Ok(response)
}

async fn store_session(client: &ApiClient, session: &SessionData) {
    let storage = client.storage();
    storage.set(keys::AUTH_TOKEN, session.token.clone()).await;
    if let Some(user) = &session.user {
        storage.set_json(keys::USER_DATA, user).await;
    }
    if !session.roles.is_empty() {
        storage.set_json(keys::USER_ROLES, &session.roles).await;
    }
    if let Some(building) = &session.building {
        storage.set_json(keys::BUILDING_DATA, building).await;
    }
}

/// Drop the local session.
///
/// Clears every session slot. The remembered NIF and the language
/// preference survive, so the next login starts prefilled in the chosen
/// language.
pub async fn logout(client: &ApiClient) {
    let storage = client.storage();
    storage.remove(keys::AUTH_TOKEN).await;
    storage.remove(keys::NOTIFICATION_TOKEN).await;
    storage.remove(keys::BUILDING_DATA).await;
    storage.remove(keys::USER_ROLES).await;
    storage.remove(keys::USER_DATA).await;
    info!("Local session cleared");
}

/// The NIF remembered from a previous login, if any.
pub async fn remembered_nif(client: &ApiClient) -> Option<String> {
    client.storage().get(keys::REMEMBERED_NIF).await
}

// ==================== Recovery / Registration ====================

/// Request a password-recovery email. Public route.
pub async fn recover_password(client: &ApiClient, email: &str) -> Result<Acknowledgement> {
    client
        .post("/auth/recuperar-password", &RecoveryRequest { email })
        .await
}

/// Request a building-access-code recovery email. Public route.
pub async fn recover_code(client: &ApiClient, email: &str) -> Result<Acknowledgement> {
    client
        .post("/auth/recuperar-codigo", &RecoveryRequest { email })
        .await
}

/// Submit a registration form. Public route.
pub async fn register(client: &ApiClient, form: &RegistrationForm) -> Result<Acknowledgement> {
    client.post("/auth/registro", form).await
}

// ==================== NIF Validation ====================

/// Control letters for the Spanish NIF/NIE checksum, indexed by number mod 23.
const NIF_CONTROL_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

static NIF_PATTERN: OnceLock<regex::Regex> = OnceLock::new();

fn nif_pattern() -> &'static regex::Regex {
    NIF_PATTERN.get_or_init(|| {
        regex::Regex::new(r"^(?:\d{8}|[XYZ]\d{7})[A-Z]$").expect("NIF pattern is valid")
    })
}

/// Check NIF/NIE syntax and control letter locally.
///
/// NIE prefixes X/Y/Z map to 0/1/2 before the mod-23 letter check.
/// Surrounding whitespace and lowercase input are tolerated.
pub fn nif_is_well_formed(nif: &str) -> bool {
    let nif = nif.trim().to_ascii_uppercase();
    if !nif_pattern().is_match(&nif) {
        return false;
    }

    let digits = match nif.as_bytes()[0] {
        b'X' => format!("0{}", &nif[1..8]),
        b'Y' => format!("1{}", &nif[1..8]),
        b'Z' => format!("2{}", &nif[1..8]),
        _ => nif[..8].to_string(),
    };

    let number: u32 = match digits.parse() {
        Ok(n) => n,
        Err(_) => return false,
    };

    let expected = NIF_CONTROL_LETTERS[(number % 23) as usize];
    nif.as_bytes()[8] == expected
}

/// Validate a NIF: local syntax gate first, then the public remote check.
///
/// A syntactically invalid NIF short-circuits into a rejection envelope
/// without a network round trip, using the same shape the server answers
/// with so callers handle one path.
pub async fn validate_nif(client: &ApiClient, nif: &str) -> Result<Acknowledgement> {
    if !nif_is_well_formed(nif) {
        return Ok(ApiResponse {
            status: false,
            message: client.translations().lookup("errors.invalidNif", "auth"),
            data: None,
            code: Some(422),
        });
    }

    client.get("/auth/validar-nif", &[("nif", nif)]).await
}
