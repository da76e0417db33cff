//! Cooperated DTOs - Data Transfer Objects per cooperati

use crate::entities::Cooperated;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CooperatedDTO {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document: Option<String>,
    pub organization_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Cooperated> for CooperatedDTO {
    fn from(value: Cooperated) -> Self {
        Self {
            id: Some(value.id),
            first_name: Some(value.first_name),
            last_name: Some(value.last_name),
            email: value.email,
            phone: value.phone,
            document: Some(value.document),
            organization_id: Some(value.organization_id),
            created_at: Some(value.created_at),
        }
    }
}

/// DTO in ingresso per creare un cooperato.
///
/// `document` and `organization` are optional here so that a missing value is
/// reported by the service with a specific message instead of a parse error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct CreateCooperatedDTO {
    #[validate(length(min = 1, max = 255, message = "First name must be between 1 and 255 characters"))]
    pub first_name: String,

    #[validate(length(max = 255, message = "Last name must be at most 255 characters"))]
    #[serde(default)]
    pub last_name: String,

    #[validate(email(message = "Email is not valid"))]
    #[serde(default)]
    pub email: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub document: Option<String>,

    /// Id dell'organizzazione di appartenenza
    #[serde(default)]
    pub organization: Option<i32>,
}

/// Riga pronta per l'inserimento: documento normalizzato, organizzazione risolta
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewCooperated {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document: String,
    pub organization_id: i32,
}

/// DTO per aggiornare un cooperato (solo i campi `Some(_)` vengono modificati)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateCooperatedDTO {
    #[validate(length(min = 1, max = 255, message = "First name must be between 1 and 255 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 255, message = "Last name must be at most 255 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Email is not valid"))]
    pub email: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    pub document: Option<String>,

    #[serde(alias = "organization")]
    pub organization_id: Option<i32>,
}

impl UpdateCooperatedDTO {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.document.is_none()
            && self.organization_id.is_none()
    }
}

/// Risposta della validazione di un documento: solo i dati di contatto
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CooperatedSummaryDTO {
    pub name: String,
    pub document: String,
    pub email: String,
    pub phone: String,
}

impl From<Cooperated> for CooperatedSummaryDTO {
    fn from(value: Cooperated) -> Self {
        Self {
            name: value.full_name(),
            document: value.document,
            email: value.email.unwrap_or_default(),
            phone: value.phone.unwrap_or_default(),
        }
    }
}
