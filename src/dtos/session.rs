//! Session DTOs - Data Transfer Objects per sessioni

use crate::dtos::UserDTO;
use crate::entities::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// DTO per creare una nuova sessione (senza id, created_at gestito dal DB)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CreateSessionDTO {
    pub user_id: i32,
}

/// Condizione di ricerca per le sessioni attive
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionCondition {
    pub id: Option<i32>,
    pub user_id: Option<i32>,
}

/// Criteri per chiudere sessioni: `exclude_id` preserva una sessione (es. quella corrente)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionDeleteCriteria {
    pub id: Option<i32>,
    pub user_id: Option<i32>,
    pub exclude_id: Option<i32>,
}

impl SessionDeleteCriteria {
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.user_id.is_none()
    }

    /// Whether a live session falls under these criteria
    pub fn matches(&self, session: &Session) -> bool {
        session.deleted_at.is_none()
            && self.id.is_none_or(|id| session.id == id)
            && self.user_id.is_none_or(|user_id| session.user_id == user_id)
            && self.exclude_id != Some(session.id)
    }
}

/// Sessione con l'utente caricato (eager)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionDTO {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub user: Option<UserDTO>,
}

impl From<Session> for SessionDTO {
    fn from(value: Session) -> Self {
        Self {
            id: value.id,
            created_at: value.created_at,
            user: None, // da popolare con il lookup dell'utente
        }
    }
}
